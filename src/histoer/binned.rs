/// Bin geometry and statistics of a one-dimensional histogram.
///
/// Bins are addressed by index in `[0, num_bins())`. Under/overflow are not
/// regular bins and are never reported through this trait.
pub trait Binned1D {
    fn name(&self) -> &str;

    fn num_bins(&self) -> usize;

    fn bin_center(&self, bin: usize) -> f64;

    /// Half of the full bin width.
    fn bin_half_width(&self, bin: usize) -> f64;

    /// Accumulated weight in the bin.
    fn bin_content(&self, bin: usize) -> f64;

    /// Statistical error on the bin content.
    fn bin_error(&self, bin: usize) -> f64;
}
