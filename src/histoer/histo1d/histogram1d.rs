use crate::error::HbookError;
use crate::histoer::binned::Binned1D;

/// Fixed-width, weighted 1D histogram.
///
/// The bin arrays are only reachable through accessors so that every
/// histogram, including a deserialized one, has passed the checks in
/// [`Histogram::new`].
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "HistogramData")]
pub struct Histogram {
    pub name: String,
    pub(super) sumw: Vec<f64>,
    pub(super) sumw2: Vec<f64>,
    pub(super) range: (f64, f64),
    pub(super) overflow: f64,
    pub(super) underflow: f64,
    #[serde(skip_serializing)]
    pub(super) bin_width: f64,
    pub(super) entries: u64,
}

// Unchecked wire form; bin_width is always recomputed from the range.
#[derive(serde::Deserialize)]
struct HistogramData {
    name: String,
    sumw: Vec<f64>,
    sumw2: Vec<f64>,
    range: (f64, f64),
    overflow: f64,
    underflow: f64,
    entries: u64,
}

impl TryFrom<HistogramData> for Histogram {
    type Error = HbookError;

    fn try_from(data: HistogramData) -> Result<Self, Self::Error> {
        if data.sumw.len() != data.sumw2.len() {
            log::warn!(
                "Rejecting histogram {}: {} bin weights but {} squared weights",
                data.name,
                data.sumw.len(),
                data.sumw2.len()
            );
            return Err(HbookError::InconsistentBins {
                sumw: data.sumw.len(),
                sumw2: data.sumw2.len(),
            });
        }

        let mut histogram = Self::new(&data.name, data.sumw.len(), data.range)?;
        histogram.sumw = data.sumw;
        histogram.sumw2 = data.sumw2;
        histogram.overflow = data.overflow;
        histogram.underflow = data.underflow;
        histogram.entries = data.entries;
        Ok(histogram)
    }
}

impl Histogram {
    // Create a new Histogram with specified number of bins over [min, max)
    pub fn new(name: &str, number_of_bins: usize, range: (f64, f64)) -> Result<Self, HbookError> {
        let (min, max) = range;
        if number_of_bins == 0 || !min.is_finite() || !max.is_finite() || min >= max {
            log::warn!("Rejecting histogram {name}: {number_of_bins} bins over [{min}, {max})");
            return Err(HbookError::InvalidBinning {
                nbins: number_of_bins,
                min,
                max,
            });
        }

        Ok(Self {
            name: name.to_owned(),
            sumw: vec![0.0; number_of_bins],
            sumw2: vec![0.0; number_of_bins],
            range,
            overflow: 0.0,
            underflow: 0.0,
            bin_width: (max - min) / number_of_bins as f64,
            entries: 0,
        })
    }

    pub fn reset(&mut self) {
        self.sumw.fill(0.0);
        self.sumw2.fill(0.0);
        self.overflow = 0.0;
        self.underflow = 0.0;
        self.entries = 0;
    }

    pub fn sumw(&self) -> &[f64] {
        &self.sumw
    }

    pub fn sumw2(&self) -> &[f64] {
        &self.sumw2
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn entries(&self) -> u64 {
        self.entries
    }

    pub fn underflow(&self) -> f64 {
        self.underflow
    }

    pub fn overflow(&self) -> f64 {
        self.overflow
    }
}

impl Binned1D for Histogram {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_bins(&self) -> usize {
        self.sumw.len()
    }

    fn bin_center(&self, bin: usize) -> f64 {
        self.range.0 + (bin as f64 + 0.5) * self.bin_width
    }

    fn bin_half_width(&self, _bin: usize) -> f64 {
        self.bin_width * 0.5
    }

    fn bin_content(&self, bin: usize) -> f64 {
        self.sumw[bin]
    }

    fn bin_error(&self, bin: usize) -> f64 {
        self.sumw2[bin].sqrt()
    }
}
