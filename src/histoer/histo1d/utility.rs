use super::histogram1d::Histogram;

impl Histogram {
    pub fn bin_edges(&self) -> Vec<f64> {
        (0..=self.sumw.len())
            .map(|i| self.range.0 + i as f64 * self.bin_width)
            .collect()
    }

    pub fn bin_centers(&self) -> Vec<f64> {
        (0..self.sumw.len())
            .map(|i| self.range.0 + (i as f64 + 0.5) * self.bin_width)
            .collect()
    }

    // Bin holding x, for x in [min, max). Scaling by the bin count before dividing
    // keeps values sitting on an edge in the bin that starts there.
    pub fn bin_index(&self, x: f64) -> Option<usize> {
        let (min, max) = self.range;
        let nbins = self.sumw.len();
        if nbins == 0 || !(min..max).contains(&x) {
            return None;
        }

        let index = ((x - min) * nbins as f64 / (max - min)).floor() as usize;

        Some(index.min(nbins - 1))
    }
}

#[cfg(test)]
mod tests {
    use crate::histoer::Histogram;

    #[test]
    fn test_bin_edges() {
        let h = Histogram::new("h", 4, (0.0, 2.0)).unwrap();
        assert_eq!(h.bin_edges(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_bin_centers() {
        let h = Histogram::new("h", 4, (0.0, 2.0)).unwrap();
        assert_eq!(h.bin_centers(), vec![0.25, 0.75, 1.25, 1.75]);
    }

    #[test]
    fn test_bin_index_bounds() {
        let h = Histogram::new("h", 4, (0.0, 2.0)).unwrap();
        assert_eq!(h.bin_index(0.0), Some(0));
        assert_eq!(h.bin_index(0.5), Some(1));
        assert_eq!(h.bin_index(1.99), Some(3));
        assert_eq!(h.bin_index(2.0), None);
        assert_eq!(h.bin_index(-0.01), None);
        assert_eq!(h.bin_index(f64::NAN), None);
    }
}
