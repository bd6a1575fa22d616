use super::histogram1d::Histogram;

impl Histogram {
    // Add a weighted value to the histogram. NaN lands in the overflow.
    pub fn fill(&mut self, value: f64, weight: f64) {
        self.entries += 1;
        match self.bin_index(value) {
            Some(index) => {
                self.sumw[index] += weight;
                self.sumw2[index] += weight * weight;
            }
            None if value < self.range.0 => self.underflow += weight,
            None => self.overflow += weight,
        }
    }

    pub fn fill_values(&mut self, values: &[f64]) {
        for &value in values {
            self.fill(value, 1.0);
        }
        log::debug!(
            "Filled histogram {} with {} values",
            self.name,
            values.len()
        );
    }
}
