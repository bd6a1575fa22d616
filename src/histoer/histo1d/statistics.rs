use super::histogram1d::Histogram;

impl Histogram {
    // Sum of in-range weights; under/overflow excluded.
    pub fn integral(&self) -> f64 {
        self.sumw.iter().sum()
    }

    // Calculate the statistics for the bins spanned by [start_x, end_x], clamped to the axis.
    // Returns (integral, mean, stdev) weighted by bin content at the bin centers.
    // A window that misses the axis or runs backwards yields zeros.
    pub fn statistics(&self, start_x: f64, end_x: f64) -> (f64, f64, f64) {
        let (min, max) = self.range;
        let Some(last_bin) = self.sumw.len().checked_sub(1) else {
            return (0.0, 0.0, 0.0);
        };
        if start_x.is_nan()
            || end_x.is_nan()
            || start_x > end_x
            || start_x >= max
            || end_x < min
        {
            return (0.0, 0.0, 0.0);
        }

        // past the checks above, a missing index means start_x < min or end_x >= max
        let start_bin = self.bin_index(start_x).unwrap_or(0);
        let end_bin = self.bin_index(end_x).unwrap_or(last_bin);

        let centers = self.bin_centers();
        let bins = start_bin..=end_bin;

        let total: f64 = bins.clone().map(|bin| self.sumw[bin]).sum();
        if total == 0.0 {
            return (0.0, 0.0, 0.0);
        }

        let mean = bins
            .clone()
            .map(|bin| self.sumw[bin] * centers[bin])
            .sum::<f64>()
            / total;

        let sum_squared_diff: f64 = bins
            .map(|bin| {
                let diff = centers[bin] - mean;
                self.sumw[bin] * diff * diff
            })
            .sum();

        (total, mean, (sum_squared_diff / total).sqrt())
    }
}
