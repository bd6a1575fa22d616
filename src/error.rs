use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum HbookError {
    IndexOutOfRange { index: usize, len: usize },
    InvalidInput { xs: usize, ys: usize },
    InvalidBinning { nbins: usize, min: f64, max: f64 },
    InconsistentBins { sumw: usize, sumw2: usize },
}

impl Display for HbookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "Scatter had an index out of range: index {index} with length {len}"
            ),
            Self::InvalidInput { xs, ys } => write!(
                f,
                "Scatter was given coordinate arrays of different lengths (x: {xs}, y: {ys})"
            ),
            Self::InvalidBinning { nbins, min, max } => write!(
                f,
                "Histogram cannot be built with {nbins} bins over [{min}, {max})"
            ),
            Self::InconsistentBins { sumw, sumw2 } => write!(
                f,
                "Histogram has {sumw} bin weights but {sumw2} squared weights"
            ),
        }
    }
}

impl Error for HbookError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_index_out_of_range() {
        let err = HbookError::IndexOutOfRange { index: 4, len: 4 };
        assert_eq!(
            err.to_string(),
            "Scatter had an index out of range: index 4 with length 4"
        );
    }

    #[test]
    fn test_display_invalid_input() {
        let err = HbookError::InvalidInput { xs: 3, ys: 2 };
        assert!(err.to_string().contains("x: 3, y: 2"));
    }

    #[test]
    fn test_display_inconsistent_bins() {
        let err = HbookError::InconsistentBins { sumw: 2, sumw2: 1 };
        assert_eq!(
            err.to_string(),
            "Histogram has 2 bin weights but 1 squared weights"
        );
    }

    #[test]
    fn test_boxed_error() {
        let err: Box<dyn Error> = Box::new(HbookError::InvalidBinning {
            nbins: 0,
            min: 0.0,
            max: 1.0,
        });
        assert_eq!(err.to_string(), "Histogram cannot be built with 0 bins over [0, 1)");
    }
}
