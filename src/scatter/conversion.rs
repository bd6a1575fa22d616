use serde::{Deserialize, Serialize};

use super::point::{Point2D, Range};
use super::scatter2d::Scatter2D;
use crate::histoer::Binned1D;

/// What a converted point's y carries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YValue {
    /// Bin content and its error as reported by the histogram.
    #[default]
    Content,
    /// Content and error divided by the full bin width. Bins without a
    /// positive width report 0 for both.
    Density,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSettings {
    pub y_value: YValue,
}

impl Scatter2D {
    /// One point per histogram bin, in bin order, with y set to the bin content.
    pub fn from_h1d<H: Binned1D + ?Sized>(histogram: &H) -> Self {
        Self::from_h1d_with(histogram, &ConversionSettings::default())
    }

    pub fn from_h1d_with<H: Binned1D + ?Sized>(
        histogram: &H,
        settings: &ConversionSettings,
    ) -> Self {
        let mut scatter: Self = (0..histogram.num_bins())
            .map(|bin| {
                let half_width = histogram.bin_half_width(bin);
                let (y, err) = match settings.y_value {
                    YValue::Content => (histogram.bin_content(bin), histogram.bin_error(bin)),
                    YValue::Density => {
                        let width = 2.0 * half_width;
                        if width > 0.0 {
                            (
                                histogram.bin_content(bin) / width,
                                histogram.bin_error(bin) / width,
                            )
                        } else {
                            (0.0, 0.0)
                        }
                    }
                };

                Point2D {
                    x: histogram.bin_center(bin),
                    y,
                    err_x: Range::symmetric(half_width),
                    err_y: Range::symmetric(err),
                }
            })
            .collect();
        scatter.set_name(histogram.name());

        log::debug!(
            "Converted histogram {} into {} scatter points ({:?})",
            histogram.name(),
            scatter.len(),
            settings.y_value
        );

        scatter
    }
}
