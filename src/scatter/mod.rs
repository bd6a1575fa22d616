pub mod conversion;
pub mod point;
pub mod scatter2d;

pub use conversion::{ConversionSettings, YValue};
pub use point::{Point2D, Range};
pub use scatter2d::{DataRange, Scatter2D};
