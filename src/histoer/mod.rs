pub mod binned;
pub mod histo1d;

pub use binned::Binned1D;
pub use histo1d::histogram1d::Histogram;
