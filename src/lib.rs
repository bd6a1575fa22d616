#![warn(clippy::all, rust_2018_idioms)]

//! Scatter containers with asymmetric error bars, and their derivation from
//! one-dimensional histograms.

pub mod error;
pub mod histoer;
pub mod scatter;

pub use error::HbookError;
pub use histoer::{Binned1D, Histogram};
pub use scatter::{ConversionSettings, DataRange, Point2D, Range, Scatter2D, YValue};
