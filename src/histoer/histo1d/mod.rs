pub mod filling;
pub mod histogram1d;
pub mod statistics;
pub mod utility;
