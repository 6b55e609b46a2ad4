pub mod base;
pub mod config;
pub mod error;
pub mod lagrange;
pub mod loader;
pub mod point;
pub mod polynomial;
pub mod rational;
pub mod report;
pub mod source;

pub use error::{Error, Result};
pub use lagrange::interpolate;
pub use loader::ShareSet;
pub use point::{Point, Share};
