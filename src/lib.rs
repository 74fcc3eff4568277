pub mod analysis;
pub mod error;
pub mod math;

pub use error::{AxisymError, Result};
