pub mod curve;
pub mod dataset;
pub mod error;
pub mod mapping;
pub mod math;
pub mod metrics;
pub mod validate;
pub mod verify;

pub use error::{LissageoError, Result};
