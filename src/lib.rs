pub mod column;
pub mod contacts;
pub mod error;
pub mod interpolate;
pub mod map_data;
pub mod math;
pub mod observations;
pub mod thickness;

pub use error::{Result, StratisError};
