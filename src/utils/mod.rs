//! Utility functions and types for the signal simulator.

pub mod error;
pub mod logging;
pub mod types;

pub use error::Error;
pub use logging::init_logging;
pub use types::*;

/// Common result type for utility functions
pub type Result<T> = std::result::Result<T, Error>;
