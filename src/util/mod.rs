//! Utility modules for nextport

pub mod logging;

pub use logging::{init_logging, parse_level, LoggingConfig};
