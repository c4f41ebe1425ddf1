//! Input/output operations, configuration and error handling

/// Command-line interface and batch runner
pub mod cli;
/// Compile-time defaults and corpus layout constants
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// PNG export
pub mod image;
/// Progress display
pub mod progress;
