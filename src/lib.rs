//! Synthetic digit sequence images for data augmentation
//!
//! Glyphs sampled from a labeled digit corpus are placed side by side, with
//! blank gaps whose widths are drawn under a chosen spacing policy so that the
//! strip exactly fills a requested width.

#![forbid(unsafe_code)]

/// Labeled digit corpus loading and glyph selection
pub mod corpus;
/// Sequence assembly from glyphs and gaps
pub mod generator;
/// Input/output operations and error handling
pub mod io;
/// Simplex sampling and rounding utilities
pub mod math;
/// Feasibility checks and gap allocation policies
pub mod spacing;

pub use io::error::{Result, SequenceError};
