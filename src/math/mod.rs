//! Mathematical utilities for spacing allocation

/// Simplex sampling and proportional integer rounding
pub mod probability;
