//! Digit sequence assembly

/// Splicing glyphs and fillers into one image
pub mod assembly;
/// Seeded sequence generator
pub mod sequence;

pub use sequence::NumberSequenceGenerator;
