//! Labeled digit corpus consumed by the generator

/// Per-digit glyph lookup and selection
pub mod glyphs;
/// IDX file parsing
pub mod idx;

pub use glyphs::{GlyphSet, validate_digits};
pub use idx::{Corpus, load_corpus};
