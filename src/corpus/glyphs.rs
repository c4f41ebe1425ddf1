//! Per-digit glyph lookup and random glyph selection

use crate::corpus::idx::Corpus;
use crate::io::configuration::{DIGIT_CLASSES, PIXEL_MAX};
use crate::io::error::{Result, invalid_digits, invalid_source};
use ndarray::{Array2, Axis};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Check that a digit sequence is non-empty and every digit lies in 0-9
///
/// # Errors
///
/// Returns `InvalidDigitInput` for an empty sequence or an out-of-range digit
pub fn validate_digits(digits: &[u8]) -> Result<()> {
    if digits.is_empty() {
        return Err(invalid_digits(
            &"expected a number sequence, e.g. [1, 2, 3]",
        ));
    }
    if let Some(bad) = digits.iter().find(|&&d| usize::from(d) >= DIGIT_CLASSES) {
        return Err(invalid_digits(&format!(
            "digit {bad} is outside the [0-9] range"
        )));
    }
    Ok(())
}

/// Glyph images grouped by the digit they depict
///
/// Every glyph shares the same height and width.
#[derive(Debug, Clone)]
pub struct GlyphSet {
    corpus: Corpus,
    by_label: [Vec<usize>; DIGIT_CLASSES],
}

impl GlyphSet {
    /// Index a corpus by label
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if any label is not a digit
    pub fn new(corpus: Corpus) -> Result<Self> {
        let mut by_label: [Vec<usize>; DIGIT_CLASSES] = Default::default();

        for (index, &label) in corpus.labels.iter().enumerate() {
            let bucket = by_label.get_mut(usize::from(label)).ok_or_else(|| {
                invalid_source(&format!("label {label} at entry {index} is not a digit"))
            })?;
            bucket.push(index);
        }

        Ok(Self { corpus, by_label })
    }

    /// Glyph width in pixels
    pub fn glyph_width(&self) -> usize {
        self.corpus.cols()
    }

    /// Glyph height in pixels
    pub fn glyph_height(&self) -> usize {
        self.corpus.rows()
    }

    /// Total number of glyphs
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// Whether the set holds no glyphs
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Number of glyphs available for `digit`
    pub fn count_for(&self, digit: u8) -> usize {
        self.by_label.get(usize::from(digit)).map_or(0, Vec::len)
    }

    /// Pick one glyph for `digit` uniformly at random, scaled into [0, 1]
    ///
    /// # Errors
    ///
    /// Returns `InvalidDigitInput` if `digit` is not 0-9 or the corpus holds
    /// no glyph for it
    pub fn select<R: Rng + ?Sized>(&self, digit: u8, rng: &mut R) -> Result<Array2<f32>> {
        let candidates = self
            .by_label
            .get(usize::from(digit))
            .ok_or_else(|| invalid_digits(&format!("digit {digit} is outside the [0-9] range")))?;
        let &index = candidates
            .choose(rng)
            .ok_or_else(|| invalid_digits(&format!("corpus holds no glyph for digit {digit}")))?;

        Ok(self
            .corpus
            .images
            .index_axis(Axis(0), index)
            .mapv(|pixel| f32::from(pixel) / PIXEL_MAX))
    }
}
