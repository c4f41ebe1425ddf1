//! Digit sequence image generation
//!
//! Ties the corpus, the feasibility check and the gap allocator together:
//! validate digits, pick one glyph per digit, derive the leftover width,
//! allocate gaps and splice everything into one strip.

use crate::corpus::glyphs::{GlyphSet, validate_digits};
use crate::generator::assembly::splice;
use crate::io::error::Result;
use crate::spacing::allocator::{SpacingAllocator, SpacingMethod, gap_fillers};
use crate::spacing::feasibility::{SpacingRange, available_space};
use ndarray::Array2;
use rand::{SeedableRng, rngs::StdRng};

/// Seeded generator of digit sequence images
///
/// Glyph selection and gap allocation draw from separate streams derived from
/// one seed, so a given seed always reproduces the same sequence of images.
pub struct NumberSequenceGenerator {
    glyphs: GlyphSet,
    allocator: SpacingAllocator<StdRng>,
    rng: StdRng,
}

impl NumberSequenceGenerator {
    /// Create a generator over `glyphs` using `method` for spacing
    pub fn new(glyphs: GlyphSet, method: SpacingMethod, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let allocator = SpacingAllocator::new(method, StdRng::from_rng(&mut rng));
        Self {
            glyphs,
            allocator,
            rng,
        }
    }

    /// Spacing policy in use
    pub const fn method(&self) -> SpacingMethod {
        self.allocator.method()
    }

    /// Glyphs available to the generator
    pub const fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    /// Width left for gaps once `n_digits` glyphs fill `image_width`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero width or digit count, and
    /// `InfeasibleWidth` (with the fillable interval) when the width cannot be
    /// met under `spacing_range`
    pub fn compute_available_space(
        &self,
        spacing_range: SpacingRange,
        image_width: usize,
        n_digits: usize,
    ) -> Result<usize> {
        available_space(
            spacing_range,
            image_width,
            n_digits,
            self.glyphs.glyph_width(),
        )
    }

    /// Allocate gaps and return them as blank glyph-height fillers
    ///
    /// # Errors
    ///
    /// Propagates allocation failures such as `NonIntegerSplit`
    pub fn compute_spacing(
        &mut self,
        n_digits: usize,
        available_space: usize,
        spacing_range: SpacingRange,
    ) -> Result<Vec<Array2<f32>>> {
        let widths = self
            .allocator
            .allocate(n_digits, available_space, spacing_range)?;
        Ok(gap_fillers(&widths, self.glyphs.glyph_height()))
    }

    /// Pick one normalized glyph per digit
    ///
    /// # Errors
    ///
    /// Returns `InvalidDigitInput` for an empty sequence, a digit outside 0-9,
    /// or a digit missing from the corpus
    pub fn select_glyphs(&mut self, digits: &[u8]) -> Result<Vec<Array2<f32>>> {
        validate_digits(digits)?;
        digits
            .iter()
            .map(|&digit| self.glyphs.select(digit, &mut self.rng))
            .collect()
    }

    /// Render `digits` as one strip exactly `image_width` pixels wide
    ///
    /// Pixels lie in [0, 1] with 0 as background.
    ///
    /// # Errors
    ///
    /// Returns an error if the digits are invalid, the width is infeasible
    /// for `spacing_range`, or the spacing policy cannot split the space
    pub fn generate(
        &mut self,
        digits: &[u8],
        spacing_range: SpacingRange,
        image_width: usize,
    ) -> Result<Array2<f32>> {
        let glyphs = self.select_glyphs(digits)?;
        let space = self.compute_available_space(spacing_range, image_width, digits.len())?;
        let fillers = self.compute_spacing(digits.len(), space, spacing_range)?;
        splice(&glyphs, &fillers)
    }
}
