//! Horizontal splicing of glyphs and gap fillers

use crate::io::error::{Result, invalid_digits, invalid_parameter};
use ndarray::{Array2, ArrayView2, Axis, concatenate};

/// Place glyphs left to right with `fillers[i]` after `glyphs[i]`
///
/// With `n` glyphs and `n - 1` fillers the strip ends on a glyph. A filler
/// left over after the last glyph is appended as trailing padding, which is
/// how a single digit receives its leftover width.
///
/// # Errors
///
/// Returns an error if:
/// - `glyphs` is empty (`InvalidDigitInput`)
/// - The pieces do not share a common height (`InvalidParameter`)
pub fn splice(glyphs: &[Array2<f32>], fillers: &[Array2<f32>]) -> Result<Array2<f32>> {
    if glyphs.is_empty() {
        return Err(invalid_digits(&"no glyphs to assemble"));
    }

    let mut pieces: Vec<ArrayView2<'_, f32>> = Vec::with_capacity(glyphs.len() + fillers.len());
    for (index, glyph) in glyphs.iter().enumerate() {
        pieces.push(glyph.view());
        if let Some(filler) = fillers.get(index) {
            pieces.push(filler.view());
        }
    }

    concatenate(Axis(1), &pieces).map_err(|e| {
        let heights: Vec<usize> = pieces.iter().map(|piece| piece.nrows()).collect();
        invalid_parameter("piece heights", &format!("{heights:?}"), &e)
    })
}
