//! Width feasibility checks for a digit strip with bounded gaps

use crate::io::error::{Result, SequenceError, invalid_parameter};

/// Inclusive bounds applied to every individual gap width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpacingRange {
    min_gap: usize,
    max_gap: usize,
}

impl SpacingRange {
    /// Create a range, rejecting `min_gap > max_gap`
    ///
    /// # Errors
    ///
    /// Returns `InvalidSpacingRange` when the lower bound exceeds the upper bound
    pub fn new(min_gap: usize, max_gap: usize) -> Result<Self> {
        if min_gap > max_gap {
            return Err(SequenceError::InvalidSpacingRange {
                min_gap,
                max_gap,
                reason: "minimum gap exceeds maximum gap".to_string(),
            });
        }
        Ok(Self { min_gap, max_gap })
    }

    /// Smallest allowed gap
    pub const fn min_gap(&self) -> usize {
        self.min_gap
    }

    /// Largest allowed gap
    pub const fn max_gap(&self) -> usize {
        self.max_gap
    }

    /// Check whether a gap width lies within the bounds
    pub const fn contains(&self, gap: usize) -> bool {
        gap >= self.min_gap && gap <= self.max_gap
    }
}

/// Interval of total image widths that can be filled exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeasibleWidth {
    /// Smallest fillable width
    pub min: usize,
    /// Largest fillable width
    pub max: usize,
}

impl FeasibleWidth {
    /// Compute the fillable interval for `n_digits` glyphs of `glyph_width`
    ///
    /// The lower bound never drops below the space taken by the glyphs alone.
    pub const fn compute(spacing_range: SpacingRange, n_digits: usize, glyph_width: usize) -> Self {
        let digit_space = n_digits.saturating_mul(glyph_width);
        let gaps = n_digits.saturating_sub(1);
        let min_total = digit_space.saturating_add(gaps.saturating_mul(spacing_range.min_gap));
        let max_total = digit_space.saturating_add(gaps.saturating_mul(spacing_range.max_gap));
        let min = if digit_space > min_total {
            digit_space
        } else {
            min_total
        };
        Self {
            min,
            max: max_total,
        }
    }

    /// Check whether a width lies in the interval
    pub const fn contains(&self, width: usize) -> bool {
        width >= self.min && width <= self.max
    }
}

/// Space left for gaps once every glyph is placed
///
/// # Errors
///
/// Returns an error if:
/// - `image_width` or `n_digits` is zero (`InvalidParameter`)
/// - `image_width` lies outside the fillable interval (`InfeasibleWidth`,
///   reporting that interval)
pub fn available_space(
    spacing_range: SpacingRange,
    image_width: usize,
    n_digits: usize,
    glyph_width: usize,
) -> Result<usize> {
    if image_width == 0 {
        return Err(invalid_parameter(
            "image_width",
            &image_width,
            &"must be a positive integer",
        ));
    }
    if n_digits == 0 {
        return Err(invalid_parameter(
            "n_digits",
            &n_digits,
            &"at least one digit is required",
        ));
    }

    let digit_space = n_digits.saturating_mul(glyph_width);
    let feasible = FeasibleWidth::compute(spacing_range, n_digits, glyph_width);

    if image_width < digit_space || !feasible.contains(image_width) {
        return Err(SequenceError::InfeasibleWidth {
            measure: "Image width",
            requested: image_width,
            min_width: feasible.min,
            max_width: feasible.max,
        });
    }

    Ok(image_width - digit_space)
}
