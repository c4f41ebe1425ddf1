//! Gap width allocation between consecutive glyphs
//!
//! The allocator splits the leftover width of a digit strip into one gap per
//! pair of neighbouring glyphs. The policy is fixed when the allocator is built
//! and the random source is injected at the same time, so seeded runs are
//! reproducible without touching any global state.
//!
//! Neither random method bounds its own work: random selection walks every
//! bounded composition and dirichlet rejection-samples until a draw fits the
//! range. Wide ranges or many digits can therefore take a very long time.

use crate::io::configuration::{COMPOSITION_WARN_THRESHOLD, DIRICHLET_WARN_ATTEMPTS};
use crate::io::error::{Result, SequenceError, invalid_parameter};
use crate::math::probability::{floor_with_remainder, sample_flat_dirichlet};
use crate::spacing::composition::{Compositions, count_compositions};
use crate::spacing::feasibility::SpacingRange;
use ndarray::Array2;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Policy used to partition leftover space into gaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum SpacingMethod {
    /// Identical gaps; fails unless the space divides evenly
    Equidistant,
    /// Uniform choice among every bounded composition of the space
    RandomSelection,
    /// Flat Dirichlet proportions, rounded and rejection-sampled into the range
    #[default]
    Dirichlet,
}

impl SpacingMethod {
    /// Every supported method, in declaration order
    pub const ALL: [Self; 3] = [Self::Equidistant, Self::RandomSelection, Self::Dirichlet];

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equidistant => "equidistant",
            Self::RandomSelection => "random_selection",
            Self::Dirichlet => "dirichlet",
        }
    }
}

impl fmt::Display for SpacingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpacingMethod {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|method| method.name() == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|m| m.name()).collect();
                invalid_parameter(
                    "spacing_method",
                    &s,
                    &format!("must be one of: {}", names.join(", ")),
                )
            })
    }
}

/// Produces gap widths under a fixed spacing policy
#[derive(Debug, Clone)]
pub struct SpacingAllocator<R: Rng> {
    method: SpacingMethod,
    rng: R,
}

impl<R: Rng> SpacingAllocator<R> {
    /// Create an allocator bound to a method and a random source
    pub const fn new(method: SpacingMethod, rng: R) -> Self {
        Self { method, rng }
    }

    /// Policy chosen at construction
    pub const fn method(&self) -> SpacingMethod {
        self.method
    }

    /// Split `available_space` into gap widths for `n_digits` glyphs
    ///
    /// Returns `n_digits - 1` widths summing to `available_space`. A single
    /// digit has no gaps: the whole space comes back as one trailing filler.
    ///
    /// Equidistant spacing checks divisibility only. It does not compare the
    /// resulting width with `spacing_range`; callers are expected to have run
    /// the feasibility check first.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `n_digits` is zero (`InvalidParameter`)
    /// - the equidistant split is not an integer (`NonIntegerSplit`)
    /// - random selection finds no composition in range (`InfeasibleWidth`)
    /// - random selection faces more compositions than `usize` can index
    ///   (`InvalidParameter`)
    pub fn allocate(
        &mut self,
        n_digits: usize,
        available_space: usize,
        spacing_range: SpacingRange,
    ) -> Result<Vec<usize>> {
        if n_digits == 0 {
            return Err(invalid_parameter(
                "n_digits",
                &n_digits,
                &"at least one digit is required",
            ));
        }
        if n_digits == 1 {
            return Ok(vec![available_space]);
        }

        let gaps = n_digits - 1;
        let widths = match self.method {
            SpacingMethod::Equidistant => equidistant(gaps, available_space)?,
            SpacingMethod::RandomSelection => {
                self.random_selection(gaps, available_space, spacing_range)?
            }
            SpacingMethod::Dirichlet => self.dirichlet(gaps, available_space, spacing_range),
        };

        debug!(
            method = %self.method,
            gaps,
            available_space,
            ?widths,
            "allocated gap widths"
        );
        Ok(widths)
    }

    fn random_selection(
        &mut self,
        gaps: usize,
        available_space: usize,
        spacing_range: SpacingRange,
    ) -> Result<Vec<usize>> {
        let (min, max) = (spacing_range.min_gap(), spacing_range.max_gap());
        // Bounds here are on the summed gap space, not on the image width
        let infeasible = || SequenceError::InfeasibleWidth {
            measure: "Gap space",
            requested: available_space,
            min_width: gaps.saturating_mul(min),
            max_width: gaps.saturating_mul(max),
        };

        let count = count_compositions(gaps, available_space, min, max);
        if count == 0 {
            return Err(infeasible());
        }
        if count > COMPOSITION_WARN_THRESHOLD {
            warn!(
                count = %count,
                gaps,
                available_space,
                "enumerating a very large set of gap compositions"
            );
        }

        let Ok(addressable) = usize::try_from(count) else {
            return Err(invalid_parameter(
                "available_space",
                &available_space,
                &format!("{count} gap compositions exceed the addressable selection range"),
            ));
        };

        // Walking to a uniform index visits the same sequence a full listing would
        let position = self.rng.random_range(0..addressable);
        Compositions::new(gaps, available_space, min, max)
            .nth(position)
            .ok_or_else(infeasible)
    }

    fn dirichlet(
        &mut self,
        gaps: usize,
        available_space: usize,
        spacing_range: SpacingRange,
    ) -> Vec<usize> {
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let proportions = sample_flat_dirichlet(gaps, &mut self.rng);
            let remainder_slot = self.rng.random_range(0..gaps);

            if let Some(widths) = floor_with_remainder(&proportions, available_space, remainder_slot)
                && widths.iter().all(|&w| spacing_range.contains(w))
            {
                debug!(attempts, "dirichlet draw accepted");
                return widths;
            }

            if attempts == DIRICHLET_WARN_ATTEMPTS {
                warn!(
                    attempts,
                    gaps,
                    available_space,
                    min_gap = spacing_range.min_gap(),
                    max_gap = spacing_range.max_gap(),
                    "dirichlet rejection sampling has not converged"
                );
            }
        }
    }
}

fn equidistant(gaps: usize, available_space: usize) -> Result<Vec<usize>> {
    if available_space % gaps != 0 {
        return Err(SequenceError::NonIntegerSplit {
            available_space,
            gaps,
        });
    }
    Ok(vec![available_space / gaps; gaps])
}

/// Materialize gap widths as zero-valued (black) filler blocks of `glyph_height` rows
pub fn gap_fillers(widths: &[usize], glyph_height: usize) -> Vec<Array2<f32>> {
    widths
        .iter()
        .map(|&width| Array2::zeros((glyph_height, width)))
        .collect()
}
