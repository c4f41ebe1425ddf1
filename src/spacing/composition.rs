//! Bounded integer compositions
//!
//! A composition of `total` into `parts` values, each within `[min, max]`, is
//! an ordered tuple such as `(1, 3, 4)` for `total = 8`. The enumeration walks
//! them in lexicographic order with an explicit odometer instead of recursion,
//! so the stack stays flat for any number of parts.

/// Lexicographic iterator over every bounded composition of a total
#[derive(Debug, Clone)]
pub struct Compositions {
    parts: Vec<usize>,
    min: usize,
    max: usize,
    started: bool,
    exhausted: bool,
}

impl Compositions {
    /// Prepare the enumeration of `parts` values in `[min, max]` summing to `total`
    ///
    /// With `parts == 0` the only composition is the empty one, and only when
    /// `total == 0`.
    pub fn new(parts: usize, total: usize, min: usize, max: usize) -> Self {
        let mut values = vec![0; parts];
        let exhausted = min > max || !fill_smallest(&mut values, total, min, max);
        Self {
            parts: values,
            min,
            max,
            started: false,
            exhausted,
        }
    }

    // Moves to the next composition in lexicographic order
    fn advance(&mut self) -> bool {
        let n = self.parts.len();
        let mut suffix_sum = self.parts.last().copied().unwrap_or(0);

        for i in (0..n.saturating_sub(1)).rev() {
            let Some(&current) = self.parts.get(i) else {
                return false;
            };
            suffix_sum += current;

            let candidate = current + 1;
            if candidate > self.max || candidate > suffix_sum {
                continue;
            }

            let rest = n - 1 - i;
            let remaining = suffix_sum - candidate;
            if remaining < rest.saturating_mul(self.min)
                || remaining > rest.saturating_mul(self.max)
            {
                continue;
            }

            if let Some(slot) = self.parts.get_mut(i) {
                *slot = candidate;
            }
            let Some(tail) = self.parts.get_mut(i + 1..) else {
                return false;
            };
            return fill_smallest(tail, remaining, self.min, self.max);
        }

        false
    }
}

impl Iterator for Compositions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.exhausted = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.parts.clone())
    }
}

/// Write the lexicographically smallest bounded composition of `total` into `slots`
///
/// Returns false when no composition exists.
fn fill_smallest(slots: &mut [usize], total: usize, min: usize, max: usize) -> bool {
    let n = slots.len();
    let mut remaining = total;

    for (i, slot) in slots.iter_mut().enumerate() {
        let rest = n - 1 - i;
        let lowest = min.max(remaining.saturating_sub(rest.saturating_mul(max)));
        if lowest > max || remaining < lowest.saturating_add(rest.saturating_mul(min)) {
            return false;
        }
        *slot = lowest;
        remaining -= lowest;
    }

    remaining == 0
}

/// Number of bounded compositions, saturating at `u128::MAX`
///
/// Runs a prefix-sum dynamic program in `O(parts * total)`, far cheaper than
/// walking the compositions themselves. It holds two `u128` tables of
/// `total + 1` entries, so memory grows with the total rather than with the
/// range: a total in the hundreds of millions needs gigabytes and can abort
/// on allocation before any warning is logged.
pub fn count_compositions(parts: usize, total: usize, min: usize, max: usize) -> u128 {
    if min > max {
        return 0;
    }
    if parts == 0 {
        return u128::from(total == 0);
    }
    if total < parts.saturating_mul(min) || total > parts.saturating_mul(max) {
        return 0;
    }

    let mut ways = vec![0u128; total + 1];
    if let Some(first) = ways.first_mut() {
        *first = 1;
    }
    let mut prefix = vec![0u128; total + 2];

    for _ in 0..parts {
        // prefix[k] holds the sum of ways[0..k]
        for (k, &w) in ways.iter().enumerate() {
            let previous = prefix.get(k).copied().unwrap_or(0);
            let Some(sum) = previous.checked_add(w) else {
                return u128::MAX;
            };
            if let Some(slot) = prefix.get_mut(k + 1) {
                *slot = sum;
            }
        }

        for (s, slot) in ways.iter_mut().enumerate() {
            *slot = if s < min {
                0
            } else {
                let upper = prefix.get(s - min + 1).copied().unwrap_or(0);
                let lower = prefix.get(s.saturating_sub(max)).copied().unwrap_or(0);
                upper - lower
            };
        }
    }

    ways.last().copied().unwrap_or(0)
}
