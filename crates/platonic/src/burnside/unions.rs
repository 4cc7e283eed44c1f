//! Lazy enumeration of cycle unions (the edge subsets fixed by one element).
//!
//! Index `k` selects cycles through the bits of its Gray code `k ^ (k >> 1)`,
//! so consecutive indices differ in exactly one cycle and each step is a
//! single XOR. Any contiguous index range can be enumerated on its own, which
//! is how one element's `2^c` unions are split into batches.

use super::classify::EdgeMask;

#[inline]
fn gray(k: u64) -> u64 {
    k ^ (k >> 1)
}

/// Union of the cycles selected by the bits of `selector`.
#[inline]
pub fn union_of(cycles: &[EdgeMask], selector: u64) -> EdgeMask {
    let mut out = 0;
    let mut rest = selector;
    while rest != 0 {
        out |= cycles[rest.trailing_zeros() as usize];
        rest &= rest - 1;
    }
    out
}

/// Iterator over the unions with indices in `start..end`.
///
/// Invariant: `cycles` are pairwise disjoint and `end <= 2^cycles.len()`.
#[derive(Clone, Debug)]
pub struct CycleUnions<'a> {
    cycles: &'a [EdgeMask],
    start: u64,
    next: u64,
    end: u64,
    current: EdgeMask,
}

impl<'a> CycleUnions<'a> {
    /// All `2^c` unions.
    pub fn new(cycles: &'a [EdgeMask]) -> Self {
        Self::range(cycles, 0, union_count(cycles.len()))
    }

    pub fn range(cycles: &'a [EdgeMask], start: u64, end: u64) -> Self {
        debug_assert!(end <= union_count(cycles.len()));
        Self {
            cycles,
            start,
            next: start,
            end,
            current: if start < end {
                union_of(cycles, gray(start))
            } else {
                0
            },
        }
    }
}

/// `2^cycles`; callers keep `cycles <= 63`.
#[inline]
pub fn union_count(cycles: usize) -> u64 {
    1u64 << cycles
}

impl Iterator for CycleUnions<'_> {
    type Item = EdgeMask;

    #[inline]
    fn next(&mut self) -> Option<EdgeMask> {
        if self.next >= self.end {
            return None;
        }
        if self.next > self.start {
            self.current ^= self.cycles[self.next.trailing_zeros() as usize];
        }
        self.next += 1;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end.saturating_sub(self.next);
        match usize::try_from(left) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
