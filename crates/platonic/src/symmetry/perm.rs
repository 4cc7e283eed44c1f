//! Permutations of `0..n` as image arrays, with cycle decomposition.

use crate::error::{PlatonicError, Result};

/// Bijection on `0..n`; `images[i]` is the image of `i`.
///
/// Invariant: `images` is a permutation of `0..n` (checked by `from_images`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation {
    images: Vec<usize>,
}

impl Permutation {
    pub fn identity(n: usize) -> Self {
        Self {
            images: (0..n).collect(),
        }
    }

    /// Validate that `images` is a bijection on `0..images.len()`.
    pub fn from_images(images: Vec<usize>) -> Result<Self> {
        let n = images.len();
        let mut seen = vec![false; n];
        for (i, &j) in images.iter().enumerate() {
            if j >= n {
                return Err(PlatonicError::invalid_permutation(format!(
                    "image {j} of {i} is out of range 0..{n}"
                )));
            }
            if std::mem::replace(&mut seen[j], true) {
                return Err(PlatonicError::invalid_permutation(format!(
                    "{j} is the image of more than one point"
                )));
            }
        }
        Ok(Self { images })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[inline]
    pub fn image(&self, i: usize) -> usize {
        self.images[i]
    }

    #[inline]
    pub fn images(&self) -> &[usize] {
        &self.images
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    pub fn compose(&self, other: &Permutation) -> Permutation {
        debug_assert_eq!(self.len(), other.len());
        Permutation {
            images: other.images.iter().map(|&j| self.images[j]).collect(),
        }
    }

    pub fn inverse(&self) -> Permutation {
        let mut inv = vec![0; self.len()];
        for (i, &j) in self.images.iter().enumerate() {
            inv[j] = i;
        }
        Permutation { images: inv }
    }

    pub fn is_identity(&self) -> bool {
        self.images.iter().enumerate().all(|(i, &j)| i == j)
    }

    /// Disjoint cycles, each starting at its lowest element; cycles are listed
    /// by increasing start. Fixed points appear as 1-cycles.
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let n = self.len();
        let mut seen = vec![false; n];
        let mut out = Vec::new();
        for start in 0..n {
            if seen[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut j = start;
            while !seen[j] {
                seen[j] = true;
                cycle.push(j);
                j = self.images[j];
            }
            out.push(cycle);
        }
        out
    }

    /// Cycle lengths, sorted descending.
    pub fn cycle_type(&self) -> Vec<usize> {
        let mut lens: Vec<usize> = self.cycles().iter().map(Vec::len).collect();
        lens.sort_unstable_by(|a, b| b.cmp(a));
        lens
    }
}
