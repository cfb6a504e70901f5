use std::ops::Index;

/// A virtual row order over `0..n`.
///
/// Scaled partial pivoting records its row exchanges here instead of moving
/// matrix rows, so every row keeps its original index (and its scale factor).
/// Position `k` holds the original index of the row used as the `k`-th pivot.
///
/// The order starts as the identity and only ever changes by swapping two
/// positions, so it is always a bijection on `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// Creates the identity order on `0..n`.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
        }
    }

    /// Returns the number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the order is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the original row indices in pivot order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Returns true if every index in `0..n` appears exactly once.
    #[must_use]
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.indices.len()];
        self.indices
            .iter()
            .all(|&i| i < seen.len() && !std::mem::replace(&mut seen[i], true))
    }

    /// Exchanges two positions.
    pub(super) fn swap(&mut self, a: usize, b: usize) {
        self.indices.swap(a, b);
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, position: usize) -> &usize {
        &self.indices[position]
    }
}
