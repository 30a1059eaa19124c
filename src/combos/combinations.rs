//! Pick-k-of-n iterator.

use smallvec::SmallVec;

/// Iterator over every `k`-sized subset of a slice.
///
/// Subsets come out in lexicographic index order and keep the slice's
/// element order. `k == 0` or `k > len` yields nothing. The iterator holds
/// only its own cursor, so a fresh one restarts the sequence.
///
/// ```
/// use daifugo_duel::combos::Combinations;
///
/// let picks: Vec<_> = Combinations::new(&[1, 2, 3], 2).map(|c| c.to_vec()).collect();
/// assert_eq!(picks, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
#[derive(Clone, Debug)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: SmallVec<[usize; 4]>,
    started: bool,
    done: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    #[must_use]
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            indices: (0..k).collect(),
            started: false,
            done: k == 0 || k > items.len(),
        }
    }

    /// Move the cursor to the next subset. Returns false when exhausted.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();

        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] != i + n - k) else {
            return false;
        };

        self.indices[pivot] += 1;
        for j in pivot + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = SmallVec<[T; 4]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }

        Some(self.indices.iter().map(|&i| self.items[i].clone()).collect())
    }
}

/// Binomial coefficient C(n, k).
#[must_use]
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
