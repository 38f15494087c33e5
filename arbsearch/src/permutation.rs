//! Lexicographic permutation generation.
use smallvec::SmallVec;

/// A permutation of `0..n`; entry `i` is the image of `i`.
pub type Permutation = SmallVec<usize, 8>;

/// Rearranges `perm` into the next permutation in lexicographic order.
///
/// Returns `false`, leaving `perm` untouched, when it already is the last one.
pub fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts right after `pivot`.
    let Some(pivot) = (0..perm.len() - 1).rev().find(|&i| perm[i] < perm[i + 1]) else {
        return false;
    };

    let mut successor = perm.len() - 1;
    while perm[successor] <= perm[pivot] {
        successor -= 1;
    }

    perm.swap(pivot, successor);
    perm[pivot + 1..].reverse();
    true
}

/// `n!`, or `None` if it does not fit in a `u64`.
pub fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Iterator over all permutations of `0..n` in lexicographic order.
///
/// `n = 0` yields a single empty permutation.
#[derive(Debug, Clone)]
pub struct Permutations {
    next: Option<Permutation>,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            next: Some((0..n).collect()),
        }
    }
}

impl Iterator for Permutations {
    type Item = Permutation;

    fn next(&mut self) -> Option<Permutation> {
        let current = self.next.take()?;

        let mut following = current.clone();
        if next_permutation(&mut following) {
            self.next = Some(following);
        }

        Some(current)
    }
}

impl std::iter::FusedIterator for Permutations {}
