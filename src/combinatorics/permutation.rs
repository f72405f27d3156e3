/// Enumerates every permutation of a sequence in lexicographic key order.
///
/// The first `advance` yields the sequence in its given order; each later
/// call rewrites the working sequence into the next permutation by key
/// (rightmost ascent, swap with the smallest larger key to its right,
/// reverse the suffix). The key array makes the ordering independent of
/// the item type, and the in-place update is amortized O(1) per step.
///
/// An empty sequence yields exactly one (empty) permutation, so the
/// enumerator always produces `n!` sequences.
///
/// # Examples
///
/// ```
/// use loan_simplifier::combinatorics::PermutationEnumerator;
///
/// let mut perms = PermutationEnumerator::new(vec!['a', 'b', 'c']);
/// let mut seen = Vec::new();
/// while perms.advance() {
///     seen.push(perms.current().iter().collect::<String>());
/// }
/// assert_eq!(seen, ["abc", "acb", "bac", "bca", "cab", "cba"]);
/// ```
#[derive(Debug)]
pub struct PermutationEnumerator<T> {
    items: Vec<T>,
    keys: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<T> PermutationEnumerator<T> {
    pub fn new(items: Vec<T>) -> Self {
        let keys = (0..items.len()).collect();
        Self {
            items,
            keys,
            started: false,
            exhausted: false,
        }
    }

    /// Step to the next permutation. Returns `false` once all `n!`
    /// orderings have been produced.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        if !self.started {
            self.started = true;
            return true;
        }

        // Rightmost position with an ascent to its right.
        let n = self.keys.len();
        let Some(i) = (0..n.saturating_sub(1))
            .rev()
            .find(|&i| self.keys[i] < self.keys[i + 1])
        else {
            self.exhausted = true;
            return false;
        };

        // Smallest key greater than keys[i] among the suffix.
        let j = (i + 1..n)
            .filter(|&j| self.keys[j] > self.keys[i])
            .min_by_key(|&j| self.keys[j])
            .expect("suffix holds a key greater than keys[i]");

        self.keys.swap(i, j);
        self.items.swap(i, j);
        self.keys[i + 1..].reverse();
        self.items[i + 1..].reverse();
        true
    }

    /// The current ordering of the sequence.
    pub fn current(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect_all(items: Vec<u8>) -> Vec<Vec<u8>> {
        let mut perms = PermutationEnumerator::new(items);
        let mut seen = Vec::new();
        while perms.advance() {
            seen.push(perms.current().to_vec());
        }
        seen
    }

    #[test]
    fn test_first_permutation_is_identity() {
        let mut perms = PermutationEnumerator::new(vec![3, 1, 2]);
        assert!(perms.advance());
        assert_eq!(perms.current(), &[3, 1, 2]);
    }

    #[test]
    fn test_three_elements_in_order() {
        assert_eq!(
            collect_all(vec![1, 2, 3]),
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ],
        );
    }

    #[test]
    fn test_factorial_count_no_repeats() {
        for (n, expected) in [(0usize, 1usize), (1, 1), (2, 2), (3, 6), (4, 24), (5, 120)] {
            let all = collect_all((0..n as u8).collect());
            assert_eq!(all.len(), expected, "n = {n}");
            let distinct: HashSet<_> = all.iter().cloned().collect();
            assert_eq!(distinct.len(), expected, "n = {n}");
        }
    }

    #[test]
    fn test_each_result_is_a_permutation() {
        for mut perm in collect_all(vec![0, 1, 2, 3]) {
            perm.sort_unstable();
            assert_eq!(perm, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_empty_sequence_yields_one_permutation() {
        let mut perms = PermutationEnumerator::<u8>::new(Vec::new());
        assert!(perms.advance());
        assert!(perms.current().is_empty());
        assert!(!perms.advance());
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let mut perms = PermutationEnumerator::new(vec![1, 2]);
        assert!(perms.advance());
        assert!(perms.advance());
        assert!(!perms.advance());
        assert!(!perms.advance());
    }
}
