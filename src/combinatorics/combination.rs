use crate::combinatorics::CombinatoricsError;

#[derive(Debug)]
enum State {
    /// The next `advance` yields the first combination of `size`.
    Fresh,
    /// `indices` holds the current combination.
    Running,
    /// Every size up to `universe` has been exhausted.
    Done,
}

/// Enumerates index combinations of a universe `{0, .., n-1}` in
/// size-then-lexicographic order: all combinations of size 1, then all of
/// size 2, and so on up to size `n`.
///
/// The simplification search treats a combination as "a group of accounts
/// considered together". After a group is matched and consumed,
/// [`CombinationEnumerator::remove_current`] shrinks the universe and
/// re-arms enumeration over the remaining indices.
///
/// # Examples
///
/// ```
/// use loan_simplifier::combinatorics::CombinationEnumerator;
///
/// let mut combos = CombinationEnumerator::new(3).unwrap();
/// let mut seen = Vec::new();
/// while combos.advance() {
///     seen.push(combos.current().to_vec());
/// }
/// assert_eq!(
///     seen,
///     vec![
///         vec![0], vec![1], vec![2],
///         vec![0, 1], vec![0, 2], vec![1, 2],
///         vec![0, 1, 2],
///     ],
/// );
/// ```
#[derive(Debug)]
pub struct CombinationEnumerator {
    universe: usize,
    size: usize,
    indices: Vec<usize>,
    state: State,
}

impl CombinationEnumerator {
    /// Create an enumerator over `{0, .., universe - 1}`, starting at
    /// combination size 1.
    pub fn new(universe: usize) -> Result<Self, CombinatoricsError> {
        if universe == 0 {
            return Err(CombinatoricsError::BadUniverseSize {
                size: universe,
                minimum: 1,
            });
        }
        Ok(Self {
            universe,
            size: 1,
            indices: Vec::new(),
            state: State::Fresh,
        })
    }

    /// Step to the next combination. Returns `false` once every
    /// combination of every size has been produced.
    pub fn advance(&mut self) -> bool {
        match self.state {
            State::Done => false,
            State::Fresh => {
                if self.size == 0 || self.size > self.universe {
                    self.state = State::Done;
                    return false;
                }
                self.indices = (0..self.size).collect();
                self.state = State::Running;
                true
            }
            State::Running => {
                // Next combination of the current size, lexicographic.
                for i in (0..self.size).rev() {
                    if self.indices[i] < self.universe - self.size + i {
                        self.indices[i] += 1;
                        for j in i + 1..self.size {
                            self.indices[j] = self.indices[j - 1] + 1;
                        }
                        return true;
                    }
                }
                // Current size exhausted; grow the combination.
                self.size += 1;
                if self.size > self.universe {
                    self.state = State::Done;
                    return false;
                }
                self.indices = (0..self.size).collect();
                true
            }
        }
    }

    /// The current combination: strictly increasing indices into the
    /// universe. Empty before the first `advance`.
    pub fn current(&self) -> &[usize] {
        &self.indices
    }

    /// Whether the current combination is a contiguous run of indices.
    ///
    /// Used as the greedy search's pruning signal: when the pools are
    /// sorted ascending, every lexicographically later combination of the
    /// same size dominates a gapless one index-by-index, so its sum can
    /// only be larger.
    pub fn has_no_gaps(&self) -> bool {
        self.indices.windows(2).all(|w| w[0] + 1 == w[1])
    }

    /// Consume the current combination: shrink the universe by its size
    /// and re-arm enumeration over the remaining indices, keeping the
    /// current combination size (clamped to the new universe).
    pub fn remove_current(&mut self) {
        self.universe -= self.size;
        if self.size > self.universe {
            self.size = self.universe;
        }
        self.indices.clear();
        self.state = if self.universe == 0 {
            State::Done
        } else {
            State::Fresh
        };
    }

    /// Restart enumeration from the first size-1 combination.
    pub fn reset(&mut self) {
        self.size = 1;
        self.indices.clear();
        self.state = if self.universe == 0 {
            State::Done
        } else {
            State::Fresh
        };
    }

    /// Remaining universe size.
    pub fn universe(&self) -> usize {
        self.universe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_all(n: usize) -> Vec<Vec<usize>> {
        let mut combos = CombinationEnumerator::new(n).unwrap();
        let mut seen = Vec::new();
        while combos.advance() {
            seen.push(combos.current().to_vec());
        }
        seen
    }

    #[test]
    fn test_zero_universe_rejected() {
        assert_eq!(
            CombinationEnumerator::new(0).unwrap_err(),
            CombinatoricsError::BadUniverseSize {
                size: 0,
                minimum: 1
            }
        );
    }

    #[test]
    fn test_singleton_universe() {
        assert_eq!(collect_all(1), vec![vec![0]]);
    }

    #[test]
    fn test_size_then_lexicographic_order() {
        assert_eq!(
            collect_all(4),
            vec![
                vec![0],
                vec![1],
                vec![2],
                vec![3],
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
                vec![0, 1, 2],
                vec![0, 1, 3],
                vec![0, 2, 3],
                vec![1, 2, 3],
                vec![0, 1, 2, 3],
            ],
        );
    }

    #[test]
    fn test_total_count_is_two_to_n_minus_one() {
        // sum over k of C(n, k) for k = 1..=n
        assert_eq!(collect_all(5).len(), 31);
        assert_eq!(collect_all(6).len(), 63);
    }

    #[test]
    fn test_has_no_gaps() {
        let mut combos = CombinationEnumerator::new(4).unwrap();
        while combos.advance() {
            let contiguous = combos
                .current()
                .windows(2)
                .all(|w| w[0] + 1 == w[1]);
            assert_eq!(combos.has_no_gaps(), contiguous);
        }
    }

    #[test]
    fn test_remove_current_shrinks_universe() {
        let mut combos = CombinationEnumerator::new(4).unwrap();
        // Walk to the first size-2 combination: {0, 1}.
        for _ in 0..5 {
            assert!(combos.advance());
        }
        assert_eq!(combos.current(), &[0, 1]);

        combos.remove_current();
        assert_eq!(combos.universe(), 2);
        // Enumeration resumes at the first size-2 combination of the
        // shrunken universe.
        assert!(combos.advance());
        assert_eq!(combos.current(), &[0, 1]);
        assert!(!combos.advance());
    }

    #[test]
    fn test_remove_everything_exhausts() {
        let mut combos = CombinationEnumerator::new(2).unwrap();
        assert!(combos.advance());
        assert!(combos.advance());
        assert!(combos.advance());
        assert_eq!(combos.current(), &[0, 1]);
        combos.remove_current();
        assert!(!combos.advance());
    }

    #[test]
    fn test_reset_restarts_at_size_one() {
        let mut combos = CombinationEnumerator::new(3).unwrap();
        for _ in 0..5 {
            assert!(combos.advance());
        }
        combos.reset();
        assert!(combos.advance());
        assert_eq!(combos.current(), &[0]);
    }

    #[test]
    fn test_gapless_sum_lower_bounds_later_combinations() {
        // Over an ascending value array, a gapless combination's sum must
        // be a lower bound for every later combination of the same size.
        // The greedy strategy's prune relies on exactly this.
        let values = [1i64, 2, 4, 4, 9, 15];
        let mut combos = CombinationEnumerator::new(values.len()).unwrap();
        let mut all: Vec<Vec<usize>> = Vec::new();
        while combos.advance() {
            all.push(combos.current().to_vec());
        }

        for (pos, combo) in all.iter().enumerate() {
            let gapless = combo.windows(2).all(|w| w[0] + 1 == w[1]);
            if !gapless {
                continue;
            }
            let sum: i64 = combo.iter().map(|&i| values[i]).sum();
            for later in all[pos + 1..].iter().filter(|c| c.len() == combo.len()) {
                let later_sum: i64 = later.iter().map(|&i| values[i]).sum();
                assert!(
                    later_sum >= sum,
                    "combination {later:?} (sum {later_sum}) follows gapless \
                     {combo:?} (sum {sum}) but is smaller"
                );
            }
        }
    }
}
