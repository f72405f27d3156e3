use crate::combinatorics::CombinatoricsError;

/// Enumerates every partition of `{0, .., n-1}` into non-empty, unlabeled
/// blocks, in canonical restricted-growth-string order.
///
/// State is a label array `labels` (block label per element) and a
/// parallel array `maxima` where `maxima[i]` is the largest label among
/// positions above `i`. Advancing increments `labels[0]` and carries a
/// position upward whenever its label would exceed `maxima[i] + 1`; the
/// string is exhausted once a carry reaches the last position, which is
/// pinned to label 0. Exactly `Bell(n)` partitions are produced, each
/// once.
///
/// # Examples
///
/// ```
/// use loan_simplifier::combinatorics::PartitionEnumerator;
///
/// let mut parts = PartitionEnumerator::new(3).unwrap();
/// let mut count = 0;
/// while parts.advance() {
///     count += 1;
/// }
/// assert_eq!(count, 5); // Bell(3)
/// ```
#[derive(Debug)]
pub struct PartitionEnumerator {
    labels: Vec<usize>,
    maxima: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl PartitionEnumerator {
    /// Create an enumerator over partitions of `{0, .., n-1}`.
    pub fn new(n: usize) -> Result<Self, CombinatoricsError> {
        if n == 0 {
            return Err(CombinatoricsError::BadUniverseSize {
                size: n,
                minimum: 1,
            });
        }
        Ok(Self {
            labels: vec![0; n],
            maxima: vec![0; n],
            started: false,
            exhausted: false,
        })
    }

    /// Step to the next partition. The first call yields the single-block
    /// partition (all labels zero); returns `false` once every partition
    /// has been produced.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        if !self.started {
            self.started = true;
            return true;
        }

        let n = self.labels.len();
        self.labels[0] += 1;
        let mut i = 0;
        while i < n - 1 && self.labels[i] > self.maxima[i] + 1 {
            self.labels[i] = 0;
            i += 1;
            self.labels[i] += 1;
        }
        if i == n - 1 {
            // The carry reached the pinned last element.
            self.exhausted = true;
            return false;
        }

        // Positions below the incremented one were reset to zero, so the
        // largest label above them is now whatever sits at position i.
        let top = self.labels[i].max(self.maxima[i]);
        for m in &mut self.maxima[..i] {
            *m = top;
        }
        true
    }

    /// The current restricted growth string: one block label per element.
    pub fn current(&self) -> &[usize] {
        &self.labels
    }

    /// The current partition as blocks of element indices, indexed by
    /// block label. Every block is non-empty.
    pub fn current_blocks(&self) -> Vec<Vec<usize>> {
        let block_count = self.labels.iter().max().map_or(0, |&m| m + 1);
        let mut blocks = vec![Vec::new(); block_count];
        for (element, &label) in self.labels.iter().enumerate() {
            blocks[label].push(element);
        }
        blocks
    }
}
