//! Stateful enumerators for the three combinatorial structures driving
//! the exhaustive simplification strategies: index combinations,
//! lexicographic permutations, and set partitions.
//!
//! Each enumerator is an explicit state machine exposing
//! `advance() -> bool` and a `current()` view, so the algorithms above
//! them own plain two-level loops instead of sharing iteration state.

pub mod combination;
pub mod partition;
pub mod permutation;

pub use combination::CombinationEnumerator;
pub use partition::PartitionEnumerator;
pub use permutation::PermutationEnumerator;

use thiserror::Error;

/// Errors arising from enumerator construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CombinatoricsError {
    #[error("enumerator needs a universe of at least {minimum} elements, got {size}")]
    BadUniverseSize { size: usize, minimum: usize },
}
