//! # loan-simplifier
//!
//! Debt simplification engine over directed loan graphs.
//!
//! Given a graph of who owes whom, this engine produces an equivalent
//! graph (every account keeps its net balance) with fewer loans, using
//! strategies ranging from a fast linear sweep to exhaustive searches
//! that are guaranteed to find the minimum number of loans.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: accounts, loans, the loan graph
//! - **combinatorics** — Combination, permutation, and partition enumerators
//! - **simplify** — The four simplification strategies and profiling
//! - **simulation** — Random graph generation for demos and benchmarks

pub mod combinatorics;
pub mod core;
pub mod simplify;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::account::{Account, AccountName};
    pub use crate::core::graph::{GraphError, LoanGraph};
    pub use crate::simplify::report::SimplifyReport;
    pub use crate::simplify::{SimplifyError, Strategy};
    pub use crate::simulation::{generate_random_graph, GraphConfig, GraphConfigError};
}
