//! The four loan simplification strategies.
//!
//! Every strategy consumes a [`LoanGraph`] and produces a new graph with
//! the same account names and net balances but a smaller (or equal)
//! settlement edge set. The input graph is never mutated; each run works
//! on disconnected copies of the accounts.
//!
//! - **Linear** — one greedy merge over all creditors and debtors. Fast,
//!   not edge-optimal when the graph splits into independent balanced
//!   sub-groups.
//! - **Greedy-Combinatorial** — searches for exactly-canceling sub-groups
//!   via index-combination enumeration with sum-based pruning.
//! - **Permutational** — exhaustive over orderings; edge-optimal.
//! - **Partitional** — exhaustive over groupings; edge-optimal, and must
//!   agree with Permutational on the minimum.

pub mod greedy;
pub mod linear;
pub mod linker;
pub mod partitional;
pub mod permutational;
pub mod report;

use crate::combinatorics::CombinatoricsError;
use crate::core::account::AccountName;
use crate::core::graph::{GraphError, LoanGraph};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised by a simplification run.
///
/// All of them signal invariant violations, not recoverable conditions;
/// no strategy catches an error to alter its search.
#[derive(Debug, Error)]
pub enum SimplifyError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Combinatorics(#[from] CombinatoricsError),
}

/// The closed set of simplification strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Linear,
    GreedyCombinatorial,
    Permutational,
    Partitional,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Linear,
        Strategy::GreedyCombinatorial,
        Strategy::Permutational,
        Strategy::Partitional,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Linear => "linear",
            Strategy::GreedyCombinatorial => "greedy-combinatorial",
            Strategy::Permutational => "permutational",
            Strategy::Partitional => "partitional",
        }
    }

    /// Whether this strategy enumerates a factorial/Bell-sized search
    /// space. Exhaustive strategies are meant for small inputs only.
    pub fn is_exhaustive(self) -> bool {
        matches!(self, Strategy::Permutational | Strategy::Partitional)
    }

    /// Run this strategy over `graph`.
    pub fn simplify(self, graph: &LoanGraph) -> Result<LoanGraph, SimplifyError> {
        match self {
            Strategy::Linear => linear::simplify(graph),
            Strategy::GreedyCombinatorial => greedy::simplify(graph),
            Strategy::Permutational => permutational::simplify(graph),
            Strategy::Partitional => partitional::simplify(graph),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown strategy '{0}'; expected linear, greedy, permutational or partitional")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Strategy::Linear),
            "greedy" | "greedy-combinatorial" => Ok(Strategy::GreedyCombinatorial),
            "permutational" => Ok(Strategy::Permutational),
            "partitional" => Ok(Strategy::Partitional),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

/// Split a graph's accounts into the creditor pool (balance > 0) and the
/// debtor pool (balance < 0), in name order. Zero-balance accounts are
/// not pooled; they pass through every strategy as disconnected copies.
pub(crate) fn partition_pools(
    graph: &LoanGraph,
) -> (Vec<(AccountName, i64)>, Vec<(AccountName, i64)>) {
    let mut creditors = Vec::new();
    let mut debtors = Vec::new();
    for account in graph.accounts() {
        match account.balance().cmp(&0) {
            std::cmp::Ordering::Greater => {
                creditors.push((account.name().clone(), account.balance()))
            }
            std::cmp::Ordering::Less => debtors.push((account.name().clone(), account.balance())),
            std::cmp::Ordering::Equal => {}
        }
    }
    (creditors, debtors)
}
