//! Random loan graph generation for demos, benchmarks, and property
//! tests.

use crate::core::account::AccountName;
use crate::core::graph::LoanGraph;
use rand::Rng;
use thiserror::Error;

/// Errors from a degenerate generation configuration.
#[derive(Debug, Error, PartialEq)]
pub enum GraphConfigError {
    #[error("density must be within 0.0..=1.0, got {density}")]
    DensityOutOfRange { density: f64 },
    #[error("max loan must be positive, got {max_loan}")]
    NonPositiveMaxLoan { max_loan: i64 },
}

/// Configuration for generating a random loan graph.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Number of accounts in the graph.
    pub account_count: usize,
    /// Probability that any ordered pair of accounts carries a loan.
    pub density: f64,
    /// Largest single loan amount.
    pub max_loan: i64,
}

impl GraphConfig {
    /// Check that the configuration describes a generatable graph.
    pub fn validate(&self) -> Result<(), GraphConfigError> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(GraphConfigError::DensityOutOfRange {
                density: self.density,
            });
        }
        if self.max_loan <= 0 {
            return Err(GraphConfigError::NonPositiveMaxLoan {
                max_loan: self.max_loan,
            });
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            account_count: 10,
            density: 0.4,
            max_loan: 30,
        }
    }
}

/// Generate a random loan graph with `config.account_count` accounts
/// named `ACC-000`, `ACC-001`, and so on.
///
/// Each ordered pair of distinct accounts carries a loan with
/// probability `config.density`, for an amount in `1..=config.max_loan`.
/// Fails fast on an out-of-range density or a non-positive max loan.
pub fn generate_random_graph<R: Rng>(
    config: &GraphConfig,
    rng: &mut R,
) -> Result<LoanGraph, GraphConfigError> {
    config.validate()?;

    let names: Vec<AccountName> = (0..config.account_count)
        .map(|i| AccountName::new(format!("ACC-{:03}", i)))
        .collect();

    let mut graph = LoanGraph::with_accounts(names.iter().cloned());

    for creditor in &names {
        for debtor in &names {
            if creditor == debtor {
                continue;
            }
            if rng.gen_bool(config.density) {
                let amount = rng.gen_range(1..=config.max_loan);
                graph
                    .extend_credit(creditor, debtor, amount)
                    .expect("generated loans are valid by construction");
            }
        }
    }

    Ok(graph)
}
