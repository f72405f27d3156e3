//! The matching engine: converts a balanced group of creditors and
//! debtors into a minimum-edge set of settlement transfers.

use crate::core::account::AccountName;
use crate::core::graph::{GraphError, LoanGraph};

/// A pool entry: an account's name and its signed net balance.
pub type PoolEntry = (AccountName, i64);

/// Link a balanced creditor/debtor group with the fewest transfers.
///
/// Greedy merge over residual amounts: the smaller of the current
/// creditor's remaining claim and the current debtor's remaining debt is
/// settled in full, advancing whichever side hit zero (both on a tie).
/// A non-empty balanced group of `c` creditors and `d` debtors yields at
/// most `c + d - 1` edges: each transfer retires at least one side's
/// residual, and an exact tie retires both at once.
///
/// Settlements are emitted onto `out`, whose accounts are keyed by name,
/// so linking several disjoint sub-groups in sequence accumulates all
/// edges on the same persistent output copies.
pub fn link(
    out: &mut LoanGraph,
    creditors: &[PoolEntry],
    debtors: &[PoolEntry],
) -> Result<(), GraphError> {
    debug_assert!(creditors.iter().all(|(_, b)| *b > 0));
    debug_assert!(debtors.iter().all(|(_, b)| *b < 0));
    debug_assert_eq!(
        creditors.iter().map(|(_, b)| *b).sum::<i64>(),
        debtors.iter().map(|(_, b)| -*b).sum::<i64>(),
        "linked groups must cancel exactly",
    );

    let mut pi = 0;
    let mut ni = 0;
    let mut claim = creditors.first().map_or(0, |(_, b)| *b);
    let mut debt = debtors.first().map_or(0, |(_, b)| -*b);

    while pi < creditors.len() && ni < debtors.len() {
        let amount = claim.min(debt);
        out.extend_credit(&creditors[pi].0, &debtors[ni].0, amount)?;
        claim -= amount;
        debt -= amount;
        if claim == 0 {
            pi += 1;
            if pi < creditors.len() {
                claim = creditors[pi].1;
            }
        }
        if debt == 0 {
            ni += 1;
            if ni < debtors.len() {
                debt = -debtors[ni].1;
            }
        }
    }
    Ok(())
}

/// The edge count [`link`] would produce, without touching any graph.
///
/// This is the Permutational strategy's inner loop, so it runs the same
/// merge over copies of the residuals and only counts the steps.
pub fn count_link_edges(creditors: &[PoolEntry], debtors: &[PoolEntry]) -> usize {
    let mut pi = 0;
    let mut ni = 0;
    let mut claim = creditors.first().map_or(0, |(_, b)| *b);
    let mut debt = debtors.first().map_or(0, |(_, b)| -*b);
    let mut edges = 0;

    while pi < creditors.len() && ni < debtors.len() {
        let amount = claim.min(debt);
        claim -= amount;
        debt -= amount;
        edges += 1;
        if claim == 0 {
            pi += 1;
            if pi < creditors.len() {
                claim = creditors[pi].1;
            }
        }
        if debt == 0 {
            ni += 1;
            if ni < debtors.len() {
                debt = -debtors[ni].1;
            }
        }
    }
    edges
}
