//! Partitional strategy: exhaustive over groupings, edge-optimal.

use crate::combinatorics::PartitionEnumerator;
use crate::core::account::AccountName;
use crate::core::graph::LoanGraph;
use crate::simplify::{linker, partition_pools, SimplifyError};
use log::debug;

/// Simplify by trying every partition of the creditor pool against every
/// partition of the debtor pool and keeping the cheapest valid pairing.
///
/// A pairing is valid when both partitions have the same number of
/// blocks and, after sorting each side's blocks by absolute summed
/// balance, every corresponding block pair cancels exactly. A valid
/// pairing of `b` blocks settles in `creditors + debtors - b` edges (the
/// merge bound per block, summed), so maximizing the block count
/// minimizes edges. Agrees with the Permutational strategy on the
/// minimum; intended for small inputs only.
pub(crate) fn simplify(graph: &LoanGraph) -> Result<LoanGraph, SimplifyError> {
    let (creditors, debtors) = partition_pools(graph);
    let mut out = graph.disconnected_copy();
    if creditors.is_empty() || debtors.is_empty() {
        return Ok(out);
    }

    let mut best_cost = usize::MAX;
    let mut best: Option<(Vec<Vec<usize>>, Vec<Vec<usize>>)> = None;

    let mut creditor_parts = PartitionEnumerator::new(creditors.len())?;
    while creditor_parts.advance() {
        let mut creditor_blocks = creditor_parts.current_blocks();
        sort_by_abs_sum(&mut creditor_blocks, &creditors);

        let mut debtor_parts = PartitionEnumerator::new(debtors.len())?;
        while debtor_parts.advance() {
            let mut debtor_blocks = debtor_parts.current_blocks();
            if debtor_blocks.len() != creditor_blocks.len() {
                continue;
            }
            sort_by_abs_sum(&mut debtor_blocks, &debtors);
            if !blocks_cancel(&creditor_blocks, &debtor_blocks, &creditors, &debtors) {
                continue;
            }

            let cost = creditors.len() + debtors.len() - creditor_blocks.len();
            if cost < best_cost {
                best_cost = cost;
                best = Some((creditor_blocks.clone(), debtor_blocks.clone()));
            }
        }
    }

    // The single-block pairing is always valid on a balanced graph.
    debug_assert!(best.is_some(), "a balanced graph always has a valid pairing");
    if let Some((creditor_blocks, debtor_blocks)) = best {
        debug!(
            "best pairing: {} blocks, {} edges",
            creditor_blocks.len(),
            best_cost,
        );
        for (creditor_block, debtor_block) in creditor_blocks.iter().zip(&debtor_blocks) {
            let creditor_group: Vec<_> = creditor_block
                .iter()
                .map(|&i| creditors[i].clone())
                .collect();
            let debtor_group: Vec<_> =
                debtor_block.iter().map(|&i| debtors[i].clone()).collect();
            linker::link(&mut out, &creditor_group, &debtor_group)?;
        }
    }
    Ok(out)
}

/// Order a partition's blocks by the absolute sum of the pooled balances
/// they cover, ascending, so blocks from both sides line up for the
/// cancellation check.
fn sort_by_abs_sum(blocks: &mut [Vec<usize>], pool: &[(AccountName, i64)]) {
    blocks.sort_by_key(|block| block.iter().map(|&i| pool[i].1.abs()).sum::<i64>());
}

fn blocks_cancel(
    creditor_blocks: &[Vec<usize>],
    debtor_blocks: &[Vec<usize>],
    creditors: &[(AccountName, i64)],
    debtors: &[(AccountName, i64)],
) -> bool {
    creditor_blocks
        .iter()
        .zip(debtor_blocks)
        .all(|(creditor_block, debtor_block)| {
            let claim: i64 = creditor_block.iter().map(|&i| creditors[i].1).sum();
            let owed: i64 = debtor_block.iter().map(|&i| -debtors[i].1).sum();
            claim == owed
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account::AccountName;

    fn name(s: &str) -> AccountName {
        AccountName::new(s)
    }

    #[test]
    fn test_finds_independent_pairs() {
        // a:+5 b:+3 c:-5 d:-3 — two blocks, two edges.
        let mut graph = LoanGraph::with_accounts(["a", "b", "c", "d"].map(AccountName::new));
        graph.extend_credit(&name("a"), &name("c"), 5).unwrap();
        graph.extend_credit(&name("b"), &name("d"), 3).unwrap();

        let out = simplify(&graph).unwrap();
        assert_eq!(out.edge_count(), 2);
        assert!(graph.equivalent(&out));
    }

    #[test]
    fn test_matches_permutational_minimum() {
        let mut graph = LoanGraph::with_accounts(
            ["a", "b", "c", "d", "e"].map(AccountName::new),
        );
        graph.extend_credit(&name("a"), &name("d"), 7).unwrap();
        graph.extend_credit(&name("b"), &name("d"), 2).unwrap();
        graph.extend_credit(&name("c"), &name("e"), 4).unwrap();
        graph.extend_credit(&name("a"), &name("e"), 1).unwrap();

        let partitional = simplify(&graph).unwrap();
        let permutational = crate::simplify::permutational::simplify(&graph).unwrap();
        assert_eq!(partitional.edge_count(), permutational.edge_count());
        assert!(graph.equivalent(&partitional));
    }

    #[test]
    fn test_single_creditor_two_debtors() {
        let mut graph = LoanGraph::with_accounts(["a", "b", "c"].map(AccountName::new));
        graph.extend_credit(&name("a"), &name("b"), 4).unwrap();
        graph.extend_credit(&name("a"), &name("c"), 6).unwrap();

        let out = simplify(&graph).unwrap();
        assert_eq!(out.edge_count(), 2);
        assert!(graph.equivalent(&out));
    }

    #[test]
    fn test_empty_and_settled_graphs() {
        let out = simplify(&LoanGraph::new()).unwrap();
        assert!(out.is_empty());

        let mut settled = LoanGraph::with_accounts(["a", "b"].map(AccountName::new));
        settled.extend_credit(&name("a"), &name("b"), 3).unwrap();
        settled.extend_credit(&name("b"), &name("a"), 3).unwrap();
        let out = simplify(&settled).unwrap();
        assert_eq!(out.edge_count(), 0);
        assert!(settled.equivalent(&out));
    }

    #[test]
    fn test_unequal_block_sums_are_rejected() {
        // a:+5 b:+3 vs c:-4 d:-4: no two-block pairing cancels, so the
        // best valid pairing is the single block costing 3 edges.
        let mut graph = LoanGraph::with_accounts(["a", "b", "c", "d"].map(AccountName::new));
        graph.extend_credit(&name("a"), &name("c"), 4).unwrap();
        graph.extend_credit(&name("a"), &name("d"), 1).unwrap();
        graph.extend_credit(&name("b"), &name("d"), 3).unwrap();

        let out = simplify(&graph).unwrap();
        assert_eq!(out.edge_count(), 3);
        assert!(graph.equivalent(&out));
    }
}
