//! Greedy-Combinatorial strategy: search for exactly-canceling
//! creditor/debtor sub-groups via index-combination enumeration.

use crate::combinatorics::CombinationEnumerator;
use crate::core::graph::LoanGraph;
use crate::simplify::{linker, partition_pools, SimplifyError};
use log::debug;

/// Simplify by repeatedly carving out the smallest creditor group whose
/// sum is exactly matched by some debtor group.
///
/// Both pools are sorted ascending by absolute balance first. That
/// ordering is what makes the overshoot prune sound: combinations are
/// enumerated in lexicographic order within a size, and every
/// combination after a gapless one dominates it index-by-index, so once
/// a contiguous debtor group overshoots the creditor sum, no later group
/// of the same size can come back under it.
///
/// Each exact match is linked into the shared output graph, the matched
/// accounts are removed from their pools, and the search restarts over
/// the shrunken universes. Creditor enumeration exhausting ends the run;
/// on a balanced graph the full-pool match is always available, so every
/// account gets settled.
pub(crate) fn simplify(graph: &LoanGraph) -> Result<LoanGraph, SimplifyError> {
    let (mut creditors, mut debtors) = partition_pools(graph);
    let mut out = graph.disconnected_copy();
    if creditors.is_empty() || debtors.is_empty() {
        return Ok(out);
    }

    creditors.sort_by_key(|(_, balance)| balance.abs());
    debtors.sort_by_key(|(_, balance)| balance.abs());

    let mut creditor_combos = CombinationEnumerator::new(creditors.len())?;
    let mut debtor_combos = CombinationEnumerator::new(debtors.len())?;

    'creditors: while creditor_combos.advance() {
        let target: i64 = creditor_combos
            .current()
            .iter()
            .map(|&i| creditors[i].1)
            .sum();

        while debtor_combos.advance() {
            let owed: i64 = debtor_combos
                .current()
                .iter()
                .map(|&i| -debtors[i].1)
                .sum();

            if owed == target {
                let creditor_group: Vec<_> = creditor_combos
                    .current()
                    .iter()
                    .map(|&i| creditors[i].clone())
                    .collect();
                let debtor_group: Vec<_> = debtor_combos
                    .current()
                    .iter()
                    .map(|&i| debtors[i].clone())
                    .collect();
                debug!(
                    "matched {} creditors against {} debtors, sum {}",
                    creditor_group.len(),
                    debtor_group.len(),
                    target,
                );
                linker::link(&mut out, &creditor_group, &debtor_group)?;

                for &i in creditor_combos.current().iter().rev() {
                    creditors.remove(i);
                }
                for &i in debtor_combos.current().iter().rev() {
                    debtors.remove(i);
                }
                creditor_combos.remove_current();
                debtor_combos.remove_current();
                // Creditor search resumes at its current group size
                // (smaller groups were exhausted before it grew), but the
                // debtor side must retry from single accounts.
                debtor_combos.reset();

                if creditors.is_empty() || debtors.is_empty() {
                    break 'creditors;
                }
                continue 'creditors;
            }

            if owed > target && debtor_combos.has_no_gaps() {
                // No later debtor group of this size can be smaller.
                debtor_combos.reset();
                continue 'creditors;
            }
        }

        // Debtor enumeration ran dry without a match; re-arm it for the
        // next creditor combination.
        debtor_combos.reset();
    }

    debug_assert!(
        creditors.is_empty() && debtors.is_empty(),
        "a balanced graph always partitions fully",
    );
    Ok(out)
}
