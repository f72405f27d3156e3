//! Permutational strategy: exhaustive over orderings, edge-optimal.

use crate::combinatorics::PermutationEnumerator;
use crate::core::graph::LoanGraph;
use crate::simplify::{linker, partition_pools, SimplifyError};
use log::debug;

/// Simplify by trying every creditor ordering against every debtor
/// ordering, counting the edges each pair would produce, and emitting
/// the settlement for the best pair found.
///
/// The merge settles accounts in sequence, so the ordering alone decides
/// which residuals tie and collapse; enumerating all
/// `creditors! * debtors!` pairs therefore reaches the global minimum
/// edge count. Intended for small inputs only.
pub(crate) fn simplify(graph: &LoanGraph) -> Result<LoanGraph, SimplifyError> {
    let (creditors, debtors) = partition_pools(graph);
    let mut out = graph.disconnected_copy();

    let mut best_edges = usize::MAX;
    let mut best_creditors = creditors.clone();
    let mut best_debtors = debtors.clone();

    let mut creditor_perms = PermutationEnumerator::new(creditors);
    while creditor_perms.advance() {
        let mut debtor_perms = PermutationEnumerator::new(debtors.clone());
        while debtor_perms.advance() {
            let edges =
                linker::count_link_edges(creditor_perms.current(), debtor_perms.current());
            if edges < best_edges {
                best_edges = edges;
                best_creditors = creditor_perms.current().to_vec();
                best_debtors = debtor_perms.current().to_vec();
            }
        }
    }

    debug!(
        "best ordering pair settles in {} edges",
        if best_edges == usize::MAX { 0 } else { best_edges },
    );
    linker::link(&mut out, &best_creditors, &best_debtors)?;
    Ok(out)
}
