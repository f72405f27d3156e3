//! Linear strategy: one greedy merge over the whole partition.

use crate::core::graph::LoanGraph;
use crate::simplify::{linker, partition_pools, SimplifyError};

/// Simplify by linking every creditor against every debtor in a single
/// merge pass.
///
/// Produces `creditors + debtors - 1` edges for any non-degenerate
/// partition (fewer only when residuals happen to tie). Runs in linear
/// time over the accounts, but cannot exploit independently balanced
/// sub-groups the way the combinatorial strategies do.
pub(crate) fn simplify(graph: &LoanGraph) -> Result<LoanGraph, SimplifyError> {
    let (creditors, debtors) = partition_pools(graph);
    let mut out = graph.disconnected_copy();
    linker::link(&mut out, &creditors, &debtors)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account::AccountName;

    fn name(s: &str) -> AccountName {
        AccountName::new(s)
    }

    #[test]
    fn test_chain_collapses_to_single_edge() {
        // a -> b -> c with equal amounts: b nets to zero.
        let mut graph = LoanGraph::with_accounts(["a", "b", "c"].map(AccountName::new));
        graph.extend_credit(&name("a"), &name("b"), 10).unwrap();
        graph.extend_credit(&name("b"), &name("c"), 10).unwrap();

        let out = simplify(&graph).unwrap();
        assert_eq!(out.edge_count(), 1);
        assert_eq!(out.debt(&name("a"), &name("c")).unwrap(), 10);
        assert!(graph.equivalent(&out));
    }

    #[test]
    fn test_settled_graph_loses_all_edges() {
        let mut graph = LoanGraph::with_accounts(["a", "b"].map(AccountName::new));
        graph.extend_credit(&name("a"), &name("b"), 10).unwrap();
        graph.extend_credit(&name("b"), &name("a"), 10).unwrap();

        let out = simplify(&graph).unwrap();
        assert_eq!(out.edge_count(), 0);
        assert!(graph.equivalent(&out));
    }

    #[test]
    fn test_zero_balance_accounts_pass_through() {
        let mut graph = LoanGraph::with_accounts(["a", "b", "idle"].map(AccountName::new));
        graph.extend_credit(&name("a"), &name("b"), 5).unwrap();

        let out = simplify(&graph).unwrap();
        assert!(out.contains(&name("idle")));
        assert_eq!(out.balance(&name("idle")), Some(0));
        assert_eq!(out.account(&name("idle")).unwrap().debtor_count(), 0);
    }

    #[test]
    fn test_input_graph_is_untouched() {
        let mut graph = LoanGraph::with_accounts(["a", "b", "c"].map(AccountName::new));
        graph.extend_credit(&name("a"), &name("b"), 10).unwrap();
        graph.extend_credit(&name("b"), &name("c"), 10).unwrap();

        let edges_before = graph.edge_count();
        let _ = simplify(&graph).unwrap();
        assert_eq!(graph.edge_count(), edges_before);
        assert_eq!(graph.debt(&name("a"), &name("b")).unwrap(), 10);
    }
}
