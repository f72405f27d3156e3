use crate::core::account::{Account, AccountName};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors arising from loan graph operations.
///
/// Every variant signals an invariant violation in the caller, not a
/// transient condition: nothing here is retried or recovered from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("loan amount must be positive, got {amount}")]
    InvalidAmount { amount: i64 },
    #[error("account {account} cannot extend credit to itself")]
    SelfLoop { account: AccountName },
    #[error("no such account: {name}")]
    UnknownAccount { name: AccountName },
    #[error("no loan from {creditor} to {debtor}")]
    UnknownDebt {
        creditor: AccountName,
        debtor: AccountName,
    },
}

/// A set of accounts and the directed loans between them.
///
/// Accounts are stored in an arena keyed by name, and loans are
/// adjacency maps on each account, so the graph is plain owned data —
/// no shared references between nodes. All mutation goes through
/// [`LoanGraph::extend_credit`], which keeps the conservation invariant:
/// the sum of all balances is zero at every point in the graph's life.
///
/// # Examples
///
/// ```
/// use loan_simplifier::core::account::AccountName;
/// use loan_simplifier::core::graph::LoanGraph;
///
/// let mut graph = LoanGraph::with_accounts(["alice", "bob"].map(AccountName::new));
/// graph.extend_credit(&AccountName::new("alice"), &AccountName::new("bob"), 40).unwrap();
///
/// assert_eq!(graph.balance(&AccountName::new("alice")), Some(40));
/// assert_eq!(graph.balance(&AccountName::new("bob")), Some(-40));
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoanGraph {
    accounts: BTreeMap<AccountName, Account>,
}

impl LoanGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph containing the given accounts, no loans.
    pub fn with_accounts(names: impl IntoIterator<Item = AccountName>) -> Self {
        let mut graph = Self::new();
        for name in names {
            graph.add_account(name);
        }
        graph
    }

    /// Add an account with zero balance. Adding an existing name is a no-op.
    pub fn add_account(&mut self, name: AccountName) {
        self.accounts
            .entry(name.clone())
            .or_insert_with(|| Account::new(name));
    }

    pub fn contains(&self, name: &AccountName) -> bool {
        self.accounts.contains_key(name)
    }

    pub fn account(&self, name: &AccountName) -> Option<&Account> {
        self.accounts.get(name)
    }

    /// Net balance of an account, if it exists.
    pub fn balance(&self, name: &AccountName) -> Option<i64> {
        self.accounts.get(name).map(Account::balance)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Accounts in name order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Record that `creditor` extends `amount` of credit to `debtor`.
    ///
    /// The directed loan between the pair is created or increased, the
    /// creditor's balance rises by `amount` and the debtor's falls by the
    /// same, so the graph stays conserved.
    ///
    /// Fails with [`GraphError::InvalidAmount`] for `amount <= 0`,
    /// [`GraphError::SelfLoop`] when both sides are the same account, and
    /// [`GraphError::UnknownAccount`] when either side is absent.
    pub fn extend_credit(
        &mut self,
        creditor: &AccountName,
        debtor: &AccountName,
        amount: i64,
    ) -> Result<(), GraphError> {
        if amount <= 0 {
            return Err(GraphError::InvalidAmount { amount });
        }
        if creditor == debtor {
            return Err(GraphError::SelfLoop {
                account: creditor.clone(),
            });
        }
        if !self.accounts.contains_key(debtor) {
            return Err(GraphError::UnknownAccount {
                name: debtor.clone(),
            });
        }

        self.accounts
            .get_mut(creditor)
            .ok_or_else(|| GraphError::UnknownAccount {
                name: creditor.clone(),
            })?
            .record_loan_to(debtor.clone(), amount);

        self.accounts
            .get_mut(debtor)
            .expect("debtor presence checked above")
            .record_loan_from(creditor.clone(), amount);

        Ok(())
    }

    /// Amount `creditor` has lent to `debtor`.
    pub fn debt(&self, creditor: &AccountName, debtor: &AccountName) -> Result<i64, GraphError> {
        self.accounts
            .get(creditor)
            .ok_or_else(|| GraphError::UnknownAccount {
                name: creditor.clone(),
            })?
            .debt_to(debtor)
    }

    /// Same accounts, zero balances, no loans.
    pub fn disconnected_copy(&self) -> Self {
        Self {
            accounts: self
                .accounts
                .values()
                .map(|a| (a.name().clone(), a.detached_copy()))
                .collect(),
        }
    }

    /// Total number of directed loans in the graph.
    pub fn edge_count(&self) -> usize {
        self.accounts.values().map(Account::debtor_count).sum()
    }

    /// Sum of all loan amounts across the graph.
    pub fn total_flow(&self) -> i64 {
        self.accounts.values().map(Account::total_lent).sum()
    }

    /// Sum of all balances. Zero for any graph built through
    /// [`LoanGraph::extend_credit`].
    pub fn sum_of_balances(&self) -> i64 {
        self.accounts.values().map(Account::balance).sum()
    }

    pub fn is_balanced(&self) -> bool {
        self.sum_of_balances() == 0
    }

    /// Two graphs are equivalent when they hold the same account names
    /// and each name carries the same net balance in both.
    ///
    /// This is the correctness oracle for simplification: the loan edges
    /// may differ arbitrarily, but who owes how much on net may not.
    pub fn equivalent(&self, other: &LoanGraph) -> bool {
        if self.accounts.len() != other.accounts.len() {
            return false;
        }
        self.accounts.values().all(|account| {
            other.balance(account.name()) == Some(account.balance())
        })
    }
}

impl std::fmt::Display for LoanGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} accounts, {} loans, total flow {}",
            self.len(),
            self.edge_count(),
            self.total_flow()
        )?;
        for account in self.accounts.values() {
            writeln!(f, "  {}", account)?;
            for (debtor, amount) in account.debtors() {
                writeln!(f, "    lent {} to {}", amount, debtor)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> AccountName {
        AccountName::new(s)
    }

    fn graph(names: &[&str]) -> LoanGraph {
        LoanGraph::with_accounts(names.iter().map(|s| name(s)))
    }

    #[test]
    fn test_extend_credit_moves_balances() {
        let mut g = graph(&["a", "b"]);
        g.extend_credit(&name("a"), &name("b"), 30).unwrap();
        assert_eq!(g.balance(&name("a")), Some(30));
        assert_eq!(g.balance(&name("b")), Some(-30));
        assert_eq!(g.debt(&name("a"), &name("b")).unwrap(), 30);
        assert!(g.is_balanced());
    }

    #[test]
    fn test_extend_credit_accumulates() {
        let mut g = graph(&["a", "b"]);
        g.extend_credit(&name("a"), &name("b"), 30).unwrap();
        g.extend_credit(&name("a"), &name("b"), 12).unwrap();
        assert_eq!(g.debt(&name("a"), &name("b")).unwrap(), 42);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.total_flow(), 42);
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut g = graph(&["a", "b"]);
        assert_eq!(
            g.extend_credit(&name("a"), &name("b"), 0),
            Err(GraphError::InvalidAmount { amount: 0 })
        );
        assert_eq!(
            g.extend_credit(&name("a"), &name("b"), -5),
            Err(GraphError::InvalidAmount { amount: -5 })
        );
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut g = graph(&["a"]);
        assert_eq!(
            g.extend_credit(&name("a"), &name("a"), 10),
            Err(GraphError::SelfLoop { account: name("a") })
        );
    }

    #[test]
    fn test_unknown_account_rejected() {
        let mut g = graph(&["a"]);
        let err = g.extend_credit(&name("a"), &name("ghost"), 10);
        assert_eq!(
            err,
            Err(GraphError::UnknownAccount {
                name: name("ghost")
            })
        );
    }

    #[test]
    fn test_unknown_debt_is_not_zero() {
        let mut g = graph(&["a", "b", "c"]);
        g.extend_credit(&name("a"), &name("b"), 10).unwrap();
        assert!(g.debt(&name("a"), &name("c")).is_err());
        assert!(g.debt(&name("b"), &name("a")).is_err());
    }

    #[test]
    fn test_conservation_over_many_loans() {
        let mut g = graph(&["a", "b", "c", "d"]);
        g.extend_credit(&name("a"), &name("b"), 7).unwrap();
        g.extend_credit(&name("b"), &name("c"), 13).unwrap();
        g.extend_credit(&name("c"), &name("d"), 21).unwrap();
        g.extend_credit(&name("d"), &name("a"), 4).unwrap();
        assert_eq!(g.sum_of_balances(), 0);
    }

    #[test]
    fn test_disconnected_copy() {
        let mut g = graph(&["a", "b"]);
        g.extend_credit(&name("a"), &name("b"), 30).unwrap();
        let copy = g.disconnected_copy();
        assert_eq!(copy.len(), 2);
        assert_eq!(copy.edge_count(), 0);
        assert_eq!(copy.balance(&name("a")), Some(0));
    }

    #[test]
    fn test_equivalence_compares_balances_only() {
        let mut g1 = graph(&["a", "b", "c"]);
        g1.extend_credit(&name("a"), &name("b"), 10).unwrap();
        g1.extend_credit(&name("b"), &name("c"), 10).unwrap();

        // Same net balances through a different edge set.
        let mut g2 = graph(&["a", "b", "c"]);
        g2.extend_credit(&name("a"), &name("c"), 10).unwrap();

        assert!(g1.equivalent(&g2));
        assert!(g2.equivalent(&g1));

        let mut g3 = graph(&["a", "b", "c"]);
        g3.extend_credit(&name("a"), &name("b"), 9).unwrap();
        assert!(!g1.equivalent(&g3));

        let g4 = graph(&["a", "b"]);
        assert!(!g1.equivalent(&g4));
    }
}
