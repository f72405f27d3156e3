use crate::core::graph::GraphError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique identifier for an account in the loan graph.
///
/// An account can represent a person, a household member, or any entity
/// that lends to and borrows from its peers.
///
/// # Examples
///
/// ```
/// use loan_simplifier::core::account::AccountName;
///
/// let alice = AccountName::new("alice");
/// let bob = AccountName::new("bob");
/// assert_ne!(alice, bob);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountName(String);

impl AccountName {
    /// Create a new account name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the string representation of this account name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A node in the loan graph: an account with a signed net balance and
/// the loans it has extended and received.
///
/// `balance` is the account's equity: positive means the account is owed
/// money on net, negative means it owes, zero means it is settled. Every
/// loan recorded between two accounts moves the same amount in opposite
/// directions, so summed across a whole graph the balances always net to
/// zero.
///
/// Equality and hashing are defined by `name` alone. Balances and loan
/// maps mutate as credit is extended, and the simplification algorithms
/// key their working maps by account identity, not by current state.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    name: AccountName,
    balance: i64,
    /// Debtor name -> amount this account has lent to them.
    loans_out: BTreeMap<AccountName, i64>,
    /// Creditor name -> amount this account has borrowed from them.
    loans_in: BTreeMap<AccountName, i64>,
}

impl Account {
    /// Create a fresh account with zero balance and no loans.
    pub fn new(name: AccountName) -> Self {
        Self {
            name,
            balance: 0,
            loans_out: BTreeMap::new(),
            loans_in: BTreeMap::new(),
        }
    }

    /// A copy that keeps the identity but resets balance and loans.
    ///
    /// This is how every simplification algorithm seeds its output:
    /// same names, no edges, balances rebuilt by the settlement links.
    pub fn detached_copy(&self) -> Self {
        Self::new(self.name.clone())
    }

    pub fn name(&self) -> &AccountName {
        &self.name
    }

    /// Net balance: positive = owed, negative = owes, zero = settled.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Number of distinct debtors this account has lent to (out-degree).
    pub fn debtor_count(&self) -> usize {
        self.loans_out.len()
    }

    /// Amount this account has lent to `debtor`.
    ///
    /// Fails with [`GraphError::UnknownDebt`] if no such loan exists —
    /// a missing loan is distinct from a loan of zero, which cannot exist.
    pub fn debt_to(&self, debtor: &AccountName) -> Result<i64, GraphError> {
        self.loans_out
            .get(debtor)
            .copied()
            .ok_or_else(|| GraphError::UnknownDebt {
                creditor: self.name.clone(),
                debtor: debtor.clone(),
            })
    }

    /// Read-only view of this account's debtors and the amounts lent.
    pub fn debtors(&self) -> impl Iterator<Item = (&AccountName, i64)> {
        self.loans_out.iter().map(|(name, &amount)| (name, amount))
    }

    /// Read-only view of this account's creditors and the amounts borrowed.
    pub fn creditors(&self) -> impl Iterator<Item = (&AccountName, i64)> {
        self.loans_in.iter().map(|(name, &amount)| (name, amount))
    }

    /// Total amount lent across all debtors.
    pub fn total_lent(&self) -> i64 {
        self.loans_out.values().sum()
    }

    pub(crate) fn record_loan_to(&mut self, debtor: AccountName, amount: i64) {
        *self.loans_out.entry(debtor).or_insert(0) += amount;
        self.balance += amount;
    }

    pub(crate) fn record_loan_from(&mut self, creditor: AccountName, amount: i64) {
        *self.loans_in.entry(creditor).or_insert(0) += amount;
        self.balance -= amount;
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: balance {}]", self.name, self.balance)
    }
}
