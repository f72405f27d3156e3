//! Foundational types: accounts, the loan graph arena, and graph errors.

pub mod account;
pub mod graph;
