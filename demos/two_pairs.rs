//! Two pairs that cancel exactly.
//!
//! Shows why the combinatorial strategies beat the linear sweep: when
//! the pools split into independent balanced sub-groups, matching the
//! sub-groups directly saves a loan.

use loan_simplifier::core::account::AccountName;
use loan_simplifier::core::graph::LoanGraph;
use loan_simplifier::simplify::Strategy;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  loan-simplifier: Two Pairs Example      ║");
    println!("╚══════════════════════════════════════════╝\n");

    let alice = AccountName::new("alice");
    let bob = AccountName::new("bob");
    let carol = AccountName::new("carol");
    let dave = AccountName::new("dave");

    let mut graph = LoanGraph::with_accounts([
        alice.clone(),
        bob.clone(),
        carol.clone(),
        dave.clone(),
    ]);

    // alice is owed 5 (by dave), bob is owed 3 (by carol). Name order
    // pairs alice with carol first, which costs the linear sweep an
    // extra loan.
    graph.extend_credit(&alice, &dave, 5).unwrap();
    graph.extend_credit(&bob, &carol, 3).unwrap();

    println!("━━━ Input ━━━\n");
    println!("{}", graph);

    for strategy in [Strategy::Linear, Strategy::GreedyCombinatorial] {
        println!("━━━ {} ━━━\n", strategy);
        let result = strategy.simplify(&graph).unwrap();
        println!("{}", result);
        assert!(graph.equivalent(&result));
    }

    println!("The greedy strategy pairs alice with dave and bob with");
    println!("carol, settling everything in two loans instead of three.");
}
