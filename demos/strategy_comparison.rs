//! Profile every strategy against one seeded random graph.

use loan_simplifier::simplify::report::SimplifyReport;
use loan_simplifier::simplify::Strategy;
use loan_simplifier::simulation::{generate_random_graph, GraphConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  loan-simplifier: Strategy Comparison    ║");
    println!("╚══════════════════════════════════════════╝\n");

    let config = GraphConfig {
        account_count: 8,
        density: 0.4,
        max_loan: 30,
    };
    let mut rng = StdRng::seed_from_u64(42);
    let graph = generate_random_graph(&config, &mut rng).unwrap();

    println!("━━━ Input ━━━\n");
    println!("{}", graph);

    for strategy in Strategy::ALL {
        let (_, report) = SimplifyReport::profile(strategy, &graph).unwrap();
        println!("{}", report);
        assert!(report.equivalent);
    }
}
