//! loan-simplifier CLI
//!
//! Simplify debt graphs from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Simplify loans from a JSON file
//! loan-simplifier simplify --input loans.json
//!
//! # Pick a strategy and emit JSON
//! loan-simplifier simplify --input loans.json --strategy partitional --format json
//!
//! # Generate a random loan graph for testing
//! loan-simplifier generate --accounts 10 --density 0.4
//!
//! # Profile all strategies against one random graph
//! loan-simplifier demo --accounts 8 --seed 42
//! ```

use loan_simplifier::core::account::AccountName;
use loan_simplifier::core::graph::LoanGraph;
use loan_simplifier::simplify::report::SimplifyReport;
use loan_simplifier::simplify::Strategy;
use loan_simplifier::simulation::{generate_random_graph, GraphConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::process;

/// Largest creditor or debtor pool the exhaustive strategies will
/// accept from the CLI. Beyond this, factorial search is impractical.
const EXHAUSTIVE_POOL_LIMIT: usize = 9;

fn print_usage() {
    eprintln!(
        r#"loan-simplifier — debt simplification over directed loan graphs

USAGE:
    loan-simplifier <COMMAND> [OPTIONS]

COMMANDS:
    simplify    Simplify a loan graph with one strategy
    generate    Generate a random loan graph (for testing)
    demo        Profile every strategy against one random graph
    help        Show this message

OPTIONS (simplify):
    --input <FILE>        Path to JSON loans file
    --strategy <NAME>     linear | greedy | permutational | partitional
                          (default: greedy)
    --format <FORMAT>     Output format: text (default) or json

OPTIONS (generate):
    --accounts <N>        Number of accounts (default: 10)
    --density <F>         Loan probability per ordered pair (default: 0.4)
    --max-loan <N>        Largest single loan amount (default: 30)
    --seed <N>            RNG seed (default: from entropy)
    --output <FILE>       Write to file instead of stdout

OPTIONS (demo):
    --accounts <N>        Number of accounts (default: 8)
    --seed <N>            RNG seed (default: from entropy)

EXAMPLES:
    loan-simplifier simplify --input loans.json
    loan-simplifier simplify --input loans.json --strategy partitional --format json
    loan-simplifier generate --accounts 20 --density 0.3 --output loans.json
    loan-simplifier demo --accounts 8 --seed 42"#
    );
}

/// JSON schema for input loans.
#[derive(serde::Deserialize)]
struct LoanInput {
    creditor: String,
    debtor: String,
    amount: i64,
}

#[derive(serde::Deserialize)]
struct LoansFile {
    loans: Vec<LoanInput>,
}

/// JSON output schema for simplification results.
#[derive(serde::Serialize)]
struct SimplifyOutput {
    strategy: Strategy,
    edges_before: usize,
    edges_after: usize,
    flow_before: i64,
    flow_after: i64,
    elapsed_ms: f64,
    equivalent: bool,
    loans: Vec<LoanOutput>,
}

#[derive(serde::Serialize)]
struct LoanOutput {
    creditor: String,
    debtor: String,
    amount: i64,
}

fn load_graph(path: &str) -> LoanGraph {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: LoansFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "loans": [
    {{ "creditor": "alice", "debtor": "bob", "amount": 25 }}
  ]
}}"#
        );
        process::exit(1);
    });

    let mut graph = LoanGraph::new();
    for loan in &file.loans {
        graph.add_account(AccountName::new(&loan.creditor));
        graph.add_account(AccountName::new(&loan.debtor));
    }
    for loan in &file.loans {
        let creditor = AccountName::new(&loan.creditor);
        let debtor = AccountName::new(&loan.debtor);
        graph
            .extend_credit(&creditor, &debtor, loan.amount)
            .unwrap_or_else(|e| {
                eprintln!("Invalid loan {} → {}: {}", loan.creditor, loan.debtor, e);
                process::exit(1);
            });
    }
    graph
}

fn dump_loans(graph: &LoanGraph) -> Vec<LoanOutput> {
    let mut loans = Vec::new();
    for account in graph.accounts() {
        for (debtor, amount) in account.debtors() {
            loans.push(LoanOutput {
                creditor: account.name().to_string(),
                debtor: debtor.to_string(),
                amount,
            });
        }
    }
    loans
}

/// Largest pool size the graph would hand an exhaustive strategy.
fn widest_pool(graph: &LoanGraph) -> usize {
    let creditors = graph.accounts().filter(|a| a.balance() > 0).count();
    let debtors = graph.accounts().filter(|a| a.balance() < 0).count();
    creditors.max(debtors)
}

fn cmd_simplify(args: &[String]) {
    let mut input_path = None;
    let mut strategy = Strategy::GreedyCombinatorial;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--strategy" => {
                i += 1;
                strategy = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!(
                            "--strategy requires one of: linear, greedy, permutational, partitional"
                        );
                        process::exit(1);
                    });
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let graph = load_graph(&path);

    if strategy.is_exhaustive() && widest_pool(&graph) > EXHAUSTIVE_POOL_LIMIT {
        eprintln!(
            "Error: {} is exhaustive and this graph has a pool of {} accounts \
             (limit: {}). Use linear or greedy instead.",
            strategy,
            widest_pool(&graph),
            EXHAUSTIVE_POOL_LIMIT
        );
        process::exit(1);
    }

    let (result, report) = SimplifyReport::profile(strategy, &graph).unwrap_or_else(|e| {
        eprintln!("Simplification failed: {}", e);
        process::exit(1);
    });

    if format == "json" {
        let output = SimplifyOutput {
            strategy: report.strategy,
            edges_before: report.edges_before,
            edges_after: report.edges_after,
            flow_before: report.flow_before,
            flow_after: report.flow_after,
            elapsed_ms: report.elapsed.as_secs_f64() * 1000.0,
            equivalent: report.equivalent,
            loans: dump_loans(&result),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("{}", report);
        println!("{}", result);
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = GraphConfig::default();
    let mut seed: Option<u64> = None;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--accounts" => {
                i += 1;
                config.account_count = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--accounts requires a number");
                        process::exit(1);
                    });
            }
            "--density" => {
                i += 1;
                config.density = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--density requires a number between 0 and 1");
                        process::exit(1);
                    });
            }
            "--max-loan" => {
                i += 1;
                config.max_loan = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--max-loan requires a positive number");
                        process::exit(1);
                    });
            }
            "--seed" => {
                i += 1;
                seed = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(
                    || {
                        eprintln!("--seed requires a number");
                        process::exit(1);
                    },
                ));
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let graph = generate_random_graph(&config, &mut rng).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    #[derive(serde::Serialize)]
    struct OutputFile {
        loans: Vec<LoanOutput>,
    }

    let output = OutputFile {
        loans: dump_loans(&graph),
    };
    let json = serde_json::to_string_pretty(&output).unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} loans across {} accounts → {}",
            graph.edge_count(),
            graph.len(),
            path
        );
    } else {
        println!("{}", json);
    }
}

fn cmd_demo(args: &[String]) {
    let mut accounts = 8usize;
    let mut seed: Option<u64> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--accounts" => {
                i += 1;
                accounts = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--accounts requires a number");
                        process::exit(1);
                    });
            }
            "--seed" => {
                i += 1;
                seed = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(
                    || {
                        eprintln!("--seed requires a number");
                        process::exit(1);
                    },
                ));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = GraphConfig {
        account_count: accounts,
        ..GraphConfig::default()
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let graph = generate_random_graph(&config, &mut rng).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    println!(
        "Random graph: {} accounts, {} loans, total flow {}",
        graph.len(),
        graph.edge_count(),
        graph.total_flow()
    );
    println!();

    let pool = widest_pool(&graph);
    for strategy in Strategy::ALL {
        if strategy.is_exhaustive() && pool > EXHAUSTIVE_POOL_LIMIT {
            log::warn!(
                "skipping {}: pool of {} accounts exceeds limit {}",
                strategy,
                pool,
                EXHAUSTIVE_POOL_LIMIT
            );
            continue;
        }
        match SimplifyReport::profile(strategy, &graph) {
            Ok((_, report)) => println!("{}", report),
            Err(e) => {
                eprintln!("{} failed: {}", strategy, e);
                process::exit(1);
            }
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "simplify" => cmd_simplify(rest),
        "generate" => cmd_generate(rest),
        "demo" => cmd_demo(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
