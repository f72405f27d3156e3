//! Profiling report for a simplification run: structural metrics,
//! wall-clock time, and the equivalence verdict.

use crate::core::graph::LoanGraph;
use crate::simplify::{SimplifyError, Strategy};
use std::fmt;
use std::time::{Duration, Instant};

/// What one strategy did to one graph.
#[derive(Debug, Clone)]
pub struct SimplifyReport {
    pub strategy: Strategy,
    pub elapsed: Duration,
    pub edges_before: usize,
    pub edges_after: usize,
    pub flow_before: i64,
    pub flow_after: i64,
    /// Whether the output preserved every account's net balance.
    pub equivalent: bool,
}

impl SimplifyReport {
    /// Run `strategy` over `graph`, timing it and collecting metrics.
    pub fn profile(
        strategy: Strategy,
        graph: &LoanGraph,
    ) -> Result<(LoanGraph, SimplifyReport), SimplifyError> {
        let start = Instant::now();
        let result = strategy.simplify(graph)?;
        let elapsed = start.elapsed();

        let report = SimplifyReport {
            strategy,
            elapsed,
            edges_before: graph.edge_count(),
            edges_after: result.edge_count(),
            flow_before: graph.total_flow(),
            flow_after: result.total_flow(),
            equivalent: graph.equivalent(&result),
        };
        Ok((result, report))
    }

    /// Edges removed by the run.
    pub fn edges_saved(&self) -> usize {
        self.edges_before.saturating_sub(self.edges_after)
    }
}

impl fmt::Display for SimplifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.strategy)?;
        writeln!(f, "Edges before:  {}", self.edges_before)?;
        writeln!(f, "Edges after:   {}", self.edges_after)?;
        writeln!(f, "Flow before:   {}", self.flow_before)?;
        writeln!(f, "Flow after:    {}", self.flow_after)?;
        writeln!(f, "Elapsed:       {:.3} ms", self.elapsed.as_secs_f64() * 1000.0)?;
        writeln!(f, "Equivalent:    {}", self.equivalent)?;
        Ok(())
    }
}
