//! Policy quality metrics (KPIs).
//!
//! Computes standard scheduling performance indicators from a
//! completed simulation run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Wait Time | Mean ticks spent ready but not running |
//! | Average Turnaround Time | Mean(finish - arrival) |
//! | Makespan | Latest finish time |
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9.2

use crate::models::{RunOutcome, Ticks};

/// Aggregate performance indicators for one policy run.
///
/// All time values are in ticks.
#[derive(Debug, Clone)]
pub struct PolicyKpi {
    /// Policy name the outcome came from.
    pub policy: String,
    /// Number of processes that ran to completion.
    pub completed_count: usize,
    /// Mean wait time across completed processes.
    pub average_wait_time: f64,
    /// Mean turnaround time across completed processes.
    pub average_turnaround_time: f64,
    /// Latest finish time.
    pub makespan: Ticks,
}

impl PolicyKpi {
    /// Computes KPIs from a finished run.
    ///
    /// An empty run yields zero averages and a zero makespan.
    pub fn calculate(outcome: &RunOutcome) -> Self {
        let count = outcome.completed_count();
        let (average_wait_time, average_turnaround_time) = if count == 0 {
            (0.0, 0.0)
        } else {
            let total_wait: Ticks = outcome.completed.iter().map(|p| p.wait_time).sum();
            let total_turnaround: Ticks =
                outcome.completed.iter().map(|p| p.turnaround_time).sum();
            (
                total_wait as f64 / count as f64,
                total_turnaround as f64 / count as f64,
            )
        };

        Self {
            policy: outcome.policy.clone(),
            completed_count: count,
            average_wait_time,
            average_turnaround_time,
            makespan: outcome.makespan(),
        }
    }
}
