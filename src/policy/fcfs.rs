//! First-Come-First-Served.
//!
//! Non-preemptive: processes run to completion in arrival order. Idle
//! time between a completion and the next arrival is absorbed by
//! advancing the clock to the arrival before dispatching.
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9.2

use log::debug;

use super::{ensure_valid, SchedulingPolicy, SimulationError};
use crate::dispatch;
use crate::models::{CompletedProcess, Process, ProcessRecord, RunOutcome, Ticks};

/// First-Come-First-Served policy.
///
/// Expects the workload pre-sorted ascending by arrival time, ties
/// keeping input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, workload: &[ProcessRecord]) -> Result<RunOutcome, SimulationError> {
        ensure_valid(workload)?;
        let mut outcome = RunOutcome::new(self.name());
        let mut clock: Ticks = 0;

        for record in workload {
            let mut process = Process::new(record.clone());
            if clock < process.arrival_time() {
                clock = process.arrival_time();
            }
            outcome.trace.record(clock, process.id());
            dispatch::run_to_completion(&mut process, &mut clock);
            debug!("{} completed {} at T{}", self.name(), process.id(), clock);
            outcome.add_completed(CompletedProcess::from(&process));
        }

        Ok(outcome)
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}
