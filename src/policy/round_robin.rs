//! Round Robin.
//!
//! Preemptive with a fixed quantum. The ready queue is FIFO: a process
//! preempted with work left rejoins at the tail, behind any process
//! that arrived during its slice.
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9.2

use std::collections::VecDeque;

use log::debug;

use super::{admit_arrivals, ensure_valid, spawn_processes, SchedulingPolicy, SimulationError};
use crate::dispatch::{self, DEFAULT_QUANTUM};
use crate::models::{CompletedProcess, Process, ProcessRecord, RunOutcome, Ticks};

/// Round Robin policy.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Maximum slice granted per dispatch.
    pub quantum: Ticks,
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl RoundRobin {
    /// Creates a round robin policy with a custom quantum.
    ///
    /// # Panics
    /// Panics if `quantum` is zero.
    pub fn with_quantum(quantum: Ticks) -> Self {
        assert!(quantum > 0, "quantum must be positive");
        Self { quantum }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, workload: &[ProcessRecord]) -> Result<RunOutcome, SimulationError> {
        ensure_valid(workload)?;
        let total = workload.len();
        let mut pending = spawn_processes(workload);
        let mut ready: VecDeque<Process> = VecDeque::new();
        let mut outcome = RunOutcome::new(self.name());
        let mut clock: Ticks = 0;

        while outcome.completed_count() < total {
            admit_arrivals(&mut pending, &mut ready, clock);
            if ready.is_empty() {
                // Fast-forward through idle time by pulling in the next
                // future arrival.
                match pending.pop_front() {
                    Some(process) => ready.push_back(process),
                    None => {
                        return Err(SimulationError::internal(
                            self.name(),
                            "queues exhausted before all processes completed",
                        ))
                    }
                }
            }
            let mut process = match ready.pop_front() {
                Some(process) => process,
                None => {
                    return Err(SimulationError::internal(
                        self.name(),
                        "ready queue empty after admission",
                    ))
                }
            };

            if clock < process.arrival_time() {
                clock = process.arrival_time();
            }
            outcome.trace.record(clock, process.id());
            dispatch::run_slice(&mut process, &mut clock, self.quantum);

            // Arrivals during the slice line up ahead of the preempted
            // process.
            admit_arrivals(&mut pending, &mut ready, clock);
            if process.is_complete() {
                debug!("{} completed {} at T{}", self.name(), process.id(), clock);
                outcome.add_completed(CompletedProcess::from(&process));
            } else {
                ready.push_back(process);
            }
        }

        Ok(outcome)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
