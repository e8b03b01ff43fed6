//! Multilevel Feedback (constant quantum).
//!
//! Six priority levels, 0 (highest) through 5 (lowest), each a FIFO
//! queue. New arrivals enter level 0; a process preempted with work
//! left is demoted one level. The bottom level does not demote further
//! and degenerates to round robin. The quantum is the same at every
//! level.
//!
//! # Algorithm
//!
//! Each iteration: admit arrivals into level 0, run the head of the
//! lowest-numbered non-empty level for one quantum, admit arrivals
//! again, then demote or complete the process. When every level is
//! empty the next pending process is pulled straight into level 0,
//! fast-forwarding through idle time.
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9.2

use std::collections::VecDeque;

use log::debug;

use super::{admit_arrivals, ensure_valid, spawn_processes, SchedulingPolicy, SimulationError};
use crate::dispatch::{self, DEFAULT_QUANTUM};
use crate::models::{CompletedProcess, Process, ProcessRecord, RunOutcome, Ticks};

/// Number of priority levels.
pub const FEEDBACK_LEVELS: usize = 6;

/// Multilevel Feedback policy with a constant quantum.
#[derive(Debug, Clone, Copy)]
pub struct MultilevelFeedback {
    /// Slice granted at every level.
    pub quantum: Ticks,
}

impl Default for MultilevelFeedback {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl MultilevelFeedback {
    /// Creates a feedback policy with a custom quantum.
    ///
    /// # Panics
    /// Panics if `quantum` is zero.
    pub fn with_quantum(quantum: Ticks) -> Self {
        assert!(quantum > 0, "quantum must be positive");
        Self { quantum }
    }
}

impl SchedulingPolicy for MultilevelFeedback {
    fn name(&self) -> &'static str {
        "FB (constant)"
    }

    fn run(&self, workload: &[ProcessRecord]) -> Result<RunOutcome, SimulationError> {
        ensure_valid(workload)?;
        let total = workload.len();
        let mut pending = spawn_processes(workload);
        let mut levels: [VecDeque<Process>; FEEDBACK_LEVELS] = Default::default();
        let mut outcome = RunOutcome::new(self.name());
        let mut clock: Ticks = 0;

        while outcome.completed_count() < total {
            admit_arrivals(&mut pending, &mut levels[0], clock);
            let level = match levels.iter().position(|queue| !queue.is_empty()) {
                Some(level) => level,
                None => {
                    // Fast-forward through idle time by pulling in the
                    // next future arrival.
                    match pending.pop_front() {
                        Some(process) => {
                            levels[0].push_back(process);
                            0
                        }
                        None => {
                            return Err(SimulationError::internal(
                                self.name(),
                                "queues exhausted before all processes completed",
                            ))
                        }
                    }
                }
            };
            let mut process = match levels[level].pop_front() {
                Some(process) => process,
                None => {
                    return Err(SimulationError::internal(
                        self.name(),
                        "selected level emptied before dispatch",
                    ))
                }
            };

            if clock < process.arrival_time() {
                clock = process.arrival_time();
            }
            outcome.trace.record(clock, process.id());
            dispatch::run_slice(&mut process, &mut clock, self.quantum);

            admit_arrivals(&mut pending, &mut levels[0], clock);
            if process.is_complete() {
                debug!(
                    "{} completed {} at T{} from level {}",
                    self.name(),
                    process.id(),
                    clock,
                    level
                );
                outcome.add_completed(CompletedProcess::from(&process));
            } else {
                // Demote one level; the bottom level requeues at its
                // own tail.
                let next = (level + 1).min(FEEDBACK_LEVELS - 1);
                levels[next].push_back(process);
            }
        }

        Ok(outcome)
    }

    fn description(&self) -> &'static str {
        "Multilevel Feedback (constant quantum)"
    }
}
