//! Shortest Remaining Time.
//!
//! Preemptive with a one-tick slice: every tick, the admitted process
//! with the least remaining work runs. A running process is preempted
//! the moment a shorter one becomes eligible. Ties break by earliest
//! arrival, then by numeric id, so runs are fully deterministic.
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9.2

use std::cmp::Ordering;

use log::debug;

use super::{ensure_valid, SchedulingPolicy, SimulationError};
use crate::dispatch::{self, UNIT_SLICE};
use crate::models::{id_numeric_value, CompletedProcess, Process, ProcessRecord, RunOutcome, Ticks};

/// Shortest Remaining Time policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTime;

/// Selection order: least remaining work, then earliest arrival, then
/// lowest numeric id. Unique ids make this a total order.
fn srt_order(a: &Process, b: &Process) -> Ordering {
    a.remaining_exec_time
        .cmp(&b.remaining_exec_time)
        .then(a.arrival_time().cmp(&b.arrival_time()))
        .then_with(|| id_numeric_value(a.id()).cmp(&id_numeric_value(b.id())))
        .then_with(|| a.id().cmp(b.id()))
}

impl SchedulingPolicy for ShortestRemainingTime {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn run(&self, workload: &[ProcessRecord]) -> Result<RunOutcome, SimulationError> {
        ensure_valid(workload)?;
        let total = workload.len();
        let mut processes: Vec<Process> = workload.iter().cloned().map(Process::new).collect();
        let mut outcome = RunOutcome::new(self.name());
        let mut clock: Ticks = 0;

        while outcome.completed_count() < total {
            let candidate = processes
                .iter()
                .enumerate()
                .filter(|(_, p)| !p.is_complete() && p.arrival_time() <= clock)
                .min_by(|(_, a), (_, b)| srt_order(a, b))
                .map(|(index, _)| index);

            let index = match candidate {
                Some(index) => index,
                None => {
                    // Nothing admitted: jump the clock to the next
                    // arrival and re-select.
                    let next_arrival = processes
                        .iter()
                        .filter(|p| !p.is_complete())
                        .map(|p| p.arrival_time())
                        .min();
                    match next_arrival {
                        Some(arrival) => {
                            clock = clock.max(arrival);
                            continue;
                        }
                        None => {
                            return Err(SimulationError::internal(
                                self.name(),
                                "no runnable process before all completed",
                            ))
                        }
                    }
                }
            };

            let process = &mut processes[index];
            outcome.trace.record(clock, process.id());
            dispatch::run_slice(process, &mut clock, UNIT_SLICE);
            if process.is_complete() {
                debug!("{} completed {} at T{}", self.name(), process.id(), clock);
                outcome.add_completed(CompletedProcess::from(&*process));
            }
        }

        Ok(outcome)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}
