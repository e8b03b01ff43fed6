//! Scheduling policies.
//!
//! Four short-term scheduling policies drive processes through the
//! shared dispatch primitive until every process in the workload has
//! completed: first-come-first-served, round robin, shortest remaining
//! time, and a constant-quantum multilevel feedback queue.
//!
//! Each policy run owns its clock and queues outright and works on a
//! deep copy of the input records, so policies never share mutable
//! state and concurrent runs over the same input behave exactly like
//! sequential ones.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::models::ProcessRecord;
//! use u_cpusched::policy::{RoundRobin, SchedulingPolicy};
//!
//! let workload = vec![
//!     ProcessRecord::new("p1", 0, 5),
//!     ProcessRecord::new("p2", 1, 3),
//! ];
//! let outcome = RoundRobin::default().run(&workload).unwrap();
//! assert_eq!(outcome.completed_count(), 2);
//! ```
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod feedback;
mod kpi;
mod round_robin;
mod srt;

pub use fcfs::Fcfs;
pub use feedback::{MultilevelFeedback, FEEDBACK_LEVELS};
pub use kpi::PolicyKpi;
pub use round_robin::RoundRobin;
pub use srt::ShortestRemainingTime;

use std::collections::VecDeque;
use std::fmt;

use crate::models::{Process, ProcessRecord, RunOutcome, Ticks};
use crate::validation::{validate_workload, ValidationError};

/// A scheduling policy that simulates a workload to completion.
///
/// `run` validates the workload, deep-copies it into policy-owned
/// state, and drives every process through the dispatch primitive. The
/// policies expect the input pre-sorted ascending by arrival time
/// (stable on ties); see the workload module for the per-policy sort
/// helpers.
pub trait SchedulingPolicy: Send + Sync + fmt::Debug {
    /// Policy name (e.g. "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Simulates the workload and returns the completed metrics and
    /// dispatch trace.
    fn run(&self, workload: &[ProcessRecord]) -> Result<RunOutcome, SimulationError>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Failure modes of a policy run.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The workload failed validation; no simulation was started.
    InvalidProcess(Vec<ValidationError>),
    /// A policy loop reached a state its invariants forbid. Indicates a
    /// logic defect, not a recoverable input error; never retry.
    InternalInvariant {
        /// Policy that detected the violation.
        policy: &'static str,
        /// What went wrong.
        message: String,
    },
}

impl SimulationError {
    pub(crate) fn internal(policy: &'static str, message: impl Into<String>) -> Self {
        Self::InternalInvariant {
            policy,
            message: message.into(),
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProcess(errors) => {
                write!(f, "invalid workload ({} violations):", errors.len())?;
                for error in errors {
                    write!(f, " {};", error)?;
                }
                Ok(())
            }
            Self::InternalInvariant { policy, message } => {
                write!(f, "internal invariant violated in {policy}: {message}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Fails fast with every violation if the workload is invalid.
fn ensure_valid(workload: &[ProcessRecord]) -> Result<(), SimulationError> {
    validate_workload(workload).map_err(SimulationError::InvalidProcess)
}

/// Deep-copies input records into live per-run entities, input order
/// preserved.
fn spawn_processes(workload: &[ProcessRecord]) -> VecDeque<Process> {
    workload.iter().cloned().map(Process::new).collect()
}

/// Moves every pending process that has arrived by `clock` to the tail
/// of `ready`, preserving arrival order.
///
/// Pending is arrival-ordered, so the scan stops at the first process
/// still in the future.
fn admit_arrivals(pending: &mut VecDeque<Process>, ready: &mut VecDeque<Process>, clock: Ticks) {
    while pending
        .front()
        .is_some_and(|process| process.arrival_time() <= clock)
    {
        if let Some(process) = pending.pop_front() {
            ready.push_back(process);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunOutcome;
    use crate::workload;

    fn policies() -> Vec<Box<dyn SchedulingPolicy>> {
        vec![
            Box::new(Fcfs),
            Box::new(RoundRobin::default()),
            Box::new(ShortestRemainingTime),
            Box::new(MultilevelFeedback::default()),
        ]
    }

    fn sorted_for(policy: &dyn SchedulingPolicy, records: &[ProcessRecord]) -> Vec<ProcessRecord> {
        let mut input = records.to_vec();
        match policy.name() {
            "SRT" => workload::sort_for_shortest_remaining(&mut input),
            "FB (constant)" => workload::sort_for_feedback(&mut input),
            _ => workload::sort_by_arrival(&mut input),
        }
        input
    }

    fn assert_outcome_invariants(outcome: &RunOutcome, records: &[ProcessRecord]) {
        assert_eq!(outcome.completed_count(), records.len());

        // Completion metrics are consistent for every process.
        for record in records {
            let done = outcome
                .metrics_for(&record.id)
                .unwrap_or_else(|| panic!("{} missing {}", outcome.policy, record.id));
            assert_eq!(
                done.wait_time + done.exec_time,
                done.turnaround_time,
                "{}: {} wait {} + exec {} != turnaround {}",
                outcome.policy,
                record.id,
                done.wait_time,
                done.exec_time,
                done.turnaround_time
            );
            assert_eq!(done.exec_time, record.exec_time);
            assert_eq!(done.finish_time, record.arrival_time + done.turnaround_time);
        }

        // No process id appears twice in the completed set.
        let mut ids: Vec<&str> = outcome.completed.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len(), "{}: duplicated completion", outcome.policy);

        // Trace times never go backwards and never precede the earliest
        // arrival.
        let times: Vec<Ticks> = outcome.trace.events.iter().map(|e| e.time).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]), "{}: trace not monotonic", outcome.policy);
        if let Some(earliest) = records.iter().map(|r| r.arrival_time).min() {
            if let Some(first) = times.first() {
                assert!(*first >= earliest, "{}: dispatch before first arrival", outcome.policy);
            }
        }
    }

    #[test]
    fn test_all_policies_satisfy_invariants_on_random_workloads() {
        for seed in [7, 42, 1234] {
            let records = workload::synthetic_workload(seed, 40, 0.3, 12);
            assert!(!records.is_empty());
            for policy in policies() {
                let input = sorted_for(policy.as_ref(), &records);
                let outcome = policy.run(&input).unwrap();
                assert_outcome_invariants(&outcome, &input);
            }
        }
    }

    #[test]
    fn test_all_policies_start_at_first_arrival() {
        let records = vec![
            ProcessRecord::new("p1", 9, 4),
            ProcessRecord::new("p2", 12, 2),
        ];
        for policy in policies() {
            let input = sorted_for(policy.as_ref(), &records);
            let outcome = policy.run(&input).unwrap();
            assert_eq!(outcome.trace.events[0].time, 9, "{}", policy.name());
        }
    }

    #[test]
    fn test_all_policies_reject_invalid_workloads() {
        let records = vec![
            ProcessRecord::new("p1", 0, 5),
            ProcessRecord::new("p1", 1, 0),
        ];
        for policy in policies() {
            match policy.run(&records) {
                Err(SimulationError::InvalidProcess(errors)) => assert!(errors.len() >= 2),
                other => panic!("{} accepted invalid workload: {other:?}", policy.name()),
            }
        }
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let records = workload::synthetic_workload(99, 30, 0.4, 9);
        for policy in policies() {
            let input = sorted_for(policy.as_ref(), &records);
            let first = policy.run(&input.clone()).unwrap();
            let second = policy.run(&input).unwrap();
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap(),
                "{}",
                policy.name()
            );
        }
    }

    #[test]
    fn test_empty_workload_completes_immediately() {
        for policy in policies() {
            let outcome = policy.run(&[]).unwrap();
            assert_eq!(outcome.completed_count(), 0);
            assert!(outcome.trace.is_empty());
        }
    }

    #[test]
    fn test_error_display() {
        let invalid = SimulationError::InvalidProcess(vec![]);
        assert!(invalid.to_string().contains("invalid workload"));

        let internal = SimulationError::internal("RR", "queue underflow");
        let rendered = internal.to_string();
        assert!(rendered.contains("RR"));
        assert!(rendered.contains("queue underflow"));
    }

    #[test]
    fn test_simulation_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(SimulationError::internal("FCFS", "x"));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_admit_arrivals_respects_clock() {
        let mut pending = spawn_processes(&[
            ProcessRecord::new("p1", 0, 2),
            ProcessRecord::new("p2", 3, 2),
            ProcessRecord::new("p3", 8, 2),
        ]);
        let mut ready = VecDeque::new();

        admit_arrivals(&mut pending, &mut ready, 3);
        assert_eq!(ready.len(), 2);
        assert_eq!(pending.len(), 1);
        assert_eq!(ready[0].id(), "p1");
        assert_eq!(ready[1].id(), "p2");

        admit_arrivals(&mut pending, &mut ready, 10);
        assert_eq!(ready.len(), 3);
        assert!(pending.is_empty());
    }
}
