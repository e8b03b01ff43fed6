//! Run outcome (solution) model.
//!
//! A run outcome is the complete result of driving one workload through
//! one policy: the terminal per-process metrics plus the dispatch trace.
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9.2

use serde::{Deserialize, Serialize};

use super::{DispatchTrace, Process, Ticks};

/// Terminal snapshot of a finished process.
///
/// Produced exactly when `remaining_exec_time` reaches zero; the input
/// fields are denormalized alongside the computed metrics for query and
/// display convenience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process identifier.
    pub id: String,
    /// Tick at which the process entered the system.
    pub arrival_time: Ticks,
    /// Total CPU time the process consumed.
    pub exec_time: Ticks,
    /// Total time spent eligible but not running.
    pub wait_time: Ticks,
    /// Time from arrival to completion.
    pub turnaround_time: Ticks,
    /// Tick at which the final slice ended.
    pub finish_time: Ticks,
}

impl From<&Process> for CompletedProcess {
    /// Snapshots a process after its final dispatch. Callers convert
    /// only once `remaining_exec_time` has reached zero, at which point
    /// both timing fields are populated.
    fn from(process: &Process) -> Self {
        Self {
            id: process.record.id.clone(),
            arrival_time: process.record.arrival_time,
            exec_time: process.record.exec_time,
            wait_time: process.wait_time,
            turnaround_time: process.turnaround_time,
            finish_time: process.finish_time.unwrap_or(0),
        }
    }
}

/// The complete result of one policy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Name of the policy that produced this outcome.
    pub policy: String,
    /// Finished processes in completion order.
    pub completed: Vec<CompletedProcess>,
    /// Dispatch events in clock order.
    pub trace: DispatchTrace,
}

impl RunOutcome {
    /// Creates an empty outcome for the named policy.
    pub fn new(policy: impl Into<String>) -> Self {
        Self {
            policy: policy.into(),
            completed: Vec::new(),
            trace: DispatchTrace::new(),
        }
    }

    /// Appends a finished process.
    pub fn add_completed(&mut self, process: CompletedProcess) {
        self.completed.push(process);
    }

    /// Number of finished processes.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Finds the metrics for a given process id.
    pub fn metrics_for(&self, id: &str) -> Option<&CompletedProcess> {
        self.completed.iter().find(|p| p.id == id)
    }

    /// Latest finish time across all completed processes.
    pub fn makespan(&self) -> Ticks {
        self.completed.iter().map(|p| p.finish_time).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessRecord;

    fn make_completed(id: &str, wait: Ticks, turnaround: Ticks, finish: Ticks) -> CompletedProcess {
        CompletedProcess {
            id: id.to_string(),
            arrival_time: finish - turnaround,
            exec_time: turnaround - wait,
            wait_time: wait,
            turnaround_time: turnaround,
            finish_time: finish,
        }
    }

    fn sample_outcome() -> RunOutcome {
        let mut outcome = RunOutcome::new("RR");
        outcome.add_completed(make_completed("p2", 3, 6, 7));
        outcome.add_completed(make_completed("p3", 5, 6, 8));
        outcome.add_completed(make_completed("p1", 4, 9, 9));
        outcome
    }

    #[test]
    fn test_completed_count() {
        assert_eq!(sample_outcome().completed_count(), 3);
    }

    #[test]
    fn test_metrics_for() {
        let outcome = sample_outcome();
        let p1 = outcome.metrics_for("p1").unwrap();
        assert_eq!(p1.wait_time, 4);
        assert_eq!(p1.turnaround_time, 9);
        assert!(outcome.metrics_for("p99").is_none());
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample_outcome().makespan(), 9);
        assert_eq!(RunOutcome::new("FCFS").makespan(), 0);
    }

    #[test]
    fn test_from_process() {
        let mut process = Process::new(ProcessRecord::new("p1", 2, 5));
        process.remaining_exec_time = 0;
        process.start_time = Some(6);
        process.finish_time = Some(11);
        process.wait_time = 4;
        process.turnaround_time = 9;

        let done = CompletedProcess::from(&process);
        assert_eq!(done.id, "p1");
        assert_eq!(done.arrival_time, 2);
        assert_eq!(done.exec_time, 5);
        assert_eq!(done.wait_time, 4);
        assert_eq!(done.turnaround_time, 9);
        assert_eq!(done.finish_time, 11);
    }
}
