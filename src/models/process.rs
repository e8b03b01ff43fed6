//! Process model.
//!
//! A process is a CPU-bound job with a known arrival time and a known
//! total burst. The immutable input record and the live per-run entity
//! are separate types: every policy run deep-copies records into its own
//! `Process` collection, so runs never share mutable state.
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9.1

use serde::{Deserialize, Serialize};

/// Simulation time unit. The clock, arrivals, and bursts are all ticks.
pub type Ticks = u64;

/// An immutable process description from the input layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier (e.g. "p3").
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU time required. Must be positive.
    pub exec_time: Ticks,
}

impl ProcessRecord {
    /// Creates a new process record.
    pub fn new(id: impl Into<String>, arrival_time: Ticks, exec_time: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            exec_time,
        }
    }
}

/// A live process owned by exactly one policy run.
///
/// Embeds its input record and carries the mutable simulation state.
/// Timing fields are written only by the dispatch primitive; a process
/// is terminal once `remaining_exec_time` reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// The immutable input record this process was created from.
    pub record: ProcessRecord,
    /// CPU time still required. Starts equal to `record.exec_time`.
    pub remaining_exec_time: Ticks,
    /// Start of the most recent dispatch. `None` until first dispatched.
    pub start_time: Option<Ticks>,
    /// End of the most recent slice. `None` until first dispatched.
    pub finish_time: Option<Ticks>,
    /// Accumulated time spent eligible but not running.
    pub wait_time: Ticks,
    /// `finish_time - arrival_time` as of the most recent slice.
    pub turnaround_time: Ticks,
}

impl Process {
    /// Creates a fresh process from an input record.
    pub fn new(record: ProcessRecord) -> Self {
        let remaining = record.exec_time;
        Self {
            record,
            remaining_exec_time: remaining,
            start_time: None,
            finish_time: None,
            wait_time: 0,
            turnaround_time: 0,
        }
    }

    /// Process identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Tick at which this process becomes eligible.
    #[inline]
    pub fn arrival_time(&self) -> Ticks {
        self.record.arrival_time
    }

    /// Whether the process has consumed its entire burst.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_exec_time == 0
    }

    /// Whether the process has received at least one slice.
    #[inline]
    pub fn has_run(&self) -> bool {
        self.finish_time.is_some()
    }
}

/// Numeric component of a process id ("p12" becomes 12).
///
/// Ids without digits compare as 0. Used for display ordering and for
/// deterministic tie-breaks between processes.
pub fn id_numeric_value(id: &str) -> u64 {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
