//! Dispatch trace.
//!
//! An ordered record of `(time, process_id)` dispatch events suitable
//! for display. Consecutive dispatches of the same process collapse
//! into the entry for the first slice, so a process that runs several
//! quanta back to back appears once.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Ticks;

/// A single dispatch event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchEvent {
    /// Clock value at dispatch.
    pub time: Ticks,
    /// Id of the dispatched process.
    pub process_id: String,
}

impl fmt::Display for DispatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}: {}", self.time, self.process_id)
    }
}

/// Ordered dispatch events with duplicate suppression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchTrace {
    /// Recorded events, oldest first.
    pub events: Vec<DispatchEvent>,
}

impl DispatchTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a dispatch event unless it duplicates recent history.
    ///
    /// Two cases are suppressed, both by value comparison on id and
    /// clock rather than any object identity:
    /// - the most recent entry names the same process (back-to-back
    ///   slices of one process collapse into the first entry);
    /// - either of the two most recent entries is the identical
    ///   `(time, process_id)` pair.
    pub fn record(&mut self, time: Ticks, process_id: &str) {
        if let Some(last) = self.events.last() {
            if last.process_id == process_id {
                return;
            }
        }
        let repeated = self
            .events
            .iter()
            .rev()
            .take(2)
            .any(|event| event.time == time && event.process_id == process_id);
        if repeated {
            return;
        }
        self.events.push(DispatchEvent {
            time,
            process_id: process_id.to_string(),
        });
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the trace has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
