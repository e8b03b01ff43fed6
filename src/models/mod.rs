//! Scheduling domain models.
//!
//! Core data types for simulating short-term CPU scheduling: the
//! immutable input record, the live per-run process entity, the dispatch
//! trace, and the run outcome with terminal per-process metrics.
//!
//! Input records flow in from the parsing layer, each policy run owns an
//! independent deep copy of the live entities, and outcomes flow out to
//! the reporting layer.

mod outcome;
mod process;
mod trace;

pub use outcome::{CompletedProcess, RunOutcome};
pub use process::{id_numeric_value, Process, ProcessRecord, Ticks};
pub use trace::{DispatchEvent, DispatchTrace};
