//! CPU scheduling policy simulator.
//!
//! Runs a workload of processes through four classic short-term
//! scheduling policies over one shared dispatch primitive, and reports
//! per-process waiting and turnaround times alongside a dispatch
//! trace. Every run owns its clock and its process state, so policies
//! never observe each other.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessRecord`, `Process`,
//!   `DispatchTrace`, `RunOutcome`
//! - **`dispatch`**: The slice and run-to-completion primitives every
//!   policy dispatches through
//! - **`policy`**: The four policies behind `SchedulingPolicy` (FCFS,
//!   RR, SRT, FB) plus per-run KPIs
//! - **`validation`**: Input integrity checks (duplicate ids, zero
//!   bursts)
//! - **`workload`**: Datafile parsing, per-policy admission orders,
//!   synthetic generation
//! - **`report`**: Fixed-width text rendering of traces, metrics
//!   tables, and the summary
//!
//! # Architecture
//!
//! `models` sits at the bottom with no crate-internal dependencies.
//! `dispatch` mutates a `Process` and a caller-owned clock; `policy`
//! drives it from four different queue disciplines. `workload` and
//! `report` form the input and output edges, and the binary wires the
//! edges together.
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles"
//! - Tanenbaum & Bos (2015), "Modern Operating Systems"
//! - Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces"

pub mod dispatch;
pub mod models;
pub mod policy;
pub mod report;
pub mod validation;
pub mod workload;
