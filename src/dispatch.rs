//! Dispatch primitive shared by all scheduling policies.
//!
//! Two dispatch modes over a caller-owned clock: a non-preemptive run to
//! completion (first-come-first-served) and a preemptive bounded slice
//! (round robin, shortest remaining time, multilevel feedback). Both
//! update the process's start, finish, wait, and turnaround bookkeeping
//! as the clock advances.
//!
//! Wait time under preemption accumulates across partial executions:
//! each dispatch after the first adds the idle gap between the end of
//! the previous slice and the start of the current one. At completion,
//! `wait_time + exec_time == turnaround_time` holds for every process
//! under every policy.
//!
//! # Algorithm
//!
//! Preemptive dispatch grants `min(quantum, remaining)` ticks:
//! 1. `start = clock`, then `clock += slice` and `remaining -= slice`.
//! 2. First dispatch: `wait = start - arrival`.
//!    Later dispatches: `wait += start - previous_finish`.
//! 3. `finish = clock`; `turnaround = finish - arrival`.
//!
//! Callers advance the clock to at least the process's arrival time
//! before dispatching, so the wait arithmetic never underflows.
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9.2

use log::trace;

use crate::models::{Process, Ticks};

/// Quantum for the round robin and feedback policies.
pub const DEFAULT_QUANTUM: Ticks = 4;

/// Slice length for the shortest-remaining-time policy.
pub const UNIT_SLICE: Ticks = 1;

/// Runs a process to completion without preemption.
///
/// The process is considered fully run in one call: the clock advances
/// by the entire remaining burst and `remaining_exec_time` drops to
/// zero. Wait time is the single gap between arrival and this dispatch.
pub fn run_to_completion(process: &mut Process, clock: &mut Ticks) {
    let start = *clock;
    process.start_time = Some(start);
    process.wait_time = start - process.record.arrival_time;
    process.turnaround_time = process.wait_time + process.record.exec_time;
    *clock += process.remaining_exec_time;
    process.remaining_exec_time = 0;
    process.finish_time = Some(*clock);
    trace!(
        "ran {} to completion over T{}..T{}",
        process.id(),
        start,
        *clock
    );
}

/// Grants a process one bounded slice and returns the slice length.
///
/// The slice is `min(quantum, remaining_exec_time)`, so remaining time
/// never goes negative and the final slice of a process may be short.
pub fn run_slice(process: &mut Process, clock: &mut Ticks, quantum: Ticks) -> Ticks {
    let start = *clock;
    process.start_time = Some(start);
    let slice = quantum.min(process.remaining_exec_time);
    *clock += slice;
    process.remaining_exec_time -= slice;

    match process.finish_time {
        // Resumption: accumulate the idle gap since the last slice ended.
        Some(previous_finish) => process.wait_time += start - previous_finish,
        None => process.wait_time = start - process.record.arrival_time,
    }
    process.finish_time = Some(*clock);
    process.turnaround_time = *clock - process.record.arrival_time;

    trace!(
        "granted {} a {}-tick slice at T{} ({} remaining)",
        process.id(),
        slice,
        start,
        process.remaining_exec_time
    );
    slice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessRecord;

    fn make_process(id: &str, arrival: Ticks, exec: Ticks) -> Process {
        Process::new(ProcessRecord::new(id, arrival, exec))
    }

    #[test]
    fn test_run_to_completion_no_wait() {
        let mut process = make_process("p1", 2, 5);
        let mut clock: Ticks = 2;
        run_to_completion(&mut process, &mut clock);

        assert_eq!(clock, 7);
        assert_eq!(process.start_time, Some(2));
        assert_eq!(process.finish_time, Some(7));
        assert_eq!(process.wait_time, 0);
        assert_eq!(process.turnaround_time, 5);
        assert!(process.is_complete());
    }

    #[test]
    fn test_run_to_completion_after_waiting() {
        let mut process = make_process("p1", 2, 5);
        let mut clock: Ticks = 10;
        run_to_completion(&mut process, &mut clock);

        assert_eq!(clock, 15);
        assert_eq!(process.wait_time, 8);
        assert_eq!(process.turnaround_time, 13);
        assert_eq!(process.finish_time, Some(15));
    }

    #[test]
    fn test_run_slice_first_dispatch() {
        let mut process = make_process("p1", 0, 10);
        let mut clock: Ticks = 0;
        let slice = run_slice(&mut process, &mut clock, 4);

        assert_eq!(slice, 4);
        assert_eq!(clock, 4);
        assert_eq!(process.remaining_exec_time, 6);
        assert_eq!(process.wait_time, 0);
        assert_eq!(process.finish_time, Some(4));
        assert_eq!(process.turnaround_time, 4);
        assert!(!process.is_complete());
    }

    #[test]
    fn test_run_slice_accumulates_idle_gaps() {
        let mut process = make_process("p1", 0, 10);
        let mut clock: Ticks = 0;
        run_slice(&mut process, &mut clock, 4);

        // Another process runs for 5 ticks.
        clock = 9;
        run_slice(&mut process, &mut clock, 4);
        assert_eq!(process.wait_time, 5);
        assert_eq!(process.finish_time, Some(13));
        assert_eq!(process.remaining_exec_time, 2);

        // Final slice is shorter than the quantum.
        clock = 13;
        let slice = run_slice(&mut process, &mut clock, 4);
        assert_eq!(slice, 2);
        assert_eq!(clock, 15);
        assert!(process.is_complete());
        assert_eq!(process.wait_time, 5);
        assert_eq!(process.turnaround_time, 15);
        assert_eq!(
            process.wait_time + process.record.exec_time,
            process.turnaround_time
        );
    }

    #[test]
    fn test_run_slice_delayed_first_dispatch() {
        let mut process = make_process("p1", 3, 2);
        let mut clock: Ticks = 8;
        run_slice(&mut process, &mut clock, 4);

        assert_eq!(process.wait_time, 5);
        assert_eq!(process.turnaround_time, 7);
        assert!(process.is_complete());
    }

    #[test]
    fn test_unit_slice() {
        let mut process = make_process("p1", 0, 3);
        let mut clock: Ticks = 0;
        let slice = run_slice(&mut process, &mut clock, UNIT_SLICE);

        assert_eq!(slice, 1);
        assert_eq!(clock, 1);
        assert_eq!(process.remaining_exec_time, 2);
    }
}
