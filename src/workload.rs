//! Workload input: datafile parsing, policy pre-sorts, and synthetic
//! generation.
//!
//! # Datafile format
//!
//! A workload file is a sequence of records, each three labelled
//! lines, terminated by an `EOF` marker line. Unlabelled lines
//! (separators, banners) are ignored.
//!
//! ```text
//! Id: p1
//! Arrive: 0
//! ExecSize: 20
//! Id: p2
//! Arrive: 16
//! ExecSize: 4
//! EOF
//! ```
//!
//! Parsing is structural only. Semantic checks (duplicate ids, zero
//! execution sizes) belong to [`crate::validation`].

use std::error::Error;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{id_numeric_value, ProcessRecord, Ticks};

/// A structural error in a workload datafile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadParseError {
    /// 1-based line number the error was detected on.
    pub line: usize,
    /// Human-readable description.
    pub message: String,
}

impl WorkloadParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for WorkloadParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl Error for WorkloadParseError {}

/// Parses a workload datafile into process records.
///
/// Stops at the first `EOF` marker line. Field lines may appear in any
/// amount of surrounding filler; within a record the order is `Id`,
/// `Arrive`, `ExecSize`.
pub fn parse_workload(input: &str) -> Result<Vec<ProcessRecord>, WorkloadParseError> {
    let mut records = Vec::new();
    let mut pending_id: Option<String> = None;
    let mut pending_arrival: Option<Ticks> = None;
    let mut last_line = 0;

    for (index, raw) in input.lines().enumerate() {
        let number = index + 1;
        last_line = number;
        let line = raw.trim();
        if line == "EOF" {
            break;
        }
        if let Some(rest) = line.strip_prefix("Id:") {
            if let Some(open) = pending_id.take() {
                return Err(WorkloadParseError::new(
                    number,
                    format!("record '{open}' is incomplete, new Id started"),
                ));
            }
            pending_arrival = None;
            pending_id = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("Arrive:") {
            if pending_id.is_none() {
                return Err(WorkloadParseError::new(number, "Arrive before Id"));
            }
            pending_arrival = Some(parse_ticks(rest, number)?);
        } else if let Some(rest) = line.strip_prefix("ExecSize:") {
            let id = match pending_id.take() {
                Some(id) => id,
                None => return Err(WorkloadParseError::new(number, "ExecSize before Id")),
            };
            let arrival = match pending_arrival.take() {
                Some(arrival) => arrival,
                None => {
                    return Err(WorkloadParseError::new(
                        number,
                        format!("ExecSize before Arrive for '{id}'"),
                    ))
                }
            };
            let exec = parse_ticks(rest, number)?;
            records.push(ProcessRecord::new(id, arrival, exec));
        }
        // Any other line is filler.
    }

    if let Some(open) = pending_id {
        return Err(WorkloadParseError::new(
            last_line,
            format!("record '{open}' is incomplete at end of input"),
        ));
    }
    Ok(records)
}

fn parse_ticks(field: &str, line: usize) -> Result<Ticks, WorkloadParseError> {
    let text = field.trim();
    text.parse::<Ticks>().map_err(|_| {
        WorkloadParseError::new(line, format!("'{text}' is not a non-negative integer"))
    })
}

/// Sorts records by arrival time, preserving input order on ties.
///
/// Admission order for FCFS and round robin.
pub fn sort_by_arrival(records: &mut [ProcessRecord]) {
    records.sort_by_key(|record| record.arrival_time);
}

/// Sorts records by arrival time, breaking ties by execution size.
///
/// Admission order for shortest remaining time.
pub fn sort_for_shortest_remaining(records: &mut [ProcessRecord]) {
    records.sort_by_key(|record| (record.arrival_time, record.exec_time));
}

/// Sorts records by arrival time, breaking ties by the numeric value
/// of the id.
///
/// Admission order for multilevel feedback. Implemented as two stable
/// sorts so equal-arrival records end up in numeric id order.
pub fn sort_for_feedback(records: &mut [ProcessRecord]) {
    records.sort_by_key(|record| id_numeric_value(&record.id));
    records.sort_by_key(|record| record.arrival_time);
}

/// Generates a reproducible random workload.
///
/// Walks the clock from 0 to `horizon`; each tick spawns a process
/// with probability `p_arrival` and an execution size drawn uniformly
/// from `1..=max_exec`. Ids are `p1`, `p2`, .. in arrival order, so
/// arrivals come out ascending.
///
/// # Panics
/// Panics if `max_exec` is zero.
pub fn synthetic_workload(
    seed: u64,
    horizon: Ticks,
    p_arrival: f64,
    max_exec: Ticks,
) -> Vec<ProcessRecord> {
    assert!(max_exec > 0, "max_exec must be positive");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::new();
    for tick in 0..horizon {
        if rng.random::<f64>() < p_arrival {
            let exec = rng.random_range(1..=max_exec);
            let id = format!("p{}", records.len() + 1);
            records.push(ProcessRecord::new(id, tick, exec));
        }
    }
    records
}
