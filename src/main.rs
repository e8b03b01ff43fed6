//! Command-line front end.
//!
//! Takes a workload datafile path as the only argument, runs the four
//! scheduling policies over it, and prints each policy's dispatch
//! trace and per-process metrics table followed by a cross-policy
//! summary of averages.
//!
//! Diagnostics go to stderr through the `log` facade; set
//! `U_CPUSCHED_LOG=debug` (or `trace`) to watch dispatch decisions.

use std::env;
use std::fs;
use std::process::ExitCode;

use log::{LevelFilter, Metadata, Record};

use u_cpusched::models::ProcessRecord;
use u_cpusched::policy::{
    Fcfs, MultilevelFeedback, PolicyKpi, RoundRobin, SchedulingPolicy, ShortestRemainingTime,
};
use u_cpusched::{report, validation, workload};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

fn init_logging() {
    let level = env::var("U_CPUSCHED_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

/// Applies the admission order each policy expects over the raw
/// records.
fn order_for(policy_name: &str, records: &mut [ProcessRecord]) {
    match policy_name {
        "SRT" => workload::sort_for_shortest_remaining(records),
        "FB (constant)" => workload::sort_for_feedback(records),
        _ => workload::sort_by_arrival(records),
    }
}

fn main() -> ExitCode {
    init_logging();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: u-cpusched <datafile>");
            return ExitCode::FAILURE;
        }
    };
    let input = match fs::read_to_string(&path) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    let records = match workload::parse_workload(&input) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(violations) = validation::validate_workload(&records) {
        for violation in &violations {
            eprintln!("invalid workload: {violation}");
        }
        return ExitCode::FAILURE;
    }

    let policies: Vec<Box<dyn SchedulingPolicy>> = vec![
        Box::new(Fcfs),
        Box::new(RoundRobin::default()),
        Box::new(ShortestRemainingTime),
        Box::new(MultilevelFeedback::default()),
    ];

    let mut kpis = Vec::with_capacity(policies.len());
    for policy in &policies {
        let mut ordered = records.clone();
        order_for(policy.name(), &mut ordered);
        let outcome = match policy.run(&ordered) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("{}: {err}", policy.name());
                return ExitCode::FAILURE;
            }
        };

        println!("{}:", policy.name());
        print!("{}", report::render_trace(&outcome));
        println!();
        print!("{}", report::render_metrics_table(&outcome));
        println!();
        kpis.push(PolicyKpi::calculate(&outcome));
    }
    print!("{}", report::render_summary(&kpis));

    ExitCode::SUCCESS
}
