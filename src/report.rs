//! Plain-text report rendering.
//!
//! Three fixed-width blocks per run: the dispatch trace (one `T{t}:
//! {id}` line per event), a per-process metrics table ordered by the
//! numeric value of the id, and a cross-policy summary of averages.

use crate::models::{id_numeric_value, CompletedProcess, RunOutcome};
use crate::policy::PolicyKpi;

/// Renders the dispatch trace, one event per line.
pub fn render_trace(outcome: &RunOutcome) -> String {
    let mut out = String::new();
    for event in &outcome.trace.events {
        out.push_str(&format!("{event}\n"));
    }
    out
}

/// Renders the per-process metrics table.
///
/// Rows are ordered by the numeric value of the process id, so `p2`
/// precedes `p10`.
pub fn render_metrics_table(outcome: &RunOutcome) -> String {
    let mut rows: Vec<&CompletedProcess> = outcome.completed.iter().collect();
    rows.sort_by(|a, b| {
        id_numeric_value(&a.id)
            .cmp(&id_numeric_value(&b.id))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut out = format!(
        "{:<10}{:<15}{:<20}\n",
        "Process", "Waiting Time", "Turnaround Time"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<10}{:<15}{:<20}\n",
            row.id, row.wait_time, row.turnaround_time
        ));
    }
    out
}

/// Renders the cross-policy summary table, one row per KPI in the
/// order given.
pub fn render_summary(kpis: &[PolicyKpi]) -> String {
    let mut out = String::from("Summary\n");
    out.push_str(&format!(
        "{:<15}{:<25}{:<10}\n",
        "", "Average Waiting Time", "Average Turnaround Time"
    ));
    for kpi in kpis {
        out.push_str(&format!(
            "{:<15}{:<25.2}{:<10.2}\n",
            kpi.policy, kpi.average_wait_time, kpi.average_turnaround_time
        ));
    }
    out
}
