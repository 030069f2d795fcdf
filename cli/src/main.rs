//! Risk alert CLI driver
//!
//! Runs the full alert pipeline over a JSON scenario file and prints the
//! sorted alert list and summary as one JSON report.
//!
//! Usage: risk-alert-cli <scenario.json>

use std::process::ExitCode;

use risk_alert_core_rs::{
    filter_alerts, generate_alerts, sort_alerts, summarize, AlertFilter, Scenario,
};

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: risk-alert-cli <scenario.json>");
        return ExitCode::FAILURE;
    };

    match run(&path) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let scenario = Scenario::from_file(path)?;

    let alerts = generate_alerts(&scenario.aging_records, &scenario.cash_flow_projections);

    let filter = AlertFilter {
        dismissed_ids: Some(scenario.dismissed_ids.iter().cloned().collect()),
        ..AlertFilter::default()
    };
    let mut visible = filter_alerts(&alerts, &filter);
    sort_alerts(&mut visible);

    let summary = summarize(&visible);
    let report = serde_json::json!({
        "summary": summary,
        "alerts": visible,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}
