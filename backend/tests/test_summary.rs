//! Tests for alert summarization
//!
//! CRITICAL: All money values are i64 (cents)

use risk_alert_core_rs::{summarize, Alert, AlertType, Severity};

fn alert(severity: Severity, risk_score: u8, amount: i64) -> Alert {
    Alert {
        id: format!("test-{severity:?}-{risk_score}"),
        alert_type: AlertType::ArHighRisk,
        severity,
        risk_score,
        title: "Test alert".to_string(),
        amount,
        location_id: "LOC-1".to_string(),
        action_items: Vec::new(),
    }
}

#[test]
fn test_total_risk_amount() {
    let alerts = vec![
        alert(Severity::Critical, 85, 125_000),
        alert(Severity::Warning, 55, 75_000),
        alert(Severity::Info, 25, 50_000),
    ];
    let summary = summarize(&alerts);
    assert_eq!(summary.total_risk_amount, 250_000);
}

#[test]
fn test_average_risk_score() {
    let alerts = vec![
        alert(Severity::Critical, 85, 0),
        alert(Severity::Warning, 65, 0),
        alert(Severity::Critical, 75, 0),
    ];
    let summary = summarize(&alerts);
    assert_eq!(summary.average_risk_score, 75.0);
}

#[test]
fn test_severity_counts() {
    let alerts = vec![
        alert(Severity::Critical, 85, 0),
        alert(Severity::Critical, 75, 0),
        alert(Severity::Warning, 55, 0),
        alert(Severity::Info, 25, 0),
    ];
    let summary = summarize(&alerts);
    assert_eq!(summary.critical_count, 2);
    assert_eq!(summary.warning_count, 1);
}

#[test]
fn test_empty_summary_is_all_zero() {
    let summary = summarize(&[]);
    assert_eq!(summary.critical_count, 0);
    assert_eq!(summary.warning_count, 0);
    assert_eq!(summary.total_risk_amount, 0);
    assert_eq!(summary.average_risk_score, 0.0);
}
