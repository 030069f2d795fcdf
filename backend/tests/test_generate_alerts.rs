//! Tests for alert generation
//!
//! One aging record may emit zero, one, or two alerts (one per triggering
//! dimension); one projection emits at most one shortfall alert.

use risk_alert_core_rs::{
    generate_alerts, AgingRecord, AlertType, CashFlowProjection, Severity,
};

fn record(current: i64, d31: i64, d61: i64, d90: i64, limit: i64) -> AgingRecord {
    AgingRecord::new(
        "CUST-001".to_string(),
        "LOC-NORTH".to_string(),
        current,
        d31,
        d61,
        d90,
        limit,
    )
}

#[test]
fn test_record_crossing_both_triggers_emits_two_alerts() {
    // 30 (90+ bucket) + 40 (60% overdue) + 15 (at limit) = 85
    let alerts = generate_alerts(&[record(400_000, 0, 0, 600_000, 1_000_000)], &[]);
    assert_eq!(alerts.len(), 2);

    let high_risk = &alerts[0];
    assert_eq!(high_risk.alert_type, AlertType::ArHighRisk);
    assert_eq!(high_risk.severity, Severity::Critical);
    assert_eq!(high_risk.risk_score, 85);
    assert_eq!(high_risk.amount, 600_000); // overdue exposure
    assert_eq!(high_risk.location_id, "LOC-NORTH");
    assert_eq!(high_risk.id, "ar_high_risk-CUST-001");

    let credit = &alerts[1];
    assert_eq!(credit.alert_type, AlertType::ArCreditLimit);
    assert_eq!(credit.severity, Severity::Critical);
    assert_eq!(credit.risk_score, 85);
    assert_eq!(credit.amount, 1_000_000); // outstanding balance vs. limit
    assert_eq!(credit.id, "ar_credit_limit-CUST-001");
}

#[test]
fn test_credit_alert_fires_below_warning_severity() {
    // Utilization is the only contribution: score 10, severity info,
    // but the credit trigger fires on the contribution alone
    let alerts = generate_alerts(&[record(900_000, 0, 0, 0, 1_000_000)], &[]);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::ArCreditLimit);
    assert_eq!(alerts[0].severity, Severity::Info);
    assert_eq!(alerts[0].risk_score, 10);
}

#[test]
fn test_high_risk_alert_without_credit_trigger() {
    // 30 + 40 = 70, no credit limit set
    let alerts = generate_alerts(&[record(0, 0, 0, 250_000, 0)], &[]);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::ArHighRisk);
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert_eq!(alerts[0].risk_score, 70);
    assert_eq!(alerts[0].amount, 250_000);
}

#[test]
fn test_clean_record_emits_nothing() {
    let alerts = generate_alerts(&[record(1_000_000, 0, 0, 0, 2_000_000)], &[]);
    assert!(alerts.is_empty());
}

#[test]
fn test_warning_score_without_credit_trigger_emits_nothing() {
    // 10 + 30 = 40: warning territory, but neither alert trigger crossed
    let alerts = generate_alerts(&[record(700_000, 300_000, 0, 0, 0)], &[]);
    assert!(alerts.is_empty());
}

#[test]
fn test_action_items_attached_per_type() {
    let alerts = generate_alerts(&[record(0, 0, 0, 250_000, 0)], &[]);
    assert_eq!(
        alerts[0].action_items,
        vec![
            "Contact customer immediately for payment",
            "Review credit terms and consider payment plan",
            "Escalate to collections team",
            "Consider credit hold on future orders",
        ]
    );
}

#[test]
fn test_at_most_one_alert_per_projection() {
    let projections = vec![
        CashFlowProjection::new("2026-07".to_string(), "LOC-1".to_string(), 350_000, 500_000),
        CashFlowProjection::new("2026-08".to_string(), "LOC-1".to_string(), 600_000, 500_000),
    ];
    let alerts = generate_alerts(&[], &projections);
    assert_eq!(alerts.len(), 1);

    let alert = &alerts[0];
    assert_eq!(alert.alert_type, AlertType::CashFlowShortfall);
    assert_eq!(alert.severity, Severity::Warning);
    assert_eq!(alert.risk_score, 30);
    assert_eq!(alert.amount, 150_000);
    assert_eq!(alert.id, "cash_flow_shortfall-2026-07");
    assert_eq!(alert.title, "Projected cash shortfall in 2026-07");
    assert_eq!(alert.action_items[0], "Accelerate AR collections");
}

#[test]
fn test_generation_is_idempotent() {
    let records = vec![
        record(400_000, 0, 0, 600_000, 1_000_000),
        record(900_000, 0, 0, 0, 1_000_000),
    ];
    let projections = vec![CashFlowProjection::new(
        "2026-Q3".to_string(),
        "LOC-1".to_string(),
        200_000,
        500_000,
    )];

    let first = generate_alerts(&records, &projections);
    let second = generate_alerts(&records, &projections);
    assert_eq!(first, second);
}
