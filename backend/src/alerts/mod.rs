//! Alert generation pipeline
//!
//! The per-cycle pipeline over already-validated records:
//! generate -> sort -> filter -> summarize. Pure computation; each
//! invocation is independent and idempotent given identical inputs.

mod dismissals;
mod filter;
mod summary;

pub use dismissals::DismissalSet;
pub use filter::{filter_alerts, AlertFilter};
pub use summary::{summarize, AlertSummary};

use crate::models::aging::AgingRecord;
use crate::models::alert::{Alert, AlertType};
use crate::models::cash_flow::CashFlowProjection;
use crate::scoring::thresholds::SEVERITY_CRITICAL_FLOOR;
use crate::scoring::{
    classify_severity, classify_shortfall_severity, score_aging_record,
    score_cash_flow_shortfall,
};

/// Generate the full alert list for one refresh cycle.
///
/// An aging record can raise up to two alerts, one per triggering
/// dimension: `ar_high_risk` when its total score reaches the critical
/// floor, and `ar_credit_limit` when the credit-utilization contribution
/// alone reaches its alerting floor (even if the overall severity is
/// lower). A projection raises at most one `cash_flow_shortfall` alert.
///
/// Output order follows input order; callers apply [`sort_alerts`] for
/// presentation.
///
/// # Example
/// ```
/// use risk_alert_core_rs::{generate_alerts, AgingRecord, AlertType};
///
/// // 60% of the balance overdue past 90 days, balance at the credit limit:
/// // 30 + 40 + 15 = 85 points, which crosses both alert triggers.
/// let record = AgingRecord::new(
///     "CUST-001".to_string(),
///     "LOC-1".to_string(),
///     400_000,
///     0,
///     0,
///     600_000,
///     1_000_000,
/// );
/// let alerts = generate_alerts(&[record], &[]);
/// assert_eq!(alerts.len(), 2);
/// assert_eq!(alerts[0].alert_type, AlertType::ArHighRisk);
/// assert_eq!(alerts[1].alert_type, AlertType::ArCreditLimit);
/// ```
pub fn generate_alerts(
    aging_records: &[AgingRecord],
    projections: &[CashFlowProjection],
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for record in aging_records {
        let breakdown = score_aging_record(record);
        let score = breakdown.total();

        if score >= SEVERITY_CRITICAL_FLOOR {
            alerts.push(Alert::new(
                AlertType::ArHighRisk,
                classify_severity(score),
                score,
                format!("High-risk receivable: {}", record.customer_id),
                record.overdue_amount(),
                record.location_id.clone(),
                &record.customer_id,
            ));
        }

        if breakdown.triggers_credit_alert() {
            alerts.push(Alert::new(
                AlertType::ArCreditLimit,
                classify_severity(score),
                score,
                format!("Credit limit exposure: {}", record.customer_id),
                record.total_balance(),
                record.location_id.clone(),
                &record.customer_id,
            ));
        }
    }

    for projection in projections {
        if let Some(alert) = detect_cash_flow_shortfall(projection) {
            alerts.push(alert);
        }
    }

    alerts
}

/// Detect a cash-flow shortfall in one projection.
///
/// Returns `None` when the projection clears its minimum (or the minimum
/// is non-positive, making the ratio undefined). Shortfall alerts carry
/// the deficit itself as their exposure amount.
pub fn detect_cash_flow_shortfall(projection: &CashFlowProjection) -> Option<Alert> {
    let (score, shortfall) = score_cash_flow_shortfall(projection)?;
    Some(Alert::new(
        AlertType::CashFlowShortfall,
        classify_shortfall_severity(score),
        score,
        format!("Projected cash shortfall in {}", projection.period),
        shortfall,
        projection.location_id.clone(),
        &projection.period,
    ))
}

/// Sort alerts in place for presentation: severity rank ascending
/// (critical first), then risk score descending. The sort is stable, so
/// ties preserve input order.
pub fn sort_alerts(alerts: &mut [Alert]) {
    alerts.sort_by(|a, b| {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then(b.risk_score.cmp(&a.risk_score))
    });
}
