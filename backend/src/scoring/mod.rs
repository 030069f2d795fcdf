//! Risk scoring and severity classification
//!
//! Point accumulation over AR aging records and ratio scoring for
//! cash-flow shortfalls. All cutoffs live in [`thresholds`] so the scorer
//! and the alert generator read from one table.
//!
//! # Critical Invariants
//!
//! 1. Every score is clamped to [0, 100]
//! 2. Severity is a deterministic function of the score
//! 3. Zero divisors (credit limit, total balance, minimum cash) contribute
//!    zero rather than propagating NaN/Infinity

pub mod thresholds;

use crate::models::aging::{AgingBucket, AgingRecord};
use crate::models::alert::Severity;
use crate::models::cash_flow::CashFlowProjection;
use thresholds::{
    CREDIT_ALERT_CONTRIBUTION_FLOOR, MAX_RISK_SCORE, OVERDUE_SHARE_ELEVATED_PCT,
    OVERDUE_SHARE_ELEVATED_POINTS, OVERDUE_SHARE_HIGH_PCT, OVERDUE_SHARE_HIGH_POINTS,
    OVERDUE_SHARE_SEVERE_PCT, OVERDUE_SHARE_SEVERE_POINTS, POINTS_31_60, POINTS_61_90,
    POINTS_OVER_90, SEVERITY_CRITICAL_FLOOR, SEVERITY_WARNING_FLOOR, SHORTFALL_CRITICAL_FLOOR,
    UTILIZATION_AT_LIMIT_PCT, UTILIZATION_AT_LIMIT_POINTS, UTILIZATION_NEAR_LIMIT_PCT,
    UTILIZATION_NEAR_LIMIT_POINTS, UTILIZATION_OVER_LIMIT_PCT, UTILIZATION_OVER_LIMIT_POINTS,
};

/// Per-dimension score contributions for one aging record.
///
/// The parts are kept separate (not just summed) because alert generation
/// triggers on the credit-utilization contribution independently of the
/// total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Points from the oldest non-zero overdue bucket
    pub days_overdue: u8,

    /// Points from the overdue share of the total balance
    pub overdue_share: u8,

    /// Points from credit-limit utilization
    pub credit_utilization: u8,
}

impl ScoreBreakdown {
    /// Total risk score: contribution sum, clamped to 100.
    pub fn total(&self) -> u8 {
        let sum =
            self.days_overdue as u16 + self.overdue_share as u16 + self.credit_utilization as u16;
        sum.min(MAX_RISK_SCORE as u16) as u8
    }

    /// Whether the credit-utilization contribution alone crosses the
    /// `ar_credit_limit` alerting floor.
    pub fn triggers_credit_alert(&self) -> bool {
        self.credit_utilization >= CREDIT_ALERT_CONTRIBUTION_FLOOR
    }
}

/// Score one aging record.
///
/// Three independent contributions, each capped by its own tier table,
/// summed and clamped to 100:
/// - oldest non-zero overdue bucket (90+ first)
/// - overdue share of the total balance
/// - credit-limit utilization
///
/// # Example
/// ```
/// use risk_alert_core_rs::{score_aging_record, AgingRecord};
///
/// // Everything overdue past 90 days, no credit limit set
/// let record = AgingRecord::new(
///     "CUST-001".to_string(),
///     "LOC-1".to_string(),
///     0,
///     0,
///     0,
///     250_000,
///     0,
/// );
/// let breakdown = score_aging_record(&record);
/// assert_eq!(breakdown.days_overdue, 30);
/// assert_eq!(breakdown.overdue_share, 40); // 100% of the balance is overdue
/// assert_eq!(breakdown.credit_utilization, 0); // zero-limit guard
/// assert_eq!(breakdown.total(), 70);
/// ```
pub fn score_aging_record(record: &AgingRecord) -> ScoreBreakdown {
    let days_overdue = match record.oldest_overdue_bucket() {
        Some(AgingBucket::Over90) => POINTS_OVER_90,
        Some(AgingBucket::Days61To90) => POINTS_61_90,
        Some(AgingBucket::Days31To60) => POINTS_31_60,
        _ => 0,
    };

    let overdue_pct = record.overdue_percent();
    let overdue_share = if overdue_pct >= OVERDUE_SHARE_SEVERE_PCT {
        OVERDUE_SHARE_SEVERE_POINTS
    } else if overdue_pct >= OVERDUE_SHARE_HIGH_PCT {
        OVERDUE_SHARE_HIGH_POINTS
    } else if overdue_pct >= OVERDUE_SHARE_ELEVATED_PCT {
        OVERDUE_SHARE_ELEVATED_POINTS
    } else {
        0
    };

    // A zero or missing credit limit yields 0.0 from the accessor, which
    // lands below every tier.
    let utilization_pct = record.credit_utilization_percent();
    let credit_utilization = if utilization_pct >= UTILIZATION_OVER_LIMIT_PCT {
        UTILIZATION_OVER_LIMIT_POINTS
    } else if utilization_pct >= UTILIZATION_AT_LIMIT_PCT {
        UTILIZATION_AT_LIMIT_POINTS
    } else if utilization_pct >= UTILIZATION_NEAR_LIMIT_PCT {
        UTILIZATION_NEAR_LIMIT_POINTS
    } else {
        0
    };

    ScoreBreakdown {
        days_overdue,
        overdue_share,
        credit_utilization,
    }
}

/// Classify a point-sum risk score into a severity tier.
///
/// # Example
/// ```
/// use risk_alert_core_rs::{classify_severity, Severity};
///
/// assert_eq!(classify_severity(85), Severity::Critical);
/// assert_eq!(classify_severity(55), Severity::Warning);
/// assert_eq!(classify_severity(25), Severity::Info);
/// ```
pub fn classify_severity(score: u8) -> Severity {
    if score >= SEVERITY_CRITICAL_FLOOR {
        Severity::Critical
    } else if score >= SEVERITY_WARNING_FLOOR {
        Severity::Warning
    } else {
        Severity::Info
    }
}

/// Score a projected cash-flow shortfall.
///
/// Returns `(risk_score, shortfall)` when the projection falls below the
/// required minimum, `None` otherwise. The score is the shortfall as a
/// share of the minimum: `round(shortfall / minimum * 100)`, clamped to
/// 100. A non-positive minimum makes the ratio undefined, so no score is
/// produced (zero-divisor guard).
pub fn score_cash_flow_shortfall(projection: &CashFlowProjection) -> Option<(u8, i64)> {
    if projection.minimum_cash_required <= 0 {
        return None;
    }

    let shortfall = projection.shortfall();
    if shortfall == 0 {
        return None;
    }

    let ratio = shortfall as f64 / projection.minimum_cash_required as f64;
    let score = (ratio * 100.0).round().min(MAX_RISK_SCORE as f64) as u8;
    Some((score, shortfall))
}

/// Classify a shortfall score into a severity tier.
///
/// Shortfall scores never classify as info: any detected deficit is at
/// least a warning, and turns critical at [`SHORTFALL_CRITICAL_FLOOR`].
pub fn classify_shortfall_severity(score: u8) -> Severity {
    if score >= SHORTFALL_CRITICAL_FLOOR {
        Severity::Critical
    } else {
        Severity::Warning
    }
}
