//! Centralized scoring thresholds and point weights.
//!
//! Every cutoff used by the scorer and the alert generator lives here.
//! Changing a value affects BOTH record scoring (in `scoring`) and alert
//! generation (in `alerts`).

/// Points for an oldest overdue bucket past 90 days.
pub const POINTS_OVER_90: u8 = 30;

/// Points for an oldest overdue bucket of 61-90 days.
pub const POINTS_61_90: u8 = 20;

/// Points for an oldest overdue bucket of 31-60 days.
pub const POINTS_31_60: u8 = 10;

/// Overdue share of total balance at which the severe tier applies.
pub const OVERDUE_SHARE_SEVERE_PCT: f64 = 50.0;
pub const OVERDUE_SHARE_SEVERE_POINTS: u8 = 40;

/// Overdue share at which the high tier applies.
pub const OVERDUE_SHARE_HIGH_PCT: f64 = 30.0;
pub const OVERDUE_SHARE_HIGH_POINTS: u8 = 30;

/// Overdue share at which the elevated tier applies.
pub const OVERDUE_SHARE_ELEVATED_PCT: f64 = 15.0;
pub const OVERDUE_SHARE_ELEVATED_POINTS: u8 = 20;

/// Credit utilization (percent of limit) at which the balance has
/// materially exceeded the limit.
pub const UTILIZATION_OVER_LIMIT_PCT: f64 = 120.0;
pub const UTILIZATION_OVER_LIMIT_POINTS: u8 = 20;

/// Utilization at which the balance has reached the limit.
pub const UTILIZATION_AT_LIMIT_PCT: f64 = 100.0;
pub const UTILIZATION_AT_LIMIT_POINTS: u8 = 15;

/// Utilization at which the balance is approaching the limit.
pub const UTILIZATION_NEAR_LIMIT_PCT: f64 = 80.0;
pub const UTILIZATION_NEAR_LIMIT_POINTS: u8 = 10;

/// Maximum risk score; contribution sums are clamped here.
pub const MAX_RISK_SCORE: u8 = 100;

/// Shared severity table for point-sum scores: critical at or above 70,
/// warning at or above 40, info below.
pub const SEVERITY_CRITICAL_FLOOR: u8 = 70;
pub const SEVERITY_WARNING_FLOOR: u8 = 40;

/// Shortfall alerts classify on their own table: the score is a deficit
/// ratio rather than a weighted point sum, and turns critical once the
/// deficit reaches half the required minimum.
pub const SHORTFALL_CRITICAL_FLOOR: u8 = 50;

/// Credit-utilization contribution at or above which an `ar_credit_limit`
/// alert fires, independent of the record's overall severity.
pub const CREDIT_ALERT_CONTRIBUTION_FLOOR: u8 = 10;
