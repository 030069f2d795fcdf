//! Cash-flow projection model
//!
//! One period's projected closing cash against the minimum operating
//! threshold for a location. Immutable input from the external data layer.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

/// Projected cash position for one period.
///
/// # Example
/// ```
/// use risk_alert_core_rs::CashFlowProjection;
///
/// let projection = CashFlowProjection::new(
///     "2026-Q3".to_string(),
///     "LOC-NORTH".to_string(),
///     350_000,
///     500_000,
/// );
/// assert_eq!(projection.shortfall(), 150_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowProjection {
    /// Period identifier (e.g. "2026-Q3", "2026-08")
    pub period: String,

    /// Location the projection covers
    pub location_id: String,

    /// Projected closing cash for the period (i64 cents, may be negative)
    pub projected_closing_cash: i64,

    /// Minimum operating cash required (i64 cents)
    pub minimum_cash_required: i64,
}

impl CashFlowProjection {
    /// Create a cash-flow projection.
    pub fn new(
        period: String,
        location_id: String,
        projected_closing_cash: i64,
        minimum_cash_required: i64,
    ) -> Self {
        Self {
            period,
            location_id,
            projected_closing_cash,
            minimum_cash_required,
        }
    }

    /// Projected deficit against the minimum operating threshold.
    ///
    /// Zero when the projection clears the minimum. Negative projected
    /// cash is valid input and simply deepens the deficit.
    pub fn shortfall(&self) -> i64 {
        (self.minimum_cash_required - self.projected_closing_cash).max(0)
    }
}
