//! Accounts-receivable aging model
//!
//! Represents one customer's outstanding receivables bucketed by days
//! since invoice, plus the credit limit extended to that customer.
//! Records are immutable inputs sourced from the external data layer;
//! the engine only reads them.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

/// Aging bucket, by days since invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingBucket {
    /// 0-30 days, not yet overdue
    Current,
    /// 31-60 days overdue
    Days31To60,
    /// 61-90 days overdue
    Days61To90,
    /// More than 90 days overdue
    Over90,
}

/// One customer's AR aging entry.
///
/// # Example
/// ```
/// use risk_alert_core_rs::AgingRecord;
///
/// let record = AgingRecord::new(
///     "CUST-001".to_string(),
///     "LOC-NORTH".to_string(),
///     500_000, // $5,000.00 aged 0-30 days
///     200_000, // 31-60 days
///     100_000, // 61-90 days
///     0,       // over 90 days
///     1_000_000,
/// );
/// assert_eq!(record.total_balance(), 800_000);
/// assert_eq!(record.overdue_amount(), 300_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgingRecord {
    /// Customer identifier
    pub customer_id: String,

    /// Location the receivable is booked under
    pub location_id: String,

    /// Balance aged 0-30 days (i64 cents)
    pub current: i64,

    /// Balance aged 31-60 days (i64 cents)
    pub days_31_60: i64,

    /// Balance aged 61-90 days (i64 cents)
    pub days_61_90: i64,

    /// Balance aged over 90 days (i64 cents)
    pub days_over_90: i64,

    /// Credit limit extended to this customer (i64 cents)
    ///
    /// Zero means no limit has been set; utilization then contributes
    /// nothing to the risk score.
    pub credit_limit: i64,
}

impl AgingRecord {
    /// Create an aging record.
    ///
    /// # Arguments
    /// * `customer_id` - Customer identifier
    /// * `location_id` - Location the receivable is booked under
    /// * `current` - Balance aged 0-30 days (cents)
    /// * `days_31_60` - Balance aged 31-60 days (cents)
    /// * `days_61_90` - Balance aged 61-90 days (cents)
    /// * `days_over_90` - Balance aged over 90 days (cents)
    /// * `credit_limit` - Credit limit (cents, 0 = no limit set)
    pub fn new(
        customer_id: String,
        location_id: String,
        current: i64,
        days_31_60: i64,
        days_61_90: i64,
        days_over_90: i64,
        credit_limit: i64,
    ) -> Self {
        Self {
            customer_id,
            location_id,
            current,
            days_31_60,
            days_61_90,
            days_over_90,
            credit_limit,
        }
    }

    /// Total outstanding balance across all buckets.
    pub fn total_balance(&self) -> i64 {
        self.current + self.days_31_60 + self.days_61_90 + self.days_over_90
    }

    /// Amount overdue: every bucket past 0-30 days.
    pub fn overdue_amount(&self) -> i64 {
        self.days_31_60 + self.days_61_90 + self.days_over_90
    }

    /// Overdue share of the total balance, as a percentage.
    ///
    /// Returns 0.0 when there is no positive balance (zero-divisor guard).
    pub fn overdue_percent(&self) -> f64 {
        let total = self.total_balance();
        if total <= 0 {
            return 0.0;
        }
        self.overdue_amount() as f64 / total as f64 * 100.0
    }

    /// Credit-limit utilization as a percentage of the limit.
    ///
    /// Returns 0.0 when no positive credit limit is set (zero-divisor
    /// guard), so a missing limit never poisons the score with
    /// NaN/Infinity.
    ///
    /// # Example
    /// ```
    /// use risk_alert_core_rs::AgingRecord;
    ///
    /// let record = AgingRecord::new(
    ///     "CUST-001".to_string(),
    ///     "LOC-1".to_string(),
    ///     1_200_000,
    ///     0,
    ///     0,
    ///     0,
    ///     1_000_000,
    /// );
    /// assert!((record.credit_utilization_percent() - 120.0).abs() < 1e-9);
    /// ```
    pub fn credit_utilization_percent(&self) -> f64 {
        if self.credit_limit <= 0 {
            return 0.0;
        }
        self.total_balance() as f64 / self.credit_limit as f64 * 100.0
    }

    /// Oldest bucket holding a positive overdue balance (90+ first).
    ///
    /// `None` when nothing is overdue.
    pub fn oldest_overdue_bucket(&self) -> Option<AgingBucket> {
        if self.days_over_90 > 0 {
            Some(AgingBucket::Over90)
        } else if self.days_61_90 > 0 {
            Some(AgingBucket::Days61To90)
        } else if self.days_31_60 > 0 {
            Some(AgingBucket::Days31To60)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(current: i64, d31: i64, d61: i64, d90: i64, limit: i64) -> AgingRecord {
        AgingRecord::new(
            "CUST-001".to_string(),
            "LOC-1".to_string(),
            current,
            d31,
            d61,
            d90,
            limit,
        )
    }

    #[test]
    fn test_balance_accessors() {
        let r = record(500_000, 200_000, 100_000, 50_000, 1_000_000);
        assert_eq!(r.total_balance(), 850_000);
        assert_eq!(r.overdue_amount(), 350_000);
    }

    #[test]
    fn test_overdue_percent_zero_balance() {
        let r = record(0, 0, 0, 0, 1_000_000);
        assert_eq!(r.overdue_percent(), 0.0);
    }

    #[test]
    fn test_utilization_zero_limit_guard() {
        let r = record(500_000, 0, 0, 0, 0);
        assert_eq!(r.credit_utilization_percent(), 0.0);
    }

    #[test]
    fn test_oldest_overdue_bucket_priority() {
        // 90+ wins even when younger buckets also hold balances
        let r = record(0, 100_000, 100_000, 100_000, 0);
        assert_eq!(r.oldest_overdue_bucket(), Some(AgingBucket::Over90));

        let r = record(0, 100_000, 100_000, 0, 0);
        assert_eq!(r.oldest_overdue_bucket(), Some(AgingBucket::Days61To90));

        let r = record(0, 100_000, 0, 0, 0);
        assert_eq!(r.oldest_overdue_bucket(), Some(AgingBucket::Days31To60));

        let r = record(100_000, 0, 0, 0, 0);
        assert_eq!(r.oldest_overdue_bucket(), None);
    }
}
