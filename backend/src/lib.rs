//! Risk Alert Engine - Core Library
//!
//! Threshold-based risk scoring and alert classification for a financial
//! reporting dashboard: AR aging exposure, credit-limit utilization, and
//! projected cash-flow shortfalls.
//!
//! # Architecture
//!
//! - **models**: Domain types (AgingRecord, CashFlowProjection, Alert)
//! - **scoring**: Point accumulation and severity classification
//! - **alerts**: Generation pipeline (generate, sort, filter, summarize)
//! - **scenario**: JSON input bundle for drivers and tests
//! - **permissions**: Shared role-to-capability table
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. Risk scores are always clamped to [0, 100]
//! 3. Severity is derived solely from the risk score (never set directly)
//! 4. The engine is pure: no I/O, no shared state, idempotent per call

// Module declarations
pub mod alerts;
pub mod models;
pub mod permissions;
pub mod scenario;
pub mod scoring;

// Re-exports for convenience
pub use alerts::{
    detect_cash_flow_shortfall, filter_alerts, generate_alerts, sort_alerts, summarize,
    AlertFilter, AlertSummary, DismissalSet,
};
pub use models::{
    aging::{AgingBucket, AgingRecord},
    alert::{Alert, AlertType, Severity},
    cash_flow::CashFlowProjection,
};
pub use permissions::{capabilities, has_capability, Capability, Role};
pub use scenario::{Scenario, ScenarioError};
pub use scoring::{
    classify_severity, classify_shortfall_severity, score_aging_record,
    score_cash_flow_shortfall, ScoreBreakdown,
};
