//! Aggregate usage counts from the dashboard endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aggregate classification counts for the logged-in user.
///
/// Fetched fresh on every trigger and replaced whole, never merged.
/// Construction from the wire payload goes through
/// [`DashboardSummary::from_value`], which coerces each field independently
/// so that one malformed count never invalidates the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Total emails checked. Displayed as-is, never recomputed from the slices.
    pub total: u64,
    /// Emails the backend judged legitimate.
    pub legit: u64,
    /// Emails the backend judged phishing.
    pub phishing: u64,
}

impl DashboardSummary {
    pub fn new(total: u64, legit: u64, phishing: u64) -> Self {
        Self {
            total,
            legit,
            phishing,
        }
    }

    /// Build a summary from a raw JSON payload.
    ///
    /// JSON numbers are truncated to integers and numeric strings are parsed;
    /// anything else (missing, null, non-numeric, negative, non-finite)
    /// becomes 0.
    pub fn from_value(value: &Value) -> Self {
        Self {
            total: coerce_count(value.get("total")),
            legit: coerce_count(value.get("legit")),
            phishing: coerce_count(value.get("phishing")),
        }
    }

    /// Whether there is at least one counted verdict to chart.
    pub fn has_verdicts(&self) -> bool {
        self.legit > 0 || self.phishing > 0
    }
}

/// Coerce one JSON field to a non-negative count, defaulting to 0.
fn coerce_count(field: Option<&Value>) -> u64 {
    let parsed = match field {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() && v >= 0.0 => v as u64,
        _ => 0,
    }
}
