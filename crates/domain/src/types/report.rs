//! Per-run export reporting types

use serde::{Deserialize, Serialize};

/// One failed record inside an export run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFailure {
    pub country_id: i64,
    pub message: String,
}

/// Tally of a single export invocation
///
/// Lives for exactly one run of the sync loop; `succeeded + failed` always
/// equals `processed`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSummary {
    pub processed: u32,
    pub succeeded: u32,
    pub failed: u32,
    pub failures: Vec<ExportFailure>,
}

impl ExportSummary {
    pub fn record_success(&mut self) {
        self.processed += 1;
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, country_id: i64, message: impl Into<String>) {
        self.processed += 1;
        self.failed += 1;
        self.failures.push(ExportFailure { country_id, message: message.into() });
    }
}
