// =====================================================================================
// DIAGNOSTICS CELL MODELS
// =====================================================================================

use std::fmt::Display;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone)]
pub struct CheckRecord {
    pub suite: String,
    pub name: String,
    pub status: CheckStatus,
    pub detail: Option<String>,
}

/// Console report of every check in a run. Lines are printed as checks complete.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub failures: Vec<String>,
    pub records: Vec<CheckRecord>,
    current_suite: String,
}

impl CheckReport {
    pub fn begin_suite(&mut self, name: &str, title: &str) {
        self.current_suite = name.to_string();
        println!("\n🧪 {}...", title);
    }

    pub fn section(&mut self, title: &str) {
        println!("\n{}", title);
    }

    pub fn note(&mut self, text: &str) {
        println!("{}", text);
    }

    pub fn pass(&mut self, test_name: &str) {
        self.passed += 1;
        self.record(test_name, CheckStatus::Passed, None);
        println!("✅ {}", test_name);
    }

    pub fn fail(&mut self, test_name: &str, error: impl Display) {
        let error = error.to_string();
        self.failed += 1;
        self.failures.push(format!("{}: {}", test_name, error));
        println!("❌ {}: {}", test_name, error);
        self.record(test_name, CheckStatus::Failed, Some(error));
    }

    pub fn skip(&mut self, test_name: &str, reason: &str) {
        self.skipped += 1;
        self.record(test_name, CheckStatus::Skipped, Some(reason.to_string()));
        println!("⚠️  {} (skipped: {})", test_name, reason);
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn suite_records(&self, suite: &str) -> impl Iterator<Item = &CheckRecord> {
        let suite = suite.to_string();
        self.records.iter().filter(move |r| r.suite == suite)
    }

    pub fn summary(&self) {
        println!("\n📊 Test Summary:");
        println!("✅ Passed: {}", self.passed);
        println!("❌ Failed: {}", self.failed);
        println!("⚠️  Skipped: {}", self.skipped);

        if !self.failures.is_empty() {
            println!("\n🔍 Failures:");
            for failure in &self.failures {
                println!("  - {}", failure);
            }
        }
    }

    fn record(&mut self, name: &str, status: CheckStatus, detail: Option<String>) {
        self.records.push(CheckRecord {
            suite: self.current_suite.clone(),
            name: name.to_string(),
            status,
            detail,
        });
    }
}

/// Rows in an RPC result: arrays count their elements, `null` is zero,
/// anything else is a single row.
pub fn row_count(value: &Value) -> usize {
    match value {
        Value::Array(rows) => rows.len(),
        Value::Null => 0,
        _ => 1,
    }
}

pub fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {}>", e))
}
