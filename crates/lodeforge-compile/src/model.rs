use std::collections::BTreeMap;
use std::path::PathBuf;

use lodeforge_core::CompileError;
use lodeforge_rules::ValidationIssue;
use serde::Serialize;

use crate::errors::LoadError;

/// A rule that did not make it into the registry.
#[derive(Debug, Clone, Serialize)]
pub struct RuleFailure {
    pub rule: String,
    pub code: String,
    pub message: String,
}

impl RuleFailure {
    pub fn new(rule: impl Into<String>, error: &CompileError) -> Self {
        Self {
            rule: rule.into(),
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

/// File-level failure; the whole file was skipped.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub code: String,
    pub message: String,
}

/// Outcome of one rule file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub source: PathBuf,
    pub registered: Vec<String>,
    pub failures: Vec<RuleFailure>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_failure: Option<FileFailure>,
}

impl FileReport {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            registered: Vec::new(),
            failures: Vec::new(),
            warnings: Vec::new(),
            file_failure: None,
        }
    }

    pub fn failed(source: impl Into<PathBuf>, error: &LoadError) -> Self {
        let mut report = Self::new(source);
        report.file_failure = Some(FileFailure {
            code: error.code().to_string(),
            message: error.to_string(),
        });
        report
    }

    pub fn record_registered(&mut self, rule: &str) {
        self.registered.push(rule.to_string());
    }

    pub fn record_failure(&mut self, rule: &str, error: &CompileError) {
        self.failures.push(RuleFailure::new(rule, error));
    }
}

/// Outcome of a whole load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub files: Vec<FileReport>,
    pub registered_total: u64,
    pub failed_total: u64,
    pub failures_by_code: BTreeMap<String, u64>,
}

impl LoadReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: FileReport) {
        self.registered_total += file.registered.len() as u64;
        self.failed_total += file.failures.len() as u64;
        for failure in &file.failures {
            *self.failures_by_code.entry(failure.code.clone()).or_insert(0) += 1;
        }
        if let Some(failure) = &file.file_failure {
            *self.failures_by_code.entry(failure.code.clone()).or_insert(0) += 1;
        }
        self.files.push(file);
    }

    pub fn failed_files(&self) -> usize {
        self.files
            .iter()
            .filter(|file| file.file_failure.is_some())
            .count()
    }

    /// True when every file was read and every rule registered.
    pub fn is_clean(&self) -> bool {
        self.failed_total == 0 && self.failed_files() == 0
    }
}
