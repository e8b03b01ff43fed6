//! Input validation for scheduling workloads.
//!
//! Checks structural integrity of a workload before simulation. Detects:
//! - Duplicate process ids
//! - Empty process ids
//! - Zero execution time
//!
//! Arrival times are unsigned ticks, so negative arrivals cannot be
//! represented here; the parsing layer rejects negative literals.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessRecord;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two processes share the same id.
    DuplicateId,
    /// A process has an empty id.
    EmptyId,
    /// A process requires no CPU time.
    ZeroExecTime,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a workload before simulation.
///
/// Checks:
/// 1. Every process has a non-empty id
/// 2. No two processes share an id
/// 3. Every process has a positive execution time
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(records: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for record in records {
        if record.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process arriving at {} has an empty id", record.arrival_time),
            ));
        } else if !seen_ids.insert(record.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", record.id),
            ));
        }

        if record.exec_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroExecTime,
                format!("Process '{}' has zero execution time", record.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_workload() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new("p1", 0, 5),
            ProcessRecord::new("p2", 1, 3),
            ProcessRecord::new("p3", 2, 1),
        ]
    }

    #[test]
    fn test_valid_workload() {
        assert!(validate_workload(&sample_workload()).is_ok());
    }

    #[test]
    fn test_empty_workload_is_valid() {
        assert!(validate_workload(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let records = vec![
            ProcessRecord::new("p1", 0, 5),
            ProcessRecord::new("p1", 1, 3),
        ];
        let errors = validate_workload(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_empty_id() {
        let records = vec![ProcessRecord::new("", 4, 5)];
        let errors = validate_workload(&records).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
        assert!(errors[0].message.contains('4'));
    }

    #[test]
    fn test_zero_exec_time() {
        let records = vec![ProcessRecord::new("p1", 0, 0)];
        let errors = validate_workload(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroExecTime));
    }

    #[test]
    fn test_multiple_errors() {
        let records = vec![
            ProcessRecord::new("p1", 0, 0),
            ProcessRecord::new("p1", 1, 3),
            ProcessRecord::new("", 2, 1),
        ];
        let errors = validate_workload(&records).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_error_display() {
        let records = vec![ProcessRecord::new("p7", 0, 0)];
        let errors = validate_workload(&records).unwrap_err();
        assert_eq!(errors[0].to_string(), "Process 'p7' has zero execution time");
    }
}
