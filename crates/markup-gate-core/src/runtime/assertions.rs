// crates/markup-gate-core/src/runtime/assertions.rs
// ============================================================================
// Module: Count Assertions
// Description: Expected-versus-actual diagnostic count comparison.
// Purpose: Fail scenarios with a readable message listing the diagnostics.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Assertion steps compare a natural-language count expression against the
//! diagnostics captured by the last round trip. A mismatch carries both
//! counts and, when diagnostics were found, their full text, so the failure
//! is debuggable without re-running the scenario.
//!
//! The legacy tool's warning assertion measured the error list, an apparent
//! copy-paste defect. This implementation compares warnings against the
//! warning list.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::count::parse_count;
use crate::core::report::DiagnosticKind;
use crate::core::report::ValidationReport;

// ============================================================================
// SECTION: Count Mismatch
// ============================================================================

/// Count mismatch raised by an assertion step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Expected {kind}: {expected}. Actual found {kind}: {actual}.{}",
    detail_block(.kind, .details)
)]
pub struct CountMismatch {
    /// Diagnostic kind that was asserted.
    pub kind: DiagnosticKind,
    /// Expected count parsed from the step phrase.
    pub expected: u64,
    /// Count actually captured by the last round trip.
    pub actual: u64,
    /// Full text of the captured diagnostics, empty when none were found.
    pub details: Vec<String>,
}

/// Renders the detailed diagnostic list, or nothing when empty.
fn detail_block(kind: &DiagnosticKind, details: &[String]) -> String {
    if details.is_empty() {
        String::new()
    } else {
        format!(" Detailed list of {kind}: \n{}", details.join("\n"))
    }
}

// ============================================================================
// SECTION: Assertions
// ============================================================================

/// Asserts the captured error count against a count expression.
///
/// # Errors
///
/// Returns [`CountMismatch`] when the counts differ.
pub fn assert_error_count(
    expected_text: &str,
    report: &ValidationReport,
) -> Result<(), CountMismatch> {
    assert_count(DiagnosticKind::Error, expected_text, report)
}

/// Asserts the captured warning count against a count expression.
///
/// # Errors
///
/// Returns [`CountMismatch`] when the counts differ.
pub fn assert_warning_count(
    expected_text: &str,
    report: &ValidationReport,
) -> Result<(), CountMismatch> {
    assert_count(DiagnosticKind::Warning, expected_text, report)
}

/// Shared comparison for both diagnostic kinds.
fn assert_count(
    kind: DiagnosticKind,
    expected_text: &str,
    report: &ValidationReport,
) -> Result<(), CountMismatch> {
    let expected = parse_count(expected_text);
    let diagnostics = report.diagnostics(kind);
    let actual = diagnostics.len() as u64;
    if actual == expected {
        Ok(())
    } else {
        Err(CountMismatch {
            kind,
            expected,
            actual,
            details: diagnostics.to_vec(),
        })
    }
}
