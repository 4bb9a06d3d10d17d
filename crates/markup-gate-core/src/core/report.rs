// crates/markup-gate-core/src/core/report.rs
// ============================================================================
// Module: Validation Report
// Description: Diagnostic lists captured from one validation round trip.
// Purpose: Hold scraped error and warning texts for later assertions.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`ValidationReport`] holds the diagnostics scraped from the external
//! validation service for the last submitted markup: one ordered list of
//! error texts and one of warning texts, in document order. The submitter
//! resets the report before every round trip, so a report never mixes
//! diagnostics from two runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Diagnostic Kind
// ============================================================================

/// Kind of diagnostic reported by the validation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A validation error.
    Error,
    /// A validation warning.
    Warning,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("errors"),
            Self::Warning => f.write_str("warnings"),
        }
    }
}

// ============================================================================
// SECTION: Validation Report
// ============================================================================

/// Diagnostics captured from the last validation round trip.
///
/// # Invariants
/// - Entries appear in document order as rendered by the service.
/// - Both lists reflect only the most recent run; the submitter resets the
///   report before scraping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Full text of each reported error.
    pub errors: Vec<String>,
    /// Full text of each reported warning.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Discards all diagnostics from a previous run.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }

    /// Returns the diagnostic list for the given kind.
    #[must_use]
    pub fn diagnostics(&self, kind: DiagnosticKind) -> &[String] {
        match kind {
            DiagnosticKind::Error => &self.errors,
            DiagnosticKind::Warning => &self.warnings,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
