// crates/markup-gate-core/src/core/selectors.rs
// ============================================================================
// Module: Selector Map
// Description: Logical element roles and their selector expressions.
// Purpose: Decouple the submitter from the service's page structure.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The submitter never hardwires knowledge of the validation service's DOM.
//! Every element it touches is addressed through a logical role resolved via
//! a [`SelectorMap`] loaded once from configuration. The map keeps the
//! legacy camelCase key spelling in its serialized form.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Selector Roles
// ============================================================================

/// Logical role of an element on the validation service's page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectorRole {
    /// The markup input field.
    SourceTextArea,
    /// The submit control.
    SubmitButton,
    /// One reported warning entry.
    Warning,
    /// One reported error entry.
    Errors,
}

impl fmt::Display for SelectorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceTextArea => f.write_str("source text area"),
            Self::SubmitButton => f.write_str("submit button"),
            Self::Warning => f.write_str("warning entries"),
            Self::Errors => f.write_str("error entries"),
        }
    }
}

// ============================================================================
// SECTION: Selector Map
// ============================================================================

/// Selector expressions for each logical element role.
///
/// # Invariants
/// - All four expressions are non-empty once configuration validation has
///   run; the map is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SelectorMap {
    /// Selector for the markup input field.
    pub source_text_area: String,
    /// Selector for the submit control.
    pub submit_button: String,
    /// Selector matching each reported warning.
    pub warning: String,
    /// Selector matching each reported error.
    pub errors: String,
}

impl SelectorMap {
    /// Returns the selector expression for a role.
    #[must_use]
    pub fn selector(&self, role: SelectorRole) -> &str {
        match role {
            SelectorRole::SourceTextArea => &self.source_text_area,
            SelectorRole::SubmitButton => &self.submit_button,
            SelectorRole::Warning => &self.warning,
            SelectorRole::Errors => &self.errors,
        }
    }
}

impl Default for SelectorMap {
    fn default() -> Self {
        Self {
            source_text_area: "#fragment".to_string(),
            submit_button: "#validate-by-input input.submit".to_string(),
            warning: "li.msg_warn".to_string(),
            errors: "li.msg_err".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
