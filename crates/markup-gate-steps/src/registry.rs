// crates/markup-gate-steps/src/registry.rs
// ============================================================================
// Module: Step Registry
// Description: Regex-based matching of legacy step phrases.
// Purpose: Route scenario phrases to gate operations.
// Dependencies: regex
// ============================================================================

//! ## Overview
//! The registry recognizes the three legacy phrases. Count expressions are
//! captured verbatim and parsed later by the assertion itself, keeping the
//! permissive "anything non-numeric means zero" semantics in one place.

// ============================================================================
// SECTION: Imports
// ============================================================================

use regex::Regex;
use thiserror::Error;

// ============================================================================
// SECTION: Steps
// ============================================================================

/// A parsed scenario step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Submit the current page's markup to the validation service.
    CheckMarkup,
    /// Assert the reported error count against a count expression.
    ExpectErrorCount(String),
    /// Assert the reported warning count against a count expression.
    ExpectWarningCount(String),
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Step phrase pattern for the submission trigger.
const CHECK_PATTERN: &str = r"^I check source code on W3C validation service$";
/// Step phrase pattern for the error-count assertion.
const ERRORS_PATTERN: &str = r"^I should see (.*) W3C validation errors$";
/// Step phrase pattern for the warning-count assertion.
const WARNINGS_PATTERN: &str = r"^I should see (.*) W3C validation warnings$";

/// Registry construction errors.
#[derive(Debug, Error)]
pub enum StepRegistryError {
    /// A step phrase pattern failed to compile.
    #[error("step pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

/// Matches scenario phrases against the known step patterns.
pub struct StepRegistry {
    /// Compiled submission trigger pattern.
    check: Regex,
    /// Compiled error-count assertion pattern.
    errors: Regex,
    /// Compiled warning-count assertion pattern.
    warnings: Regex,
}

impl StepRegistry {
    /// Compiles the step patterns.
    ///
    /// # Errors
    ///
    /// Returns [`StepRegistryError`] when a pattern fails to compile.
    pub fn new() -> Result<Self, StepRegistryError> {
        Ok(Self {
            check: Regex::new(CHECK_PATTERN)?,
            errors: Regex::new(ERRORS_PATTERN)?,
            warnings: Regex::new(WARNINGS_PATTERN)?,
        })
    }

    /// Parses a phrase into a step; unknown phrases yield `None` and are
    /// left to the surrounding runner.
    #[must_use]
    pub fn parse(&self, phrase: &str) -> Option<Step> {
        if self.check.is_match(phrase) {
            return Some(Step::CheckMarkup);
        }
        if let Some(captures) = self.errors.captures(phrase) {
            return Some(Step::ExpectErrorCount(captures[1].to_string()));
        }
        if let Some(captures) = self.warnings.captures(phrase) {
            return Some(Step::ExpectWarningCount(captures[1].to_string()));
        }
        None
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::Step;
    use super::StepRegistry;

    /// Builds the registry or fails the test.
    fn registry() -> StepRegistry {
        match StepRegistry::new() {
            Ok(registry) => registry,
            Err(err) => unreachable!("static patterns must compile: {err}"),
        }
    }

    #[test]
    fn trigger_phrase_parses() {
        let step = registry().parse("I check source code on W3C validation service");
        assert_eq!(step, Some(Step::CheckMarkup));
    }

    #[test]
    fn count_expressions_pass_through_verbatim() {
        let registry = registry();
        assert_eq!(
            registry.parse("I should see no W3C validation errors"),
            Some(Step::ExpectErrorCount("no".to_string()))
        );
        assert_eq!(
            registry.parse("I should see 3 W3C validation warnings"),
            Some(Step::ExpectWarningCount("3".to_string()))
        );
    }

    #[test]
    fn unknown_phrases_yield_none() {
        let registry = registry();
        assert_eq!(registry.parse("I click the submit button"), None);
        assert_eq!(registry.parse("I should see 3 W3C validation problems"), None);
    }
}
