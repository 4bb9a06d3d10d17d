// crates/markup-gate-core/src/runtime/submitter.rs
// ============================================================================
// Module: Validation Submitter
// Description: Orchestrates one round trip against the validation service.
// Purpose: Normalize, submit, and scrape diagnostics with transport retry.
// Dependencies: crate::core, crate::interfaces, crate::runtime::retry,
//               thiserror, tracing
// ============================================================================

//! ## Overview
//! The submitter drives the whole validation round trip: reset the report,
//! normalize the page markup, navigate to the validation service, fill the
//! input field, press the submit control, and scrape the reported warnings
//! and errors. Transport faults during navigation and submission are
//! retried under the configured [`RetryPolicy`]; a missing page element is
//! a structural fault and fails immediately, it signals the service is
//! unavailable or changed its markup, not a transient condition.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use tracing::debug;
use tracing::info;

use crate::core::normalize::normalize_markup;
use crate::core::report::ValidationReport;
use crate::core::selectors::SelectorMap;
use crate::core::selectors::SelectorRole;
use crate::interfaces::ElementHandle;
use crate::interfaces::SessionError;
use crate::interfaces::WebSession;
use crate::runtime::retry::RetryOutcome;
use crate::runtime::retry::RetryPolicy;
use crate::runtime::retry::retry_transport;

// ============================================================================
// SECTION: Check Errors
// ============================================================================

/// Fatal faults of the validation round trip.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Expected element absent from the service's page. Never retried.
    #[error(
        "cannot find {role} on the validation service page; the service may \
         be unavailable or may have changed its markup"
    )]
    Structural {
        /// Role of the missing element.
        role: SelectorRole,
    },
    /// Transport-fault retry budget spent without a successful attempt.
    #[error("transport retry budget exhausted after {attempts} attempts: {last_fault}")]
    RetryExhausted {
        /// Attempts performed before giving up.
        attempts: u32,
        /// Message of the last transport fault observed.
        last_fault: String,
    },
    /// Non-transport session fault surfaced by the driver.
    #[error(transparent)]
    Session(#[from] SessionError),
}

// ============================================================================
// SECTION: Validation Submitter
// ============================================================================

/// Drives one validation round trip over an injected session.
///
/// # Invariants
/// - The report passed to [`ValidationSubmitter::run`] is reset before any
///   session activity; no stale diagnostics survive a run.
/// - Structural faults are surfaced without a single retry attempt.
pub struct ValidationSubmitter<'a, S: WebSession> {
    /// Session capability driven by the round trip.
    session: &'a mut S,
    /// Selector expressions for the service's page elements.
    selectors: &'a SelectorMap,
    /// Entry URL of the validation service's input-by-text form.
    validator_url: &'a str,
    /// Retry budget for transport faults.
    retry: RetryPolicy,
}

impl<'a, S: WebSession> ValidationSubmitter<'a, S> {
    /// Creates a submitter over the given session and configuration.
    pub fn new(
        session: &'a mut S,
        selectors: &'a SelectorMap,
        validator_url: &'a str,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            session,
            selectors,
            validator_url,
            retry,
        }
    }

    /// Runs the full round trip, filling `report` with scraped diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] on structural faults, retry exhaustion, or
    /// non-transport session faults.
    pub fn run(&mut self, report: &mut ValidationReport, markup: &str) -> Result<(), CheckError> {
        report.reset();
        let compressed = normalize_markup(markup);
        debug!(bytes = compressed.len(), "normalized markup for submission");

        self.navigate()?;
        let input = self.require_element(SelectorRole::SourceTextArea)?;
        self.session.set_value(input, &compressed)?;
        let submit = self.require_element(SelectorRole::SubmitButton)?;
        self.press(submit)?;

        self.scrape(SelectorRole::Warning, &mut report.warnings)?;
        self.scrape(SelectorRole::Errors, &mut report.errors)?;
        info!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "validation round trip complete"
        );
        Ok(())
    }

    /// Visits the validator entry URL with transport retry.
    fn navigate(&mut self) -> Result<(), CheckError> {
        let url = self.validator_url;
        let session = &mut *self.session;
        finish(retry_transport(self.retry, "visit", || session.visit(url)))
    }

    /// Presses the submit control with transport retry.
    fn press(&mut self, submit: ElementHandle) -> Result<(), CheckError> {
        let session = &mut *self.session;
        finish(retry_transport(self.retry, "press", || session.press(submit)))
    }

    /// Locates a required element or raises a structural fault.
    fn require_element(&mut self, role: SelectorRole) -> Result<ElementHandle, CheckError> {
        self.session
            .find_element(self.selectors.selector(role))?
            .ok_or(CheckError::Structural {
                role,
            })
    }

    /// Appends the text of every element matching the role, document order.
    fn scrape(&mut self, role: SelectorRole, into: &mut Vec<String>) -> Result<(), CheckError> {
        let handles = self.session.find_all_elements(self.selectors.selector(role))?;
        for handle in handles {
            into.push(self.session.element_text(handle)?);
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Converts a retry outcome into a check result.
fn finish<T>(outcome: RetryOutcome<T>) -> Result<T, CheckError> {
    match outcome {
        RetryOutcome::Success(value) => Ok(value),
        RetryOutcome::Aborted(err) => Err(CheckError::Session(err)),
        RetryOutcome::Exhausted { attempts, last_fault } => Err(CheckError::RetryExhausted {
            attempts,
            last_fault,
        }),
    }
}
