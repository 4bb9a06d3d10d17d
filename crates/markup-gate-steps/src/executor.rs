// crates/markup-gate-steps/src/executor.rs
// ============================================================================
// Module: Step Executor
// Description: Executes parsed steps against an injected session.
// Purpose: Hold the diagnostic report across the steps of one scenario.
// Dependencies: markup-gate-config, markup-gate-core
// ============================================================================

//! ## Overview
//! The executor composes the gate's pieces for a scenario runner: it owns
//! the session capability, the loaded configuration, and the current
//! [`ValidationReport`]. A check step submits the current page's markup and
//! replaces the report; assertion steps read it. Nothing here extends a
//! shared context base class, the session is plain injected state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use markup_gate_config::MarkupGateConfig;
use markup_gate_core::CheckError;
use markup_gate_core::CountMismatch;
use markup_gate_core::SessionError;
use markup_gate_core::ValidationReport;
use markup_gate_core::ValidationSubmitter;
use markup_gate_core::WebSession;
use markup_gate_core::assert_error_count;
use markup_gate_core::assert_warning_count;
use thiserror::Error;
use tracing::info;

use crate::registry::Step;

// ============================================================================
// SECTION: Step Failures
// ============================================================================

/// Failure of an executed step; terminates the current scenario.
#[derive(Debug, Error)]
pub enum StepFailure {
    /// The validation round trip failed.
    #[error(transparent)]
    Check(#[from] CheckError),
    /// A count expectation did not hold.
    #[error(transparent)]
    Expectation(#[from] CountMismatch),
    /// The session could not provide the current page's markup.
    #[error(transparent)]
    Session(#[from] SessionError),
}

// ============================================================================
// SECTION: Step Executor
// ============================================================================

/// Executes steps for one scenario over an injected session.
///
/// # Invariants
/// - The report always reflects the most recent check step; executing a
///   check replaces it entirely.
/// - Assertions before any check compare against the empty report.
pub struct StepExecutor<S: WebSession> {
    /// Session capability shared by all steps of the scenario.
    session: S,
    /// Configuration loaded once at scenario initialization.
    config: MarkupGateConfig,
    /// Diagnostics of the most recent check step.
    report: ValidationReport,
}

impl<S: WebSession> StepExecutor<S> {
    /// Creates an executor over the given session and configuration.
    pub fn new(session: S, config: MarkupGateConfig) -> Self {
        Self {
            session,
            config,
            report: ValidationReport::new(),
        }
    }

    /// Executes one parsed step.
    ///
    /// # Errors
    ///
    /// Returns [`StepFailure`] when the step fails; the failure message is
    /// suitable for direct scenario output.
    pub fn execute(&mut self, step: &Step) -> Result<(), StepFailure> {
        match step {
            Step::CheckMarkup => self.check(),
            Step::ExpectErrorCount(expression) => {
                assert_error_count(expression, &self.report)?;
                Ok(())
            }
            Step::ExpectWarningCount(expression) => {
                assert_warning_count(expression, &self.report)?;
                Ok(())
            }
        }
    }

    /// Submits the current page's markup to the validation service.
    fn check(&mut self) -> Result<(), StepFailure> {
        let markup = self.session.page_markup()?;
        info!(bytes = markup.len(), "submitting current page markup for validation");
        ValidationSubmitter::new(
            &mut self.session,
            &self.config.selectors,
            &self.config.validator.url,
            self.config.validator.retry,
        )
        .run(&mut self.report, &markup)?;
        Ok(())
    }

    /// Returns the diagnostics of the most recent check step.
    #[must_use]
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Returns the session for steps outside this crate's surface.
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
