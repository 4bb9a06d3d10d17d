// crates/markup-gate-core/tests/submitter.rs
// ============================================================================
// Module: Submitter Round-Trip Tests
// Description: Behavior of the validation submitter over a scripted session.
// Purpose: Verify retry, reset, structural-fault, and scraping contracts.
// ============================================================================

//! ## Overview
//! Covers the round-trip contracts: transport faults are retried within the
//! budget and never surfaced on eventual success, structural faults fail
//! immediately without retry, scraped diagnostics arrive in document order,
//! and a rerun discards every entry of the previous run.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use markup_gate_core::CheckError;
use markup_gate_core::RetryPolicy;
use markup_gate_core::ValidationReport;
use markup_gate_core::ValidationSubmitter;

use crate::common::MockSession;
use crate::common::selectors;

/// Validator entry URL used by the scripted driver.
const VALIDATOR_URL: &str = "https://validator.example/#validate_by_input";

/// Runs one round trip over the given session with a 5-attempt budget.
fn run(session: &mut MockSession, report: &mut ValidationReport, markup: &str) -> Result<(), CheckError> {
    let selectors = selectors();
    let retry = RetryPolicy { max_attempts: 5 };
    ValidationSubmitter::new(session, &selectors, VALIDATOR_URL, retry).run(report, markup)
}

#[test]
fn scrapes_diagnostics_in_document_order() {
    let mut session = MockSession::default();
    session.set_texts("li.msg_warn", &["w1", "w2"]);
    session.set_texts("li.msg_err", &["e1", "e2", "e3"]);
    let mut report = ValidationReport::new();

    run(&mut session, &mut report, "<html/>").unwrap();

    assert_eq!(report.warnings, vec!["w1", "w2"]);
    assert_eq!(report.errors, vec!["e1", "e2", "e3"]);
    assert_eq!(session.visits, 1);
    assert_eq!(session.presses, 1);
}

#[test]
fn rerun_discards_previous_diagnostics() {
    let mut session = MockSession::default();
    session.set_texts("li.msg_err", &["stale entry"]);
    let mut report = ValidationReport::new();
    run(&mut session, &mut report, "<html/>").unwrap();
    assert_eq!(report.errors, vec!["stale entry"]);

    session.set_texts("li.msg_err", &["fresh entry"]);
    session.set_texts("li.msg_warn", &["new warning"]);
    run(&mut session, &mut report, "<html/>").unwrap();

    assert_eq!(report.errors, vec!["fresh entry"]);
    assert_eq!(report.warnings, vec!["new warning"]);
}

#[test]
fn submitted_markup_is_normalized() {
    let mut session = MockSession::default();
    let mut report = ValidationReport::new();

    run(&mut session, &mut report, "<html>\r\n\t<body>  hi </body>\n</html>").unwrap();

    let (selector, value) = &session.set_values[0];
    assert_eq!(selector, "#fragment");
    assert_eq!(value, "<html><body> hi </body></html>");
}

#[test]
fn transient_visit_faults_are_absorbed() {
    let mut session = MockSession {
        visit_faults: 3,
        ..MockSession::default()
    };
    let mut report = ValidationReport::new();

    run(&mut session, &mut report, "<html/>").unwrap();

    assert_eq!(session.visits, 1);
}

#[test]
fn persistent_visit_faults_exhaust_the_budget() {
    let mut session = MockSession {
        visit_faults: 99,
        ..MockSession::default()
    };
    let mut report = ValidationReport::new();

    let err = run(&mut session, &mut report, "<html/>").unwrap_err();

    match err {
        CheckError::RetryExhausted { attempts, last_fault } => {
            assert_eq!(attempts, 5);
            assert!(last_fault.contains("timed out"));
        }
        other => panic!("expected retry exhaustion, got {other}"),
    }
    assert_eq!(session.visits, 0);
}

#[test]
fn transient_press_faults_are_absorbed() {
    let mut session = MockSession {
        press_faults: 2,
        ..MockSession::default()
    };
    let mut report = ValidationReport::new();

    run(&mut session, &mut report, "<html/>").unwrap();

    assert_eq!(session.press_attempts, 3);
    assert_eq!(session.presses, 1);
}

#[test]
fn missing_input_field_fails_without_retry() {
    let mut session = MockSession::default();
    session.absent.insert("#fragment".to_string());
    let mut report = ValidationReport::new();

    let err = run(&mut session, &mut report, "<html/>").unwrap_err();

    assert!(matches!(err, CheckError::Structural { .. }));
    assert!(err.to_string().contains("source text area"));
    assert!(err.to_string().contains("may have changed its markup"));
    assert!(session.set_values.is_empty());
    assert_eq!(session.press_attempts, 0);
}

#[test]
fn missing_submit_button_fails_without_retry() {
    let mut session = MockSession::default();
    session.absent.insert("#validate-by-input input.submit".to_string());
    let mut report = ValidationReport::new();

    let err = run(&mut session, &mut report, "<html/>").unwrap_err();

    assert!(err.to_string().contains("submit button"));
    assert_eq!(session.press_attempts, 0);
}

#[test]
fn non_transport_press_fault_aborts_immediately() {
    let mut session = MockSession {
        press_driver_fault: true,
        ..MockSession::default()
    };
    let mut report = ValidationReport::new();

    let err = run(&mut session, &mut report, "<html/>").unwrap_err();

    assert!(matches!(err, CheckError::Session(_)));
    assert_eq!(session.press_attempts, 1);
}

#[test]
fn report_is_reset_even_when_the_run_fails() {
    let mut session = MockSession::default();
    session.set_texts("li.msg_err", &["old"]);
    let mut report = ValidationReport::new();
    run(&mut session, &mut report, "<html/>").unwrap();
    assert_eq!(report.errors.len(), 1);

    session.absent.insert("#fragment".to_string());
    let _ = run(&mut session, &mut report, "<html/>");

    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}
