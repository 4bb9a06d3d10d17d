// crates/markup-gate-config/tests/load_validation.rs
// ============================================================================
// Module: Config Load and Validation Tests
// Description: Validate strict loading behavior and config invariants.
// Purpose: Ensure malformed settings fail at initialization, not first use.
// ============================================================================

//! ## Overview
//! Covers the fail-fast loading contract: defaults validate, selector keys
//! keep their legacy camelCase spelling, and malformed or inconsistent
//! content is rejected with a descriptive error at load time.

mod common;

use markup_gate_config::ConfigError;
use markup_gate_config::MarkupGateConfig;

/// Result alias keeping assertions panic-free.
type TestResult = Result<(), String>;

/// Asserts that a load result failed with a message containing the needle.
fn assert_invalid(result: Result<MarkupGateConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn default_config_validates() -> TestResult {
    let config = MarkupGateConfig::default();
    config.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn empty_file_yields_defaults() -> TestResult {
    let config = common::load_from_str("").map_err(|err| err.to_string())?;
    if config.selectors.source_text_area != "#fragment" {
        return Err("default sourceTextArea selector expected".to_string());
    }
    if config.validator.retry.max_attempts == 0 {
        return Err("default retry budget must be positive".to_string());
    }
    Ok(())
}

#[test]
fn selectors_use_legacy_camel_case_keys() -> TestResult {
    let config = common::load_from_str(
        r##"
[selectors]
sourceTextArea = "#markup-input"
submitButton = "#check"
warning = "ol#warnings li"
errors = "ol#errors li"
"##,
    )
    .map_err(|err| err.to_string())?;
    if config.selectors.source_text_area != "#markup-input" {
        return Err("sourceTextArea key did not map".to_string());
    }
    if config.selectors.errors != "ol#errors li" {
        return Err("errors key did not map".to_string());
    }
    Ok(())
}

#[test]
fn unparsable_toml_fails_at_load() -> TestResult {
    assert_invalid(common::load_from_str("[selectors\nbroken"), "config parse error")
}

#[test]
fn unknown_keys_are_rejected() -> TestResult {
    assert_invalid(common::load_from_str("[selectors]\ninputBox = \"#x\"\n"), "config parse error")
}

#[test]
fn empty_selector_is_rejected() -> TestResult {
    assert_invalid(
        common::load_from_str(
            r##"
[selectors]
sourceTextArea = "  "
submitButton = "#check"
warning = "li.msg_warn"
errors = "li.msg_err"
"##,
        ),
        "selector for source text area must be non-empty",
    )
}

#[test]
fn partial_selector_table_is_rejected() -> TestResult {
    assert_invalid(
        common::load_from_str("[selectors]\nsourceTextArea = \"#fragment\"\n"),
        "config parse error",
    )
}

#[test]
fn non_http_validator_url_is_rejected() -> TestResult {
    assert_invalid(
        common::load_from_str("[validator]\nurl = \"ftp://validator.example\"\n"),
        "validator.url must be http(s)",
    )
}

#[test]
fn zero_retry_budget_is_rejected() -> TestResult {
    assert_invalid(
        common::load_from_str("[validator.retry]\nmax_attempts = 0\n"),
        "max_attempts must be at least 1",
    )
}

#[test]
fn zero_timeout_is_rejected() -> TestResult {
    assert_invalid(
        common::load_from_str("[session]\ntimeout_ms = 0\n"),
        "session.timeout_ms must be at least 1",
    )
}

#[test]
fn empty_user_agent_is_rejected() -> TestResult {
    assert_invalid(
        common::load_from_str("[session]\nuser_agent = \"\"\n"),
        "session.user_agent must be non-empty",
    )
}

#[test]
fn explicit_missing_file_fails() -> TestResult {
    let result = MarkupGateConfig::load(Some(std::path::Path::new("/nonexistent/markup-gate.toml")));
    assert_invalid(result, "config io error")
}
