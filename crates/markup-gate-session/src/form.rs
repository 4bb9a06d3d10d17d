// crates/markup-gate-session/src/form.rs
// ============================================================================
// Module: Form Serialization
// Description: HTML form discovery and field serialization.
// Purpose: Turn a pressed submit control into a submission plan.
// Dependencies: markup-gate-core, scraper
// ============================================================================

//! ## Overview
//! Pressing a submit control submits its enclosing `<form>`. This module
//! walks the DOM to find that form, serializes its controls in document
//! order the way a browser would (text and hidden values, checked
//! checkboxes and radios, selected options, the pressed control's own
//! name/value pair), and reports the form's method and action for the
//! driver to execute.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use markup_gate_core::SessionError;
use scraper::ElementRef;
use scraper::Selector;

// ============================================================================
// SECTION: Submission Plan
// ============================================================================

/// HTTP method of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormMethod {
    /// Fields become the query string.
    Get,
    /// Fields become a urlencoded body.
    Post,
}

/// Everything needed to execute one form submission.
#[derive(Debug, Clone)]
pub(crate) struct SubmissionPlan {
    /// Submission method declared by the form.
    pub method: FormMethod,
    /// Raw `action` attribute, if present and non-empty.
    pub action: Option<String>,
    /// Serialized fields in document order, overrides applied.
    pub fields: Vec<(String, String)>,
}

// ============================================================================
// SECTION: Planning
// ============================================================================

/// Builds the submission plan for a pressed control.
///
/// # Errors
///
/// Returns [`SessionError::Driver`] when the control has no enclosing form.
pub(crate) fn plan_submission(
    pressed: ElementRef<'_>,
    overrides: &BTreeMap<String, String>,
) -> Result<SubmissionPlan, SessionError> {
    let form = enclosing_form(pressed)
        .ok_or_else(|| SessionError::Driver("submit control has no enclosing form".to_string()))?;

    let method = match form.value().attr("method") {
        Some(method) if method.eq_ignore_ascii_case("post") => FormMethod::Post,
        _ => FormMethod::Get,
    };
    let action = form
        .value()
        .attr("action")
        .map(str::trim)
        .filter(|action| !action.is_empty())
        .map(ToString::to_string);

    let controls = parse_selector("input, textarea, select")?;
    let mut fields = Vec::new();
    for control in form.select(&controls) {
        if control.value().attr("disabled").is_some() {
            continue;
        }
        let Some(name) = control.value().attr("name") else {
            continue;
        };
        let pressed_here = control.id() == pressed.id();
        if let Some(value) = control_value(control, pressed_here) {
            let value = overrides.get(name).cloned().unwrap_or(value);
            fields.push((name.to_string(), value));
        }
    }
    Ok(SubmissionPlan {
        method,
        action,
        fields,
    })
}

/// Finds the nearest `<form>` ancestor of an element.
fn enclosing_form(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "form")
}

/// Returns the submitted value of a control, or `None` when it does not
/// take part in the submission.
fn control_value(control: ElementRef<'_>, pressed: bool) -> Option<String> {
    match control.value().name() {
        "textarea" => Some(control.text().collect::<String>()),
        "select" => selected_option(control),
        "input" => {
            let input_type = control.value().attr("type").unwrap_or("text");
            match input_type.to_ascii_lowercase().as_str() {
                "checkbox" | "radio" => control
                    .value()
                    .attr("checked")
                    .map(|_| control.value().attr("value").unwrap_or("on").to_string()),
                // Submit controls contribute only when actually pressed.
                "submit" | "image" | "button" | "reset" => {
                    pressed.then(|| control.value().attr("value").unwrap_or_default().to_string())
                }
                "file" => None,
                _ => Some(control.value().attr("value").unwrap_or_default().to_string()),
            }
        }
        _ => None,
    }
}

/// Returns the value of the selected option of a `<select>` control.
fn selected_option(select: ElementRef<'_>) -> Option<String> {
    let options = parse_selector("option").ok()?;
    let mut first = None;
    for option in select.select(&options) {
        let value = option
            .value()
            .attr("value")
            .map_or_else(|| option.text().collect::<String>(), ToString::to_string);
        if option.value().attr("selected").is_some() {
            return Some(value);
        }
        if first.is_none() {
            first = Some(value);
        }
    }
    first
}

/// Parses a selector expression into a [`Selector`].
pub(crate) fn parse_selector(expression: &str) -> Result<Selector, SessionError> {
    Selector::parse(expression).map_err(|err| SessionError::Selector {
        selector: expression.to_string(),
        message: err.to_string(),
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Panic-based assertions are permitted in tests."
)]
mod tests {
    use std::collections::BTreeMap;

    use scraper::Html;

    use super::FormMethod;
    use super::SubmissionPlan;
    use super::parse_selector;
    use super::plan_submission;

    /// Plans the submission of the first element matching `pressed`.
    fn plan(html: &str, pressed: &str) -> Result<SubmissionPlan, String> {
        let doc = Html::parse_document(html);
        let selector = parse_selector(pressed).map_err(|err| err.to_string())?;
        let control = doc.select(&selector).next().ok_or("pressed control not found")?;
        plan_submission(control, &BTreeMap::new()).map_err(|err| err.to_string())
    }

    #[test]
    fn serializes_fields_in_document_order() {
        let html = r#"<form method="post" action="/check">
            <input type="hidden" name="a" value="1"/>
            <textarea name="fragment">markup</textarea>
            <input type="checkbox" name="c" checked/>
            <input type="checkbox" name="skipped"/>
            <input type="submit" name="go" value="Check"/>
        </form>"#;
        let plan = plan(html, "input[type=submit]").unwrap();
        assert_eq!(plan.method, FormMethod::Post);
        assert_eq!(plan.action.as_deref(), Some("/check"));
        assert_eq!(
            plan.fields,
            vec![
                ("a".to_string(), "1".to_string()),
                ("fragment".to_string(), "markup".to_string()),
                ("c".to_string(), "on".to_string()),
                ("go".to_string(), "Check".to_string()),
            ]
        );
    }

    #[test]
    fn overrides_replace_serialized_values() {
        let html = r#"<form><textarea name="fragment">old</textarea>
            <input type="submit" value="go"/></form>"#;
        let doc = Html::parse_document(html);
        let selector = parse_selector("input[type=submit]").unwrap();
        let pressed = doc.select(&selector).next().unwrap();
        let mut overrides = BTreeMap::new();
        overrides.insert("fragment".to_string(), "new markup".to_string());
        let plan = plan_submission(pressed, &overrides).unwrap();
        assert_eq!(plan.method, FormMethod::Get);
        assert_eq!(plan.fields, vec![("fragment".to_string(), "new markup".to_string())]);
    }

    #[test]
    fn control_outside_a_form_is_rejected() {
        let html = "<div><input type=\"submit\" name=\"go\"/></div>";
        assert!(plan(html, "input[type=submit]").is_err());
    }

    #[test]
    fn select_uses_the_selected_option() {
        let html = r#"<form>
            <select name="doctype">
              <option value="html5">HTML5</option>
              <option value="xhtml" selected>XHTML</option>
            </select>
            <input type="submit" name="go" value="x"/>
        </form>"#;
        let plan = plan(html, "input[type=submit]").unwrap();
        assert_eq!(plan.fields[0], ("doctype".to_string(), "xhtml".to_string()));
    }
}
