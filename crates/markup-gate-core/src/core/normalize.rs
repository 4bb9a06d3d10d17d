// crates/markup-gate-core/src/core/normalize.rs
// ============================================================================
// Module: Markup Normalizer
// Description: Whitespace compression for markup submitted to a form field.
// Purpose: Produce a single-line markup string suitable for a text input.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The external validation service accepts markup pasted into a plain-text
//! form field. Raw page markup carries line breaks and indentation that add
//! nothing to validation; this module collapses it into a single line. No
//! escaping is performed, the target field is plain text.

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Collapses markup into a single-line, whitespace-compressed string.
///
/// Carriage returns, line feeds, and tabs are removed; every remaining run
/// of whitespace collapses to a single space. Idempotent.
#[must_use]
pub fn normalize_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut pending_space = false;
    for ch in markup.chars() {
        match ch {
            // Removed outright, before run collapsing.
            '\r' | '\n' | '\t' => {}
            c if c.is_whitespace() => pending_space = true,
            c => {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(c);
            }
        }
    }
    if pending_space {
        out.push(' ');
    }
    out
}

// ============================================================================
// SECTION: Tests
// ============================================================================
