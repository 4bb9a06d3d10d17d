// crates/markup-gate-session/src/lib.rs
// ============================================================================
// Module: Markup Gate Session
// Description: Bundled WebSession implementation over plain HTTP.
// Purpose: Drive the validation service without a real browser.
// Dependencies: markup-gate-core, reqwest, scraper, url
// ============================================================================

//! ## Overview
//! This crate ships the bundled [`markup_gate_core::WebSession`] driver: a
//! blocking HTTP client paired with a CSS-selector DOM layer. Pages are
//! fetched and held as raw HTML; element handles resolve against the
//! current document; pressing a submit control serializes its enclosing
//! form and performs the submission, replacing the current page.
//! Invariants:
//! - Connection-level failures surface as `SessionError::Transport`; a
//!   delivered response with an HTTP error status replaces the page and is
//!   reported as success.
//! - Handles issued before the last navigation are rejected as stale.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod form;
pub mod http;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use http::HttpSession;
pub use http::HttpSessionConfig;
