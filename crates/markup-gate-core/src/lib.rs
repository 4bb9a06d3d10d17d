// crates/markup-gate-core/src/lib.rs
// ============================================================================
// Module: Markup Gate Core
// Description: Domain model and runtime for the markup-validation gate.
// Purpose: Provide backend-agnostic validation round-trip logic.
// Dependencies: serde, thiserror, tracing
// ============================================================================

//! ## Overview
//! This crate holds everything needed to drive one validation round trip
//! against an external markup-validation service: markup normalization,
//! count expression parsing, the diagnostic report, the [`WebSession`]
//! interface seam, the bounded transport-retry helper, the submitter
//! orchestrating the round trip, and the count assertions consumed by
//! scenario steps.
//! Invariants:
//! - Transport faults are retried under an explicit [`RetryPolicy`];
//!   structural faults (missing page elements) fail immediately.
//! - A report passed to [`runtime::ValidationSubmitter::run`] is reset
//!   before the round trip, so no stale diagnostics survive.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::count::parse_count;
pub use self::core::normalize::normalize_markup;
pub use self::core::report::DiagnosticKind;
pub use self::core::report::ValidationReport;
pub use self::core::selectors::SelectorMap;
pub use self::core::selectors::SelectorRole;
pub use interfaces::ElementHandle;
pub use interfaces::SessionError;
pub use interfaces::WebSession;
pub use runtime::CheckError;
pub use runtime::CountMismatch;
pub use runtime::RetryPolicy;
pub use runtime::ValidationSubmitter;
pub use runtime::assert_error_count;
pub use runtime::assert_warning_count;
