// crates/markup-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Gate Runtime
// Description: Orchestration of the validation round trip and assertions.
// Purpose: Group retry, submitter, and assertion logic.
// Dependencies: crate submodules
// ============================================================================

//! Runtime side of the gate: everything that drives a [`crate::WebSession`].

pub mod assertions;
pub mod retry;
pub mod submitter;

pub use assertions::CountMismatch;
pub use assertions::assert_error_count;
pub use assertions::assert_warning_count;
pub use retry::RetryPolicy;
pub use submitter::CheckError;
pub use submitter::ValidationSubmitter;
