// crates/markup-gate-core/src/core/mod.rs
// ============================================================================
// Module: Core Domain Model
// Description: Pure domain types and functions for the markup gate.
// Purpose: Group normalization, count parsing, report, and selector types.
// Dependencies: crate submodules
// ============================================================================

//! Pure domain model: no I/O, no session access.

pub mod count;
pub mod normalize;
pub mod report;
pub mod selectors;
