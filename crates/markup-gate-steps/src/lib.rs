// crates/markup-gate-steps/src/lib.rs
// ============================================================================
// Module: Markup Gate Steps
// Description: Step-level textual surface for scenario runners.
// Purpose: Map legacy step phrases onto the gate's operations.
// Dependencies: markup-gate-config, markup-gate-core, regex
// ============================================================================

//! ## Overview
//! Scenario runners drive the gate through three textual steps: a trigger
//! phrase starting the validation round trip, and two assertion phrases
//! carrying a natural-language count expression. This crate parses those
//! phrases and executes them against an injected session, holding the
//! diagnostic report across the steps of one scenario.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod executor;
pub mod registry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use executor::StepExecutor;
pub use executor::StepFailure;
pub use registry::Step;
pub use registry::StepRegistry;
pub use registry::StepRegistryError;
