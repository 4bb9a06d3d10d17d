// crates/markup-gate-config/src/lib.rs
// ============================================================================
// Module: Markup Gate Config
// Description: Configuration loading and validation for the markup gate.
// Purpose: Provide strict, fail-fast config parsing with hard limits.
// Dependencies: markup-gate-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits and is
//! validated as part of loading: a malformed settings file fails at
//! initialization, never at first use. The loaded struct is constructed
//! once and passed by reference into the gate; there is no hidden global
//! settings state.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::MarkupGateConfig;
pub use config::SessionConfig;
pub use config::ValidatorConfig;
