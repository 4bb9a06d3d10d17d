// crates/markup-gate-config/tests/common/mod.rs
// ============================================================================
// Module: Config Test Helpers
// Description: Temp-file fixtures for config loading tests.
// Purpose: Write TOML content to disk and load it through the public API.
// Dependencies: markup-gate-config, tempfile
// ============================================================================

//! Shared fixtures for configuration tests.

use std::io::Write;

use markup_gate_config::ConfigError;
use markup_gate_config::MarkupGateConfig;
use tempfile::NamedTempFile;

/// Writes the content to a temp file and loads it as configuration.
pub fn load_from_str(content: &str) -> Result<MarkupGateConfig, ConfigError> {
    let mut file =
        NamedTempFile::new().map_err(|err| ConfigError::Io(err.to_string()))?;
    file.write_all(content.as_bytes()).map_err(|err| ConfigError::Io(err.to_string()))?;
    MarkupGateConfig::load(Some(file.path()))
}
