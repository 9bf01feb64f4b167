//! Risk configuration loading.

use std::path::Path;

use bondrisk_core::RiskConfig;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Loads a `RiskConfig` from a TOML file, or the defaults without one.
///
/// Missing keys take their default values; the result is validated.
pub fn load(path: Option<&Path>) -> CliResult<RiskConfig> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let config = parse(&content)?;
            debug!(path = %path.display(), "loaded risk configuration");
            config
        }
        None => RiskConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn parse(content: &str) -> CliResult<RiskConfig> {
    toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
}
