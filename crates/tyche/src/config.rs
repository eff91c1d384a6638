//! TOML configuration for chart calculation.
//!
//! ```toml
//! ephemeris_path = "/usr/local/share/swisseph"
//! house_system = "placidus"
//!
//! [orbs]
//! sextile = 4.0
//! ```

use crate::aspects::{AspectCalculator, OrbSettings};
use crate::chart::ChartAssembler;
use crate::ephemeris::SwissEphemerisAdapter;
use crate::houses::HouseSystem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const CONFIG_ENV_VAR: &str = "TYCHE_CONFIG";

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/tyche.toml", "../../configs/tyche.toml"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TycheConfig {
    /// Swiss Ephemeris data directory; unset falls back to the environment
    pub ephemeris_path: Option<PathBuf>,
    pub house_system: HouseSystem,
    pub orbs: OrbSettings,
}

impl TycheConfig {
    /// Assembler backed by the Swiss Ephemeris, using these settings.
    pub fn build_assembler(&self) -> Arc<ChartAssembler> {
        let adapter = SwissEphemerisAdapter::new(self.ephemeris_path.clone());
        ChartAssembler::with_aspect_calculator(
            Arc::new(adapter),
            AspectCalculator::with_orbs(self.orbs),
        )
    }
}

pub fn parse_config(text: &str) -> anyhow::Result<TycheConfig> {
    toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse tyche config: {e}"))
}

/// Load the configuration.
///
/// An explicit path, or `TYCHE_CONFIG`, must exist. Otherwise the common
/// relative locations are tried and defaults are used when none exists.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<TycheConfig> {
    let explicit = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

    if let Some(path) = explicit {
        let text = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        return parse_config(&text);
    }

    for p in &DEFAULT_CONFIG_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            log::info!("Loaded config from {}", p);
            return parse_config(&text);
        }
    }

    log::debug!("No config found in {:?}, using defaults", DEFAULT_CONFIG_PATHS);
    Ok(TycheConfig::default())
}
