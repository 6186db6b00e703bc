//! Damage model constants

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use tracing::info;

use super::ConfigError;

/// Global damage constants instance
static DAMAGE_CONSTANTS: OnceLock<DamageConstants> = OnceLock::new();

/// Initialize the global damage constants from a TOML file
///
/// Call once at startup, before the first damage evaluation.
/// Returns error if already initialized or if loading fails.
pub fn init_constants(path: &Path) -> Result<(), ConfigError> {
    let constants = DamageConstants::load_from_path(path)?;
    info!(
        floor = constants.falloff.floor,
        decimals = constants.output.decimals,
        "loaded damage constants from {}",
        path.display()
    );
    DAMAGE_CONSTANTS
        .set(constants)
        .map_err(|_| ConfigError::ValidationError("DamageConstants already initialized".to_string()))
}

/// Initialize the global damage constants with default values
pub fn init_constants_default() -> Result<(), ConfigError> {
    DAMAGE_CONSTANTS
        .set(DamageConstants::default())
        .map_err(|_| ConfigError::ValidationError("DamageConstants already initialized".to_string()))
}

/// Get a reference to the global damage constants
///
/// Falls back to the defaults if nothing was initialized.
pub fn constants() -> &'static DamageConstants {
    DAMAGE_CONSTANTS.get_or_init(DamageConstants::default)
}

/// Check if constants have been initialized
pub fn constants_initialized() -> bool {
    DAMAGE_CONSTANTS.get().is_some()
}

/// Tunable damage constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageConstants {
    #[serde(default)]
    pub falloff: FalloffConstants,
    #[serde(default)]
    pub output: OutputConstants,
}

impl DamageConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: DamageConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: DamageConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let floor = self.falloff.floor;
        if !(floor > 0.0 && floor <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "falloff.floor must be in (0, 1], got {floor}"
            )));
        }
        if self.output.decimals > 10 {
            return Err(ConfigError::ValidationError(format!(
                "output.decimals must be at most 10, got {}",
                self.output.decimals
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FalloffConstants {
    /// Fraction of base damage still dealt at and beyond the falloff end
    #[serde(default = "default_floor")]
    pub floor: f64,
}

impl Default for FalloffConstants {
    fn default() -> Self {
        FalloffConstants {
            floor: default_floor(),
        }
    }
}

fn default_floor() -> f64 {
    0.1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConstants {
    /// Decimal places every damage figure is rounded to
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

impl Default for OutputConstants {
    fn default() -> Self {
        OutputConstants {
            decimals: default_decimals(),
        }
    }
}

fn default_decimals() -> u32 {
    2
}
