//! weapon_core - Weapon stat records
//!
//! Ranged weapons carry a flat damage value with a distance falloff band.
//! Melee weapons carry light/charged pairs interpolated over charge.

pub mod melee;
pub mod ranged;
pub mod types;

pub use melee::{MeleeWeapon, MeleeWeaponRecord};
pub use ranged::{Falloff, RangedWeapon, RangedWeaponRecord};
pub use types::{ChargeCurve, EquipmentSlot};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid weapon record
#[derive(Debug, Error, PartialEq)]
pub enum WeaponError {
    #[error("Weapon name is empty")]
    EmptyName,
    #[error("Non-finite value for '{0}'")]
    NonFinite(String),
    #[error("Negative damage: {0}")]
    NegativeDamage(f64),
    #[error("Falloff start {start} is beyond falloff end {end}")]
    InvertedFalloff { start: f64, end: f64 },
    #[error("Weapon '{0}' has only one falloff bound")]
    PartialFalloff(String),
}

/// Either weapon family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Weapon {
    #[serde(alias = "gun")]
    Ranged(RangedWeapon),
    Melee(MeleeWeapon),
}

impl Weapon {
    pub fn name(&self) -> &str {
        match self {
            Weapon::Ranged(w) => &w.name,
            Weapon::Melee(w) => &w.name,
        }
    }

    pub fn slot(&self) -> EquipmentSlot {
        match self {
            Weapon::Ranged(w) => w.slot,
            Weapon::Melee(_) => EquipmentSlot::Melee,
        }
    }

    pub fn as_ranged(&self) -> Option<&RangedWeapon> {
        match self {
            Weapon::Ranged(w) => Some(w),
            Weapon::Melee(_) => None,
        }
    }

    pub fn as_melee(&self) -> Option<&MeleeWeapon> {
        match self {
            Weapon::Melee(w) => Some(w),
            Weapon::Ranged(_) => None,
        }
    }

    pub fn validate(&self) -> Result<(), WeaponError> {
        match self {
            Weapon::Ranged(w) => w.validate(),
            Weapon::Melee(w) => w.validate(),
        }
    }
}

impl From<RangedWeapon> for Weapon {
    fn from(weapon: RangedWeapon) -> Self {
        Weapon::Ranged(weapon)
    }
}

impl From<MeleeWeapon> for Weapon {
    fn from(weapon: MeleeWeapon) -> Self {
        Weapon::Melee(weapon)
    }
}
