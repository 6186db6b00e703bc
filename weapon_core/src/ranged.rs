//! Ranged weapon records

use crate::types::EquipmentSlot;
use crate::WeaponError;
use serde::{Deserialize, Serialize};

/// Distance band over which ranged damage decays linearly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Falloff {
    /// Distance up to which full damage is dealt
    pub start: f64,
    /// Distance from which only the damage floor is dealt
    pub end: f64,
}

impl Falloff {
    pub fn new(start: f64, end: f64) -> Result<Self, WeaponError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(WeaponError::NonFinite("falloff".to_string()));
        }
        if start > end {
            return Err(WeaponError::InvertedFalloff { start, end });
        }
        Ok(Falloff { start, end })
    }

    /// Width of the decay region
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Stat sheet of a ranged weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangedWeaponRecord", into = "RangedWeaponRecord")]
pub struct RangedWeapon {
    /// Display name
    pub name: String,
    /// Internal/technical name, when the catalog carries one
    pub technical_name: Option<String>,
    pub slot: EquipmentSlot,
    /// Hit damage at or inside the falloff start
    pub damage: f64,
    /// Applied instead of health damage when computing stagger damage
    pub stagger_multiplier: f64,
    /// Combined multiplicatively with the target's precision multiplier
    pub precision_multiplier: f64,
    /// `None` means the weapon has no range falloff
    pub falloff: Option<Falloff>,
    /// Whether back-hit multipliers apply to this weapon at all
    pub has_back_damage: bool,
}

impl RangedWeapon {
    /// Create a weapon with neutral multipliers and no falloff
    pub fn new(name: impl Into<String>, damage: f64) -> Self {
        RangedWeapon {
            name: name.into(),
            technical_name: None,
            slot: EquipmentSlot::Primary,
            damage,
            stagger_multiplier: 1.0,
            precision_multiplier: 1.0,
            falloff: None,
            has_back_damage: true,
        }
    }

    pub fn with_technical_name(mut self, technical_name: impl Into<String>) -> Self {
        self.technical_name = Some(technical_name.into());
        self
    }

    pub fn with_slot(mut self, slot: EquipmentSlot) -> Self {
        self.slot = slot;
        self
    }

    pub fn with_falloff(mut self, start: f64, end: f64) -> Self {
        self.falloff = Some(Falloff { start, end });
        self
    }

    pub fn with_precision_multiplier(mut self, multiplier: f64) -> Self {
        self.precision_multiplier = multiplier;
        self
    }

    pub fn with_stagger_multiplier(mut self, multiplier: f64) -> Self {
        self.stagger_multiplier = multiplier;
        self
    }

    pub fn without_back_damage(mut self) -> Self {
        self.has_back_damage = false;
        self
    }

    /// Check the record invariants
    pub fn validate(&self) -> Result<(), WeaponError> {
        if self.name.trim().is_empty() {
            return Err(WeaponError::EmptyName);
        }
        for (field, value) in [
            ("damage", self.damage),
            ("stagger_multiplier", self.stagger_multiplier),
            ("precision_multiplier", self.precision_multiplier),
        ] {
            if !value.is_finite() {
                return Err(WeaponError::NonFinite(field.to_string()));
            }
        }
        if self.damage < 0.0 {
            return Err(WeaponError::NegativeDamage(self.damage));
        }
        if let Some(falloff) = self.falloff {
            Falloff::new(falloff.start, falloff.end)?;
        }
        Ok(())
    }

    /// Whether the stagger multiplier changes anything
    pub fn has_stagger_bonus(&self) -> bool {
        self.stagger_multiplier != 1.0
    }

    /// Name shown to players, with the technical name when known
    pub fn title(&self) -> String {
        match &self.technical_name {
            Some(technical) => format!("{} ({})", self.name, technical),
            None => self.name.clone(),
        }
    }
}

/// Catalog shape of a ranged weapon, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangedWeaponRecord {
    pub name: String,
    #[serde(default)]
    pub technical_name: Option<String>,
    #[serde(default)]
    pub slot: EquipmentSlot,
    pub damage: f64,
    #[serde(default = "default_multiplier")]
    pub stagger_multiplier: f64,
    #[serde(default = "default_multiplier")]
    pub precision_multiplier: f64,
    #[serde(default)]
    pub falloff_start: Option<f64>,
    #[serde(default)]
    pub falloff_end: Option<f64>,
    #[serde(default = "default_has_back_damage")]
    pub has_back_damage: bool,
}

fn default_multiplier() -> f64 {
    1.0
}

fn default_has_back_damage() -> bool {
    true
}

impl TryFrom<RangedWeaponRecord> for RangedWeapon {
    type Error = WeaponError;

    fn try_from(record: RangedWeaponRecord) -> Result<Self, Self::Error> {
        let falloff = match (record.falloff_start, record.falloff_end) {
            (Some(start), Some(end)) => Some(Falloff::new(start, end)?),
            (None, None) => None,
            _ => return Err(WeaponError::PartialFalloff(record.name)),
        };

        let weapon = RangedWeapon {
            name: record.name,
            technical_name: record.technical_name,
            slot: record.slot,
            damage: record.damage,
            stagger_multiplier: record.stagger_multiplier,
            precision_multiplier: record.precision_multiplier,
            falloff,
            has_back_damage: record.has_back_damage,
        };
        weapon.validate()?;
        Ok(weapon)
    }
}

impl From<RangedWeapon> for RangedWeaponRecord {
    fn from(weapon: RangedWeapon) -> Self {
        RangedWeaponRecord {
            name: weapon.name,
            technical_name: weapon.technical_name,
            slot: weapon.slot,
            damage: weapon.damage,
            stagger_multiplier: weapon.stagger_multiplier,
            precision_multiplier: weapon.precision_multiplier,
            falloff_start: weapon.falloff.map(|f| f.start),
            falloff_end: weapon.falloff.map(|f| f.end),
            has_back_damage: weapon.has_back_damage,
        }
    }
}
