//! Target defensive profile

use crate::types::{HitZone, TargetMultipliers, ZoneKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid target record
#[derive(Debug, Error, PartialEq)]
pub enum TargetError {
    #[error("Health must be positive and finite, got {0}")]
    InvalidHealth(f64),
    #[error("Stagger HP must be positive and finite, got {0}")]
    InvalidStaggerHp(f64),
    #[error("Non-finite value for '{0}'")]
    NonFinite(String),
}

/// Defensive stats of the enemy being hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TargetRecord", into = "TargetRecord")]
pub struct TargetProfile {
    pub name: String,
    health: f64,
    precision_multiplier: Option<f64>,
    back_multiplier: Option<f64>,
    armor_multiplier: Option<f64>,
    whole_body_armor: bool,
    stagger_hp: Option<f64>,
    has_head: bool,
    has_tumors: bool,
}

impl TargetProfile {
    /// Create a target with the given health and no special zones
    pub fn new(name: impl Into<String>, health: f64) -> Result<Self, TargetError> {
        if !(health.is_finite() && health > 0.0) {
            return Err(TargetError::InvalidHealth(health));
        }
        Ok(TargetProfile {
            name: name.into(),
            health,
            precision_multiplier: None,
            back_multiplier: None,
            armor_multiplier: None,
            whole_body_armor: false,
            stagger_hp: None,
            has_head: false,
            has_tumors: false,
        })
    }

    /// Target with a head taking the given precision multiplier
    pub fn with_head(mut self, precision_multiplier: f64) -> Self {
        self.precision_multiplier = Some(precision_multiplier);
        self.has_head = true;
        self
    }

    /// Target whose precision spots are tumors
    pub fn with_tumors(mut self, precision_multiplier: f64) -> Self {
        self.precision_multiplier = Some(precision_multiplier);
        self.has_tumors = true;
        self
    }

    pub fn with_back_multiplier(mut self, multiplier: f64) -> Self {
        self.back_multiplier = Some(multiplier);
        self
    }

    /// Armor covering the non-precision zones
    pub fn with_armor(mut self, multiplier: f64, whole_body: bool) -> Self {
        self.armor_multiplier = Some(multiplier);
        self.whole_body_armor = whole_body;
        self
    }

    pub fn with_stagger_hp(mut self, stagger_hp: f64) -> Self {
        self.stagger_hp = Some(stagger_hp);
        self
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn precision_multiplier(&self) -> Option<f64> {
        self.precision_multiplier
    }

    pub fn back_multiplier(&self) -> Option<f64> {
        self.back_multiplier
    }

    pub fn armor_multiplier(&self) -> Option<f64> {
        self.armor_multiplier
    }

    pub fn stagger_hp(&self) -> Option<f64> {
        self.stagger_hp
    }

    pub fn has_head(&self) -> bool {
        self.has_head
    }

    pub fn has_tumors(&self) -> bool {
        self.has_tumors
    }

    pub fn is_whole_body_armor(&self) -> bool {
        self.whole_body_armor
    }

    /// Armor folded straight into the headline figures
    pub fn whole_body_armor(&self) -> Option<f64> {
        self.armor_multiplier.filter(|_| self.whole_body_armor)
    }

    /// Armor reported as a separate "armored" variant
    pub fn plate_armor(&self) -> Option<f64> {
        self.armor_multiplier.filter(|_| !self.whole_body_armor)
    }

    /// Whether the target has a head or tumors to aim for
    pub fn has_precision_spot(&self) -> bool {
        self.has_head || self.has_tumors
    }

    pub fn multipliers(&self) -> TargetMultipliers {
        TargetMultipliers::new(self.precision_multiplier, self.back_multiplier)
    }

    /// Whether hits to this zone are worth reporting for this target
    pub fn has_zone(&self, zone: HitZone) -> bool {
        match zone {
            HitZone::Body => true,
            HitZone::Back => self.back_multiplier.is_some_and(|m| m != 1.0),
            HitZone::Precision => self.precision_multiplier.is_some(),
            HitZone::PrecisionBack => self.has_precision_spot() && self.back_multiplier.is_some(),
        }
    }

    /// Concrete body part a zone refers to on this target
    pub fn zone_kind(&self, zone: HitZone) -> ZoneKind {
        match zone {
            HitZone::Body => ZoneKind::Body,
            HitZone::Back => ZoneKind::Back,
            HitZone::Precision if self.has_head => ZoneKind::Head,
            HitZone::Precision => ZoneKind::Tumor,
            HitZone::PrecisionBack if self.has_tumors => ZoneKind::BackTumor,
            HitZone::PrecisionBack => ZoneKind::Occiput,
        }
    }
}

/// Catalog shape of a target, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRecord {
    pub name: String,
    pub health: f64,
    #[serde(default)]
    pub precision_multiplier: Option<f64>,
    #[serde(default)]
    pub back_multiplier: Option<f64>,
    #[serde(default)]
    pub armor_multiplier: Option<f64>,
    #[serde(default)]
    pub whole_body_armor: bool,
    #[serde(default)]
    pub stagger_hp: Option<f64>,
    #[serde(default)]
    pub has_head: bool,
    #[serde(default)]
    pub has_tumors: bool,
}

impl TryFrom<TargetRecord> for TargetProfile {
    type Error = TargetError;

    fn try_from(record: TargetRecord) -> Result<Self, Self::Error> {
        let mut target = TargetProfile::new(record.name, record.health)?;

        for (field, value) in [
            ("precisionMultiplier", record.precision_multiplier),
            ("backMultiplier", record.back_multiplier),
            ("armorMultiplier", record.armor_multiplier),
        ] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(TargetError::NonFinite(field.to_string()));
            }
        }
        if let Some(stagger_hp) = record.stagger_hp {
            if !(stagger_hp.is_finite() && stagger_hp > 0.0) {
                return Err(TargetError::InvalidStaggerHp(stagger_hp));
            }
        }

        target.precision_multiplier = record.precision_multiplier;
        target.back_multiplier = record.back_multiplier;
        target.armor_multiplier = record.armor_multiplier;
        target.whole_body_armor = record.whole_body_armor;
        target.stagger_hp = record.stagger_hp;
        target.has_head = record.has_head;
        target.has_tumors = record.has_tumors;
        Ok(target)
    }
}

impl From<TargetProfile> for TargetRecord {
    fn from(target: TargetProfile) -> Self {
        TargetRecord {
            name: target.name,
            health: target.health,
            precision_multiplier: target.precision_multiplier,
            back_multiplier: target.back_multiplier,
            armor_multiplier: target.armor_multiplier,
            whole_body_armor: target.whole_body_armor,
            stagger_hp: target.stagger_hp,
            has_head: target.has_head,
            has_tumors: target.has_tumors,
        }
    }
}
