//! Hit descriptions shared by both damage models

use serde::{Deserialize, Serialize};

/// Where a hit lands on the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitZone {
    Body,
    Back,
    /// Head or tumor
    Precision,
    /// Occiput or back tumor
    PrecisionBack,
}

impl HitZone {
    /// Get all hit zones
    pub fn all() -> &'static [HitZone] {
        &[
            HitZone::Body,
            HitZone::Back,
            HitZone::Precision,
            HitZone::PrecisionBack,
        ]
    }

    pub fn is_precision(&self) -> bool {
        matches!(self, HitZone::Precision | HitZone::PrecisionBack)
    }

    pub fn is_back(&self) -> bool {
        matches!(self, HitZone::Back | HitZone::PrecisionBack)
    }

    /// Whether separate armor plating covers this zone
    pub fn is_armored(&self) -> bool {
        !self.is_precision()
    }
}

/// Which precision spot a zone maps to on a particular target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    Body,
    Back,
    Head,
    Tumor,
    Occiput,
    BackTumor,
}

/// Target-side multipliers that feed the damage formulas.
///
/// `None` means the zone does not exist on this target and the matching
/// factor is skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetMultipliers {
    pub precision: Option<f64>,
    pub back: Option<f64>,
}

impl TargetMultipliers {
    pub fn new(precision: Option<f64>, back: Option<f64>) -> Self {
        TargetMultipliers { precision, back }
    }

    /// A target with neither precision spots nor back multiplier
    pub fn none() -> Self {
        Self::default()
    }
}

/// How a single hit is delivered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub precision: bool,
    pub back: bool,
    /// Target is asleep (melee only)
    pub sleeping: bool,
    /// Compute stagger damage instead of health damage
    pub stagger: bool,
    /// Damage booster multiplier, 1.17 for a 17% booster
    pub booster: f64,
}

impl Default for Hit {
    fn default() -> Self {
        Hit::body()
    }
}

impl Hit {
    /// Plain body hit with no booster
    pub fn body() -> Self {
        Hit {
            precision: false,
            back: false,
            sleeping: false,
            stagger: false,
            booster: 1.0,
        }
    }

    pub fn zone(zone: HitZone) -> Self {
        Hit {
            precision: zone.is_precision(),
            back: zone.is_back(),
            ..Hit::body()
        }
    }

    pub fn to_precision(mut self) -> Self {
        self.precision = true;
        self
    }

    pub fn to_back(mut self) -> Self {
        self.back = true;
        self
    }

    pub fn on_sleeping(mut self, sleeping: bool) -> Self {
        self.sleeping = sleeping;
        self
    }

    pub fn as_stagger(mut self, stagger: bool) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_booster(mut self, booster: f64) -> Self {
        self.booster = booster;
        self
    }

    /// Same hit measured against health rather than stagger
    pub fn health_damage(mut self) -> Self {
        self.stagger = false;
        self
    }
}
