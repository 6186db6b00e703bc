use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment slot a weapon occupies in the loadout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    #[default]
    #[serde(alias = "Primary")]
    Primary,
    #[serde(alias = "Special")]
    Special,
    #[serde(alias = "Tool")]
    Tool,
    #[serde(alias = "Melee")]
    Melee,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Primary,
            EquipmentSlot::Special,
            EquipmentSlot::Tool,
            EquipmentSlot::Melee,
        ]
    }

    /// Whether weapons in this slot fire projectiles
    pub fn is_ranged(&self) -> bool {
        !matches!(self, EquipmentSlot::Melee)
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentSlot::Primary => write!(f, "Primary"),
            EquipmentSlot::Special => write!(f, "Special"),
            EquipmentSlot::Tool => write!(f, "Tool"),
            EquipmentSlot::Melee => write!(f, "Melee"),
        }
    }
}

/// A melee stat that scales between its light and fully charged value.
///
/// Every melee stat shares the same curve shape:
/// `light + (charged - light) * charge^3`, so most of the reward for charging
/// arrives near full charge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargeCurve {
    /// Value at charge 0 (light attack)
    pub light: f64,
    /// Value at charge 1 (fully charged attack)
    pub charged: f64,
}

impl ChargeCurve {
    pub const fn new(light: f64, charged: f64) -> Self {
        ChargeCurve { light, charged }
    }

    /// Curve with the same value at every charge
    pub const fn flat(value: f64) -> Self {
        ChargeCurve {
            light: value,
            charged: value,
        }
    }

    /// Evaluate the curve at a charge fraction. The charge is not clamped.
    pub fn at(&self, charge: f64) -> f64 {
        self.light + (self.charged - self.light) * charge.powi(3)
    }

    /// True when light and charged values are identical
    pub fn is_flat(&self) -> bool {
        self.light == self.charged
    }

    pub fn is_finite(&self) -> bool {
        self.light.is_finite() && self.charged.is_finite()
    }
}

impl Default for ChargeCurve {
    fn default() -> Self {
        ChargeCurve::flat(1.0)
    }
}

impl fmt::Display for ChargeCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_flat() {
            write!(f, "{}", self.light)
        } else {
            write!(f, "{} - {}", self.light, self.charged)
        }
    }
}
