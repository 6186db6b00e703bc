use super::{MeleeDamageModel, RangedDamageModel};
use crate::types::{Hit, TargetMultipliers};
use weapon_core::Weapon;

/// Damage model for either weapon family.
///
/// The independent variable is distance for ranged weapons and charge for melee.
#[derive(Debug, Clone, Copy)]
pub enum DamageModel<'a> {
    Ranged(RangedDamageModel<'a>),
    Melee(MeleeDamageModel<'a>),
}

impl<'a> DamageModel<'a> {
    pub fn new(weapon: &'a Weapon) -> Self {
        match weapon {
            Weapon::Ranged(w) => DamageModel::Ranged(RangedDamageModel::new(w)),
            Weapon::Melee(w) => DamageModel::Melee(MeleeDamageModel::new(w)),
        }
    }

    /// Base damage before multipliers at a distance or charge
    pub fn base_damage(&self, at: f64) -> f64 {
        match self {
            DamageModel::Ranged(model) => model.base_damage_for_distance(at),
            DamageModel::Melee(model) => model.base_damage_for_charge(at),
        }
    }

    /// Rounded hit damage at a distance or charge
    pub fn damage(&self, at: f64, target: TargetMultipliers, hit: Hit) -> f64 {
        match self {
            DamageModel::Ranged(model) => model.damage(at, target, hit),
            DamageModel::Melee(model) => model.damage(at, target, hit),
        }
    }

    pub fn is_ranged(&self) -> bool {
        matches!(self, DamageModel::Ranged(_))
    }
}

impl<'a> From<&'a Weapon> for DamageModel<'a> {
    fn from(weapon: &'a Weapon) -> Self {
        DamageModel::new(weapon)
    }
}
