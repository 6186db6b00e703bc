//! Melee damage - charge interpolation and the oneshot charge solver

use super::{back_factor, conditional_factor, precision_factor, round_damage};
use crate::types::{Hit, TargetMultipliers};
use tracing::debug;
use weapon_core::MeleeWeapon;

/// Bisection steps for the numeric charge solver
const SOLVER_ITERATIONS: u32 = 60;

/// Damage as a function of charge fraction (0 = light attack, 1 = fully charged)
#[derive(Debug, Clone, Copy)]
pub struct MeleeDamageModel<'a> {
    weapon: &'a MeleeWeapon,
}

impl<'a> MeleeDamageModel<'a> {
    pub fn new(weapon: &'a MeleeWeapon) -> Self {
        MeleeDamageModel { weapon }
    }

    pub fn weapon(&self) -> &'a MeleeWeapon {
        self.weapon
    }

    /// Base damage at a charge, before any multipliers. The charge is not clamped.
    pub fn base_damage_for_charge(&self, charge: f64) -> f64 {
        self.weapon.damage.at(charge)
    }

    /// Damage dealt by one attack at `charge`, rounded.
    ///
    /// Every weapon multiplier follows the same cubic charge curve as damage.
    /// Armor is not applied here.
    pub fn damage(&self, charge: f64, target: TargetMultipliers, hit: Hit) -> f64 {
        let weapon = self.weapon;
        let precision = precision_factor(
            hit.precision,
            target.precision,
            weapon.precision_multiplier.at(charge),
        );
        let back = back_factor(hit.back, target.back, weapon.back_multiplier.at(charge));
        let sleep = conditional_factor(hit.sleeping, weapon.sleep_multiplier.at(charge));
        let stagger = conditional_factor(hit.stagger, weapon.stagger_multiplier.at(charge));

        let base = self.base_damage_for_charge(charge);
        round_damage(base * precision * back * sleep * stagger * hit.booster)
    }

    /// Stamina spent by an attack at `charge`
    pub fn stamina_cost(&self, charge: f64) -> f64 {
        self.weapon.stamina_cost.at(charge)
    }

    /// Multiplier against environment objects (doors, locks) at `charge`
    pub fn environment_multiplier(&self, charge: f64) -> f64 {
        self.weapon.environment_multiplier.at(charge)
    }

    /// Smallest charge at which an attack kills a target with `health`.
    ///
    /// Inverts `light + (charged - light) * charge^3` using the light and full
    /// charge damage. Returns 0 when that inversion has no real answer, which
    /// includes targets that already die to a light attack. A result above 1
    /// means even a full charge does not kill; check full-charge damage first.
    ///
    /// The inversion is exact while at most one of the composed curves changes
    /// with charge; see [`Self::oneshot_charge_numeric`] otherwise.
    pub fn oneshot_charge(&self, health: f64, target: TargetMultipliers, hit: Hit) -> f64 {
        let hit = hit.health_damage();
        let light = self.damage(0.0, target, hit);
        let charged = self.damage(1.0, target, hit);

        let charge = ((health - light) / (charged - light)).powf(1.0 / 3.0);
        if charge.is_finite() {
            charge
        } else {
            debug!(
                weapon = %self.weapon.name,
                light,
                charged,
                health,
                "oneshot charge has no real solution"
            );
            0.0
        }
    }

    /// Smallest charge in [0, 1] at which the full damage formula reaches `health`,
    /// found by bisection.
    ///
    /// Returns `None` when a full charge does not kill. Assumes damage does not
    /// decrease with charge.
    pub fn oneshot_charge_numeric(
        &self,
        health: f64,
        target: TargetMultipliers,
        hit: Hit,
    ) -> Option<f64> {
        let hit = hit.health_damage();
        if self.damage(1.0, target, hit) < health {
            return None;
        }
        if self.damage(0.0, target, hit) >= health {
            return Some(0.0);
        }

        let (mut low, mut high) = (0.0, 1.0);
        for _ in 0..SOLVER_ITERATIONS {
            let mid = (low + high) / 2.0;
            if self.damage(mid, target, hit) >= health {
                high = mid;
            } else {
                low = mid;
            }
        }
        Some(high)
    }
}
