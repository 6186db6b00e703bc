//! Damage models - per-hit damage for ranged and melee weapons
//!
//! Both models build the final figure the same way:
//! base curve × precision × back (× sleep) × stagger × booster,
//! rounded to the configured output precision.

mod melee;
mod model;
mod ranged;

pub use melee::MeleeDamageModel;
pub use model::DamageModel;
pub use ranged::{OneshotDistance, RangedDamageModel};

use crate::config::constants;

/// Precision factor for a hit.
///
/// Applies only to precision hits on targets that have a precision multiplier.
/// A combined multiplier below 1 never reduces damage.
pub fn precision_factor(is_precision: bool, target: Option<f64>, weapon: f64) -> f64 {
    match target {
        Some(target) if is_precision => (weapon * target).max(1.0),
        _ => 1.0,
    }
}

/// Back factor for a hit. Unlike precision, this may reduce damage.
pub fn back_factor(is_back: bool, target: Option<f64>, weapon: f64) -> f64 {
    match target {
        Some(target) if is_back => target * weapon,
        _ => 1.0,
    }
}

/// `multiplier` when the condition holds, otherwise neutral
pub fn conditional_factor(applies: bool, multiplier: f64) -> f64 {
    if applies {
        multiplier
    } else {
        1.0
    }
}

/// Round a figure to the configured number of decimals
pub fn round_damage(value: f64) -> f64 {
    round_to(value, constants().output.decimals)
}

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
