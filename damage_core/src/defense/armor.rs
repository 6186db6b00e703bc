//! Armor - flat multiplier on non-precision damage
//!
//! Armor multipliers are applied after the damage models have rounded their
//! figure, and the product is rounded again.

use crate::damage::round_damage;

/// Damage after an armor multiplier, rounded
pub fn apply_armor(damage: f64, armor_multiplier: f64) -> f64 {
    round_damage(damage * armor_multiplier)
}

/// Number of hits needed to deplete `pool` (health or stagger HP)
///
/// Returns `None` when the hit deals no damage.
pub fn hits_to_kill(pool: f64, damage: f64) -> Option<u32> {
    if !damage.is_finite() || damage <= 0.0 {
        return None;
    }
    let hits = (pool / damage).ceil();
    if hits > u32::MAX as f64 {
        None
    } else {
        Some(hits.max(0.0) as u32)
    }
}
