//! Ranged damage - distance falloff and the oneshot distance solver

use super::{back_factor, conditional_factor, precision_factor, round_damage};
use crate::config::constants;
use crate::types::{Hit, TargetMultipliers};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use weapon_core::RangedWeapon;

/// Farthest distance at which a hit still kills outright
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OneshotDistance {
    /// Even the falloff floor is lethal
    Infinite,
    /// Oneshots up to this distance
    Within(f64),
}

impl OneshotDistance {
    pub fn is_infinite(&self) -> bool {
        matches!(self, OneshotDistance::Infinite)
    }

    pub fn distance(&self) -> Option<f64> {
        match self {
            OneshotDistance::Infinite => None,
            OneshotDistance::Within(d) => Some(*d),
        }
    }
}

impl fmt::Display for OneshotDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OneshotDistance::Infinite => write!(f, "∞"),
            OneshotDistance::Within(d) => write!(f, "{d:.2}"),
        }
    }
}

/// Damage as a function of hit distance
#[derive(Debug, Clone, Copy)]
pub struct RangedDamageModel<'a> {
    weapon: &'a RangedWeapon,
}

impl<'a> RangedDamageModel<'a> {
    pub fn new(weapon: &'a RangedWeapon) -> Self {
        RangedDamageModel { weapon }
    }

    pub fn weapon(&self) -> &'a RangedWeapon {
        self.weapon
    }

    /// Base damage at a distance, before any multipliers.
    ///
    /// Full damage up to the falloff start, the floor fraction from the falloff
    /// end onwards, and a linear decay (never below the floor) in between.
    /// Weapons without falloff always deal full damage.
    pub fn base_damage_for_distance(&self, distance: f64) -> f64 {
        let damage = self.weapon.damage;
        let Some(falloff) = self.weapon.falloff else {
            return damage;
        };
        let floor = constants().falloff.floor;

        if distance <= falloff.start {
            return damage;
        }
        if distance >= falloff.end {
            return damage * floor;
        }
        let fraction = (1.0 - (distance - falloff.start) / falloff.span()).max(floor);
        damage * fraction
    }

    /// Damage dealt by one hit at `distance`, rounded.
    ///
    /// Armor is not applied here. `hit.sleeping` has no effect on ranged weapons.
    pub fn damage(&self, distance: f64, target: TargetMultipliers, hit: Hit) -> f64 {
        let precision = precision_factor(
            hit.precision,
            target.precision,
            self.weapon.precision_multiplier,
        );
        let back = back_factor(hit.back && self.weapon.has_back_damage, target.back, 1.0);
        let stagger = conditional_factor(hit.stagger, self.weapon.stagger_multiplier);

        let base = self.base_damage_for_distance(distance);
        round_damage(base * precision * back * stagger * hit.booster)
    }

    /// Maximum distance at which a hit still kills a target with `health`.
    ///
    /// Assumes point-blank damage already kills; the result is meaningless
    /// otherwise. Stagger is ignored since only health damage can kill.
    pub fn oneshot_distance(
        &self,
        health: f64,
        target: TargetMultipliers,
        hit: Hit,
    ) -> OneshotDistance {
        let point_blank = self.damage(0.0, target, hit.health_damage());

        let Some(falloff) = self.weapon.falloff else {
            debug!(weapon = %self.weapon.name, "no falloff, oneshots at any range");
            return OneshotDistance::Infinite;
        };
        if health <= point_blank * constants().falloff.floor {
            debug!(
                weapon = %self.weapon.name,
                point_blank,
                health,
                "falloff floor is lethal, oneshots at any range"
            );
            return OneshotDistance::Infinite;
        }

        let distance = falloff.start + falloff.span() * (1.0 - health / point_blank);
        OneshotDistance::Within(round_damage(distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HitZone;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn pistol() -> RangedWeapon {
        RangedWeapon::new("Pistol", 50.0).with_falloff(10.0, 30.0)
    }

    #[test]
    fn test_full_damage_inside_falloff_start() {
        let weapon = pistol();
        let model = RangedDamageModel::new(&weapon);
        assert!((model.base_damage_for_distance(0.0) - 50.0).abs() < EPS);
        assert!((model.base_damage_for_distance(10.0) - 50.0).abs() < EPS);
    }

    #[test]
    fn test_floor_beyond_falloff_end() {
        let weapon = pistol();
        let model = RangedDamageModel::new(&weapon);
        assert!((model.base_damage_for_distance(30.0) - 5.0).abs() < EPS);
        assert!((model.base_damage_for_distance(500.0) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_floor_clamps_inside_band() {
        // At 29m the linear fraction is 0.05, clamped up to 0.1
        let weapon = pistol();
        let model = RangedDamageModel::new(&weapon);
        assert!((model.base_damage_for_distance(29.0) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_no_falloff() {
        let weapon = RangedWeapon::new("Sentry", 12.0);
        let model = RangedDamageModel::new(&weapon);
        assert!((model.base_damage_for_distance(1000.0) - 12.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_band() {
        let weapon = RangedWeapon::new("Shotgun", 40.0).with_falloff(8.0, 8.0);
        let model = RangedDamageModel::new(&weapon);
        assert!((model.base_damage_for_distance(8.0) - 40.0).abs() < EPS);
        assert!((model.base_damage_for_distance(8.01) - 4.0).abs() < EPS);
    }

    #[test]
    fn test_distances_across_band() {
        let weapon = pistol();
        let model = RangedDamageModel::new(&weapon);
        let none = TargetMultipliers::none();
        assert_eq!(model.damage(10.0, none, Hit::body()), 50.0);
        assert_eq!(model.damage(30.0, none, Hit::body()), 5.0);
        // Halfway through the band: fraction 0.5
        assert_eq!(model.damage(20.0, none, Hit::body()), 25.0);
    }

    #[test]
    fn test_precision_and_back() {
        let weapon = pistol().with_precision_multiplier(2.0);
        let model = RangedDamageModel::new(&weapon);
        let target = TargetMultipliers::new(Some(3.0), Some(2.0));

        assert_eq!(model.damage(0.0, target, Hit::zone(HitZone::Precision)), 300.0);
        assert_eq!(model.damage(0.0, target, Hit::zone(HitZone::Back)), 100.0);
        assert_eq!(model.damage(0.0, target, Hit::zone(HitZone::PrecisionBack)), 600.0);
    }

    #[test]
    fn test_missing_target_multipliers_are_skipped() {
        let weapon = pistol().with_precision_multiplier(2.0);
        let model = RangedDamageModel::new(&weapon);
        let none = TargetMultipliers::none();
        assert_eq!(model.damage(0.0, none, Hit::zone(HitZone::PrecisionBack)), 50.0);
    }

    #[test]
    fn test_weak_precision_never_reduces_damage() {
        let weapon = pistol().with_precision_multiplier(0.5);
        let model = RangedDamageModel::new(&weapon);
        let target = TargetMultipliers::new(Some(1.5), None);
        assert_eq!(model.damage(0.0, target, Hit::zone(HitZone::Precision)), 50.0);
    }

    #[test]
    fn test_weapon_without_back_damage() {
        let weapon = pistol().without_back_damage();
        let model = RangedDamageModel::new(&weapon);
        let target = TargetMultipliers::new(None, Some(2.0));
        assert_eq!(model.damage(0.0, target, Hit::zone(HitZone::Back)), 50.0);
    }

    #[test]
    fn test_stagger_and_booster() {
        let weapon = pistol().with_stagger_multiplier(1.5);
        let model = RangedDamageModel::new(&weapon);
        let none = TargetMultipliers::none();
        assert_eq!(model.damage(0.0, none, Hit::body().as_stagger(true)), 75.0);
        assert!((model.damage(0.0, none, Hit::body().with_booster(1.17)) - 58.5).abs() < EPS);
        let boosted_stagger = model.damage(0.0, none, Hit::body().as_stagger(true).with_booster(1.17));
        assert!((boosted_stagger - 87.75).abs() < EPS);
    }

    #[test]
    fn test_sleeping_ignored() {
        let weapon = pistol();
        let model = RangedDamageModel::new(&weapon);
        let none = TargetMultipliers::none();
        assert_eq!(model.damage(0.0, none, Hit::body().on_sleeping(true)), 50.0);
    }

    #[test]
    fn test_oneshot_distance() {
        // 50 * (1 - (d - 10) / 20) = 40  =>  d = 14
        let weapon = pistol();
        let model = RangedDamageModel::new(&weapon);
        let result = model.oneshot_distance(40.0, TargetMultipliers::none(), Hit::body());
        assert_eq!(result, OneshotDistance::Within(14.0));
        assert_eq!(result.to_string(), "14.00");
    }

    #[test]
    fn test_oneshot_distance_infinite_when_floor_lethal() {
        let weapon = pistol();
        let model = RangedDamageModel::new(&weapon);
        let none = TargetMultipliers::none();
        assert!(model.oneshot_distance(5.0, none, Hit::body()).is_infinite());
        assert!(model.oneshot_distance(3.0, none, Hit::body()).is_infinite());
        assert!(!model.oneshot_distance(5.01, none, Hit::body()).is_infinite());
        assert_eq!(OneshotDistance::Infinite.to_string(), "∞");
    }

    #[test]
    fn test_oneshot_distance_without_falloff() {
        let weapon = RangedWeapon::new("Sentry", 12.0);
        let model = RangedDamageModel::new(&weapon);
        let result = model.oneshot_distance(10.0, TargetMultipliers::none(), Hit::body());
        assert_eq!(result, OneshotDistance::Infinite);
        assert_eq!(result.distance(), None);
    }

    #[test]
    fn test_oneshot_distance_with_precision() {
        // Head: 50 * 3 = 150 at point blank, 100 hp => 1 - 100/150 = 1/3 of the band
        let weapon = pistol();
        let model = RangedDamageModel::new(&weapon);
        let target = TargetMultipliers::new(Some(3.0), None);
        let result = model.oneshot_distance(100.0, target, Hit::zone(HitZone::Precision));
        assert_eq!(result, OneshotDistance::Within(16.67));
    }

    #[test]
    fn test_oneshot_distance_ignores_stagger() {
        let weapon = pistol().with_stagger_multiplier(3.0);
        let model = RangedDamageModel::new(&weapon);
        let none = TargetMultipliers::none();
        assert_eq!(
            model.oneshot_distance(40.0, none, Hit::body().as_stagger(true)),
            model.oneshot_distance(40.0, none, Hit::body())
        );
    }

    proptest! {
        #[test]
        fn prop_full_damage_before_start(
            damage in 1.0f64..500.0,
            start in 0.0f64..50.0,
            width in 0.0f64..100.0,
            t in 0.0f64..=1.0,
        ) {
            let weapon = RangedWeapon::new("Gun", damage).with_falloff(start, start + width);
            let model = RangedDamageModel::new(&weapon);
            prop_assert_eq!(model.base_damage_for_distance(start * t), damage);
        }

        #[test]
        fn prop_floor_after_end(
            damage in 1.0f64..500.0,
            start in 0.0f64..50.0,
            width in 0.0f64..100.0,
            beyond in 0.0f64..1000.0,
        ) {
            let weapon = RangedWeapon::new("Gun", damage).with_falloff(start, start + width);
            let model = RangedDamageModel::new(&weapon);
            let end = start + width;
            prop_assert!((model.base_damage_for_distance(end + beyond) - damage * 0.1).abs() < 1e-9);
        }

        #[test]
        fn prop_non_increasing_over_band(
            damage in 1.0f64..500.0,
            start in 0.0f64..50.0,
            width in 0.1f64..100.0,
            a in 0.0f64..=1.0,
            b in 0.0f64..=1.0,
        ) {
            let weapon = RangedWeapon::new("Gun", damage).with_falloff(start, start + width);
            let model = RangedDamageModel::new(&weapon);
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            let near_damage = model.base_damage_for_distance(start + width * near);
            let far_damage = model.base_damage_for_distance(start + width * far);
            prop_assert!(far_damage <= near_damage + 1e-9);
            prop_assert!(far_damage >= damage * 0.1 - 1e-9);
        }

        #[test]
        fn prop_continuous_over_band(
            damage in 1.0f64..500.0,
            start in 0.0f64..50.0,
            width in 1.0f64..100.0,
            t in 0.0f64..=1.0,
        ) {
            // Slope is bounded by damage / width, so nearby distances stay close
            let weapon = RangedWeapon::new("Gun", damage).with_falloff(start, start + width);
            let model = RangedDamageModel::new(&weapon);
            let d = start + width * t;
            let step = 1e-6;
            let delta = (model.base_damage_for_distance(d) - model.base_damage_for_distance(d + step)).abs();
            prop_assert!(delta <= damage / width * step + 1e-9);
        }

        #[test]
        fn prop_oneshot_distance_round_trip(
            damage in 10.0f64..500.0,
            start in 0.0f64..30.0,
            width in 5.0f64..60.0,
            lethal_fraction in 0.15f64..1.0,
            precision in prop::option::of(1.0f64..4.0),
            back in prop::option::of(0.5f64..3.0),
            zone in prop::sample::select(HitZone::all().to_vec()),
            booster in 1.0f64..1.5,
        ) {
            let weapon = RangedWeapon::new("Gun", damage).with_falloff(start, start + width);
            let model = RangedDamageModel::new(&weapon);
            let target = TargetMultipliers::new(precision, back);
            let hit = Hit::zone(zone).with_booster(booster);

            let point_blank = model.damage(0.0, target, hit);
            let health = point_blank * lethal_fraction;

            if let OneshotDistance::Within(d) = model.oneshot_distance(health, target, hit) {
                // Distance is reported to 0.01m, which moves damage by at most slope * 0.005
                let tolerance = 0.011 + point_blank / width * 0.005;
                prop_assert!((model.damage(d, target, hit) - health).abs() <= tolerance);
            } else {
                prop_assert!(false, "floor cannot be lethal above 15% of point blank");
            }
        }
    }
}
