//! Hit resolution - every reportable figure for a weapon against a target
//!
//! For each zone the target has:
//! 1. Health damage, with hits to kill
//! 2. Armor: whole-body armor scales the figure itself, plating adds a separate armored figure
//! 3. Melee only: sleeping damage and the light-to-charged range
//! 4. Stagger damage when the target has stagger HP
//! 5. The oneshot threshold, when a point-blank or fully charged hit kills

use super::result::{
    DamageFigure, DamageRange, HitBreakdown, OneshotResult, StaggerResult, ZoneResult,
};
use crate::damage::{MeleeDamageModel, RangedDamageModel};
use crate::defense::apply_armor;
use crate::target::TargetProfile;
use crate::types::{Hit, HitZone};
use tracing::trace;
use weapon_core::{MeleeWeapon, RangedWeapon, Weapon};

/// Resolve all hit zones of `target` for either weapon family.
///
/// `at` is the hit distance for ranged weapons and the charge fraction for melee.
pub fn resolve_hits(weapon: &Weapon, target: &TargetProfile, at: f64, booster: f64) -> HitBreakdown {
    match weapon {
        Weapon::Ranged(w) => resolve_ranged(w, target, at, booster),
        Weapon::Melee(w) => resolve_melee(w, target, at, booster),
    }
}

/// Resolve all hit zones for a ranged weapon at `distance`
pub fn resolve_ranged(
    weapon: &RangedWeapon,
    target: &TargetProfile,
    distance: f64,
    booster: f64,
) -> HitBreakdown {
    let model = RangedDamageModel::new(weapon);
    let multipliers = target.multipliers();
    let health = target.health();

    let zones = reported_zones(target)
        .map(|zone| {
            let hit = zone_hit(target, zone, booster);
            let plating = zone_plating(target, zone);

            let damage = model.damage(distance, multipliers, hit);
            let stagger = target.stagger_hp().map(|stagger_hp| {
                stagger_result(model.damage(distance, multipliers, hit.as_stagger(true)), stagger_hp, plating)
            });

            let point_blank = model.damage(0.0, multipliers, hit);
            let oneshot = (oneshot_reported(target, zone) && point_blank >= health)
                .then(|| OneshotResult::Distance(model.oneshot_distance(health, multipliers, hit)));

            trace!(?zone, damage, point_blank, ?oneshot, "resolved ranged zone");

            ZoneResult {
                zone,
                kind: target.zone_kind(zone),
                damage: DamageFigure::new(damage, health),
                armored: plating.map(|armor| DamageFigure::new(apply_armor(damage, armor), health)),
                sleeping: None,
                armored_sleeping: None,
                range: None,
                armored_range: None,
                stagger,
                oneshot,
            }
        })
        .collect();

    HitBreakdown {
        weapon: weapon.name.clone(),
        target: target.name.clone(),
        at: distance,
        booster,
        zones,
    }
}

/// Resolve all hit zones for a melee weapon at `charge`
pub fn resolve_melee(
    weapon: &MeleeWeapon,
    target: &TargetProfile,
    charge: f64,
    booster: f64,
) -> HitBreakdown {
    let model = MeleeDamageModel::new(weapon);
    let multipliers = target.multipliers();
    let health = target.health();
    let sleep_bonus = weapon.has_sleep_bonus();

    let zones = reported_zones(target)
        .map(|zone| {
            let awake = zone_hit(target, zone, booster);
            let asleep = awake.on_sleeping(true);
            let plating = zone_plating(target, zone);

            let damage = model.damage(charge, multipliers, awake);
            let sleeping = sleep_bonus.then(|| model.damage(charge, multipliers, asleep));
            let range = DamageRange {
                light: model.damage(0.0, multipliers, awake),
                charged: model.damage(1.0, multipliers, awake),
            };
            let stagger = target.stagger_hp().map(|stagger_hp| {
                stagger_result(model.damage(charge, multipliers, awake.as_stagger(true)), stagger_hp, plating)
            });

            let charged_asleep = model.damage(1.0, multipliers, asleep);
            let oneshot = (oneshot_reported(target, zone)
                && (range.charged >= health || charged_asleep >= health))
                .then(|| OneshotResult::Charge {
                    awake: (range.charged >= health)
                        .then(|| model.oneshot_charge(health, multipliers, awake)),
                    sleeping: (sleep_bonus && charged_asleep >= health)
                        .then(|| model.oneshot_charge(health, multipliers, asleep)),
                });

            trace!(?zone, damage, ?sleeping, ?oneshot, "resolved melee zone");

            ZoneResult {
                zone,
                kind: target.zone_kind(zone),
                damage: DamageFigure::new(damage, health),
                armored: plating.map(|armor| DamageFigure::new(apply_armor(damage, armor), health)),
                sleeping,
                armored_sleeping: plating.zip(sleeping).map(|(armor, d)| apply_armor(d, armor)),
                range: Some(range),
                armored_range: plating.map(|armor| DamageRange {
                    light: apply_armor(range.light, armor),
                    charged: apply_armor(range.charged, armor),
                }),
                stagger,
                oneshot,
            }
        })
        .collect();

    HitBreakdown {
        weapon: weapon.name.clone(),
        target: target.name.clone(),
        at: charge,
        booster,
        zones,
    }
}

fn reported_zones(target: &TargetProfile) -> impl Iterator<Item = HitZone> + '_ {
    HitZone::all().iter().copied().filter(|zone| target.has_zone(*zone))
}

/// Hit for a zone, with whole-body armor folded into the uniform multiplier
fn zone_hit(target: &TargetProfile, zone: HitZone, booster: f64) -> Hit {
    let armor = match target.whole_body_armor() {
        Some(armor) if zone.is_armored() => armor,
        _ => 1.0,
    };
    Hit::zone(zone).with_booster(booster * armor)
}

/// Separate armor plating covering a zone
fn zone_plating(target: &TargetProfile, zone: HitZone) -> Option<f64> {
    target.plate_armor().filter(|_| zone.is_armored())
}

/// Precision oneshots only make sense on targets with a head or tumors
fn oneshot_reported(target: &TargetProfile, zone: HitZone) -> bool {
    !zone.is_precision() || target.has_precision_spot()
}

fn stagger_result(damage: f64, stagger_hp: f64, plating: Option<f64>) -> StaggerResult {
    StaggerResult {
        damage: DamageFigure::new(damage, stagger_hp),
        armored: plating.map(|armor| DamageFigure::new(apply_armor(damage, armor), stagger_hp)),
    }
}
