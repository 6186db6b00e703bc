//! Hit breakdown results

use crate::damage::OneshotDistance;
use crate::defense::hits_to_kill;
use crate::types::{HitZone, ZoneKind};
use serde::Serialize;

/// A damage figure with the hits needed to deplete a pool (health or stagger HP)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DamageFigure {
    pub damage: f64,
    pub hits: Option<u32>,
}

impl DamageFigure {
    pub fn new(damage: f64, pool: f64) -> Self {
        DamageFigure {
            damage,
            hits: hits_to_kill(pool, damage),
        }
    }

    /// Whether a single hit depletes the pool
    pub fn is_oneshot(&self) -> bool {
        self.hits == Some(1)
    }
}

/// Damage from a light attack up to a fully charged one
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DamageRange {
    pub light: f64,
    pub charged: f64,
}

/// Stagger damage against the target's stagger HP
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StaggerResult {
    pub damage: DamageFigure,
    /// Against armor plating, when the target has separate plating
    pub armored: Option<DamageFigure>,
}

/// Oneshot threshold for a zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OneshotResult {
    /// Ranged: farthest oneshot distance
    Distance(OneshotDistance),
    /// Melee: smallest oneshot charge fraction, against an awake and a sleeping target.
    /// Either side is `None` when a full charge does not kill in that state.
    Charge {
        awake: Option<f64>,
        sleeping: Option<f64>,
    },
}

/// Everything computed for one hit zone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneResult {
    pub zone: HitZone,
    pub kind: ZoneKind,
    /// Health damage at the requested distance or charge
    pub damage: DamageFigure,
    /// Health damage against armor plating
    pub armored: Option<DamageFigure>,
    /// Melee damage against a sleeping target
    pub sleeping: Option<f64>,
    pub armored_sleeping: Option<f64>,
    /// Melee light to charged damage
    pub range: Option<DamageRange>,
    pub armored_range: Option<DamageRange>,
    pub stagger: Option<StaggerResult>,
    pub oneshot: Option<OneshotResult>,
}

/// Damage breakdown of a weapon against a target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitBreakdown {
    pub weapon: String,
    pub target: String,
    /// Distance (ranged) or charge (melee) the figures were computed at
    pub at: f64,
    pub booster: f64,
    pub zones: Vec<ZoneResult>,
}

impl HitBreakdown {
    /// Get the result for a zone, if the target has it
    pub fn zone(&self, zone: HitZone) -> Option<&ZoneResult> {
        self.zones.iter().find(|z| z.zone == zone)
    }

    /// Zones with a oneshot threshold
    pub fn oneshots(&self) -> impl Iterator<Item = (HitZone, &OneshotResult)> {
        self.zones
            .iter()
            .filter_map(|z| z.oneshot.as_ref().map(|o| (z.zone, o)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_figure() {
        let figure = DamageFigure::new(25.0, 100.0);
        assert_eq!(figure.hits, Some(4));
        assert!(!figure.is_oneshot());
        assert!(DamageFigure::new(150.0, 100.0).is_oneshot());
        assert_eq!(DamageFigure::new(0.0, 100.0).hits, None);
    }

    #[test]
    fn test_serializes_for_presentation() {
        let oneshot = OneshotResult::Distance(OneshotDistance::Within(14.0));
        let value = serde_json::to_value(oneshot).unwrap();
        assert_eq!(value["distance"]["within"], 14.0);

        let oneshot = OneshotResult::Charge {
            awake: Some(0.5),
            sleeping: None,
        };
        let value = serde_json::to_value(oneshot).unwrap();
        assert_eq!(value["charge"]["awake"], 0.5);
        assert!(value["charge"]["sleeping"].is_null());
    }
}
