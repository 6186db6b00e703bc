//! Combat resolution - per-zone damage breakdowns against a target

mod resolution;
mod result;

pub use resolution::{resolve_hits, resolve_melee, resolve_ranged};
pub use result::{
    DamageFigure, DamageRange, HitBreakdown, OneshotResult, StaggerResult, ZoneResult,
};
