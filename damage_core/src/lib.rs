//! damage_core - Damage calculations for weapons against enemy targets
//!
//! This library provides:
//! - RangedDamageModel: Damage over distance with a linear falloff band
//! - MeleeDamageModel: Damage over charge along a cubic curve
//! - Oneshot solvers: Farthest oneshot distance and smallest oneshot charge
//! - Hit resolution: Per-zone breakdowns against a target profile
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use damage_core::prelude::*;
//!
//! init_constants_default();
//!
//! let pistol = RangedWeapon::new("Pistol", 50.0).with_falloff(10.0, 30.0);
//! let model = RangedDamageModel::new(&pistol);
//! let damage = model.damage(20.0, TargetMultipliers::none(), Hit::body());
//!
//! let striker = TargetProfile::new("Striker", 20.0)?
//!     .with_head(3.0)
//!     .with_back_multiplier(2.0);
//! let breakdown = resolve_hits(&Weapon::from(pistol), &striker, 20.0, 1.0);
//! for (zone, oneshot) in breakdown.oneshots() {
//!     println!("{zone:?}: {oneshot:?}");
//! }
//! ```

pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod prelude;
pub mod target;
pub mod types;

// Core API - what most users need
pub use damage::{DamageModel, MeleeDamageModel, OneshotDistance, RangedDamageModel};
pub use target::{TargetError, TargetProfile};
pub use types::{Hit, HitZone, TargetMultipliers, ZoneKind};

// Hit breakdowns
pub use combat::{resolve_hits, HitBreakdown, OneshotResult, ZoneResult};

// Configuration
pub use config::{constants, init_constants, init_constants_default, ConfigError};

// Re-export commonly needed weapon_core types
pub use weapon_core::{MeleeWeapon, RangedWeapon, Weapon, WeaponError};
