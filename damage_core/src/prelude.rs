//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Core types
pub use crate::target::TargetProfile;
pub use crate::types::{Hit, HitZone, TargetMultipliers, ZoneKind};

// Damage models
pub use crate::damage::{DamageModel, MeleeDamageModel, OneshotDistance, RangedDamageModel};

// Armor
pub use crate::defense::{apply_armor, hits_to_kill};

// Combat
pub use crate::combat::{resolve_hits, HitBreakdown, OneshotResult, ZoneResult};

// Config
pub use crate::config::{init_constants, init_constants_default};

// Re-exports from weapon_core
pub use weapon_core::{ChargeCurve, MeleeWeapon, RangedWeapon, Weapon};
