//! Melee weapon records

use crate::types::ChargeCurve;
use crate::WeaponError;
use serde::{Deserialize, Serialize};

/// Stat sheet of a melee weapon. Every combat stat is a light/charged pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeleeWeaponRecord", into = "MeleeWeaponRecord")]
pub struct MeleeWeapon {
    pub name: String,
    pub damage: ChargeCurve,
    pub precision_multiplier: ChargeCurve,
    pub stagger_multiplier: ChargeCurve,
    pub environment_multiplier: ChargeCurve,
    pub back_multiplier: ChargeCurve,
    pub sleep_multiplier: ChargeCurve,
    pub stamina_cost: ChargeCurve,
    pub shove_stamina_cost: Option<f64>,
    /// Seconds to reach full charge
    pub charge_time: Option<f64>,
    pub auto_attack_time: Option<f64>,
}

impl MeleeWeapon {
    /// Create a weapon with the given damage curve and neutral multipliers
    pub fn new(name: impl Into<String>, light_damage: f64, charged_damage: f64) -> Self {
        MeleeWeapon {
            name: name.into(),
            damage: ChargeCurve::new(light_damage, charged_damage),
            precision_multiplier: ChargeCurve::flat(1.0),
            stagger_multiplier: ChargeCurve::flat(1.0),
            environment_multiplier: ChargeCurve::flat(1.0),
            back_multiplier: ChargeCurve::flat(1.0),
            sleep_multiplier: ChargeCurve::flat(1.0),
            stamina_cost: ChargeCurve::flat(0.0),
            shove_stamina_cost: None,
            charge_time: None,
            auto_attack_time: None,
        }
    }

    pub fn with_precision_multiplier(mut self, light: f64, charged: f64) -> Self {
        self.precision_multiplier = ChargeCurve::new(light, charged);
        self
    }

    pub fn with_stagger_multiplier(mut self, light: f64, charged: f64) -> Self {
        self.stagger_multiplier = ChargeCurve::new(light, charged);
        self
    }

    pub fn with_environment_multiplier(mut self, light: f64, charged: f64) -> Self {
        self.environment_multiplier = ChargeCurve::new(light, charged);
        self
    }

    pub fn with_back_multiplier(mut self, light: f64, charged: f64) -> Self {
        self.back_multiplier = ChargeCurve::new(light, charged);
        self
    }

    pub fn with_sleep_multiplier(mut self, light: f64, charged: f64) -> Self {
        self.sleep_multiplier = ChargeCurve::new(light, charged);
        self
    }

    pub fn with_stamina_cost(mut self, light: f64, charged: f64) -> Self {
        self.stamina_cost = ChargeCurve::new(light, charged);
        self
    }

    /// Check the record invariants
    pub fn validate(&self) -> Result<(), WeaponError> {
        if self.name.trim().is_empty() {
            return Err(WeaponError::EmptyName);
        }
        for (field, curve) in self.curves() {
            if !curve.is_finite() {
                return Err(WeaponError::NonFinite(field.to_string()));
            }
        }
        if self.damage.light < 0.0 {
            return Err(WeaponError::NegativeDamage(self.damage.light));
        }
        if self.damage.charged < 0.0 {
            return Err(WeaponError::NegativeDamage(self.damage.charged));
        }
        Ok(())
    }

    /// All charge-scaled stats with their field names
    pub fn curves(&self) -> [(&'static str, ChargeCurve); 7] {
        [
            ("damage", self.damage),
            ("precision_multiplier", self.precision_multiplier),
            ("stagger_multiplier", self.stagger_multiplier),
            ("environment_multiplier", self.environment_multiplier),
            ("back_multiplier", self.back_multiplier),
            ("sleep_multiplier", self.sleep_multiplier),
            ("stamina_cost", self.stamina_cost),
        ]
    }

    /// Whether hitting a sleeping target changes damage at full charge
    pub fn has_sleep_bonus(&self) -> bool {
        self.sleep_multiplier.charged != 1.0
    }
}

/// Catalog shape of a melee weapon, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeleeWeaponRecord {
    pub name: String,
    pub light_damage: f64,
    pub charged_damage: f64,
    #[serde(default = "one")]
    pub light_precision_multiplier: f64,
    #[serde(default = "one")]
    pub charged_precision_multiplier: f64,
    #[serde(default = "one")]
    pub light_stagger_multiplier: f64,
    #[serde(default = "one")]
    pub charged_stagger_multiplier: f64,
    #[serde(default = "one")]
    pub light_environment_multiplier: f64,
    #[serde(default = "one")]
    pub charged_environment_multiplier: f64,
    #[serde(default = "one")]
    pub light_backstab_multiplier: f64,
    #[serde(default = "one")]
    pub charged_backstab_multiplier: f64,
    #[serde(default = "one")]
    pub light_sleeping_multiplier: f64,
    #[serde(default = "one")]
    pub charged_sleeping_multiplier: f64,
    #[serde(default)]
    pub light_stamina_cost: f64,
    #[serde(default)]
    pub charged_stamina_cost: f64,
    #[serde(default)]
    pub shove_stamina_cost: Option<f64>,
    #[serde(default)]
    pub charge_time: Option<f64>,
    #[serde(default)]
    pub auto_attack_time: Option<f64>,
}

fn one() -> f64 {
    1.0
}

impl TryFrom<MeleeWeaponRecord> for MeleeWeapon {
    type Error = WeaponError;

    fn try_from(r: MeleeWeaponRecord) -> Result<Self, Self::Error> {
        let weapon = MeleeWeapon {
            name: r.name,
            damage: ChargeCurve::new(r.light_damage, r.charged_damage),
            precision_multiplier: ChargeCurve::new(
                r.light_precision_multiplier,
                r.charged_precision_multiplier,
            ),
            stagger_multiplier: ChargeCurve::new(
                r.light_stagger_multiplier,
                r.charged_stagger_multiplier,
            ),
            environment_multiplier: ChargeCurve::new(
                r.light_environment_multiplier,
                r.charged_environment_multiplier,
            ),
            back_multiplier: ChargeCurve::new(
                r.light_backstab_multiplier,
                r.charged_backstab_multiplier,
            ),
            sleep_multiplier: ChargeCurve::new(
                r.light_sleeping_multiplier,
                r.charged_sleeping_multiplier,
            ),
            stamina_cost: ChargeCurve::new(r.light_stamina_cost, r.charged_stamina_cost),
            shove_stamina_cost: r.shove_stamina_cost,
            charge_time: r.charge_time,
            auto_attack_time: r.auto_attack_time,
        };
        weapon.validate()?;
        Ok(weapon)
    }
}

impl From<MeleeWeapon> for MeleeWeaponRecord {
    fn from(w: MeleeWeapon) -> Self {
        MeleeWeaponRecord {
            name: w.name,
            light_damage: w.damage.light,
            charged_damage: w.damage.charged,
            light_precision_multiplier: w.precision_multiplier.light,
            charged_precision_multiplier: w.precision_multiplier.charged,
            light_stagger_multiplier: w.stagger_multiplier.light,
            charged_stagger_multiplier: w.stagger_multiplier.charged,
            light_environment_multiplier: w.environment_multiplier.light,
            charged_environment_multiplier: w.environment_multiplier.charged,
            light_backstab_multiplier: w.back_multiplier.light,
            charged_backstab_multiplier: w.back_multiplier.charged,
            light_sleeping_multiplier: w.sleep_multiplier.light,
            charged_sleeping_multiplier: w.sleep_multiplier.charged,
            light_stamina_cost: w.stamina_cost.light,
            charged_stamina_cost: w.stamina_cost.charged,
            shove_stamina_cost: w.shove_stamina_cost,
            charge_time: w.charge_time,
            auto_attack_time: w.auto_attack_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAMMER: &str = r#"{
        "name": "Sledgehammer",
        "lightDamage": 20.0,
        "chargedDamage": 80.0,
        "lightPrecisionMultiplier": 1.5,
        "chargedPrecisionMultiplier": 1.5,
        "lightStaggerMultiplier": 1.0,
        "chargedStaggerMultiplier": 2.0,
        "lightEnvironmentMultiplier": 1.0,
        "chargedEnvironmentMultiplier": 1.0,
        "lightBackstabMultiplier": 1.0,
        "chargedBackstabMultiplier": 1.0,
        "lightSleepingMultiplier": 1.0,
        "chargedSleepingMultiplier": 1.5,
        "lightStaminaCost": 3.0,
        "chargedStaminaCost": 10.0,
        "shoveStaminaCost": 5.0,
        "chargeTime": 1.0,
        "autoAttackTime": 1.8
    }"#;

    #[test]
    fn test_parse_catalog_record() {
        let hammer: MeleeWeapon = serde_json::from_str(HAMMER).unwrap();
        assert_eq!(hammer.name, "Sledgehammer");
        assert_eq!(hammer.damage, ChargeCurve::new(20.0, 80.0));
        assert_eq!(hammer.stagger_multiplier, ChargeCurve::new(1.0, 2.0));
        assert_eq!(hammer.sleep_multiplier, ChargeCurve::new(1.0, 1.5));
        assert_eq!(hammer.shove_stamina_cost, Some(5.0));
        assert!(hammer.has_sleep_bonus());
    }

    #[test]
    fn test_missing_multipliers_default_to_neutral() {
        let knife: MeleeWeapon =
            serde_json::from_str(r#"{"name": "Knife", "lightDamage": 10.0, "chargedDamage": 25.0}"#)
                .unwrap();
        assert!(knife.back_multiplier.is_flat());
        assert!((knife.back_multiplier.light - 1.0).abs() < f64::EPSILON);
        assert!(!knife.has_sleep_bonus());
    }

    #[test]
    fn test_validate() {
        assert!(MeleeWeapon::new("Spear", 10.0, 40.0).validate().is_ok());
        assert!(matches!(
            MeleeWeapon::new("  ", 10.0, 40.0).validate(),
            Err(WeaponError::EmptyName)
        ));
        assert!(matches!(
            MeleeWeapon::new("Spear", 10.0, -4.0).validate(),
            Err(WeaponError::NegativeDamage(_))
        ));
        assert!(matches!(
            MeleeWeapon::new("Spear", 10.0, 40.0)
                .with_back_multiplier(1.0, f64::INFINITY)
                .validate(),
            Err(WeaponError::NonFinite(_))
        ));
    }

    #[test]
    fn test_record_round_trip_keeps_field_names() {
        let hammer: MeleeWeapon = serde_json::from_str(HAMMER).unwrap();
        let value = serde_json::to_value(&hammer).unwrap();
        assert_eq!(value["chargedBackstabMultiplier"], 1.0);
        assert_eq!(value["chargedSleepingMultiplier"], 1.5);
    }
}
