//! Map settings with compile-time defaults and optional TOML overrides.
//!
//! Any key missing from a TOML document keeps its default, so a settings
//! file only has to name the values it changes:
//!
//! ```toml
//! asteroid_count = 60
//! turns_to_orbit = 20
//! ```

use serde::Deserialize;

use crate::error::{MapError, Result};
use crate::game::geometry::{Point, Polar};

/// Game-wide size, ratio and resource configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapSettings {
    // ── Map ──────────────────────────────────────────────────────────────────
    pub size_x: f64,
    pub size_y: f64,

    // ── Belt ─────────────────────────────────────────────────────────────────
    pub asteroid_count: usize,
    pub ore_rarity_genarium: u32,
    pub ore_rarity_rarium: u32,
    pub ore_rarity_legendarium: u32,
    pub min_asteroid: u32,
    pub max_asteroid: u32,
    pub mythicite_amount: u32,

    // ── Planets ──────────────────────────────────────────────────────────────
    pub planet_energy_cap: u32,

    // ── Orbits ───────────────────────────────────────────────────────────────
    pub turns_to_orbit: u32,
    pub regenerate_rate: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            size_x: 3200.0,
            size_y: 1800.0,
            asteroid_count: 100,
            ore_rarity_genarium: 5,
            ore_rarity_rarium: 2,
            ore_rarity_legendarium: 1,
            min_asteroid: 100,
            max_asteroid: 250,
            mythicite_amount: 2000,
            planet_energy_cap: 5000,
            turns_to_orbit: 40,
            regenerate_rate: 0,
        }
    }
}

impl MapSettings {
    /// Parse settings from a TOML document and validate them.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings: Self = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.size_x.is_finite() && self.size_x > 0.0) {
            return Err(invalid(format!("size_x must be positive, got {}", self.size_x)));
        }
        if !(self.size_y.is_finite() && self.size_y > 0.0) {
            return Err(invalid(format!("size_y must be positive, got {}", self.size_y)));
        }
        if self.rarity_total() == 0 {
            return Err(invalid("ore rarities must not all be zero".to_string()));
        }
        if self.min_asteroid > self.max_asteroid {
            return Err(invalid(format!(
                "min_asteroid ({}) exceeds max_asteroid ({})",
                self.min_asteroid, self.max_asteroid
            )));
        }
        if self.turns_to_orbit == 0 {
            return Err(invalid("turns_to_orbit must be at least 1".to_string()));
        }
        let (near, _) = self.belt_band();
        if near - self.max_radius() <= self.sun_radius() {
            return Err(invalid(format!(
                "belt starting at {near} with asteroids up to {} would touch the sun (radius {})",
                self.max_radius(),
                self.sun_radius()
            )));
        }
        Ok(())
    }

    /// Smallest radius a belt asteroid can have.
    pub fn min_radius(&self) -> f64 {
        self.size_x / 100.0
    }

    /// Largest radius a belt asteroid can grow to.
    pub fn max_radius(&self) -> f64 {
        self.size_x / 50.0
    }

    pub fn rarity_total(&self) -> u32 {
        self.ore_rarity_genarium + self.ore_rarity_rarium + self.ore_rarity_legendarium
    }

    pub fn sun_center(&self) -> Point {
        Point::new(self.size_x / 2.0, self.size_y / 2.0)
    }

    pub fn sun_radius(&self) -> f64 {
        self.size_y / 4.0
    }

    pub fn planet_radius(&self) -> f64 {
        self.size_y / 12.0
    }

    /// Home planet centers, player 0 on the left and player 1 on the right.
    pub fn home_planets(&self) -> [Point; 2] {
        let inset = self.size_x / 16.0;
        let y = self.size_y / 2.0;
        [Point::new(inset, y), Point::new(self.size_x - inset, y)]
    }

    /// Orbit of the victory asteroid, directly "above" the sun.
    pub fn victory_orbit(&self) -> Polar {
        Polar::new(self.size_y / 4.0 + self.size_y / 12.0, 0.0)
    }

    pub fn victory_radius(&self) -> f64 {
        self.size_y / 20.0
    }

    /// Distance band seeds are scattered in, half-open.
    pub fn belt_band(&self) -> (f64, f64) {
        (self.size_y / 4.0 + self.size_y / 18.0, self.size_y / 2.4)
    }

    /// Degrees an orbiting body moves each turn.
    pub fn orbit_step(&self) -> f64 {
        360.0 / self.turns_to_orbit as f64
    }
}

fn invalid(message: String) -> MapError {
    MapError::InvalidSettings(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let settings = MapSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.min_radius(), 32.0);
        assert_eq!(settings.max_radius(), 64.0);
        assert_eq!(settings.rarity_total(), 8);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let settings = MapSettings::from_toml_str("asteroid_count = 12\nturns_to_orbit = 20\n")
            .expect("valid settings");
        assert_eq!(settings.asteroid_count, 12);
        assert_eq!(settings.turns_to_orbit, 20);
        assert_eq!(settings.size_x, 3200.0);
        assert_eq!(settings.mythicite_amount, 2000);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = MapSettings::from_toml_str("asteroid_count = \"lots\"").unwrap_err();
        assert!(matches!(err, MapError::SettingsParse(_)), "got {err:?}");
    }

    #[test]
    fn rejects_bad_values() {
        let cases = [
            "size_x = 0.0",
            "size_y = -5.0",
            "ore_rarity_genarium = 0\nore_rarity_rarium = 0\nore_rarity_legendarium = 0",
            "min_asteroid = 300",
            "turns_to_orbit = 0",
            "size_y = 600.0",
            "size_x = 9600.0",
        ];
        for case in cases {
            let err = MapSettings::from_toml_str(case).unwrap_err();
            assert!(matches!(err, MapError::InvalidSettings(_)), "{case}: {err:?}");
        }
    }

    #[test]
    fn victory_asteroid_sits_inside_the_belt_band() {
        let settings = MapSettings::default();
        let (near, far) = settings.belt_band();
        let orbit = settings.victory_orbit();
        assert!(orbit.distance >= near && orbit.distance < far);
        assert!(near > settings.sun_radius());
    }
}
