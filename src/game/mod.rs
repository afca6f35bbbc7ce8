pub mod belt;
pub mod body;
pub mod geometry;
pub mod map;
pub mod orbit;
pub mod rng;

use tracing::debug;

use crate::error::Result;
use crate::settings::MapSettings;
use body::{Body, BodyRegistry, Material};
use geometry::Point;
use map::create_map;
use rng::SeededRng;

pub struct Game {
    turn: u32,
    seed: u64,
    settings: MapSettings,
    bodies: Vec<Body>,
}

impl Game {
    pub fn new(seed: u64) -> Result<Self> {
        Self::with_settings(seed, MapSettings::default())
    }

    pub fn with_settings(seed: u64, settings: MapSettings) -> Result<Self> {
        let mut rng = SeededRng::new(seed);
        let mut registry = BodyRegistry::new();
        let bodies = create_map(&settings, &mut rng, &mut registry)?;
        Ok(Self {
            turn: 0,
            seed,
            settings,
            bodies,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn victory_asteroid(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.material == Material::Mythicite)
    }

    /// Where body `id` will be after `turns` more turns, if it is still on
    /// the map.
    pub fn predict_position(&self, id: u32, turns: u32) -> Option<Point> {
        self.bodies
            .iter()
            .find(|b| b.id == id)
            .map(|body| orbit::predict_position(body, turns, &self.settings))
    }

    /// End the turn: asteroids move along their orbits.
    pub fn tick(&mut self) -> u32 {
        self.turn += 1;
        orbit::advance_orbits(&mut self.bodies, &self.settings);
        debug!(turn = self.turn, bodies = self.bodies.len(), "advanced turn");
        self.turn
    }
}
