//! Procedural asteroid belt around the sun.
//!
//! One 45 degree wedge is generated and then copied eight times around the
//! sun, so both players face the same belt. The wedge is built from two
//! half-sectors that are seeded, pruned and grown separately and then
//! reconciled against each other:
//!
//! 1. scatter minimum-size seeds over both halves
//! 2. prune and grow the upper half
//! 3. cull lower seeds that would hit the upper half, at 0 and 45 degrees
//! 4. prune and grow the lower half, then shrink it clear of the upper half
//! 5. copy both halves around the ring
//! 6. clear the zone around the victory asteroid
//!
//! Every step is a pure function of its input and the random draws, so the
//! same seed always yields the same belt.

pub mod grow;
pub mod guard;
pub mod prune;
pub mod sector;
pub mod seed;
pub mod symmetry;

use tracing::{debug, info};

use crate::error::Result;
use crate::game::body::{Body, BodyBlueprint, BodyFactory, BodyKind, Material};
use crate::game::geometry::{Circle, Point, Polar};
use crate::game::rng::RandomSource;
use crate::settings::MapSettings;

use self::seed::OreRarity;

pub const WEDGE_DEGREES: f64 = 45.0;
pub const HALF_WEDGE_DEGREES: f64 = WEDGE_DEGREES / 2.0;

/// A belt asteroid while it is still being placed. The orbit is
/// authoritative; `position` is kept in step with it.
#[derive(Clone, Debug, PartialEq)]
pub struct Rock {
    pub material: Material,
    pub amount: u32,
    pub radius: f64,
    pub orbit: Polar,
    pub position: Point,
}

impl Rock {
    pub fn new(
        material: Material,
        amount: u32,
        radius: f64,
        distance: f64,
        angle: f64,
        sun: Point,
    ) -> Self {
        let orbit = Polar::new(distance, angle);
        Self {
            material,
            amount,
            radius,
            orbit,
            position: orbit.to_cartesian(sun),
        }
    }

    /// A copy moved `degrees` further along its orbit.
    pub fn rotated(&self, degrees: f64, sun: Point) -> Self {
        let orbit = self.orbit.rotated(degrees);
        Self {
            orbit,
            position: orbit.to_cartesian(sun),
            ..self.clone()
        }
    }

    pub fn into_blueprint(self) -> BodyBlueprint {
        BodyBlueprint {
            kind: BodyKind::Asteroid,
            material: self.material,
            radius: self.radius,
            position: self.position,
            orbit: Some(self.orbit),
            amount: self.amount,
            owner: None,
        }
    }
}

impl Circle for Rock {
    fn center(&self) -> Point {
        self.position
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

/// Inputs to belt generation, derived from [`MapSettings`].
#[derive(Clone, Debug, PartialEq)]
pub struct BeltParams {
    pub count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Half-open distance band from the sun.
    pub band: (f64, f64),
    pub sun: Point,
    pub rarity: OreRarity,
    pub min_amount: u32,
    pub max_amount: u32,
}

impl BeltParams {
    pub fn from_settings(settings: &MapSettings) -> Self {
        Self {
            count: settings.asteroid_count,
            min_radius: settings.min_radius(),
            max_radius: settings.max_radius(),
            band: settings.belt_band(),
            sun: settings.sun_center(),
            rarity: OreRarity {
                genarium: settings.ore_rarity_genarium,
                rarium: settings.ore_rarity_rarium,
                legendarium: settings.ore_rarity_legendarium,
            },
            min_amount: settings.min_asteroid,
            max_amount: settings.max_asteroid,
        }
    }
}

/// Place the full belt, before the victory zone is cleared.
pub fn build_ring<R: RandomSource>(params: &BeltParams, rng: &mut R) -> Result<Vec<Rock>> {
    let (min, max, sun) = (params.min_radius, params.max_radius, params.sun);
    let seed::Sectors { lower, upper } = seed::scatter(params, rng);

    let upper = grow::grow(prune::prune_collisions(upper), min, max, false)?;

    let lower = sector::cull_overlaps(lower, &upper, 0.0, sun);
    let lower = sector::cull_overlaps(lower, &upper, WEDGE_DEGREES, sun);
    let mut lower = grow::grow(prune::prune_collisions(lower), min, max, false)?;
    sector::shrink_overlaps(&mut lower, &upper, min, 0.0, sun);
    sector::shrink_overlaps(&mut lower, &upper, min, WEDGE_DEGREES, sun);

    let mut ring = Vec::new();
    symmetry::replicate(&mut ring, &lower, sun);
    symmetry::replicate(&mut ring, &upper, sun);
    Ok(ring)
}

/// Generate the belt around `victory` and register every kept asteroid with
/// `factory`, in ring order.
pub fn generate_belt<R, F>(
    params: &BeltParams,
    victory: &Body,
    rng: &mut R,
    factory: &mut F,
) -> Result<Vec<Body>>
where
    R: RandomSource,
    F: BodyFactory,
{
    if params.count == 0 {
        debug!("no asteroids requested");
        return Ok(Vec::new());
    }

    let ring = build_ring(params, rng)?;
    let kept = guard::guard_victory_zone(ring, victory, params.min_radius);
    let bodies: Vec<Body> = kept
        .into_iter()
        .map(|rock| factory.create(rock.into_blueprint()))
        .collect();
    info!(seeds = params.count, asteroids = bodies.len(), "generated asteroid belt");
    Ok(bodies)
}
