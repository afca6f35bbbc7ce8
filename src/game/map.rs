use serde::Serialize;
use std::fmt::Write;
use tracing::info;

use crate::error::Result;
use crate::game::belt::{generate_belt, BeltParams};
use crate::game::body::{
    kind_label, material_label, Body, BodyBlueprint, BodyFactory, BodyKind, BodyRegistry, Material,
    PlayerId,
};
use crate::game::rng::{RandomSource, SeededRng};
use crate::settings::MapSettings;

/// Index of the victory asteroid in the list returned by [`create_map`].
pub const VICTORY_INDEX: usize = 3;

/// Lay out the whole map: both home planets, the sun, the victory asteroid
/// and then the belt, in that order.
pub fn create_map<R, F>(settings: &MapSettings, rng: &mut R, factory: &mut F) -> Result<Vec<Body>>
where
    R: RandomSource,
    F: BodyFactory,
{
    settings.validate()?;
    let sun = settings.sun_center();

    let mut bodies = Vec::new();
    for (slot, home) in settings.home_planets().into_iter().enumerate() {
        bodies.push(factory.create(BodyBlueprint {
            kind: BodyKind::Planet,
            material: Material::None,
            radius: settings.planet_radius(),
            position: home,
            orbit: None,
            amount: settings.planet_energy_cap,
            owner: Some(PlayerId(slot as u8)),
        }));
    }
    bodies.push(factory.create(BodyBlueprint {
        kind: BodyKind::Sun,
        material: Material::None,
        radius: settings.sun_radius(),
        position: sun,
        orbit: None,
        amount: 0,
        owner: None,
    }));

    let victory_orbit = settings.victory_orbit();
    let victory = factory.create(BodyBlueprint {
        kind: BodyKind::Asteroid,
        material: Material::Mythicite,
        radius: settings.victory_radius(),
        position: victory_orbit.to_cartesian(sun),
        orbit: Some(victory_orbit),
        amount: settings.mythicite_amount,
        owner: None,
    });

    let belt = generate_belt(&BeltParams::from_settings(settings), &victory, rng, factory)?;
    bodies.push(victory);
    bodies.extend(belt);

    info!(bodies = bodies.len(), "created map");
    Ok(bodies)
}

/// Generate a map with default settings straight from a seed.
pub fn map_from_seed(seed: u64) -> Result<Vec<Body>> {
    let mut rng = SeededRng::new(seed);
    let mut registry = BodyRegistry::new();
    create_map(&MapSettings::default(), &mut rng, &mut registry)
}

pub fn map_report(seed: u64) -> String {
    let bodies = match map_from_seed(seed) {
        Ok(bodies) => bodies,
        Err(e) => return e.to_string(),
    };

    let mut output = String::new();
    let _ = writeln!(output, "Map with {} bodies (seed {})", bodies.len(), seed);
    for body in &bodies {
        let owner = body
            .owner
            .map(|p| format!(" owner={}", p.0))
            .unwrap_or_default();
        let orbit = body
            .orbit
            .map(|o| format!(" orbit={:.1}@{:.2}", o.distance, o.angle))
            .unwrap_or_default();
        let _ = writeln!(
            output,
            "  #{} {} [{}] at ({:.1}, {:.1}) r={:.1} amount={}{}{}",
            body.id,
            kind_label(body.kind),
            material_label(body.material),
            body.position.x,
            body.position.y,
            body.radius,
            body.amount,
            orbit,
            owner
        );
    }
    output
}

pub fn map_json(bodies: &[Body]) -> String {
    let view = MapView::from(bodies);
    serde_json::to_string(&view).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Serialize)]
struct OrbitView {
    distance: f64,
    angle: f64,
}

#[derive(Serialize)]
struct BodyView {
    id: u32,
    kind: &'static str,
    material: &'static str,
    x: f64,
    y: f64,
    radius: f64,
    amount: u32,
    orbit: Option<OrbitView>,
    owner: Option<u8>,
}

#[derive(Serialize)]
struct MapView {
    bodies: Vec<BodyView>,
}

impl From<&Body> for BodyView {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            kind: kind_label(body.kind),
            material: material_label(body.material),
            x: body.position.x,
            y: body.position.y,
            radius: body.radius,
            amount: body.amount,
            orbit: body.orbit.map(|o| OrbitView {
                distance: o.distance,
                angle: o.angle,
            }),
            owner: body.owner.map(|p| p.0),
        }
    }
}

impl From<&[Body]> for MapView {
    fn from(bodies: &[Body]) -> Self {
        Self {
            bodies: bodies.iter().map(BodyView::from).collect(),
        }
    }
}
