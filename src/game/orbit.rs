use tracing::debug;

use crate::game::body::{Body, BodyKind};
use crate::game::geometry::{normalize_degrees, Point};
use crate::settings::MapSettings;

/// Move every orbiting asteroid one step around the sun, then deal with
/// depleted ones: with no regeneration they leave the map, otherwise every
/// asteroid is topped up.
pub fn advance_orbits(bodies: &mut Vec<Body>, settings: &MapSettings) {
    let sun = settings.sun_center();
    let step = settings.orbit_step();

    for body in bodies.iter_mut().filter(|b| b.kind == BodyKind::Asteroid) {
        if let Some(orbit) = body.orbit.as_mut() {
            orbit.angle = normalize_degrees(orbit.angle - step);
            body.position = orbit.to_cartesian(sun);
        }
        if settings.regenerate_rate > 0 {
            body.amount = body.amount.saturating_add(settings.regenerate_rate);
        }
    }

    if settings.regenerate_rate == 0 {
        let before = bodies.len();
        bodies.retain(|b| b.kind != BodyKind::Asteroid || b.amount > 0);
        let removed = before - bodies.len();
        if removed > 0 {
            debug!(removed, "removed depleted asteroids");
        }
    }
}

/// Where `body` will be after `turns` more orbit steps. Bodies that do not
/// orbit stay put.
pub fn predict_position(body: &Body, turns: u32, settings: &MapSettings) -> Point {
    match body.orbit {
        Some(orbit) => orbit
            .rotated(-settings.orbit_step() * turns as f64)
            .to_cartesian(settings.sun_center()),
        None => body.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::body::{Material, PlayerId};
    use crate::game::geometry::Polar;

    fn asteroid(id: u32, angle: f64, amount: u32, settings: &MapSettings) -> Body {
        let orbit = Polar::new(600.0, angle);
        Body {
            id,
            kind: BodyKind::Asteroid,
            material: Material::Genarium,
            radius: 32.0,
            position: orbit.to_cartesian(settings.sun_center()),
            orbit: Some(orbit),
            amount,
            owner: None,
        }
    }

    fn planet(settings: &MapSettings) -> Body {
        Body {
            id: 0,
            kind: BodyKind::Planet,
            material: Material::None,
            radius: 150.0,
            position: settings.home_planets()[0],
            orbit: None,
            amount: 5000,
            owner: Some(PlayerId(0)),
        }
    }

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-6
    }

    #[test]
    fn asteroids_step_backwards_and_wrap() {
        let settings = MapSettings::default();
        let mut bodies = vec![asteroid(1, 4.0, 100, &settings), asteroid(2, 100.0, 100, &settings)];
        advance_orbits(&mut bodies, &settings);

        let first = bodies[0].orbit.unwrap();
        assert!((first.angle - 355.0).abs() < 1e-9);
        assert!((bodies[1].orbit.unwrap().angle - 91.0).abs() < 1e-9);
        assert!(close(bodies[0].position, first.to_cartesian(settings.sun_center())));
    }

    #[test]
    fn planets_do_not_move() {
        let settings = MapSettings::default();
        let mut bodies = vec![planet(&settings)];
        advance_orbits(&mut bodies, &settings);
        assert_eq!(bodies[0].position, settings.home_planets()[0]);
    }

    #[test]
    fn full_orbit_returns_home() {
        let settings = MapSettings::default();
        let start = asteroid(1, 30.0, 100, &settings);
        let mut bodies = vec![start.clone()];
        for _ in 0..settings.turns_to_orbit {
            advance_orbits(&mut bodies, &settings);
        }
        assert!(close(bodies[0].position, start.position));
    }

    #[test]
    fn depleted_asteroids_leave_without_regeneration() {
        let settings = MapSettings::default();
        let mut bodies = vec![
            planet(&settings),
            asteroid(1, 10.0, 0, &settings),
            asteroid(2, 20.0, 50, &settings),
        ];
        advance_orbits(&mut bodies, &settings);
        let ids: Vec<u32> = bodies.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn regeneration_tops_up_and_keeps_everything() {
        let settings = MapSettings {
            regenerate_rate: 5,
            ..MapSettings::default()
        };
        let mut bodies = vec![asteroid(1, 10.0, 0, &settings), asteroid(2, 20.0, 50, &settings)];
        advance_orbits(&mut bodies, &settings);
        let amounts: Vec<u32> = bodies.iter().map(|b| b.amount).collect();
        assert_eq!(amounts, vec![5, 55]);
    }

    #[test]
    fn prediction_matches_stepping() {
        let settings = MapSettings::default();
        let start = asteroid(1, 12.0, 100, &settings);
        let predicted = predict_position(&start, 7, &settings);
        let mut bodies = vec![start];
        for _ in 0..7 {
            advance_orbits(&mut bodies, &settings);
        }
        assert!(close(predicted, bodies[0].position));
        assert_eq!(predict_position(&planet(&settings), 7, &settings), settings.home_planets()[0]);
    }
}
