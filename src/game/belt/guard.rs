use tracing::debug;

use crate::game::belt::Rock;
use crate::game::geometry::Circle;

/// Clear a safe zone around the victory asteroid.
///
/// Asteroids clear of it are kept as-is. Ones that would touch it but still
/// fit at `min_radius` are shrunk to `min_radius`. The rest are dropped.
pub fn guard_victory_zone<V: Circle>(
    candidates: Vec<Rock>,
    victory: &V,
    min_radius: f64,
) -> Vec<Rock> {
    let before = candidates.len();
    let mut clamped = 0;
    let kept: Vec<Rock> = candidates
        .into_iter()
        .filter_map(|mut rock| {
            let gap = rock.position.distance(victory.center());
            if gap >= rock.radius + victory.radius() {
                Some(rock)
            } else if gap >= victory.radius() + min_radius {
                rock.radius = min_radius;
                clamped += 1;
                Some(rock)
            } else {
                None
            }
        })
        .collect();
    debug!(before, kept = kept.len(), clamped, "guarded victory asteroid");
    kept
}
