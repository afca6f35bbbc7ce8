//! Reconciling the two halves of the base wedge.
//!
//! Both passes compare a rotated view of `candidates` against `reference`.
//! The rotation is only used for the comparison; returned asteroids keep
//! their original orbit.

use tracing::{debug, warn};

use crate::game::belt::Rock;
use crate::game::geometry::{overlaps, Point};

/// Radius removed per shrink step.
pub const SHRINK_STEP: f64 = 2.0;

/// Keep only the candidates that, once rotated by `shift` degrees, touch
/// nothing in `reference`.
pub fn cull_overlaps(
    candidates: Vec<Rock>,
    reference: &[Rock],
    shift: f64,
    sun: Point,
) -> Vec<Rock> {
    let before = candidates.len();
    let kept: Vec<Rock> = candidates
        .into_iter()
        .filter(|rock| {
            let moved = rock.rotated(shift, sun);
            !reference.iter().any(|other| overlaps(other, &moved))
        })
        .collect();
    debug!(shift, before, kept = kept.len(), "culled sector overlaps");
    kept
}

/// Shrink candidates that, once rotated by `shift` degrees, touch anything
/// in `reference`. Radii never drop below `min_radius`; nothing is removed.
pub fn shrink_overlaps(
    candidates: &mut [Rock],
    reference: &[Rock],
    min_radius: f64,
    shift: f64,
    sun: Point,
) {
    let mut shrunk = 0;
    for rock in candidates.iter_mut() {
        let center = rock.orbit.rotated(shift).to_cartesian(sun);
        let start = rock.radius;
        for other in reference {
            let gap = center.distance(other.position);
            while gap <= rock.radius + other.radius && rock.radius > min_radius {
                rock.radius = (rock.radius - SHRINK_STEP).max(min_radius);
            }
            if gap <= rock.radius + other.radius {
                warn!(
                    angle = rock.orbit.angle,
                    distance = rock.orbit.distance,
                    "asteroid still overlaps neighbouring sector at minimum radius"
                );
            }
        }
        if rock.radius < start {
            shrunk += 1;
        }
    }
    debug!(shift, shrunk, "shrank sector overlaps");
}
