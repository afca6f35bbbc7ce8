use tracing::debug;

use crate::game::belt::{Rock, WEDGE_DEGREES};
use crate::game::geometry::Point;

/// Copies of the base wedge needed to close the ring.
pub const SYMMETRY_FOLD: usize = 8;

/// Append each wedge asteroid followed by its seven rotations, 45 degrees
/// apart, to `ring`.
pub fn replicate(ring: &mut Vec<Rock>, wedge: &[Rock], sun: Point) {
    ring.reserve(wedge.len() * SYMMETRY_FOLD);
    for rock in wedge {
        ring.push(rock.clone());
        for turn in 1..SYMMETRY_FOLD {
            ring.push(rock.rotated(WEDGE_DEGREES * turn as f64, sun));
        }
    }
    debug!(wedge = wedge.len(), ring = ring.len(), "replicated wedge around the sun");
}
