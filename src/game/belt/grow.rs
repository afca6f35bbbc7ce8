use tracing::debug;

use crate::error::{MapError, Result};
use crate::game::belt::Rock;
use crate::game::geometry::overlaps;

/// Number of equal steps between the minimum and maximum radius.
pub const GROWTH_STEPS: f64 = 16.0;

/// Every round freezes a circle or moves one a step closer to the maximum,
/// so a healthy run settles within `GROWTH_STEPS + 1` rounds.
const MAX_GROWTH_ROUNDS: usize = 4 * GROWTH_STEPS as usize;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Growth {
    /// Still growing; remembers the radius from before this round's step.
    Growing { previous: f64 },
    Frozen,
}

struct Sprout {
    rock: Rock,
    growth: Growth,
}

impl Sprout {
    fn is_growing(&self) -> bool {
        matches!(self.growth, Growth::Growing { .. })
    }

    /// Stop growing and undo this round's step.
    fn settle(&mut self) {
        if let Growth::Growing { previous } = self.growth {
            self.rock.radius = previous;
            self.growth = Growth::Frozen;
        }
    }
}

/// Inflate every asteroid towards `max_radius` until it either reaches the
/// maximum or touches a neighbour, in which case both back off one step and
/// stop. The input must not contain touching asteroids.
///
/// With `pre_grown` set, asteroids whose radius already differs from
/// `min_radius` are left alone.
pub fn grow(
    rocks: Vec<Rock>,
    min_radius: f64,
    max_radius: f64,
    pre_grown: bool,
) -> Result<Vec<Rock>> {
    let step = (max_radius - min_radius) / GROWTH_STEPS;
    let mut sprouts: Vec<Sprout> = rocks
        .into_iter()
        .map(|rock| {
            let growth = if pre_grown && rock.radius != min_radius {
                Growth::Frozen
            } else {
                Growth::Growing {
                    previous: rock.radius,
                }
            };
            Sprout { rock, growth }
        })
        .collect();

    let mut rounds = 0;
    while sprouts.iter().any(Sprout::is_growing) {
        rounds += 1;
        if rounds > MAX_GROWTH_ROUNDS {
            return Err(MapError::GrowthStalled {
                rounds: MAX_GROWTH_ROUNDS,
            });
        }

        for sprout in sprouts.iter_mut().filter(|s| s.is_growing()) {
            if sprout.rock.radius < max_radius {
                sprout.growth = Growth::Growing {
                    previous: sprout.rock.radius,
                };
                sprout.rock.radius = (sprout.rock.radius + step).min(max_radius);
            } else {
                sprout.growth = Growth::Frozen;
            }
        }

        for i in 0..sprouts.len() {
            if !sprouts[i].is_growing() {
                continue;
            }
            for j in 0..sprouts.len() {
                if i == j || !overlaps(&sprouts[i].rock, &sprouts[j].rock) {
                    continue;
                }
                sprouts[i].settle();
                sprouts[j].settle();
            }
        }
    }

    debug!(asteroids = sprouts.len(), rounds, "grew asteroids");
    Ok(sprouts.into_iter().map(|s| s.rock).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::body::Material;
    use crate::game::geometry::Point;

    const SUN: Point = Point { x: 0.0, y: 0.0 };

    fn rock_at(angle: f64, radius: f64) -> Rock {
        Rock::new(Material::Genarium, 100, radius, 600.0, angle, SUN)
    }

    #[test]
    fn lone_asteroid_reaches_max() {
        let grown = grow(vec![rock_at(10.0, 32.0)], 32.0, 64.0, false).unwrap();
        assert_eq!(grown[0].radius, 64.0);
    }

    #[test]
    fn neighbours_stop_before_touching() {
        // ~104.6 apart at distance 600, so two 64s cannot both fit
        let rocks = vec![rock_at(0.0, 32.0), rock_at(10.0, 32.0)];
        let grown = grow(rocks, 32.0, 64.0, false).unwrap();
        assert!(!overlaps(&grown[0], &grown[1]));
        for rock in &grown {
            assert!(rock.radius >= 32.0 && rock.radius < 64.0, "{}", rock.radius);
        }
        assert_eq!(grown[0].radius, grown[1].radius);
    }

    #[test]
    fn pre_grown_asteroids_keep_their_size() {
        let rocks = vec![rock_at(0.0, 40.0), rock_at(90.0, 32.0)];
        let grown = grow(rocks, 32.0, 64.0, true).unwrap();
        assert_eq!(grown[0].radius, 40.0);
        assert_eq!(grown[1].radius, 64.0);
    }

    #[test]
    fn empty_range_freezes_immediately() {
        let grown = grow(vec![rock_at(0.0, 32.0)], 32.0, 32.0, false).unwrap();
        assert_eq!(grown[0].radius, 32.0);
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(grow(Vec::new(), 32.0, 64.0, false).unwrap().is_empty());
    }

    #[test]
    fn runaway_growth_hits_the_round_cap() {
        // steps of 0.125 from zero cannot reach 102 within the cap
        let err = grow(vec![rock_at(0.0, 0.0)], 100.0, 102.0, false).unwrap_err();
        assert!(matches!(err, MapError::GrowthStalled { rounds: 64 }), "got {err:?}");
    }
}
