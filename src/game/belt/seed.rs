use tracing::debug;

use crate::game::belt::{BeltParams, Rock, HALF_WEDGE_DEGREES, WEDGE_DEGREES};
use crate::game::body::Material;
use crate::game::rng::RandomSource;

/// Relative weights of the three belt ores. Legendarium takes whatever is
/// left after genarium and rarium.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OreRarity {
    pub genarium: u32,
    pub rarium: u32,
    pub legendarium: u32,
}

impl OreRarity {
    pub fn total(&self) -> u32 {
        self.genarium + self.rarium + self.legendarium
    }

    pub fn draw<R: RandomSource>(&self, rng: &mut R) -> Material {
        let roll = rng.next_int(0, self.total() as i64);
        if roll < self.genarium as i64 {
            Material::Genarium
        } else if roll < (self.genarium + self.rarium) as i64 {
            Material::Rarium
        } else {
            Material::Legendarium
        }
    }
}

/// The two halves of the base wedge: `[0, 22.5)` and `[22.5, 45)` degrees.
#[derive(Clone, Debug, Default)]
pub struct Sectors {
    pub lower: Vec<Rock>,
    pub upper: Vec<Rock>,
}

/// Scatter `params.count` minimum-size asteroids over the base wedge. The
/// first half of the draws lands in the lower sector, the rest in the upper.
pub fn scatter<R: RandomSource>(params: &BeltParams, rng: &mut R) -> Sectors {
    let mut sectors = Sectors::default();
    let (near, far) = params.band;

    for i in 0..params.count {
        let material = params.rarity.draw(rng);
        let in_lower = 2 * i < params.count;
        let (from, to) = if in_lower {
            (0.0, HALF_WEDGE_DEGREES)
        } else {
            (HALF_WEDGE_DEGREES, WEDGE_DEGREES)
        };
        let distance = rng.next_float(near, far).abs();
        let angle = rng.next_float(from, to).abs();
        let roll = rng.next_int(params.min_amount as i64, params.max_amount as i64 + 1);
        let amount = u32::try_from(roll).unwrap_or(params.max_amount);

        let rock = Rock::new(material, amount, params.min_radius, distance, angle, params.sun);
        if in_lower {
            sectors.lower.push(rock);
        } else {
            sectors.upper.push(rock);
        }
    }

    debug!(lower = sectors.lower.len(), upper = sectors.upper.len(), "seeded belt sectors");
    sectors
}
