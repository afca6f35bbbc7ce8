use serde::Serialize;

use crate::game::geometry::{Circle, Point, Polar};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BodyKind {
    Planet,
    Sun,
    Asteroid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Material {
    None,
    Genarium,
    Rarium,
    Legendarium,
    Mythicite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerId(pub u8);

/// Everything needed to place a body, before it has an identity.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyBlueprint {
    pub kind: BodyKind,
    pub material: Material,
    pub radius: f64,
    pub position: Point,
    /// Set for bodies that orbit the sun.
    pub orbit: Option<Polar>,
    pub amount: u32,
    pub owner: Option<PlayerId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub id: u32,
    pub kind: BodyKind,
    pub material: Material,
    pub radius: f64,
    pub position: Point,
    pub orbit: Option<Polar>,
    pub amount: u32,
    pub owner: Option<PlayerId>,
}

impl Circle for Body {
    fn center(&self) -> Point {
        self.position
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

/// Turns blueprints into bodies with a stable identity.
pub trait BodyFactory {
    fn create(&mut self, blueprint: BodyBlueprint) -> Body;
}

/// Hands out sequential ids starting at zero.
#[derive(Debug, Default)]
pub struct BodyRegistry {
    next_id: u32,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl BodyFactory for BodyRegistry {
    fn create(&mut self, blueprint: BodyBlueprint) -> Body {
        Body {
            id: self.alloc_id(),
            kind: blueprint.kind,
            material: blueprint.material,
            radius: blueprint.radius,
            position: blueprint.position,
            orbit: blueprint.orbit,
            amount: blueprint.amount,
            owner: blueprint.owner,
        }
    }
}

pub fn kind_label(kind: BodyKind) -> &'static str {
    match kind {
        BodyKind::Planet => "Planet",
        BodyKind::Sun => "Sun",
        BodyKind::Asteroid => "Asteroid",
    }
}

pub fn material_label(material: Material) -> &'static str {
    match material {
        Material::None => "none",
        Material::Genarium => "genarium",
        Material::Rarium => "rarium",
        Material::Legendarium => "legendarium",
        Material::Mythicite => "mythicite",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rock(x: f64) -> BodyBlueprint {
        BodyBlueprint {
            kind: BodyKind::Asteroid,
            material: Material::Rarium,
            radius: 4.0,
            position: Point::new(x, 0.0),
            orbit: None,
            amount: 120,
            owner: None,
        }
    }

    #[test]
    fn registry_ids_are_sequential() {
        let mut registry = BodyRegistry::new();
        let ids: Vec<u32> = (0..4).map(|i| registry.create(rock(i as f64)).id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn create_copies_blueprint_fields() {
        let mut registry = BodyRegistry::new();
        let body = registry.create(rock(7.0));
        assert_eq!(body.kind, BodyKind::Asteroid);
        assert_eq!(body.material, Material::Rarium);
        assert_eq!(body.amount, 120);
        assert_eq!(body.position, Point::new(7.0, 0.0));
        assert!(body.owner.is_none());
    }
}
