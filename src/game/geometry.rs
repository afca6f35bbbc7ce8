use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Position relative to the sun. Angle is in degrees, measured from "north"
/// (the +y axis) and increasing towards -x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Polar {
    pub distance: f64,
    pub angle: f64,
}

impl Polar {
    pub fn new(distance: f64, angle: f64) -> Self {
        Self { distance, angle }
    }

    pub fn rotated(&self, degrees: f64) -> Self {
        Self::new(self.distance, self.angle + degrees)
    }

    pub fn to_cartesian(&self, origin: Point) -> Point {
        let radians = (self.angle + 90.0).to_radians();
        Point::new(
            self.distance * radians.cos() + origin.x,
            self.distance * radians.sin() + origin.y,
        )
    }
}

/// Wrap an angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

pub trait Circle {
    fn center(&self) -> Point;
    fn radius(&self) -> f64;
}

/// Two circles collide when they touch or intersect.
pub fn overlaps(a: &impl Circle, b: &impl Circle) -> bool {
    a.center().distance(b.center()) <= a.radius() + b.radius()
}
