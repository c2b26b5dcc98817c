/// A position in plot space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A straight line between two positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point2,
    pub to: Point2,
}

impl Segment {
    pub const fn new(from: Point2, to: Point2) -> Self {
        Self { from, to }
    }
}

/// A closed interval along one axis of the visible world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Reads a coordinate pair used as a bounds descriptor: `x` is the lower
/// bound and `y` the upper one.
impl From<Point2> for AxisBounds {
    fn from(pair: Point2) -> Self {
        Self::new(pair.x, pair.y)
    }
}
