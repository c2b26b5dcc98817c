use crate::core::ballistics::{Arc, DEFAULT_SAMPLES};
use crate::core::geometry::{AxisBounds, Point2, Segment};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneColor {
    Black,
    Blue,
    Green,
    Orange,
    Red,
    Steel,
    Yellow,
}

impl SceneColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Black => (0, 0, 0),
            Self::Blue => (0, 0, 255),
            Self::Green => (0, 128, 0),
            Self::Orange => (255, 127, 14),
            Self::Red => (255, 0, 0),
            Self::Steel => (31, 119, 180),
            Self::Yellow => (191, 191, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineStyle {
    pub color: SceneColor,
    pub dashed: bool,
}

impl LineStyle {
    pub const fn solid(color: SceneColor) -> Self {
        Self {
            color,
            dashed: false,
        }
    }

    pub const fn dashed(color: SceneColor) -> Self {
        Self {
            color,
            dashed: true,
        }
    }
}

pub const CURVE_STYLE: LineStyle = LineStyle::dashed(SceneColor::Green);
pub const RANGE_STYLE: LineStyle = LineStyle::dashed(SceneColor::Yellow);
pub const HEIGHT_STYLE: LineStyle = LineStyle::dashed(SceneColor::Red);
pub const GUIDE_STYLE: LineStyle = LineStyle::dashed(SceneColor::Blue);

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Polyline {
        points: Vec<(f64, f64)>,
        style: LineStyle,
    },
    Segment {
        segment: Segment,
        style: LineStyle,
    },
    Marker {
        at: Point2,
        color: SceneColor,
    },
}

/// Which decorations `Scene::add_arc` draws next to the curve itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArcLayers {
    pub range: bool,
    pub height: bool,
    pub tangents: bool,
}

impl ArcLayers {
    pub const CURVE_ONLY: Self = Self {
        range: false,
        height: false,
        tangents: false,
    };

    pub const ALL: Self = Self {
        range: true,
        height: true,
        tangents: true,
    };
}

/// Everything a renderer needs, collected up front and handed over once.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub x_bounds: AxisBounds,
    pub y_bounds: AxisBounds,
    pub x_label: String,
    pub y_label: String,
    pub title: Option<String>,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(x_bounds: AxisBounds, y_bounds: AxisBounds) -> Self {
        Self {
            x_bounds,
            y_bounds,
            x_label: String::new(),
            y_label: String::new(),
            title: None,
            primitives: Vec::new(),
        }
    }

    pub fn with_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push_polyline(&mut self, points: Vec<(f64, f64)>, style: LineStyle) -> &mut Self {
        self.primitives.push(Primitive::Polyline { points, style });
        self
    }

    pub fn push_segment(&mut self, segment: Segment, style: LineStyle) -> &mut Self {
        self.primitives.push(Primitive::Segment { segment, style });
        self
    }

    pub fn push_hline(&mut self, y: f64, x_from: f64, x_to: f64, style: LineStyle) -> &mut Self {
        self.push_segment(
            Segment::new(Point2::new(x_from, y), Point2::new(x_to, y)),
            style,
        )
    }

    pub fn push_vline(&mut self, x: f64, y_from: f64, y_to: f64, style: LineStyle) -> &mut Self {
        self.push_segment(
            Segment::new(Point2::new(x, y_from), Point2::new(x, y_to)),
            style,
        )
    }

    pub fn push_marker(&mut self, at: Point2, color: SceneColor) -> &mut Self {
        self.primitives.push(Primitive::Marker { at, color });
        self
    }

    pub fn add_arc(&mut self, arc: &Arc, layers: ArcLayers) -> &mut Self {
        self.push_polyline(arc.sample_curve(), CURVE_STYLE);
        if layers.range {
            self.push_segment(arc.range_indicator(), RANGE_STYLE);
        }
        if layers.height {
            self.push_segment(arc.height_indicator(), HEIGHT_STYLE);
        }
        if layers.tangents {
            self.push_polyline(arc.tangent_guide(DEFAULT_SAMPLES), GUIDE_STYLE);
            self.push_segment(arc.apex_guide(), GUIDE_STYLE);
        }
        tracing::debug!(
            angle_deg = arc.angle_deg(),
            primitives = self.primitives.len(),
            "arc added to scene"
        );
        self
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[(f64, f64)], LineStyle)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Polyline { points, style } => Some((points.as_slice(), *style)),
            _ => None,
        })
    }

    pub fn segments(&self) -> impl Iterator<Item = (Segment, LineStyle)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Segment { segment, style } => Some((*segment, *style)),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = (Point2, SceneColor)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Marker { at, color } => Some((*at, *color)),
            _ => None,
        })
    }
}
