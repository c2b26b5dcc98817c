use crate::core::geometry::{AxisBounds, Point2};

const MIN_SPAN: f64 = 1e-6;

/// Pixel rectangle the plot area occupies; `top < bottom` in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl ScreenRect {
    pub fn width(&self) -> f32 {
        (self.right - self.left).max(1.0)
    }

    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(1.0)
    }
}

pub fn world_to_screen(
    world: Point2,
    x_bounds: AxisBounds,
    y_bounds: AxisBounds,
    rect: ScreenRect,
) -> (f32, f32) {
    let tx = (world.x - x_bounds.min) / x_bounds.span().max(MIN_SPAN);
    let ty = (world.y - y_bounds.min) / y_bounds.span().max(MIN_SPAN);
    let x = rect.left + tx as f32 * rect.width();
    let y = rect.bottom - ty as f32 * rect.height();
    (x, y)
}

/// Clips the screen-space segment `a -> b` to `rect` (Liang-Barsky). Returns
/// `None` when nothing of it is inside.
pub fn clip_segment(
    a: (f32, f32),
    b: (f32, f32),
    rect: ScreenRect,
) -> Option<((f32, f32), (f32, f32))> {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let edges = [
        (-dx, a.0 - rect.left),
        (dx, rect.right - a.0),
        (-dy, a.1 - rect.top),
        (dy, rect.bottom - a.1),
    ];

    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (a.0 + t0 * dx, a.1 + t0 * dy),
        (a.0 + t1 * dx, a.1 + t1 * dy),
    ))
}

/// Dash pattern stepping along one straight piece of a path of `length`
/// pixels. `carry` is how far into the `dash + gap` period the previous piece
/// ended. Returns the drawn `(from, to)` distances along this piece and the
/// carry for the next one, so dashes continue across joints.
pub fn dash_pieces(length: f32, carry: f32, dash: f32, gap: f32) -> (Vec<(f32, f32)>, f32) {
    let period = dash + gap;
    let mut pieces = Vec::new();
    if length <= f32::EPSILON || period <= 0.0 {
        return (pieces, carry);
    }

    let mut pos = 0.0;
    let mut phase = carry % period;
    while pos < length {
        let step = if phase < dash {
            dash - phase
        } else {
            period - phase
        };
        let end = (pos + step).min(length);
        if phase < dash {
            pieces.push((pos, end));
        }
        phase = (phase + (end - pos)) % period;
        pos = end;
    }
    (pieces, phase)
}

/// `lines + 1` evenly spaced values covering `bounds`, for grid lines and
/// tick labels.
pub fn tick_values(bounds: AxisBounds, lines: usize) -> Vec<f64> {
    let lines = lines.max(1);
    (0..=lines)
        .map(|i| bounds.min + bounds.span() * (i as f64 / lines as f64))
        .collect()
}
