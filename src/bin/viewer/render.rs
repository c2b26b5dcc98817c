use macroquad::prelude::*;
use parabolic_arc::core::geometry::{AxisBounds, Point2};
use parabolic_arc::core::scene::{LineStyle, Scene, SceneColor};
use parabolic_arc::core::window::{
    ScreenRect, clip_segment, dash_pieces, tick_values, world_to_screen,
};

use crate::constants::{
    DASH_PX, GAP_PX, GRID_COLOR, LABEL_COLOR, LINE_THICKNESS, MARKER_RADIUS, TITLE_Y,
    X_GRID_LINES, Y_GRID_LINES,
};

fn format_axis_value(value: f64, span: f64) -> String {
    if span >= 1000.0 {
        format!("{value:.0}")
    } else if span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

fn to_color(color: SceneColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::from_rgba(r, g, b, 255)
}

fn to_screen(scene: &Scene, rect: ScreenRect, point: Point2) -> Vec2 {
    let (x, y) = world_to_screen(point, scene.x_bounds, scene.y_bounds, rect);
    vec2(x, y)
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn axis_ticks(bounds: AxisBounds, lines: usize) -> impl Iterator<Item = (f32, f64)> {
    tick_values(bounds, lines)
        .into_iter()
        .enumerate()
        .map(move |(i, value)| (i as f32 / lines.max(1) as f32, value))
}

pub(crate) fn draw_grid(scene: &Scene, rect: ScreenRect, font: Option<&Font>) {
    let tick_font_size: u16 = 16;

    for (t, value) in axis_ticks(scene.x_bounds, X_GRID_LINES) {
        let x = rect.left + t * rect.width();
        draw_line(x, rect.top, x, rect.bottom, 1.0, GRID_COLOR);
        let label = format_axis_value(value, scene.x_bounds.span());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            rect.bottom + 22.0,
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    for (t, value) in axis_ticks(scene.y_bounds, Y_GRID_LINES) {
        let y = rect.bottom - t * rect.height();
        draw_line(rect.left, y, rect.right, y, 1.0, GRID_COLOR);
        let label = format_axis_value(value, scene.y_bounds.span());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (rect.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    draw_rectangle_lines(
        rect.left,
        rect.top,
        rect.width(),
        rect.height(),
        1.0,
        LABEL_COLOR,
    );
    draw_ui_text(
        &scene.x_label,
        rect.right - 80.0,
        rect.bottom + 52.0,
        18,
        LABEL_COLOR,
        font,
    );
    draw_ui_text(&scene.y_label, rect.left + 10.0, rect.top - 8.0, 18, LABEL_COLOR, font);
}

pub(crate) fn draw_title(scene: &Scene, rect: ScreenRect, font: Option<&Font>) {
    if let Some(title) = &scene.title {
        draw_ui_text(title, rect.left, TITLE_Y, 28, BLACK, font);
    }
}

fn draw_dashed(a: Vec2, b: Vec2, carry: f32, color: Color) -> f32 {
    let length = a.distance(b);
    let (pieces, carry) = dash_pieces(length, carry, DASH_PX, GAP_PX);
    if pieces.is_empty() {
        return carry;
    }
    let dir = (b - a) / length;
    for (from, to) in pieces {
        let (from, to) = (a + dir * from, a + dir * to);
        draw_line(from.x, from.y, to.x, to.y, LINE_THICKNESS, color);
    }
    carry
}

pub(crate) fn draw_path(points: &[Vec2], style: LineStyle, rect: ScreenRect) {
    if points.len() < 2 {
        return;
    }
    let color = to_color(style.color);
    let mut carry = 0.0;
    for pair in points.windows(2) {
        if !(pair[0].is_finite() && pair[1].is_finite()) {
            continue;
        }
        let Some((a, b)) = clip_segment(pair[0].into(), pair[1].into(), rect) else {
            continue;
        };
        let (a, b) = (Vec2::from(a), Vec2::from(b));
        if style.dashed {
            carry = draw_dashed(a, b, carry, color);
        } else {
            draw_line(a.x, a.y, b.x, b.y, LINE_THICKNESS, color);
        }
    }
}

pub(crate) fn draw_scene(scene: &Scene, rect: ScreenRect) {
    for (points, style) in scene.polylines() {
        let screen: Vec<Vec2> = points
            .iter()
            .map(|&point| to_screen(scene, rect, Point2::from(point)))
            .collect();
        draw_path(&screen, style, rect);
    }

    for (segment, style) in scene.segments() {
        let screen = [
            to_screen(scene, rect, segment.from),
            to_screen(scene, rect, segment.to),
        ];
        draw_path(&screen, style, rect);
    }

    for (at, color) in scene.markers() {
        let center = to_screen(scene, rect, at);
        draw_circle(center.x, center.y, MARKER_RADIUS, to_color(color));
    }
}
