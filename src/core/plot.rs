use std::fmt;
use std::path::Path;

use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::core::scene::{LineStyle, Scene, SceneColor};

pub const DEFAULT_SIZE: (u32, u32) = (1280, 960);

const LINE_WIDTH: u32 = 2;
const DASH_SIZE: u32 = 8;
const DASH_SPACING: u32 = 6;
const MARKER_RADIUS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub size: (u32, u32),
    /// Draw the mesh, tick labels, axis descriptions and caption. Needs a
    /// system font.
    pub axes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            axes: true,
        }
    }
}

#[derive(Debug)]
pub enum PlotError {
    UnsupportedFormat(String),
    Backend(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat(ext) => write!(
                f,
                "Unsupported output format '{ext}'. Use a .png, .bmp or .svg file."
            ),
            Self::Backend(msg) => write!(f, "Plotting failed: {msg}"),
        }
    }
}

impl std::error::Error for PlotError {}

fn backend_err<E: fmt::Display>(err: E) -> PlotError {
    PlotError::Backend(err.to_string())
}

fn rgb(color: SceneColor) -> RGBColor {
    let (r, g, b) = color.rgb();
    RGBColor(r, g, b)
}

fn shape(style: LineStyle) -> ShapeStyle {
    rgb(style.color).stroke_width(LINE_WIDTH)
}

/// Renders `scene` into an image file, picking the backend from the file
/// extension.
pub fn render_to_file(scene: &Scene, path: &Path, options: RenderOptions) -> Result<(), PlotError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "svg" => {
            let root = SVGBackend::new(path, options.size).into_drawing_area();
            draw_scene(scene, &root, options)?;
            root.present().map_err(backend_err)?;
        }
        "png" | "bmp" => {
            let root = BitMapBackend::new(path, options.size).into_drawing_area();
            draw_scene(scene, &root, options)?;
            root.present().map_err(backend_err)?;
        }
        _ => return Err(PlotError::UnsupportedFormat(ext)),
    }

    tracing::info!(
        path = %path.display(),
        primitives = scene.primitives.len(),
        "scene rendered"
    );
    Ok(())
}

pub fn draw_scene<DB: DrawingBackend>(
    scene: &Scene,
    root: &DrawingArea<DB, Shift>,
    options: RenderOptions,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(backend_err)?;

    let mut builder = ChartBuilder::on(root);
    builder.margin(20);
    if options.axes {
        builder.x_label_area_size(40).y_label_area_size(50);
        if let Some(title) = &scene.title {
            builder.caption(title, ("sans-serif", 24));
        }
    }

    let mut chart = builder
        .build_cartesian_2d(
            scene.x_bounds.min..scene.x_bounds.max,
            scene.y_bounds.min..scene.y_bounds.max,
        )
        .map_err(backend_err)?;

    if options.axes {
        chart
            .configure_mesh()
            .x_desc(scene.x_label.as_str())
            .y_desc(scene.y_label.as_str())
            .draw()
            .map_err(backend_err)?;
    }

    for (points, style) in scene.polylines() {
        draw_line(&mut chart, points, style)?;
    }
    for (segment, style) in scene.segments() {
        let points = [
            (segment.from.x, segment.from.y),
            (segment.to.x, segment.to.y),
        ];
        draw_line(&mut chart, &points, style)?;
    }
    chart
        .draw_series(
            scene
                .markers()
                .map(|(at, color)| Circle::new((at.x, at.y), MARKER_RADIUS, rgb(color).filled())),
        )
        .map_err(backend_err)?;

    Ok(())
}

/// Splits `points` at non-finite samples into runs of finite points. Runs
/// shorter than two points cannot be drawn and are dropped.
pub fn finite_runs(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    points
        .split(|(x, y)| !(x.is_finite() && y.is_finite()))
        .filter(|run| run.len() >= 2)
        .map(<[(f64, f64)]>::to_vec)
        .collect()
}

fn draw_line<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    points: &[(f64, f64)],
    style: LineStyle,
) -> Result<(), PlotError> {
    for run in finite_runs(points) {
        if style.dashed {
            chart
                .draw_series(DashedLineSeries::new(
                    run,
                    DASH_SIZE,
                    DASH_SPACING,
                    shape(style),
                ))
                .map_err(backend_err)?;
        } else {
            chart
                .draw_series(LineSeries::new(run, shape(style)))
                .map_err(backend_err)?;
        }
    }
    Ok(())
}
