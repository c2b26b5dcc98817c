use std::env;
use std::path::PathBuf;

use chrono::Local;
use parabolic_arc::core::ballistics::Arc;
use parabolic_arc::core::geometry::Point2;
use parabolic_arc::core::plot::{RenderOptions, render_to_file};
use parabolic_arc::core::scene::{ArcLayers, Scene};
use parabolic_arc::demo;
use parabolic_arc::logging::init_tracing;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Inputs {
    angle_deg: f64,
    velocity: f64,
    gravity: f64,
    height: f64,
}

#[derive(Clone, Debug, PartialEq)]
struct Command {
    inputs: Option<Inputs>,
    out: Option<PathBuf>,
}

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn parse_inputs(values: &[String]) -> Result<Inputs, String> {
    if values.len() != 3 && values.len() != 4 {
        return Err(
            "Expected 3 or 4 arguments: <angle_deg> <velocity> <gravity> [height].".to_string(),
        );
    }

    let height = match values.get(3) {
        Some(value) => parse_f64(value, "height")?,
        None => demo::THROWER.y,
    };

    Ok(Inputs {
        angle_deg: parse_f64(&values[0], "angle")?,
        velocity: parse_f64(&values[1], "velocity")?,
        gravity: parse_f64(&values[2], "gravity")?,
        height,
    })
}

fn parse_command(args: &[String]) -> Result<Command, String> {
    let mut out = None;
    let mut positional = Vec::new();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        if arg == "--out" || arg == "-o" {
            let path = rest
                .next()
                .ok_or_else(|| format!("Missing file path after '{arg}'."))?;
            out = Some(PathBuf::from(path));
        } else {
            positional.push(arg.clone());
        }
    }

    let inputs = if positional.is_empty() {
        None
    } else {
        Some(parse_inputs(&positional)?)
    };

    Ok(Command { inputs, out })
}

fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "trajectory_{}.png",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

fn single_launch_scene(inputs: Inputs) -> Result<(Scene, Arc), String> {
    let thrower = Point2::new(0.0, inputs.height);
    let arc = Arc::try_new(
        thrower,
        inputs.angle_deg,
        inputs.velocity,
        inputs.gravity,
        demo::X_BOUNDS,
        demo::Y_BOUNDS,
    )
    .map_err(|e| e.to_string())?;

    let mut scene = demo::backdrop(thrower).with_title(format!(
        "{} deg at {} (g = {})",
        inputs.angle_deg, inputs.velocity, inputs.gravity
    ));
    scene.add_arc(&arc, ArcLayers::ALL);
    Ok((scene, arc))
}

fn print_summary(arc: &Arc) {
    let direction = if arc.launches_rightward() {
        "right"
    } else {
        "left"
    };
    println!(
        "Angle {:.2} deg, velocity {:.2}: range {:.4}, apex height {:.4}, travels {direction}",
        arc.angle_deg(),
        arc.velocity(),
        arc.range(),
        arc.apex_height(),
    );
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} [--out <file>]");
    println!("  {program} <angle_deg> <velocity> <gravity> [height] [--out <file>]");
    println!();
    println!("With no launch arguments the two-launch demonstration is rendered.");
    println!("The output format follows the file extension (.png, .bmp or .svg).");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 45 10 10 5 --out arc.svg");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let command = parse_command(&args)?;
    let (scene, arcs) = match command.inputs {
        Some(inputs) => {
            let (scene, arc) = single_launch_scene(inputs)?;
            (scene, vec![arc])
        }
        None => (demo::demo_scene(), demo::launches().to_vec()),
    };

    for arc in &arcs {
        print_summary(arc);
    }

    let out = command.out.unwrap_or_else(default_output_path);
    render_to_file(&scene, &out, RenderOptions::default())
        .map_err(|e| format!("Could not write '{}': {e}", out.display()))?;
    println!("\nPlot written to {}", out.display());

    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}
