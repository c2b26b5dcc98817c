//! Fixed demonstration scene: a thrower on a tower, two targets on the
//! ground and two launches, one over each shoulder.

use crate::core::ballistics::Arc;
use crate::core::geometry::{AxisBounds, Point2};
use crate::core::scene::{ArcLayers, LineStyle, Scene, SceneColor};

pub const X_BOUNDS: AxisBounds = AxisBounds::new(-10.0, 10.0);
pub const Y_BOUNDS: AxisBounds = AxisBounds::new(-10.0, 20.0);
pub const GRAVITY: f64 = 10.0;
pub const THROWER: Point2 = Point2::new(0.0, 5.0);
pub const X_LABEL: &str = "TIME";
pub const Y_LABEL: &str = "f(x)";

/// (angle in degrees, speed) for each demo launch.
pub const LAUNCHES: [(f64, f64); 2] = [(100.0, 14.45), (80.0, 11.15)];

const SCENERY: LineStyle = LineStyle::solid(SceneColor::Black);

pub fn targets() -> [Point2; 2] {
    [
        Point2::new(X_BOUNDS.min + 2.0, 0.0),
        Point2::new(X_BOUNDS.max / 2.0, 0.0),
    ]
}

pub fn launches() -> [Arc; 2] {
    LAUNCHES.map(|(angle_deg, velocity)| {
        Arc::new(THROWER, angle_deg, velocity, GRAVITY, X_BOUNDS, Y_BOUNDS)
    })
}

/// Ground, tower, thrower and targets, with no trajectories yet.
pub fn backdrop(thrower: Point2) -> Scene {
    let mut scene = Scene::new(X_BOUNDS, Y_BOUNDS).with_labels(X_LABEL, Y_LABEL);
    let [left_target, right_target] = targets();
    scene
        .push_marker(thrower, SceneColor::Steel)
        .push_marker(left_target, SceneColor::Orange)
        .push_marker(right_target, SceneColor::Green)
        .push_hline(0.0, X_BOUNDS.min, X_BOUNDS.max, SCENERY)
        .push_vline(thrower.x, 0.0, thrower.y, SCENERY);
    scene
}

pub fn demo_scene() -> Scene {
    let mut scene = backdrop(THROWER).with_title("Projectile arcs");
    for arc in launches() {
        scene.add_arc(&arc, ArcLayers::ALL);
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::{GRAVITY, THROWER, X_BOUNDS, demo_scene, launches, targets};
    use crate::core::geometry::Point2;

    #[test]
    fn launches_go_both_ways() {
        let [left, right] = launches();
        assert!(!left.launches_rightward());
        assert!(right.launches_rightward());
        assert!(left.range() < 0.0 && right.range() > 0.0);
        assert_eq!(left.origin(), THROWER);
        assert_eq!(right.gravity().get(), GRAVITY);
    }

    #[test]
    fn targets_sit_on_the_ground() {
        assert_eq!(
            targets(),
            [Point2::new(X_BOUNDS.min + 2.0, 0.0), Point2::new(5.0, 0.0)]
        );
    }

    #[test]
    fn demo_scene_holds_backdrop_and_both_arcs() {
        let scene = demo_scene();
        assert_eq!(scene.markers().count(), 3);
        // ground + tower, then range/height/apex guide per arc
        assert_eq!(scene.segments().count(), 2 + 3 * 2);
        // curve + tangent guide per arc
        assert_eq!(scene.polylines().count(), 4);
        assert_eq!(scene.x_label, "TIME");
        assert_eq!(scene.y_label, "f(x)");
    }
}
