use std::fmt;

use crate::core::geometry::{AxisBounds, Point2, Segment};

/// Number of points `Arc::sample_curve` evaluates.
pub const DEFAULT_SAMPLES: usize = 50;

/// Angles whose cosine falls under this are treated as straight up/down.
const VERTICAL_COS_EPSILON: f64 = 1e-9;

/// Downward acceleration, always stored as a non-negative magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityMagnitude(f64);

impl GravityMagnitude {
    pub fn new(magnitude: f64) -> Self {
        Self(magnitude.abs())
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// The signed acceleration the trajectory formula expects (negative).
    pub fn signed(self) -> f64 {
        -self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcError {
    NonFinite(&'static str),
    NonPositiveVelocity(f64),
    NonPositiveGravity(f64),
    VerticalLaunch(f64),
}

impl fmt::Display for ArcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite(field) => write!(f, "{field} must be a finite number."),
            Self::NonPositiveVelocity(v) => {
                write!(f, "Velocity must be greater than zero (got {v}).")
            }
            Self::NonPositiveGravity(g) => {
                write!(f, "Gravity must be greater than zero (got {g}).")
            }
            Self::VerticalLaunch(angle) => write!(
                f,
                "Launch angle {angle} deg is vertical; the height formula divides by cos(angle)."
            ),
        }
    }
}

impl std::error::Error for ArcError {}

/// `count` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// One projectile launch and the parabola it traces.
///
/// The horizontal coordinate doubles as elapsed time, so `height_at(t)` is the
/// familiar "y as a function of x" projectile equation. Nothing is cached;
/// every derived value is recomputed from the launch parameters on access.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    origin: Point2,
    angle_deg: f64,
    velocity: f64,
    gravity: GravityMagnitude,
    world_x: AxisBounds,
    world_y: AxisBounds,
}

impl Arc {
    /// Builds an arc without checking the inputs. Degenerate launches (zero
    /// velocity or gravity, vertical angles) produce non-finite heights.
    pub fn new(
        origin: Point2,
        angle_deg: f64,
        velocity: f64,
        gravity: f64,
        world_x: AxisBounds,
        world_y: AxisBounds,
    ) -> Self {
        Self {
            origin,
            angle_deg,
            velocity,
            gravity: GravityMagnitude::new(gravity),
            world_x,
            world_y,
        }
    }

    /// Same as [`Arc::new`] but rejects inputs that would make the formulas
    /// blow up.
    pub fn try_new(
        origin: Point2,
        angle_deg: f64,
        velocity: f64,
        gravity: f64,
        world_x: AxisBounds,
        world_y: AxisBounds,
    ) -> Result<Self, ArcError> {
        let finite_checks = [
            (origin.x, "Origin x"),
            (origin.y, "Origin height"),
            (angle_deg, "Angle"),
            (velocity, "Velocity"),
            (gravity, "Gravity"),
        ];
        if let Some((_, field)) = finite_checks.iter().find(|(value, _)| !value.is_finite()) {
            return Err(ArcError::NonFinite(*field));
        }
        if velocity <= 0.0 {
            return Err(ArcError::NonPositiveVelocity(velocity));
        }
        if gravity <= 0.0 {
            return Err(ArcError::NonPositiveGravity(gravity));
        }
        if angle_deg.to_radians().cos().abs() < VERTICAL_COS_EPSILON {
            return Err(ArcError::VerticalLaunch(angle_deg));
        }

        let arc = Self::new(origin, angle_deg, velocity, gravity, world_x, world_y);
        tracing::debug!(
            angle_deg,
            velocity,
            gravity,
            range = arc.range(),
            apex = arc.apex_height(),
            "arc configured"
        );
        Ok(arc)
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn gravity(&self) -> GravityMagnitude {
        self.gravity
    }

    // y = t*tan(theta) + g*t^2 / (2*v^2*cos^2(theta)) + h, with g negative.
    pub fn height_at(&self, t: f64) -> f64 {
        let theta = self.angle_rad();
        let cos = theta.cos();
        t * theta.tan()
            + (self.gravity.signed() * t * t) / (2.0 * self.velocity * self.velocity * cos * cos)
            + self.origin.y
    }

    pub fn heights_at<I>(&self, ts: I) -> Vec<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        ts.into_iter().map(|t| self.height_at(t)).collect()
    }

    /// Horizontal distance back to launch height: v^2 sin(2 theta) / g.
    /// Negative for launches past 90 deg.
    pub fn range(&self) -> f64 {
        (self.velocity * self.velocity * (2.0 * self.angle_rad()).sin()) / self.gravity.get()
    }

    /// Highest point reached, in plot coordinates: v^2 sin^2(theta) / 2g + h.
    pub fn apex_height(&self) -> f64 {
        let sin = self.angle_rad().sin();
        (self.velocity * self.velocity * sin * sin) / (2.0 * self.gravity.get()) + self.origin.y
    }

    pub fn launches_rightward(&self) -> bool {
        self.angle_deg <= 90.0
    }

    /// Where horizontal sampling stops: the right edge of the world for
    /// rightward launches, the left edge otherwise.
    pub fn sample_end(&self) -> f64 {
        if self.launches_rightward() {
            self.world_x.max
        } else {
            self.world_x.min
        }
    }

    pub fn sample_curve(&self) -> Vec<(f64, f64)> {
        self.sample_curve_with(DEFAULT_SAMPLES)
    }

    pub fn sample_curve_with(&self, samples: usize) -> Vec<(f64, f64)> {
        let xs = linspace(self.origin.x, self.sample_end(), samples);
        let ys = self.heights_at(xs.iter().copied());
        let points: Vec<(f64, f64)> = xs.into_iter().zip(ys).collect();
        tracing::trace!(samples = points.len(), end = self.sample_end(), "sampled arc");
        points
    }

    pub fn range_indicator(&self) -> Segment {
        Segment::new(self.origin, Point2::new(self.range(), self.origin.y))
    }

    pub fn height_indicator(&self) -> Segment {
        let mid = self.range() / 2.0;
        Segment::new(
            Point2::new(mid, self.origin.y),
            Point2::new(mid, self.apex_height()),
        )
    }

    /// Horizontal line at the apex, from the apex out to the sampling edge.
    pub fn apex_guide(&self) -> Segment {
        let apex = self.apex_height();
        Segment::new(
            Point2::new(self.range() / 2.0, apex),
            Point2::new(self.sample_end(), apex),
        )
    }

    /// Decorative guide leaving the launch point. Sampled over
    /// `origin.x..=world_y.max` as `(cos(theta) t, sin(theta) + h + t - 1)`.
    pub fn tangent_guide(&self, samples: usize) -> Vec<(f64, f64)> {
        let theta = self.angle_rad();
        let (sin, cos) = theta.sin_cos();
        linspace(self.origin.x, self.world_y.max, samples)
            .into_iter()
            .map(|t| (cos * t, sin + self.origin.y + t - 1.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Arc, ArcError, DEFAULT_SAMPLES, GravityMagnitude, linspace};
    use crate::core::geometry::{AxisBounds, Point2};

    const WORLD_X: AxisBounds = AxisBounds::new(-10.0, 10.0);
    const WORLD_Y: AxisBounds = AxisBounds::new(-10.0, 20.0);

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn arc(angle_deg: f64, velocity: f64, gravity: f64) -> Arc {
        Arc::new(
            Point2::new(0.0, 5.0),
            angle_deg,
            velocity,
            gravity,
            WORLD_X,
            WORLD_Y,
        )
    }

    #[test]
    fn forty_five_degree_launch_matches_worked_numbers() {
        let arc = arc(45.0, 10.0, 10.0);
        assert_close(arc.range(), 10.0, 1e-9);
        assert_close(arc.apex_height(), 7.5, 1e-9);
        assert!(arc.launches_rightward());
    }

    #[test]
    fn obtuse_launch_travels_left_with_negative_range() {
        let arc = arc(100.0, 14.45, 10.0);
        assert!(!arc.launches_rightward());
        assert!(arc.range() < 0.0);
        assert_eq!(arc.sample_end(), WORLD_X.min);

        let points = arc.sample_curve();
        assert_eq!(points.last().map(|p| p.0), Some(-10.0));
    }

    #[test]
    fn height_at_origin_is_launch_height() {
        for angle in [10.0, 45.0, 80.0, 100.0, 135.0, 170.0] {
            assert_eq!(arc(angle, 12.0, 9.8).height_at(0.0), 5.0);
        }
    }

    #[test]
    fn trajectory_returns_to_launch_height_at_range() {
        for angle in [15.0, 30.0, 60.0, 80.0, 100.0, 150.0] {
            let arc = arc(angle, 11.15, 10.0);
            assert_close(arc.height_at(arc.range()), 5.0, 1e-9);
        }
    }

    #[test]
    fn apex_sits_at_half_range() {
        for angle in [20.0, 45.0, 70.0, 110.0, 160.0] {
            let arc = arc(angle, 14.45, 10.0);
            assert_close(arc.height_at(arc.range() / 2.0), arc.apex_height(), 1e-9);
            assert!(arc.apex_height() >= 5.0);
        }
    }

    #[test]
    fn ninety_degrees_counts_as_rightward() {
        assert!(arc(90.0, 10.0, 10.0).launches_rightward());
        assert!(arc(0.0, 10.0, 10.0).launches_rightward());
        assert!(!arc(90.0001, 10.0, 10.0).launches_rightward());
    }

    #[test]
    fn gravity_is_stored_as_magnitude() {
        let g = GravityMagnitude::new(-9.8);
        assert_eq!(g.get(), 9.8);
        assert_eq!(g.signed(), -9.8);
        assert_eq!(arc(45.0, 10.0, 10.0).gravity().signed(), -10.0);
    }

    #[test]
    fn heights_at_evaluates_elementwise_in_order() {
        let arc = arc(45.0, 10.0, 10.0);
        let ts = [0.0, 2.5, 5.0, 10.0];
        let ys = arc.heights_at(ts);
        assert_eq!(ys.len(), ts.len());
        for (t, y) in ts.iter().zip(&ys) {
            assert_eq!(*y, arc.height_at(*t));
        }
        assert_close(ys[2], 7.5, 1e-9);
    }

    #[test]
    fn sample_curve_spans_origin_to_right_bound() {
        let arc = arc(45.0, 10.0, 10.0);
        let points = arc.sample_curve();

        assert_eq!(points.len(), DEFAULT_SAMPLES);
        assert_eq!(points[0].0, 0.0);
        assert_eq!(points[DEFAULT_SAMPLES - 1].0, 10.0);
        let step = 10.0 / (DEFAULT_SAMPLES - 1) as f64;
        for (i, (x, y)) in points.iter().enumerate() {
            assert_close(*x, step * i as f64, 1e-12);
            assert_eq!(*y, arc.height_at(*x));
        }
    }

    #[test]
    fn sampled_heights_match_elementwise_evaluation() {
        let arc = arc(100.0, 14.45, 10.0);
        let points = arc.sample_curve_with(7);
        let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
        assert_eq!(xs, linspace(0.0, WORLD_X.min, 7));
        assert_eq!(ys, arc.heights_at(xs.iter().copied()));
    }

    #[test]
    fn sampling_is_repeatable() {
        let arc = arc(80.0, 11.15, 10.0);
        assert_eq!(arc.sample_curve(), arc.sample_curve());
    }

    #[test]
    fn linspace_handles_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(0.0, -10.0, 3), vec![0.0, -5.0, -10.0]);
    }

    #[test]
    fn indicators_mark_range_and_apex() {
        let arc = arc(45.0, 10.0, 10.0);

        let range = arc.range_indicator();
        assert_eq!(range.from.y, range.to.y);
        assert_eq!(range.from, Point2::new(0.0, 5.0));
        assert_close(range.to.x, 10.0, 1e-9);

        let height = arc.height_indicator();
        assert_eq!(height.from.x, height.to.x);
        assert_close(height.from.x, 5.0, 1e-9);
        assert_eq!(height.from.y, 5.0);
        assert_close(height.to.y, 7.5, 1e-9);

        let apex = arc.apex_guide();
        assert_eq!(apex.from.y, apex.to.y);
        assert_close(apex.from.x, 5.0, 1e-9);
        assert_eq!(apex.to.x, WORLD_X.max);
    }

    #[test]
    fn apex_guide_follows_leftward_launch() {
        let arc = arc(100.0, 14.45, 10.0);
        assert_eq!(arc.apex_guide().to.x, WORLD_X.min);
    }

    #[test]
    fn tangent_guide_spans_vertical_bound() {
        let arc = arc(45.0, 10.0, 10.0);
        let guide = arc.tangent_guide(DEFAULT_SAMPLES);
        assert_eq!(guide.len(), DEFAULT_SAMPLES);

        let sin = 45.0_f64.to_radians().sin();
        assert_close(guide[0].0, 0.0, 1e-12);
        assert_close(guide[0].1, sin + 4.0, 1e-12);
        let last = guide[DEFAULT_SAMPLES - 1];
        assert_close(last.0, 45.0_f64.to_radians().cos() * 20.0, 1e-9);
        assert_close(last.1, sin + 24.0, 1e-9);
    }

    #[test]
    fn unchecked_zero_velocity_is_not_finite() {
        let arc = arc(45.0, 0.0, 10.0);
        assert!(!arc.height_at(3.0).is_finite());
        assert!(!arc.sample_curve().iter().skip(1).any(|(_, y)| y.is_finite()));
    }

    #[test]
    fn try_new_rejects_degenerate_launches() {
        let origin = Point2::new(0.0, 5.0);
        let build = |angle, velocity, gravity| {
            Arc::try_new(origin, angle, velocity, gravity, WORLD_X, WORLD_Y)
        };

        assert_eq!(
            build(45.0, 0.0, 10.0).expect_err("zero velocity"),
            ArcError::NonPositiveVelocity(0.0)
        );
        assert_eq!(
            build(45.0, 10.0, -1.0).expect_err("negative gravity"),
            ArcError::NonPositiveGravity(-1.0)
        );
        assert_eq!(
            build(270.0, 10.0, 10.0).expect_err("vertical"),
            ArcError::VerticalLaunch(270.0)
        );
        assert_eq!(
            build(f64::NAN, 10.0, 10.0).expect_err("nan"),
            ArcError::NonFinite("Angle")
        );

        let ok = build(80.0, 11.15, 10.0).expect("valid launch");
        assert_eq!(ok, Arc::new(origin, 80.0, 11.15, 10.0, WORLD_X, WORLD_Y));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = ArcError::VerticalLaunch(90.0);
        assert!(err.to_string().contains("vertical"));
        assert!(
            ArcError::NonPositiveVelocity(-2.0)
                .to_string()
                .contains("Velocity")
        );
    }
}
