//! Pan/zoom state of the diagram window
//!
//! A [`Transform`] maps plane coordinates to screen coordinates:
//! `screen = plane * k + (x, y)`. Selecting a course starts a centering
//! [`Transition`]; starting another one replaces it rather than queueing.

use crate::core::layout::Point;
use serde::Serialize;

/// Smallest allowed zoom factor
pub const MIN_SCALE: f64 = 0.1;

/// Largest allowed zoom factor
pub const MAX_SCALE: f64 = 8.0;

/// Screen transform: translate then scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    /// Horizontal translation
    pub x: f64,
    /// Vertical translation
    pub y: f64,
    /// Scale factor
    pub k: f64,
}

impl Transform {
    /// No translation, unit scale
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        k: 1.0,
    };

    /// Plane point to screen point
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        Point::new(point.x.mul_add(self.k, self.x), point.y.mul_add(self.k, self.y))
    }

    /// Screen point to plane point
    #[must_use]
    pub fn invert(&self, point: Point) -> Point {
        Point::new((point.x - self.x) / self.k, (point.y - self.y) / self.k)
    }

    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            x: (to.x - self.x).mul_add(t, self.x),
            y: (to.y - self.y).mul_add(t, self.y),
            k: (to.k - self.k).mul_add(t, self.k),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// An in-flight animation between two transforms
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    /// Transform at the start
    pub from: Transform,
    /// Transform at the end
    pub to: Transform,
    /// Total length in milliseconds
    pub duration_ms: u32,
    /// Time already played
    pub elapsed_ms: u32,
}

impl Transition {
    /// Fraction completed, in `[0, 1]`
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration_ms == 0 {
            1.0
        } else {
            (f64::from(self.elapsed_ms) / f64::from(self.duration_ms)).min(1.0)
        }
    }

    /// Whether the animation has reached its end
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    fn current(&self) -> Transform {
        self.from.lerp(&self.to, self.progress())
    }
}

/// Window size plus the current pan/zoom
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Viewport {
    /// Window width in screen units
    pub width: f64,
    /// Window height in screen units
    pub height: f64,
    transform: Transform,
    transition: Option<Transition>,
}

impl Viewport {
    /// Create a viewport with the plane origin centred in the window
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let mut viewport = Self {
            width,
            height,
            transform: Transform::IDENTITY,
            transition: None,
        };
        viewport.translate_to(Point::default());
        viewport
    }

    /// Current transform
    #[must_use]
    pub const fn transform(&self) -> Transform {
        self.transform
    }

    /// The running animation, if any
    #[must_use]
    pub const fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Whether an animation is running
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    fn centered(&self, point: Point, k: f64) -> Transform {
        Transform {
            x: point.x.mul_add(-k, self.width / 2.0),
            y: point.y.mul_add(-k, self.height / 2.0),
            k,
        }
    }

    /// Jump so that `point` sits at the window centre, keeping the scale
    pub fn translate_to(&mut self, point: Point) {
        self.transition = None;
        self.transform = self.centered(point, self.transform.k);
    }

    /// Pan by a screen-space offset; interrupts any animation
    ///
    /// Non-finite offsets are ignored.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.transition = None;
        self.transform.x += dx;
        self.transform.y += dy;
    }

    /// Zoom by `factor` around a screen-space anchor; interrupts any animation
    ///
    /// The resulting scale is clamped to `[MIN_SCALE, MAX_SCALE]`. A factor that
    /// is not a finite positive number, or a non-finite anchor, is ignored.
    pub fn zoom_by(&mut self, factor: f64, anchor: Point) {
        if !factor.is_finite() || factor <= 0.0 || !anchor.x.is_finite() || !anchor.y.is_finite()
        {
            return;
        }
        self.transition = None;
        let k = (self.transform.k * factor).clamp(MIN_SCALE, MAX_SCALE);
        let plane = self.transform.invert(anchor);
        self.transform = Transform {
            x: plane.x.mul_add(-k, anchor.x),
            y: plane.y.mul_add(-k, anchor.y),
            k,
        };
    }

    /// Start animating so that `point` ends up centred
    ///
    /// Replaces any running transition, starting from wherever that one had got to.
    /// A zero duration jumps immediately.
    pub fn center_on(&mut self, point: Point, duration_ms: u32) {
        let from = self.transform;
        let to = self.centered(point, from.k);
        if duration_ms == 0 {
            self.transition = None;
            self.transform = to;
            return;
        }
        self.transition = Some(Transition {
            from,
            to,
            duration_ms,
            elapsed_ms: 0,
        });
    }

    /// Play the running transition forward and return the new transform
    pub fn advance(&mut self, elapsed_ms: u32) -> Transform {
        if let Some(transition) = self.transition.as_mut() {
            transition.elapsed_ms = transition.elapsed_ms.saturating_add(elapsed_ms);
            self.transform = transition.current();
            if transition.is_finished() {
                self.transition = None;
            }
        }
        self.transform
    }

    /// Run the current transition to its end
    pub fn finish(&mut self) -> Transform {
        if let Some(transition) = self.transition.take() {
            self.transform = transition.to;
        }
        self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_new_centres_origin() {
        let viewport = Viewport::new(800.0, 600.0);
        let screen = viewport.transform().apply(Point::default());
        assert!(close(screen.x, 400.0));
        assert!(close(screen.y, 300.0));
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_apply_and_invert() {
        let transform = Transform {
            x: 10.0,
            y: -5.0,
            k: 2.0,
        };
        let point = Point::new(3.0, 4.0);
        let back = transform.invert(transform.apply(point));
        assert!(close(back.x, 3.0) && close(back.y, 4.0));
    }

    #[test]
    fn test_center_on_animates_to_target() {
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.center_on(Point::new(200.0, 400.0), 100);
        assert!(viewport.is_animating());

        let halfway = viewport.advance(50);
        assert!(close(halfway.x, 300.0));
        assert!(close(halfway.y, 100.0));

        let done = viewport.advance(50);
        assert!(close(done.x, 200.0));
        assert!(close(done.y, -100.0));
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_center_on_replaces_running_transition() {
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.center_on(Point::new(200.0, 0.0), 100);
        viewport.advance(50);
        viewport.center_on(Point::new(-200.0, 0.0), 100);

        let transition = viewport.transition().unwrap();
        assert_eq!(transition.elapsed_ms, 0);
        assert!(close(transition.from.x, 300.0));
        assert!(close(transition.to.x, 600.0));

        let end = viewport.finish();
        assert!(close(end.x, 600.0));
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.center_on(Point::new(100.0, 100.0), 0);
        assert!(!viewport.is_animating());
        assert!(close(viewport.transform().x, 300.0));
    }

    #[test]
    fn test_pan_interrupts_animation() {
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.center_on(Point::new(100.0, 100.0), 100);
        viewport.pan_by(10.0, -10.0);
        assert!(!viewport.is_animating());
        assert!(close(viewport.transform().x, 410.0));
        assert!(close(viewport.transform().y, 290.0));
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed_and_clamps() {
        let mut viewport = Viewport::new(800.0, 600.0);
        let anchor = Point::new(500.0, 200.0);
        let before = viewport.transform().invert(anchor);
        viewport.zoom_by(2.0, anchor);
        let after = viewport.transform().invert(anchor);
        assert!(close(before.x, after.x) && close(before.y, after.y));
        assert!(close(viewport.transform().k, 2.0));

        viewport.zoom_by(1000.0, anchor);
        assert!(close(viewport.transform().k, MAX_SCALE));
        viewport.zoom_by(0.0, anchor);
        assert!(close(viewport.transform().k, MIN_SCALE));
    }

    #[test]
    fn test_invalid_zoom_and_pan_are_ignored() {
        let mut viewport = Viewport::new(800.0, 600.0);
        let before = viewport.transform();

        viewport.zoom_by(f64::NAN, Point::new(400.0, 300.0));
        viewport.zoom_by(0.0, Point::new(400.0, 300.0));
        viewport.zoom_by(-2.0, Point::new(400.0, 300.0));
        viewport.zoom_by(f64::INFINITY, Point::new(400.0, 300.0));
        viewport.zoom_by(2.0, Point::new(f64::NAN, 300.0));
        viewport.pan_by(f64::NAN, 10.0);
        assert_eq!(viewport.transform(), before);

        viewport.zoom_by(2.0, Point::new(400.0, 300.0));
        let after = viewport.transform();
        assert!((after.k - 2.0).abs() < f64::EPSILON);
        assert!(after.x.is_finite() && after.y.is_finite());
    }
}
