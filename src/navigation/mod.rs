//! Pointer-driven scrubbing of a rider along its path.
//!
//! Horizontal pointer drags set a progress velocity; once the pointer is
//! released the velocity decays by a friction factor each step until it
//! drops below a threshold.

use tracing::trace;

use crate::math::Point2;
use crate::path::RiderPath;

/// Tuning constants for [`Navigator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationParams {
    /// Converts pointer travel into progress units.
    pub scale: f64,
    /// Gain applied on top of `scale`.
    pub speed: f64,
    /// Velocity cap, expressed before `scale` is applied.
    pub max_speed: f64,
    /// Per-step multiplier applied to the velocity while coasting.
    pub friction: f64,
    /// Velocities below this are treated as rest.
    pub velocity_threshold: f64,
    /// Blend factor towards a new target velocity (1 = jump straight to it).
    pub smoothing: f64,
}

impl Default for NavigationParams {
    fn default() -> Self {
        Self {
            scale: 0.1,
            speed: 0.6,
            max_speed: 20.0,
            friction: 0.9,
            velocity_threshold: 0.001,
            smoothing: 0.8,
        }
    }
}

/// Turns pointer samples into progress changes with inertia.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    params: NavigationParams,
    velocity: f64,
    last_pointer: Option<Point2>,
}

impl Navigator {
    /// Creates a navigator at rest.
    #[must_use]
    pub fn new(params: NavigationParams) -> Self {
        Self {
            params,
            velocity: 0.0,
            last_pointer: None,
        }
    }

    /// Tuning constants in use.
    #[must_use]
    pub fn params(&self) -> &NavigationParams {
        &self.params
    }

    /// Current progress velocity (progress units per step).
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Feeds one pointer sample: `Some(position)` while pressed, `None` when released.
    ///
    /// A fresh press stops any coasting; dragging sets the velocity from the
    /// horizontal travel since the previous sample.
    pub fn handle_pointer(&mut self, pointer: Option<Point2>) {
        match (pointer, self.last_pointer) {
            (Some(current), Some(previous)) => self.steer(current.x - previous.x),
            (Some(_), None) => self.steer(0.0),
            (None, _) => {}
        }
        self.last_pointer = pointer;
    }

    /// Advances the rider by the current velocity and applies friction.
    ///
    /// Returns whether the rider was moved.
    pub fn step(&mut self, path: &mut RiderPath) -> bool {
        if self.velocity.abs() < self.params.velocity_threshold {
            return false;
        }
        path.set_progress(path.progress() - self.velocity);
        self.velocity *= self.params.friction;
        trace!(progress = path.progress(), velocity = self.velocity, "navigator step");
        true
    }

    fn steer(&mut self, dx: f64) {
        let limit = self.params.max_speed * self.params.scale;
        let target = (dx * self.params.scale * self.params.speed).clamp(-limit, limit);
        self.velocity += (target - self.velocity) * self.params.smoothing;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn pointer(x: f64) -> Option<Point2> {
        Some(Point2::new(x, 0.0))
    }

    #[test]
    fn press_without_drag_stays_at_rest() {
        let mut nav = Navigator::default();
        nav.handle_pointer(pointer(3.0));
        assert_relative_eq!(nav.velocity(), 0.0);
        let mut path = RiderPath::default();
        assert!(!nav.step(&mut path));
    }

    #[test]
    fn drag_sets_smoothed_velocity() {
        let mut nav = Navigator::default();
        nav.handle_pointer(pointer(0.0));
        nav.handle_pointer(pointer(1.0));
        // target = 1 * 0.1 * 0.6, blended 80% from rest.
        assert_relative_eq!(nav.velocity(), 0.048, epsilon = 1e-12);
    }

    #[test]
    fn velocity_is_capped() {
        let mut nav = Navigator::new(NavigationParams {
            smoothing: 1.0,
            ..NavigationParams::default()
        });
        nav.handle_pointer(pointer(0.0));
        nav.handle_pointer(pointer(1000.0));
        assert_relative_eq!(nav.velocity(), 2.0, epsilon = 1e-12);
        nav.handle_pointer(pointer(-1000.0));
        assert_relative_eq!(nav.velocity(), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn dragging_right_moves_rider_back() {
        let mut nav = Navigator::default();
        let mut path = RiderPath::default();
        path.set_progress(0.5);
        nav.handle_pointer(pointer(0.0));
        nav.handle_pointer(pointer(1.0));
        assert!(nav.step(&mut path));
        assert_relative_eq!(path.progress(), 0.5 - 0.048, epsilon = 1e-12);
        assert_relative_eq!(nav.velocity(), 0.048 * 0.9, epsilon = 1e-12);
    }

    #[test]
    fn coasting_decays_to_rest() {
        let mut nav = Navigator::default();
        let mut path = RiderPath::default();
        path.set_progress(1.0);
        nav.handle_pointer(pointer(0.0));
        nav.handle_pointer(pointer(0.5));
        nav.handle_pointer(None);

        let steps = (0..1000).take_while(|_| nav.step(&mut path)).count();
        assert!(steps > 0 && steps < 1000);
        assert!(nav.velocity().abs() < nav.params().velocity_threshold);
        assert!(path.progress() < 1.0);
    }

    #[test]
    fn progress_stays_clamped() {
        let mut nav = Navigator::new(NavigationParams {
            smoothing: 1.0,
            ..NavigationParams::default()
        });
        let mut path = RiderPath::default();
        nav.handle_pointer(pointer(0.0));
        nav.handle_pointer(pointer(-1000.0));
        for _ in 0..10 {
            nav.step(&mut path);
        }
        assert_relative_eq!(path.progress(), 1.0);
    }

    #[test]
    fn new_press_stops_coasting() {
        let mut nav = Navigator::default();
        nav.handle_pointer(pointer(0.0));
        nav.handle_pointer(pointer(2.0));
        nav.handle_pointer(None);
        assert!(nav.velocity() > 0.0);
        nav.handle_pointer(pointer(5.0));
        // Blends 80% towards zero.
        assert_relative_eq!(nav.velocity(), 0.096 * 0.2, epsilon = 1e-12);
    }
}
