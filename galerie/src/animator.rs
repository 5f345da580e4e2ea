//! Time-based tween used for page snapping and animated navigation.

use std::time::{Duration, Instant};

/// Eases the scroll offset toward a target page boundary.
///
/// The tween is self-clocked: `tick` samples the wall clock and reports the
/// next offset, or `None` once inactive. Quadratic ease-out, which reads as
/// a deceleration into the boundary.
#[derive(Debug, Clone)]
pub struct SnapAnimation {
    active: bool,
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Default for SnapAnimation {
    fn default() -> Self {
        Self {
            active: false,
            from: 0.0,
            to: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(220),
        }
    }
}

impl SnapAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Offset the tween is heading toward, if active.
    pub fn target(&self) -> Option<f32> {
        self.active.then_some(self.to)
    }

    /// Begin a tween from `from` to `to` over `duration_ms`.
    pub fn start(&mut self, from: f32, to: f32, duration_ms: u64) {
        self.active = true;
        self.from = from;
        self.to = to;
        self.started_at = Instant::now();
        self.duration = Duration::from_millis(duration_ms.max(1));
    }

    /// Returns `Some(next_offset)` while animating, `None` once finished or
    /// inactive. The final tick lands exactly on the target.
    pub fn tick(&mut self) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = Instant::now().saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.to);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        Some(self.from + (self.to - self.from) * eased)
    }

    /// Stop the tween immediately, leaving the offset where it is.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn inactive_animation_yields_nothing() {
        let mut snap = SnapAnimation::new();
        assert!(!snap.is_active());
        assert_eq!(snap.tick(), None);
    }

    #[test]
    fn animation_reaches_exact_target_and_deactivates() {
        let mut snap = SnapAnimation::new();
        snap.start(0.0, 300.0, 10);
        assert!(snap.is_active());
        assert_eq!(snap.target(), Some(300.0));

        thread::sleep(Duration::from_millis(30));
        assert_eq!(snap.tick(), Some(300.0));
        assert!(!snap.is_active());
        assert_eq!(snap.tick(), None);
    }

    #[test]
    fn mid_flight_ticks_stay_between_endpoints() {
        let mut snap = SnapAnimation::new();
        snap.start(100.0, 200.0, 200);
        let offset = snap.tick().expect("tween just started");
        assert!((100.0..=200.0).contains(&offset));
        assert!(snap.is_active());
    }

    #[test]
    fn cancel_stops_the_tween() {
        let mut snap = SnapAnimation::new();
        snap.start(0.0, 300.0, 200);
        snap.cancel();
        assert!(!snap.is_active());
        assert_eq!(snap.tick(), None);
    }
}
