use bevy::prelude::*;

/// The input modality that started a drag. Move and release handling is
/// scoped to this source, so a stray touch never steers a mouse drag and a
/// second finger never steals an active touch drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum GrabSource {
    Mouse,
    Touch(u64),
}

/// Per-drag state, created on pointer-down and destroyed on release.
#[derive(Debug, Clone, Copy, Reflect)]
pub struct DragSession {
    pub source: GrabSource,
    /// Screen-space bounding rect of the pad base captured at drag start,
    /// used as the coordinate origin for the whole drag.
    pub anchor: Rect,
}

/// Holds the single active [`DragSession`], plus the emission clock for the
/// move-event throttle. A drag is in progress iff `session` is `Some`; a
/// pointer-down of any modality while a session exists is ignored.
#[derive(Resource, Default, Reflect)]
#[reflect(Resource)]
pub struct ActiveDrag {
    pub session: Option<DragSession>,
    pub throttle: MoveThrottle,
}

/// Rate limiter for outward move notifications. The timestamp survives
/// across drags, matching a per-widget (not per-drag) throttle window.
#[derive(Debug, Default, Clone, Copy, Reflect)]
pub struct MoveThrottle {
    last_emit_ms: Option<f64>,
}

impl MoveThrottle {
    /// Returns true and records `now_ms` when at least `window_ms` has
    /// elapsed since the last allowed emission. A zero window always allows.
    pub fn allow(&mut self, now_ms: f64, window_ms: f64) -> bool {
        if let Some(last) = self.last_emit_ms {
            if now_ms - last < window_ms {
                return false;
            }
        }
        self.last_emit_ms = Some(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_window_always_allows() {
        let mut throttle = MoveThrottle::default();
        assert!(throttle.allow(0.0, 0.0));
        assert!(throttle.allow(0.0, 0.0));
        assert!(throttle.allow(1.0, 0.0));
    }

    #[test]
    fn moves_inside_the_window_are_dropped() {
        // Two moves 50ms apart with a 100ms window: one emission.
        let mut throttle = MoveThrottle::default();
        assert!(throttle.allow(0.0, 100.0));
        assert!(!throttle.allow(50.0, 100.0));
    }

    #[test]
    fn moves_outside_the_window_both_emit() {
        // Two moves 150ms apart with a 100ms window: two emissions.
        let mut throttle = MoveThrottle::default();
        assert!(throttle.allow(0.0, 100.0));
        assert!(throttle.allow(150.0, 100.0));
    }

    #[test]
    fn dropped_moves_do_not_push_the_window() {
        let mut throttle = MoveThrottle::default();
        assert!(throttle.allow(0.0, 100.0));
        assert!(!throttle.allow(90.0, 100.0));
        // Still measured from the last emission at t=0, not the dropped one.
        assert!(throttle.allow(100.0, 100.0));
    }
}
