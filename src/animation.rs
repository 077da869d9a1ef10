//! Counting animation for the calculator outputs.
//!
//! A run interpolates from `start` to `end` over `duration_ms` with a quartic
//! ease-out. The web shell samples it once per animation frame and keeps
//! requesting frames until the run reports `done`.

use std::cell::Cell;

pub const DEFAULT_DURATION_MS: f64 = 600.0;

/// `1 - (1 - t)^4`, with `t` clamped to [0, 1].
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    pub start: f64,
    pub end: f64,
    pub started_at_ms: f64,
    pub duration_ms: f64,
}

/// One sampled frame of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub value: f64,
    pub done: bool,
}

impl AnimationRun {
    pub fn new(start: f64, end: f64, started_at_ms: f64, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            started_at_ms,
            duration_ms,
        }
    }

    /// Elapsed fraction in [0, 1]. Non-positive durations finish immediately.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        let p = (now_ms - self.started_at_ms) / self.duration_ms;
        if p.is_nan() {
            return 1.0;
        }
        p.clamp(0.0, 1.0)
    }

    pub fn value_at_progress(&self, progress: f64) -> f64 {
        // Land on `end` exactly rather than on start + (end - start).
        if progress >= 1.0 {
            return self.end;
        }
        self.start + (self.end - self.start) * ease_out_quart(progress)
    }

    pub fn frame(&self, now_ms: f64) -> Frame {
        let progress = self.progress(now_ms);
        Frame {
            value: self.value_at_progress(progress),
            done: progress >= 1.0,
        }
    }
}

/// Identifies the newest run on one output element.
///
/// Starting a run bumps the counter; frame callbacks of older runs see a
/// stale generation and stop without writing.
#[derive(Debug, Default)]
pub struct RunGeneration {
    current: Cell<u64>,
}

impl RunGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current.get() == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(0.5), 1.0 - 0.0625);
        assert_eq!(ease_out_quart(-3.0), 0.0);
        assert_eq!(ease_out_quart(7.0), 1.0);
    }

    #[test]
    fn run_hits_start_and_end_exactly() {
        let run = AnimationRun::new(0.1, 0.3, 1000.0, 600.0);
        assert_eq!(run.frame(1000.0).value, 0.1);
        assert!(!run.frame(1000.0).done);

        let last = run.frame(1600.0);
        assert_eq!(last.value, 0.3);
        assert!(last.done);

        // Late frames stay pinned to the end value.
        assert_eq!(run.frame(5000.0).value, 0.3);
    }

    #[test]
    fn frames_before_the_start_read_as_start() {
        let run = AnimationRun::new(0.0, 100.0, 1000.0, 600.0);
        assert_eq!(run.progress(990.0), 0.0);
        assert_eq!(run.frame(990.0).value, 0.0);
    }

    #[test]
    fn counting_up_is_monotonic() {
        let run = AnimationRun::new(0.0, 100.0, 0.0, 600.0);
        let mut prev = f64::NEG_INFINITY;
        for ms in 0..=640 {
            let v = run.frame(ms as f64).value;
            assert!(v >= prev, "value dropped at {ms}ms: {v} < {prev}");
            assert!((0.0..=100.0).contains(&v));
            prev = v;
        }
        assert_eq!(prev, 100.0);
    }

    #[test]
    fn ease_out_front_loads_movement() {
        let run = AnimationRun::new(0.0, 100.0, 0.0, 600.0);
        // Half the time covers well over half the distance.
        assert!(run.frame(300.0).value > 90.0);
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let run = AnimationRun::new(0.0, 42.0, 10.0, 0.0);
        assert_eq!(run.frame(10.0), Frame { value: 42.0, done: true });

        let run = AnimationRun::new(0.0, 42.0, 10.0, f64::NAN);
        assert!(run.frame(10.0).done);
    }

    #[test]
    fn superseded_generation_is_stale() {
        let gen = RunGeneration::new();
        let first = gen.begin();
        assert!(gen.is_current(first));

        let second = gen.begin();
        assert!(!gen.is_current(first));
        assert!(gen.is_current(second));
    }
}
