use std::time::{Duration, Instant};

// Falling further behind than this drops the backlog instead of bursting frames.
const MAX_LAG: Duration = Duration::from_millis(500);

/// Fixed-rate frame scheduler.
#[derive(Debug, Clone)]
pub struct FramePacer {
    target_fps: u32,
    interval: Duration,
    next_frame: Option<Instant>,
    last_frame: Option<Instant>,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        let target_fps = target_fps.max(1);
        Self {
            target_fps,
            interval: interval_for(target_fps),
            next_frame: None,
            last_frame: None,
        }
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the rate; the next frame is rescheduled from the last one.
    pub fn set_target_fps(&mut self, target_fps: u32) {
        self.target_fps = target_fps.max(1);
        self.interval = interval_for(self.target_fps);
        self.next_frame = self.last_frame.map(|last| last + self.interval);
    }

    /// Decide whether a frame is due at `now`.
    ///
    /// Returns the seconds elapsed since the previous frame when one is due
    /// (0.0 for the very first frame), otherwise `None`.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let (Some(next), Some(last)) = (self.next_frame, self.last_frame) else {
            self.last_frame = Some(now);
            self.next_frame = Some(now + self.interval);
            return Some(0.0);
        };

        if now < next {
            return None;
        }

        let dt = now.duration_since(last).as_secs_f32();
        self.last_frame = Some(now);

        let mut scheduled = next + self.interval;
        if now.saturating_duration_since(scheduled) > MAX_LAG {
            tracing::debug!(
                behind_ms = now.duration_since(scheduled).as_millis() as u64,
                "frame schedule resynced"
            );
            scheduled = now + self.interval;
        }
        self.next_frame = Some(scheduled);
        Some(dt)
    }

    /// How long the caller may block (e.g. polling input) before the next frame.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_frame
            .map_or(Duration::ZERO, |next| next.saturating_duration_since(now))
    }
}

fn interval_for(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / fps as f64)
}
