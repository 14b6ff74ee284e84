use std::time::{Duration, Instant};

pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Coalesces a burst of width observations into the last one.
///
/// A value fires once no new observation has arrived for `delay`.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(f32, Instant)>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE)
    }
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn observe(&mut self, width: f32, now: Instant) {
        self.pending = Some((width, now));
    }

    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        let (width, observed_at) = self.pending?;
        if now.saturating_duration_since(observed_at) >= self.delay {
            self.pending = None;
            Some(width)
        } else {
            None
        }
    }

    /// Time left until the pending value fires, for scheduling a repaint.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, at)| self.delay.saturating_sub(now.saturating_duration_since(at)))
    }
}
