//! Settle debouncing for container resizes.
//!
//! Each request replaces the pending one and restarts the quiet period, so
//! only the last size of a burst is delivered. Time is passed in by the
//! caller (milliseconds on any monotonic clock).

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingResize {
    width: u32,
    height: u32,
    deadline_ms: f64,
}

/// A single last-write-wins resize timer.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeDebounce {
    quiet_ms: f64,
    pending: Option<PendingResize>,
}

impl ResizeDebounce {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    /// Arm (or re-arm) the timer for a new size.
    pub fn request(&mut self, width: u32, height: u32, now_ms: f64) {
        if self.pending.is_some() {
            log::trace!("resize request {width}x{height} supersedes pending one");
        }
        self.pending = Some(PendingResize {
            width,
            height,
            deadline_ms: now_ms + self.quiet_ms,
        });
    }

    /// The settled size, once the quiet period has elapsed. Fires once.
    pub fn poll(&mut self, now_ms: f64) -> Option<(u32, u32)> {
        let pending = self.pending?;
        if now_ms < pending.deadline_ms {
            return None;
        }
        self.pending = None;
        Some((pending.width, pending.height))
    }

    /// The pending size, delivered now regardless of the deadline.
    pub fn settle(&mut self) -> Option<(u32, u32)> {
        self.pending.take().map(|p| (p.width, p.height))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Milliseconds until the pending request settles.
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.pending.map(|p| (p.deadline_ms - now_ms).max(0.0))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
