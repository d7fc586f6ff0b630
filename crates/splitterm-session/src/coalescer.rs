//! Per-session debounce for pixel resizes.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use splitterm_common::PixelBounds;

/// Pending-resize table: at most one deadline per session id.
///
/// A new request for an id replaces its pending entry and restarts the quiet
/// interval. Callers pass `now` explicitly and poll with [`take_due`].
///
/// [`take_due`]: ResizeCoalescer::take_due
pub struct ResizeCoalescer {
    quiet: Duration,
    pending: HashMap<String, Pending>,
}

struct Pending {
    deadline: Instant,
    bounds: PixelBounds,
}

impl ResizeCoalescer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: HashMap::new(),
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Schedule `bounds` for `id`, replacing any pending request.
    pub fn request(&mut self, id: &str, bounds: PixelBounds, now: Instant) {
        self.pending.insert(
            id.to_string(),
            Pending {
                deadline: now + self.quiet,
                bounds,
            },
        );
    }

    /// Remove and return every request whose quiet interval has elapsed,
    /// ordered by id.
    pub fn take_due(&mut self, now: Instant) -> Vec<(String, PixelBounds)> {
        let mut due: Vec<String> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(id, _)| id.clone())
            .collect();
        due.sort();
        due.into_iter()
            .filter_map(|id| self.pending.remove(&id).map(|p| (id, p.bounds)))
            .collect()
    }

    /// Drop the pending request for `id`, if any.
    pub fn cancel(&mut self, id: &str) -> bool {
        self.pending.remove(id).is_some()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
