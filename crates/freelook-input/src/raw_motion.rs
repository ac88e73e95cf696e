//! Accumulate-and-drain cell for raw pointer deltas.
//!
//! The platform event handler calls [`RawMotion::accumulate`] for every
//! device motion event; the raw look algorithm calls [`RawMotion::drain`]
//! once per frame. Clones share one accumulator, so the producer and consumer
//! hold separate handles instead of reaching for a global.

use std::sync::{Arc, Mutex, PoisonError};

use glam::{DVec2, Vec2};
use tracing::warn;

/// Shared accumulator of device-space motion counts.
#[derive(Debug, Clone, Default)]
pub struct RawMotion {
    total: Arc<Mutex<DVec2>>,
}

impl RawMotion {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one device motion event. Non-finite deltas are dropped.
    pub fn accumulate(&self, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            warn!(dx = dx, dy = dy, "dropping non-finite raw mouse delta");
            return;
        }
        let mut total = self.total.lock().unwrap_or_else(PoisonError::into_inner);
        *total += DVec2::new(dx, dy);
    }

    /// Returns everything accumulated since the last drain and resets to zero.
    pub fn drain(&self) -> Vec2 {
        let mut total = self.total.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *total).as_vec2()
    }

    /// Discards pending motion.
    pub fn clear(&self) {
        let _ = self.drain();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_sum_and_resets() {
        let motion = RawMotion::new();
        motion.accumulate(3.0, -1.0);
        motion.accumulate(7.0, 4.0);
        assert_eq!(motion.drain(), Vec2::new(10.0, 3.0));
        assert_eq!(motion.drain(), Vec2::ZERO);
    }

    #[test]
    fn test_clones_share_accumulator() {
        let producer = RawMotion::new();
        let consumer = producer.clone();
        producer.accumulate(5.0, 5.0);
        assert_eq!(consumer.drain(), Vec2::new(5.0, 5.0));
        assert_eq!(producer.drain(), Vec2::ZERO);
    }

    #[test]
    fn test_non_finite_deltas_dropped() {
        let motion = RawMotion::new();
        motion.accumulate(2.0, 0.0);
        motion.accumulate(f64::NAN, 1.0);
        motion.accumulate(1.0, f64::INFINITY);
        assert_eq!(motion.drain(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_clear_discards_pending() {
        let motion = RawMotion::new();
        motion.accumulate(12.0, 8.0);
        motion.clear();
        assert_eq!(motion.drain(), Vec2::ZERO);
    }

    #[test]
    fn test_accumulate_from_other_thread() {
        let motion = RawMotion::new();
        let producer = motion.clone();
        let handle = std::thread::spawn(move || {
            for _ in 0..100 {
                producer.accumulate(1.0, -1.0);
            }
        });
        handle.join().unwrap();
        assert_eq!(motion.drain(), Vec2::new(100.0, -100.0));
    }
}
