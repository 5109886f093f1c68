// Shared acceptance threshold.
//
// A text is acceptable when its classifier score is strictly below the rate.
// Clones share the same cell, so every host holding a clone sees a change
// immediately. Hosts built without an explicit rate share the process-wide
// default returned by `ModerationRate::shared()`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

pub const DEFAULT_MODERATION_RATE: f64 = 0.91;

static PROCESS_RATE: OnceLock<ModerationRate> = OnceLock::new();

/// An `f64` threshold stored as bits in an atomic cell.
#[derive(Clone, Debug)]
pub struct ModerationRate {
    bits: Arc<AtomicU64>,
}

impl ModerationRate {
    pub fn new(value: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(value.to_bits())),
        }
    }

    /// The process-wide rate, initialised to 0.91 on first use.
    pub fn shared() -> Self {
        PROCESS_RATE
            .get_or_init(|| Self::new(DEFAULT_MODERATION_RATE))
            .clone()
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Values outside [0, 1] are accepted as-is; they simply make every
    /// text pass or fail.
    pub fn set(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }

    pub fn accepts(&self, score: f64) -> bool {
        score < self.get()
    }

    /// True when both handles point at the same cell.
    pub fn same_cell(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.bits, &other.bits)
    }
}

impl Default for ModerationRate {
    fn default() -> Self {
        Self::new(DEFAULT_MODERATION_RATE)
    }
}
