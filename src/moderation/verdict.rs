// Verdicts and the slot store that keeps them parallel to fragments.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ModerationError;

/// The acceptability decision for one fragment, plus the text it was made on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub text: String,
    pub acceptable: bool,
}

impl Verdict {
    pub fn new(text: impl Into<String>, acceptable: bool) -> Self {
        Self {
            text: text.into(),
            acceptable,
        }
    }
}

#[derive(Debug)]
struct Slot {
    revision: u64,
    verdict: Verdict,
}

/// One slot per fragment index. Cloning shares the underlying slots, which
/// is how the per-fragment subscribers and the host reach the same store.
///
/// Each slot remembers the fragment revision its verdict came from; a write
/// from an older revision than the stored one is dropped.
#[derive(Debug, Clone)]
pub struct VerdictStore {
    slots: Arc<Mutex<Vec<Option<Slot>>>>,
}

impl VerdictStore {
    pub fn with_len(len: usize) -> Self {
        Self {
            slots: Arc::new(Mutex::new((0..len).map(|_| None).collect())),
        }
    }

    /// Write a verdict for `index`. Returns false when the write was stale.
    pub fn record(
        &self,
        index: usize,
        revision: u64,
        verdict: Verdict,
    ) -> Result<bool, ModerationError> {
        let mut slots = self.slots.lock().map_err(|_| ModerationError::Poisoned)?;
        let slot = slots
            .get_mut(index)
            .ok_or(ModerationError::UnknownFragment(index))?;

        if let Some(current) = slot {
            if current.revision > revision {
                debug!(
                    index,
                    stored = current.revision,
                    incoming = revision,
                    "Dropping stale verdict"
                );
                return Ok(false);
            }
        }

        *slot = Some(Slot { revision, verdict });
        Ok(true)
    }

    pub fn get(&self, index: usize) -> Result<Option<Verdict>, ModerationError> {
        let slots = self.slots.lock().map_err(|_| ModerationError::Poisoned)?;
        Ok(slots
            .get(index)
            .and_then(|slot| slot.as_ref())
            .map(|slot| slot.verdict.clone()))
    }

    /// Snapshot of every filled slot, in index order.
    pub fn snapshot(&self) -> Result<Vec<Verdict>, ModerationError> {
        let slots = self.slots.lock().map_err(|_| ModerationError::Poisoned)?;
        Ok(slots
            .iter()
            .flatten()
            .map(|slot| slot.verdict.clone())
            .collect())
    }
}
