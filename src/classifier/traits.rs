// Classifier trait — the swappable moderation backend.
//
// A classifier turns text into a single score in [0, 1], higher meaning
// more objectionable. Comparing the score against the threshold is the
// host's job, not the classifier's.

use async_trait::async_trait;

use crate::error::ModerationError;

#[async_trait]
pub trait ModerationClassifier: Send + Sync {
    /// Score a single text.
    async fn score(&self, text: &str) -> Result<f64, ModerationError>;
}
