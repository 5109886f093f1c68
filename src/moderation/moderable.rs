// Moderable — moderation behaviour for any type that embeds a host.
//
// A type implements the two accessors and gets the rest: read views over
// fragments and verdicts, direct acceptability checks, and re-validating
// writes.

use async_trait::async_trait;

use super::host::ModerationHost;
use super::verdict::Verdict;
use crate::error::ModerationError;
use crate::fragment::Fragment;

#[async_trait]
pub trait Moderable: Send + Sync {
    fn moderation(&self) -> &ModerationHost;

    fn moderation_mut(&mut self) -> &mut ModerationHost;

    fn fragments(&self) -> &[Fragment] {
        self.moderation().fragments()
    }

    fn verdicts(&self) -> Result<Vec<Verdict>, ModerationError> {
        self.moderation().verdicts()
    }

    async fn is_acceptable(&self, text: &str) -> Result<bool, ModerationError> {
        self.moderation().is_acceptable(text).await
    }

    async fn set_text(&mut self, index: usize, text: String) -> Result<(), ModerationError> {
        self.moderation_mut().set_content(index, text).await
    }
}

impl Moderable for ModerationHost {
    fn moderation(&self) -> &ModerationHost {
        self
    }

    fn moderation_mut(&mut self) -> &mut ModerationHost {
        self
    }
}
