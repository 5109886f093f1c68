// ModerationHost — fragments, their verdicts, and the re-validation wiring.
//
// Construction subscribes one callback per fragment and then classifies
// every fragment in index order. After that, any write to a fragment runs
// its callback, which classifies the new content and overwrites that
// fragment's verdict slot once the classifier has answered. A failed
// classification leaves the previous verdict in place and surfaces the
// error from the write.

use std::sync::Arc;

use futures::FutureExt;
use tracing::debug;

use super::rate::ModerationRate;
use super::verdict::{Verdict, VerdictStore};
use crate::classifier::traits::ModerationClassifier;
use crate::error::ModerationError;
use crate::fragment::Fragment;

/// Everything a re-validation needs, cheap to clone into each subscriber.
#[derive(Clone)]
struct Revalidator {
    classifier: Arc<dyn ModerationClassifier>,
    rate: ModerationRate,
    verdicts: VerdictStore,
}

impl Revalidator {
    async fn is_acceptable(&self, text: &str) -> Result<bool, ModerationError> {
        let score = self.classifier.score(text).await?;
        Ok(self.rate.accepts(score))
    }

    /// Classify `text` and, only on success, write it into slot `index`.
    async fn revalidate(
        &self,
        index: usize,
        revision: u64,
        text: String,
    ) -> Result<(), ModerationError> {
        let acceptable = self.is_acceptable(&text).await?;
        debug!(index, revision, acceptable, "Re-validated fragment");
        self.verdicts
            .record(index, revision, Verdict { text, acceptable })?;
        Ok(())
    }
}

pub struct ModerationHost {
    fragments: Vec<Fragment>,
    revalidator: Revalidator,
}

impl ModerationHost {
    /// Build a host on the process-wide moderation rate.
    pub async fn new<I, S>(
        classifier: Arc<dyn ModerationClassifier>,
        texts: I,
    ) -> Result<Self, ModerationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rate(classifier, ModerationRate::shared(), texts).await
    }

    /// Build a host on an explicitly provided rate cell.
    pub async fn with_rate<I, S>(
        classifier: Arc<dyn ModerationClassifier>,
        rate: ModerationRate,
        texts: I,
    ) -> Result<Self, ModerationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fragments: Vec<Fragment> = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Fragment::new(text, index))
            .collect();

        let revalidator = Revalidator {
            classifier,
            rate,
            verdicts: VerdictStore::with_len(fragments.len()),
        };

        for fragment in &mut fragments {
            let revalidator = revalidator.clone();
            fragment.subscribe(move |fragment: &Fragment| {
                let revalidator = revalidator.clone();
                let index = fragment.index();
                let revision = fragment.revision();
                let text = fragment.content().to_string();
                async move { revalidator.revalidate(index, revision, text).await }.boxed()
            });
        }

        for fragment in &fragments {
            revalidator
                .revalidate(
                    fragment.index(),
                    fragment.revision(),
                    fragment.content().to_string(),
                )
                .await?;
        }

        debug!(fragments = fragments.len(), "Moderation host ready");

        Ok(Self {
            fragments,
            revalidator,
        })
    }

    /// Score `text` and compare it against the current rate.
    pub async fn is_acceptable(&self, text: &str) -> Result<bool, ModerationError> {
        self.revalidator.is_acceptable(text).await
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn fragment(&self, index: usize) -> Option<&Fragment> {
        self.fragments.get(index)
    }

    /// Mutable access for writing content; writes re-validate through the
    /// fragment's subscriber.
    pub fn fragment_mut(&mut self, index: usize) -> Option<&mut Fragment> {
        self.fragments.get_mut(index)
    }

    /// Write new content to fragment `index` and re-validate it.
    pub async fn set_content(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), ModerationError> {
        let fragment = self
            .fragments
            .get_mut(index)
            .ok_or(ModerationError::UnknownFragment(index))?;
        fragment.set_content(text).await
    }

    /// Snapshot of all verdicts, parallel to `fragments()`.
    pub fn verdicts(&self) -> Result<Vec<Verdict>, ModerationError> {
        self.revalidator.verdicts.snapshot()
    }

    pub fn verdict(&self, index: usize) -> Result<Option<Verdict>, ModerationError> {
        self.revalidator.verdicts.get(index)
    }

    pub fn all_acceptable(&self) -> Result<bool, ModerationError> {
        Ok(self.verdicts()?.iter().all(|v| v.acceptable))
    }

    /// Fragments whose current verdict is not acceptable.
    pub fn rejected(&self) -> Result<Vec<&Fragment>, ModerationError> {
        let verdicts = self.verdicts()?;
        Ok(self
            .fragments
            .iter()
            .zip(verdicts.iter())
            .filter(|(_, verdict)| !verdict.acceptable)
            .map(|(fragment, _)| fragment)
            .collect())
    }

    pub fn moderation_rate(&self) -> f64 {
        self.revalidator.rate.get()
    }

    /// Change the threshold for every host sharing this rate cell.
    /// Stored verdicts are not recomputed.
    pub fn set_moderation_rate(&self, value: f64) {
        self.revalidator.rate.set(value);
    }

    pub fn rate(&self) -> &ModerationRate {
        &self.revalidator.rate
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl std::fmt::Debug for ModerationHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModerationHost")
            .field("fragments", &self.fragments)
            .field("verdicts", &self.revalidator.verdicts)
            .field("moderation_rate", &self.moderation_rate())
            .finish()
    }
}
