// Fragment — a unit of text with a fixed position and change subscribers.
//
// Every content write notifies the subscribers in registration order and
// awaits each one before `set_content` resolves, so anything a subscriber
// does (re-classification included) has finished when the write returns.

use futures::future::BoxFuture;

use crate::error::ModerationError;

/// Handler invoked on every content write. It receives the fragment after the
/// write and returns a future that must own everything it needs.
pub type Subscriber =
    Box<dyn Fn(&Fragment) -> BoxFuture<'static, Result<(), ModerationError>> + Send + Sync>;

pub struct Fragment {
    content: String,
    index: usize,
    revision: u64,
    subscribers: Vec<Subscriber>,
}

impl Fragment {
    pub fn new(content: impl Into<String>, index: usize) -> Self {
        Self {
            content: content.into(),
            index,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Zero-based position in the host's input order. Never changes.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of content writes since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Register a handler for every subsequent content write.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&Fragment) -> BoxFuture<'static, Result<(), ModerationError>>
            + Send
            + Sync
            + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Replace the content, then notify every subscriber in order.
    ///
    /// Writing the same value again still notifies: a write is a trigger,
    /// not a diff. The first subscriber error stops dispatch and is returned;
    /// the new content stays in place either way.
    pub async fn set_content(
        &mut self,
        new_content: impl Into<String>,
    ) -> Result<(), ModerationError> {
        self.content = new_content.into();
        self.revision += 1;

        for subscriber in &self.subscribers {
            subscriber(self).await?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fragment")
            .field("content", &self.content)
            .field("index", &self.index)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
