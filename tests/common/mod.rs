// Shared test fixtures: a scripted classifier with call accounting.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use moderable::{ModerationClassifier, ModerationError};

pub const INSULT: &str = "Ferme ta gueule";
pub const GREETING: &str = "Bonjour, comment ça va?";
pub const POLITE: &str = "s'il te plaît";

/// Returns fixed scores per text. Unknown texts are a malformed response;
/// texts marked as failing answer with a 503.
#[derive(Default)]
pub struct ScriptedClassifier {
    scores: HashMap<String, f64>,
    failing: Mutex<Vec<String>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedClassifier {
    pub fn french() -> Self {
        Self::default()
            .with(INSULT, 0.98)
            .with(GREETING, 0.02)
            .with(POLITE, 0.05)
            .with("imbecile", 0.95)
            .with("a", 0.10)
            .with("b", 0.50)
            .with("c", 0.90)
    }

    pub fn with(mut self, text: &str, score: f64) -> Self {
        self.scores.insert(text.to_string(), score);
        self
    }

    pub fn fail_on(&self, text: &str) {
        self.failing.lock().unwrap().push(text.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModerationClassifier for ScriptedClassifier {
    async fn score(&self, text: &str) -> Result<f64, ModerationError> {
        self.calls.lock().unwrap().push(text.to_string());

        if self.failing.lock().unwrap().iter().any(|t| t == text) {
            return Err(ModerationError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body: "scripted failure".to_string(),
            });
        }

        self.scores
            .get(text)
            .copied()
            .ok_or_else(|| ModerationError::MalformedResponse(format!("no score for {text:?}")))
    }
}
