// HTTP classifier backed by the Logora moderation API.
//
// One GET per text: `/predict?text=<text>&language=<locale>`. The response
// carries the score under `prediction."0"`; anything else is a malformed
// response. No retries, no custom timeout.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::traits::ModerationClassifier;
use crate::error::ModerationError;
use crate::output::truncate_chars;

pub const DEFAULT_API_URL: &str = "https://moderation.logora.fr";
pub const DEFAULT_LANGUAGE: &str = "fr-FR";

pub struct LogoraClassifier {
    client: reqwest::Client,
    base_url: String,
    language: String,
}

impl LogoraClassifier {
    /// Create a classifier for the given base URL and locale tag.
    pub fn new(base_url: &str, language: &str) -> Result<Self, ModerationError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("moderable/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.to_string(),
        })
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

#[async_trait]
impl ModerationClassifier for LogoraClassifier {
    async fn score(&self, text: &str) -> Result<f64, ModerationError> {
        let response = self
            .client
            .get(self.predict_url())
            .query(&[("text", text), ("language", self.language.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ModerationError::Status { status, body });
        }

        let body = response.text().await?;
        let score = parse_prediction(&body)?;

        debug!(
            score,
            language = %self.language,
            text_preview = %truncate_chars(text, 50),
            "Scored text"
        );

        Ok(score)
    }
}

/// Extract the score from a `/predict` response body.
pub fn parse_prediction(body: &str) -> Result<f64, ModerationError> {
    let parsed: PredictResponse = serde_json::from_str(body)
        .map_err(|e| ModerationError::MalformedResponse(e.to_string()))?;
    Ok(parsed.prediction.score)
}

// --- /predict response schema ---

#[derive(Deserialize)]
struct PredictResponse {
    prediction: Prediction,
}

#[derive(Deserialize)]
struct Prediction {
    #[serde(rename = "0")]
    score: f64,
}
