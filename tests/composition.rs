// Composition tests — a host type built on Moderable, and a host wired to
// the HTTP classifier against a local mock of the moderation API.

mod common;

use std::sync::Arc;

use common::{ScriptedClassifier, GREETING, INSULT, POLITE};
use moderable::{
    LogoraClassifier, Moderable, ModerationError, ModerationHost, ModerationRate, Verdict,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A forum comment whose title and body are moderated.
struct Comment {
    author: String,
    moderation: ModerationHost,
}

impl Comment {
    async fn new(
        classifier: Arc<ScriptedClassifier>,
        author: &str,
        title: &str,
        body: &str,
    ) -> Result<Self, ModerationError> {
        let moderation =
            ModerationHost::with_rate(classifier, ModerationRate::default(), [title, body])
                .await?;
        Ok(Self {
            author: author.to_string(),
            moderation,
        })
    }
}

impl Moderable for Comment {
    fn moderation(&self) -> &ModerationHost {
        &self.moderation
    }

    fn moderation_mut(&mut self) -> &mut ModerationHost {
        &mut self.moderation
    }
}

#[tokio::test]
async fn moderable_type_exposes_host_surface() {
    let classifier = Arc::new(ScriptedClassifier::french());
    let mut comment = Comment::new(classifier.clone(), "camille", INSULT, GREETING)
        .await
        .unwrap();

    assert_eq!(comment.author, "camille");
    assert_eq!(comment.fragments().len(), 2);
    assert_eq!(
        comment.verdicts().unwrap(),
        vec![Verdict::new(INSULT, false), Verdict::new(GREETING, true)]
    );

    comment.set_text(0, POLITE.to_string()).await.unwrap();
    assert_eq!(
        comment.verdicts().unwrap(),
        vec![Verdict::new(POLITE, true), Verdict::new(GREETING, true)]
    );
    assert!(comment.is_acceptable(GREETING).await.unwrap());
}

#[tokio::test]
async fn moderable_set_text_propagates_errors() {
    let classifier = Arc::new(ScriptedClassifier::french());
    let mut comment = Comment::new(classifier.clone(), "camille", GREETING, GREETING)
        .await
        .unwrap();
    classifier.fail_on(POLITE);

    let err = comment.set_text(1, POLITE.to_string()).await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(comment.verdicts().unwrap()[1], Verdict::new(GREETING, true));
}

async fn mount_score(server: &MockServer, text: &str, score: f64) {
    Mock::given(method("GET"))
        .and(path("/predict"))
        .and(query_param("text", text))
        .and(query_param("language", "fr-FR"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"prediction": {"0": score}})),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn host_over_http_classifier() {
    let server = MockServer::start().await;
    mount_score(&server, INSULT, 0.97).await;
    mount_score(&server, GREETING, 0.03).await;
    mount_score(&server, POLITE, 0.08).await;

    let classifier = Arc::new(LogoraClassifier::new(&server.uri(), "fr-FR").unwrap());
    let mut host =
        ModerationHost::with_rate(classifier, ModerationRate::default(), [INSULT, GREETING])
            .await
            .unwrap();

    assert_eq!(
        host.verdicts().unwrap(),
        vec![Verdict::new(INSULT, false), Verdict::new(GREETING, true)]
    );

    host.set_content(0, POLITE).await.unwrap();
    assert_eq!(
        host.verdicts().unwrap(),
        vec![Verdict::new(POLITE, true), Verdict::new(GREETING, true)]
    );
}

#[tokio::test]
async fn http_failure_during_write_keeps_verdict() {
    let server = MockServer::start().await;
    mount_score(&server, GREETING, 0.03).await;
    Mock::given(method("GET"))
        .and(path("/predict"))
        .and(query_param("text", INSULT))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let classifier = Arc::new(LogoraClassifier::new(&server.uri(), "fr-FR").unwrap());
    let mut host = ModerationHost::with_rate(classifier, ModerationRate::default(), [GREETING])
        .await
        .unwrap();

    let err = host.set_content(0, INSULT).await.unwrap_err();
    assert!(matches!(err, ModerationError::Status { .. }));
    assert_eq!(host.verdicts().unwrap(), vec![Verdict::new(GREETING, true)]);
}
