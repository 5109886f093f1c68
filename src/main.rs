use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use moderable::config::Config;
use moderable::output::terminal;
use moderable::{LogoraClassifier, ModerationClassifier, ModerationHost, ModerationRate};

/// Moderable: content-moderation verdicts for short texts.
///
/// Sends each text to the moderation API and accepts it when the
/// returned score is below the moderation rate.
#[derive(Parser)]
#[command(name = "moderable", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Moderate one or more texts and print their verdicts
    Check {
        /// Texts to moderate, in order
        #[arg(required = true)]
        texts: Vec<String>,

        /// Override the moderation rate (default from MODERABLE_RATE, else 0.91)
        #[arg(long)]
        rate: Option<f64>,

        /// Rewrite a text after the first pass, e.g. --set "0=s'il te plaît"
        #[arg(long = "set", value_parser = parse_edit)]
        edits: Vec<(usize, String)>,

        /// Print verdicts as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the raw classifier score for a single text
    Score {
        text: String,

        /// Override the moderation rate used for the verdict
        #[arg(long)]
        rate: Option<f64>,
    },

    /// Show the resolved configuration
    Config,
}

/// Parse an `INDEX=TEXT` edit.
fn parse_edit(raw: &str) -> Result<(usize, String), String> {
    let (index, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=TEXT, got {raw:?}"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid index {index:?}: {e}"))?;
    Ok((index, text.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("moderable=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            texts,
            rate,
            edits,
            json,
        } => {
            let classifier = build_classifier(&config)?;
            let rate = ModerationRate::new(rate.unwrap_or(config.moderation_rate));

            info!(texts = texts.len(), rate = rate.get(), "Moderating texts");
            let mut host = ModerationHost::with_rate(classifier, rate, texts)
                .await
                .context("Initial moderation pass failed")?;

            for (index, text) in edits {
                info!(index, "Rewriting text");
                host.set_content(index, text)
                    .await
                    .with_context(|| format!("Re-validation of text {index} failed"))?;
            }

            let verdicts = host.verdicts()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&verdicts)?);
            } else {
                terminal::display_verdicts(host.fragments(), &verdicts, host.moderation_rate());
            }
        }

        Commands::Score { text, rate } => {
            let classifier = build_classifier(&config)?;
            let score = classifier
                .score(&text)
                .await
                .context("Failed to score text")?;
            let rate = ModerationRate::new(rate.unwrap_or(config.moderation_rate));
            terminal::display_score(&text, score, &rate);
        }

        Commands::Config => {
            println!("API URL:          {}", config.api_url);
            println!("Language:         {}", config.language);
            println!("Moderation rate:  {}", config.moderation_rate);
        }
    }

    Ok(())
}

fn build_classifier(config: &Config) -> Result<Arc<dyn ModerationClassifier>> {
    let classifier = LogoraClassifier::new(&config.api_url, &config.language)
        .context("Failed to build moderation client")?;
    Ok(Arc::new(classifier))
}
