//! Command-line front end for the analysis pipeline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vidsage_genai::{AnalysisAgent, AugmentationTool, GenAiClient};
use vidsage_models::{AnalysisDepth, AnalysisRequest, ProgressObserver};
use vidsage_pipeline::{Orchestrator, PollPolicy};

/// Default query used when none is given, matching the general-summary mode.
const GENERAL_SUMMARY_QUERY: &str = "Provide a comprehensive summary of this video, \
     including main topics, key points, and overall message.";

#[derive(Debug, Parser)]
#[command(name = "vidsage", about = "Ask questions about a video's content")]
struct Cli {
    /// Path to the video file (mp4, mov, avi)
    video: PathBuf,

    /// Question about the video; defaults to a general summary
    #[arg(short, long)]
    query: Option<String>,

    /// Analysis depth: quick, standard, or detailed
    #[arg(short, long, default_value = "standard")]
    depth: AnalysisDepth,

    /// Allow the agent to supplement the analysis with live web research
    #[arg(long)]
    web_research: bool,
}

/// Accepted upload containers, mapped to their mime types.
fn mime_for(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()?.to_lowercase().as_str() {
        "mp4" => Some("video/mp4"),
        "mov" => Some("video/quicktime"),
        "avi" => Some("video/x-msvideo"),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let Some(mime_hint) = mime_for(&cli.video) else {
        bail!(
            "Unsupported video format: {} (supported: mp4, mov, avi)",
            cli.video.display()
        );
    };

    let raw_media = tokio::fs::read(&cli.video)
        .await
        .with_context(|| format!("Failed to read {}", cli.video.display()))?;
    info!(
        "Loaded {} ({:.2} MB)",
        cli.video.display(),
        raw_media.len() as f64 / (1024.0 * 1024.0)
    );

    // Credential check happens here, before any pipeline work.
    let client = GenAiClient::from_env().context("Service configuration error")?;

    let tools = if cli.web_research {
        vec![AugmentationTool::WebSearch]
    } else {
        vec![]
    };
    let agent = AnalysisAgent::new(client.clone(), tools);

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling analysis");
            signal_cancel.cancel();
        }
    });

    let observer: Arc<dyn ProgressObserver> =
        Arc::new(|label: &str, percent: u8| info!("[{percent:>3}%] {label}"));

    let orchestrator = Orchestrator::new(client, agent)
        .with_policy(PollPolicy::from_env())
        .with_observer(observer)
        .with_cancellation(cancel);

    let query = cli.query.unwrap_or_else(|| GENERAL_SUMMARY_QUERY.to_string());
    let request = AnalysisRequest::new(raw_media, mime_hint, query, cli.depth, cli.web_research);

    let result = orchestrator.submit_analysis(&request).await;

    if result.succeeded {
        println!("{}", result.content);
        Ok(())
    } else {
        let detail = result
            .error_detail
            .unwrap_or_else(|| "unknown failure".to_string());
        eprintln!("Analysis failed: {detail}");
        std::process::exit(1);
    }
}
