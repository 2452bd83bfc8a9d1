//! Live end-to-end test against the real service.
//!
//! Run with real credentials:
//!   GEMINI_API_KEY=... VIDSAGE_TEST_VIDEO=path/to/clip.mp4 \
//!     cargo test -p vidsage-pipeline --test live -- --ignored

use vidsage_genai::{AnalysisAgent, GenAiClient};
use vidsage_models::{AnalysisDepth, AnalysisRequest};
use vidsage_pipeline::Orchestrator;

#[tokio::test]
#[ignore = "requires GEMINI_API_KEY and VIDSAGE_TEST_VIDEO"]
async fn test_live_analysis_round_trip() {
    dotenvy::dotenv().ok();

    let video_path =
        std::env::var("VIDSAGE_TEST_VIDEO").expect("VIDSAGE_TEST_VIDEO must point to a video");
    let raw_media = tokio::fs::read(&video_path)
        .await
        .expect("Failed to read test video");

    let client = GenAiClient::from_env().expect("Failed to create client");
    let agent = AnalysisAgent::new(client.clone(), vec![]);
    let orchestrator = Orchestrator::new(client, agent);

    let request = AnalysisRequest::new(
        raw_media,
        "video/mp4",
        "Summarize the key points in this video",
        AnalysisDepth::Quick,
        false,
    );

    let result = orchestrator.submit_analysis(&request).await;

    assert!(
        result.succeeded,
        "live analysis failed: {:?}",
        result.error_detail
    );
    assert!(!result.content.is_empty());
    println!("Analysis:\n{}", result.content);
}
