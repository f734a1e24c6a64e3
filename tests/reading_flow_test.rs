use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use tarot_reader::config::toml_config::DEFAULT_TEXT_MODEL;
use tarot_reader::{BedrockClient, Presenter, ReaderConfig, TarotEngine};
use tempfile::TempDir;

fn text_path() -> String {
    format!("/model/{}/invoke", DEFAULT_TEXT_MODEL)
}

fn config_for(server: &MockServer) -> ReaderConfig {
    let mut config = ReaderConfig::default();
    config.bedrock.endpoint = Some(server.base_url());
    config.bedrock.retry_delay_ms = 10;
    config
}

#[tokio::test]
async fn test_three_card_reading_against_mock_bedrock() -> Result<()> {
    let server = MockServer::start();

    let sizer_mock = server.mock(|when, then| {
        when.method(POST)
            .path(text_path())
            .body_contains("respond ONLY with the number 3 or 5");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"content": [{"type": "text", "text": "3"}]}));
    });

    let rationale_mock = server.mock(|when, then| {
        when.method(POST)
            .path(text_path())
            .body_contains("is the most suitable choice");
        then.status(200).json_body(json!({
            "content": [{"type": "text", "text": "A simple question calls for a simple spread."}]
        }));
    });

    let interpretation_mock = server.mock(|when, then| {
        when.method(POST)
            .path(text_path())
            .body_contains("A simple question calls for a simple spread.");
        then.status(200).json_body(json!({
            "content": [
                {"type": "text", "text": "The first card speaks of beginnings."},
                {"type": "text", "text": "Summary: trust the change."}
            ]
        }));
    });

    let config = config_for(&server);
    let client = BedrockClient::new(config.bedrock_options())?;
    let engine = TarotEngine::new(client, config);
    let mut presenter = Presenter::new(Vec::new());

    let reading = engine.run("Should I change my career?", &mut presenter).await?;

    sizer_mock.assert();
    rationale_mock.assert();
    interpretation_mock.assert();

    assert_eq!(reading.cards.len(), 3);
    assert_eq!(
        reading.text,
        "The first card speaks of beginnings.\nSummary: trust the change."
    );

    let out = String::from_utf8(presenter.into_inner())?;
    assert!(out.contains("📜 Spread chosen: 3-card spread"));
    assert!(out.contains(&reading.text));
    Ok(())
}

#[tokio::test]
async fn test_unparseable_sizer_answer_draws_five_cards() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).body_contains("respond ONLY with the number 3 or 5");
        then.status(200).json_body(json!({"content": "Five, definitely."}));
    });
    server.mock(|when, then| {
        when.method(POST).body_contains("is the most suitable choice");
        then.status(200).json_body(json!({"content": "Layered questions need room."}));
    });
    let interpretation_mock = server.mock(|when, then| {
        when.method(POST).body_contains("Layered questions need room.");
        then.status(200).json_body(json!({"content": 42}));
    });

    let config = config_for(&server);
    let engine = TarotEngine::new(BedrockClient::new(config.bedrock_options())?, config);
    let reading = engine
        .run("How do I balance work, family and health?", &mut Presenter::new(std::io::sink()))
        .await?;

    interpretation_mock.assert();
    assert_eq!(reading.cards.len(), 5);
    assert_eq!(reading.text, "⚠️ Error: Unexpected response format.");
    Ok(())
}

#[tokio::test]
async fn test_service_outage_surfaces_as_error() -> Result<()> {
    let server = MockServer::start();
    let outage = server.mock(|when, then| {
        when.method(POST);
        then.status(500).body("internal failure");
    });

    let config = config_for(&server);
    let engine = TarotEngine::new(BedrockClient::new(config.bedrock_options())?, config);
    let mut presenter = Presenter::new(Vec::new());

    let err = engine
        .run("Will it work out?", &mut presenter)
        .await
        .unwrap_err();

    // 一次原始請求加一次重試
    outage.assert_hits(2);
    assert!(err.to_string().contains("HTTP 500"));

    let out = String::from_utf8(presenter.into_inner())?;
    assert!(!out.contains("Interpretation:"));
    Ok(())
}

#[tokio::test]
async fn test_config_file_drives_models_and_video() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("tarot.toml");

    std::env::set_var("TAROT_TEST_ENDPOINT", server.base_url());
    tokio::fs::write(
        &config_path,
        r#"
[bedrock]
endpoint = "${TAROT_TEST_ENDPOINT}"
retry_attempts = 0

[models]
text_model = "anthropic.claude-3-haiku-20240307-v1:0"

[video]
enabled = true
duration_seconds = 5
"#,
    )
    .await?;
    let config = ReaderConfig::from_file(&config_path)?;

    server.mock(|when, then| {
        when.method(POST)
            .path("/model/anthropic.claude-3-haiku-20240307-v1:0/invoke")
            .body_contains("respond ONLY with the number 3 or 5");
        then.status(200).json_body(json!({"content": "5"}));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/model/anthropic.claude-3-haiku-20240307-v1:0/invoke")
            .body_contains("is the most suitable choice");
        then.status(200).json_body(json!({"content": "Much is in motion."}));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/model/anthropic.claude-3-haiku-20240307-v1:0/invoke")
            .body_contains("interpret the reading");
        then.status(200).json_body(json!({"content": "The cards have spoken."}));
    });
    let video_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/model/luma.ray-v2:0/invoke")
            .json_body_partial(r#"{"duration_seconds": 5}"#);
        then.status(200)
            .json_body(json!({"url": "https://cdn.example.com/spread.mp4"}));
    });

    let engine = TarotEngine::new(BedrockClient::new(config.bedrock_options())?, config);
    let mut presenter = Presenter::new(Vec::new());
    let reading = engine.run("What lies ahead this year?", &mut presenter).await?;

    video_mock.assert();
    assert_eq!(reading.cards.len(), 5);
    assert_eq!(reading.text, "The cards have spoken.");

    let out = String::from_utf8(presenter.into_inner())?;
    assert!(out.contains("Watch it here: https://cdn.example.com/spread.mp4"));
    Ok(())
}
