/*!
 * End-to-end tests of the HTTP routes
 */

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use xlf_translator::app_config::ServerConfig;
use xlf_translator::providers::mock::MockGenerator;
use xlf_translator::server::router;

use crate::common::{echo_translation_responder, state_with};

fn app(generator: MockGenerator) -> Router {
    router(state_with(generator), &ServerConfig::default())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_shouldReportOk() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app(MockGenerator::failing()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_translateChunk_withUnreachableModel_shouldReturnPlaceholders() {
    let (status, body) = post_json(
        app(MockGenerator::unconfigured()),
        "/api/translate-chunk",
        json!({ "chunkTexts": ["Hello world", ""], "targetLang": "fr" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["chunkIndex"], 0);
    assert_eq!(body["translations"], json!({ "0": "[FR_TRANSLATION_0]", "1": "" }));
    assert_eq!(body["metadata"]["sourceLang"], "en");
    assert_eq!(body["metadata"]["targetLang"], "fr");
    assert!(body["metadata"]["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_translateChunk_withWorkingModel_shouldReturnRealTranslations() {
    let (status, body) = post_json(
        app(MockGenerator::with_responder(echo_translation_responder)),
        "/api/translate-chunk",
        json!({
            "chunkTexts": ["Save <x id=\"1\"/> changes"],
            "chunkIndex": 1,
            "totalChunks": 3,
            "targetLang": "de",
            "translationContext": "**DOMAIN**: Corporate",
            "sourceContent": "<xliff/>"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translations"]["0"], "[T] Save <x id=\"1\"/> changes");
    assert_eq!(body["stats"]["realTranslations"], 1);
    assert_eq!(body["stats"]["contextualTranslation"], true);
    assert_eq!(body["metadata"]["chunkInfo"], "2/3");
}

#[tokio::test]
async fn test_translateChunk_withInvalidBodies_shouldReturnBadRequest() {
    let bodies = [
        json!({ "targetLang": "fr" }),
        json!({ "chunkTexts": [], "targetLang": "fr" }),
        json!({ "chunkTexts": "Hello", "targetLang": "fr" }),
        json!({ "chunkTexts": ["Hello"] }),
    ];

    for body in bodies {
        let (status, response) =
            post_json(app(MockGenerator::failing()), "/api/translate-chunk", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response["success"], false);
        assert!(response["error"].as_str().unwrap().contains("Validation error"));
    }
}

#[tokio::test]
async fn test_translateChunk_withMalformedJson_shouldReturnJsonError() {
    let requests = [
        ("application/json", "{ not json"),
        ("text/plain", r#"{"chunkTexts": ["Hello"], "targetLang": "fr"}"#),
    ];

    for (content_type, raw) in requests {
        let request = Request::builder()
            .method("POST")
            .uri("/api/translate-chunk")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(raw))
            .unwrap();

        let response = app(MockGenerator::failing()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", raw);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Invalid field body"));
    }
}

#[tokio::test]
async fn test_generateContext_withUnreachableModel_shouldReturnLocalBlock() {
    let (status, body) = post_json(
        app(MockGenerator::failing()),
        "/api/generate-context",
        json!({
            "sampleTexts": ["Click continue to proceed", "Click continue to proceed"],
            "targetLang": "de"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let block = body["translationContext"].as_str().unwrap();
    assert!(block.contains("**CONTENT TYPE**"));
    assert!(block.contains("**SPECIAL CONSIDERATIONS**: UI elements, interaction clarity"));
    assert_eq!(body["metadata"]["generationMethod"], "local");
    assert_eq!(body["metadata"]["targetLang"], "de");
    assert_eq!(body["stats"]["sampleTextsAnalyzed"], 2);
    assert_eq!(body["stats"]["userContextProvided"], false);
}

#[tokio::test]
async fn test_generateContext_withWorkingModel_shouldReportClaudeMethod() {
    let (status, body) = post_json(
        app(MockGenerator::replying("**CONTENT TYPE**: Safety course\n**DOMAIN**: PRL")),
        "/api/generate-context",
        json!({ "sampleTexts": ["Wear your helmet"], "userContext": "Spain" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["generationMethod"], "claude");
    assert_eq!(body["metadata"]["targetLang"], "es");
    assert_eq!(body["stats"]["userContextProvided"], true);
}

#[tokio::test]
async fn test_generateContext_withoutSamples_shouldReturnBadRequest() {
    let (status, body) = post_json(
        app(MockGenerator::failing()),
        "/api/generate-context",
        json!({ "userContext": "anything" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("sampleTexts"));
}
