/*!
 * Context generation feeding chunk translation, as a client drives it
 */

use std::sync::Arc;

use xlf_translator::app_config::Config;
use xlf_translator::models::{ContextRequest, TranslationRequest};
use xlf_translator::providers::mock::MockGenerator;
use xlf_translator::providers::TextGenerator;
use xlf_translator::{ContextGenerator, TranslationOrchestrator};

use crate::common::texts;

fn pipelines(generator: MockGenerator) -> (ContextGenerator, TranslationOrchestrator) {
    let config = Config::default();
    let shared: Arc<dyn TextGenerator> = Arc::new(generator);
    (
        ContextGenerator::from_config(Arc::clone(&shared), &config.anthropic, &config.context),
        TranslationOrchestrator::from_config(shared, &config.anthropic),
    )
}

#[tokio::test]
async fn test_localContext_shouldSteerFallbackPlaceholders() {
    let (context_generator, orchestrator) = pipelines(MockGenerator::unconfigured());
    let samples = texts(&[
        "Prevención de riesgos laborales",
        "Use el EPI en todo momento",
        "La ergonomía del puesto",
    ]);

    let context = context_generator
        .generate_translation_context(&ContextRequest::new(samples.clone(), "en"))
        .await
        .unwrap()
        .into_response()
        .translation_context;
    assert!(context.contains("**DOMAIN**: Occupational health and safety (PRL)"));

    let chunk = TranslationRequest::new(samples, "en")
        .with_source_lang("es")
        .with_context(context);
    let response = orchestrator
        .process_translation(&chunk)
        .await
        .unwrap()
        .into_response();

    assert_eq!(response.translations[&0], "[WORKPLACE_SAFETY_EN_0]");
    assert_eq!(response.translations[&2], "[WORKPLACE_SAFETY_EN_2]");
    assert!(response.stats.contextual_translation);
}

#[tokio::test]
async fn test_multiChunkJob_shouldReportEachChunkPosition() {
    let (_, orchestrator) = pipelines(MockGenerator::failing());
    let all_texts = texts(&["a", "b", "c", "d", "e"]);

    let mut chunk_infos = Vec::new();
    for (index, chunk) in all_texts.chunks(2).enumerate() {
        let request = TranslationRequest::new(chunk.to_vec(), "fr").with_chunk(index, 3);
        let response = orchestrator
            .process_translation(&request)
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.chunk_index, index);
        assert_eq!(response.translations.len(), chunk.len());
        chunk_infos.push(response.metadata.chunk_info);
    }

    assert_eq!(chunk_infos, vec!["1/3", "2/3", "3/3"]);
}

#[tokio::test]
async fn test_concurrentRequests_shouldBeIndependent() {
    let generator = MockGenerator::failing();
    let (_, orchestrator) = pipelines(generator.clone());
    let orchestrator = Arc::new(orchestrator);

    let handles: Vec<_> = ["fr", "de", "it", "es"]
        .into_iter()
        .map(|lang| {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::spawn(async move {
                let request = TranslationRequest::new(vec!["Hello".to_string()], lang);
                orchestrator
                    .process_translation(&request)
                    .await
                    .unwrap()
                    .into_response()
            })
        })
        .collect();

    for (handle, lang) in handles.into_iter().zip(["FR", "DE", "IT", "ES"]) {
        let response = handle.await.unwrap();
        assert_eq!(response.translations[&0], format!("[{}_TRANSLATION_0]", lang));
    }
    assert_eq!(generator.request_count(), 4);
}
