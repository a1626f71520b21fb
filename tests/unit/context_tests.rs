/*!
 * Tests for content classification and context generation
 */

use std::sync::Arc;

use xlf_translator::context::classifier::{detect_domain, DEFAULT_CONFIDENCE};
use xlf_translator::context::{ContextGenerator, ContextOutcome, Domain};
use xlf_translator::errors::ValidationError;
use xlf_translator::models::{ContextRequest, GenerationMethod};
use xlf_translator::providers::mock::MockGenerator;

use crate::common::texts;

fn generator(mock: MockGenerator) -> ContextGenerator {
    ContextGenerator::new(Arc::new(mock), 1000, 40)
}

#[test]
fn test_detectDomain_withErgonomiaOnly_shouldComputeConfidenceFromSampleCount() {
    for sample_count in [1usize, 5, 8, 20] {
        let mut samples = vec!["ergonomía".to_string(); 5.min(sample_count)];
        if sample_count < 5 {
            // put the remaining occurrences in the first sample
            samples[0] = vec!["ergonomía"; 5 - sample_count + 1].join(" ");
        }
        while samples.len() < sample_count {
            samples.push("hola".to_string());
        }

        let classification = detect_domain(&samples);
        let expected = ((5.0 / sample_count as f64) * 100.0).round().min(95.0) as u32;

        assert_eq!(classification.domain, Domain::OccupationalHealthSafety);
        assert_eq!(classification.weight, 5);
        assert_eq!(classification.confidence, expected, "samples: {}", sample_count);
    }
}

#[test]
fn test_detectDomain_withNoKeywords_shouldUseDefaults() {
    let classification = detect_domain(&texts(&["Lorem ipsum", "dolor sit amet"]));
    assert_eq!(classification.domain, Domain::ALL[0]);
    assert_eq!(classification.domain, Domain::Educational);
    assert_eq!(classification.confidence, DEFAULT_CONFIDENCE);
}

#[tokio::test]
async fn test_generateContext_scenarioClickContinue_shouldFlagUiConsiderations() {
    let request = ContextRequest::new(
        texts(&["Click continue to proceed", "Click continue to proceed"]),
        "de",
    );

    let result = generator(MockGenerator::unconfigured())
        .generate_translation_context(&request)
        .await
        .unwrap();
    let response = result.into_response();

    assert!(response.success);
    assert!(response.translation_context.contains("**CONTENT TYPE**"));
    assert!(response
        .translation_context
        .contains("**SPECIAL CONSIDERATIONS**: UI elements, interaction clarity"));
    assert_eq!(response.metadata.generation_method, GenerationMethod::Local);
    assert_eq!(response.metadata.content_type, "educational");
    assert_eq!(response.stats.sample_texts_analyzed, 2);
    assert!(!response.stats.user_context_provided);
}

#[tokio::test]
async fn test_generateContext_withAnyFailure_shouldStillContainDomainField() {
    let request = ContextRequest::new(texts(&["Anything at all"]), "fr");

    for mock in [MockGenerator::failing(), MockGenerator::empty(), MockGenerator::unconfigured()] {
        let result = generator(mock).generate_translation_context(&request).await.unwrap();
        assert!(result.outcome.is_local());
        assert!(result.outcome.block().contains("**DOMAIN**:"));
        assert_eq!(
            result.stats.context_length,
            result.outcome.block().chars().count()
        );
    }
}

#[tokio::test]
async fn test_generateContext_withBlankReply_shouldComposeLocally() {
    let request = ContextRequest::new(texts(&["Welcome to the course"]), "it");

    let result = generator(MockGenerator::replying("   \n"))
        .generate_translation_context(&request)
        .await
        .unwrap();

    match result.outcome {
        ContextOutcome::Local { block, reason } => {
            assert!(block.contains("**DOMAIN**: Educational / e-learning"));
            assert!(reason.contains("empty"));
        }
        other => panic!("expected local outcome, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generateContext_shouldSendOnlyFirstFortySamples() {
    let mock = MockGenerator::replying("**CONTENT TYPE**: Course");
    let samples: Vec<String> = (0..60).map(|i| format!("Sample line {}", i)).collect();
    let request = ContextRequest::new(samples, "es").with_user_context("Latin American Spanish");

    let result = generator(mock.clone())
        .generate_translation_context(&request)
        .await
        .unwrap();

    let prompt = mock.last_prompt().unwrap();
    assert!(prompt.contains("Sample line 39"));
    assert!(!prompt.contains("Sample line 40"));
    assert!(prompt.contains("Latin American Spanish"));
    assert_eq!(result.metadata.generation_method, GenerationMethod::Claude);
    assert_eq!(result.stats.sample_texts_analyzed, 60);
    assert!(result.stats.user_context_provided);
}

#[tokio::test]
async fn test_generateContext_withNoSamples_shouldFailValidation() {
    let request = ContextRequest::new(Vec::new(), "es");
    let result = generator(MockGenerator::failing())
        .generate_translation_context(&request)
        .await;
    assert_eq!(result.unwrap_err(), ValidationError::EmptyField("sampleTexts"));
}
