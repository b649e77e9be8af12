//! Google 翻译客户端测试

use httpmock::prelude::*;
use my_translation_service::domain::model::TextFormat;
use my_translation_service::infrastructure::config::GoogleConfig;
use my_translation_service::infrastructure::network::http::create_client;
use my_translation_service::{
    GoogleTranslator, ProviderError, TranslateOption, Translation, TranslationError,
    TranslationProvider, TranslationService,
};
use serde_json::json;

fn translator_for(server: &MockServer, api_key: Option<&str>) -> GoogleTranslator {
    let config = GoogleConfig {
        api_key: api_key.map(str::to_string),
        endpoint: server.base_url(),
    };
    GoogleTranslator::new(create_client().unwrap(), config)
}

#[tokio::test]
async fn test_google_translate_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/language/translate/v2")
                .query_param("key", "test-key")
                .body_contains(r#""q":"Some sentence""#)
                .body_contains(r#""target":"ru""#)
                .body_contains(r#""format":"text""#);
            then.status(200).json_body(json!({
                "data": {
                    "translations": [{
                        "translatedText": "Некое предложение",
                        "detectedSourceLanguage": "en",
                        "model": "nmt"
                    }]
                }
            }));
        })
        .await;

    let translator = translator_for(&server, Some("test-key"));
    let result = translator
        .translate("Some sentence", TranslateOption::target_language("ru"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.translated_text(), "Некое предложение");
    assert_eq!(result.detected_source_language.as_deref(), Some("en"));
    assert_eq!(result.model.as_deref(), Some("nmt"));
}

#[tokio::test]
async fn test_google_translate_sends_options() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/language/translate/v2")
                .body_contains(r#""format":"html""#)
                .body_contains(r#""source":"en""#)
                .body_contains(r#""model":"base""#);
            then.status(200).json_body(json!({
                "data": { "translations": [{ "translatedText": "<b>Привет</b>" }] }
            }));
        })
        .await;

    let option = TranslateOption::target_language("ru")
        .with_source_language("en")
        .with_format(TextFormat::Html)
        .with_model("base");
    let result = translator_for(&server, Some("k"))
        .translate("<b>Hi</b>", option)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.translated_text(), "<b>Привет</b>");
}

#[tokio::test]
async fn test_google_translate_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/language/translate/v2");
            then.status(403).json_body(json!({
                "error": {
                    "code": 403,
                    "message": "The request is missing a valid API key.",
                    "status": "PERMISSION_DENIED"
                }
            }));
        })
        .await;

    let err = translator_for(&server, Some("bad-key"))
        .translate("Some sentence", TranslateOption::target_language("ru"))
        .await
        .unwrap_err();

    match err {
        ProviderError::Api(msg) => {
            assert!(msg.contains("403"));
            assert!(msg.contains("PERMISSION_DENIED"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_google_translate_missing_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200);
        })
        .await;

    let err = translator_for(&server, None)
        .translate("Some sentence", TranslateOption::target_language("ru"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Config(_)));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_service_over_google_wraps_api_error() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/language/translate/v2");
            then.status(500).body("internal error");
        })
        .await;

    let translator = translator_for(&server, Some("k"));
    let service = TranslationService::new(&translator);
    let err = service
        .translate_with_google("Some sentence", "ru")
        .await
        .unwrap_err();

    assert_eq!(mock.hits_async().await, 1);
    assert!(matches!(
        err,
        TranslationError::ServiceFailure(ProviderError::Api(_))
    ));
}

#[tokio::test]
async fn test_service_over_google_rejects_before_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200);
        })
        .await;

    let translator = translator_for(&server, Some("k"));
    let service = TranslationService::new(&translator);
    let err = service
        .translate_with_google("Some sentence", "es")
        .await
        .unwrap_err();

    assert!(matches!(err, TranslationError::InvalidArgument(_)));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_google_translate_empty_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200);
        })
        .await;

    let err = translator_for(&server, Some(""))
        .translate("Some sentence", TranslateOption::target_language("ru"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Config(_)));
    assert_eq!(mock.hits_async().await, 0);
}
