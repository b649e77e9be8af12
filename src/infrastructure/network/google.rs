use crate::domain::error::ProviderError;
use crate::domain::model::{GoogleTranslation, TextFormat, TranslateOption};
use crate::domain::traits::TranslationProvider;
use crate::infrastructure::config::GoogleConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const TRANSLATE_PATH: &str = "/language/translate/v2";

// Google Translation v2 request/response structures
#[derive(Serialize, Debug)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: TextFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

#[derive(Deserialize, Debug)]
struct TranslateResponse {
    data: TranslationsData,
}

#[derive(Deserialize, Debug)]
struct TranslationsData {
    #[serde(default)]
    translations: Vec<TranslationItem>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TranslationItem {
    translated_text: String,
    detected_source_language: Option<String>,
    model: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    code: u16,
    message: String,
    status: Option<String>,
}

/// Google Cloud Translation (v2 REST) client
pub struct GoogleTranslator {
    client: Client,
    config: GoogleConfig,
}

impl GoogleTranslator {
    pub fn new(client: Client, config: GoogleConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslator {
    type Output = GoogleTranslation;

    async fn translate(
        &self,
        text: &str,
        option: TranslateOption,
    ) -> Result<Self::Output, ProviderError> {
        let api_key = self.config.api_key().ok_or_else(|| {
            ProviderError::Config("Google API key not configured".to_string())
        })?;

        let url = format!(
            "{}{}",
            self.config.endpoint.trim_end_matches('/'),
            TRANSLATE_PATH
        );
        let body = TranslateRequest {
            q: text,
            target: &option.target_language,
            format: option.format,
            source: option.source_language.as_deref(),
            model: option.model.as_deref(),
        };

        debug!(%url, target = %option.target_language, "Sending Google translate request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(api_error(status, &bytes));
        }

        parse_translation(&bytes)
    }
}

fn api_error(status: reqwest::StatusCode, body: &[u8]) -> ProviderError {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(ErrorResponse { error }) => {
            let message = match error.status {
                Some(s) => format!("{} ({})", error.message, s),
                None => error.message,
            };
            ProviderError::Api(format!("Google API Error {}: {}", error.code, message))
        }
        Err(_) => ProviderError::Api(format!("Google API Error {}", status)),
    }
}

fn parse_translation(body: &[u8]) -> Result<GoogleTranslation, ProviderError> {
    let response: TranslateResponse = serde_json::from_slice(body)?;

    let item = response
        .data
        .translations
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Api("Google API returned no translations".to_string()))?;

    Ok(GoogleTranslation {
        translated_text: item.translated_text,
        detected_source_language: item.detected_source_language,
        model: item.model,
    })
}
