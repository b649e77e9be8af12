use crate::domain::error::TranslationError;
use crate::domain::model::TranslateOption;
use crate::domain::traits::{Translation, TranslationProvider};
use tracing::{debug, warn};

/// The only target language the service accepts.
pub const SUPPORTED_TARGET_LANGUAGE: &str = "ru";

/// Thin wrapper around an injected translation provider.
pub struct TranslationService<'a, P: TranslationProvider> {
    provider: &'a P,
}

impl<'a, P: TranslationProvider> TranslationService<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Translate `sentence` into `target_language`.
    ///
    /// Fails with `InvalidArgument` for any target other than `"ru"` without
    /// touching the provider. A provider failure is returned as
    /// `ServiceFailure` with the original error as its source.
    pub async fn translate_with_google(
        &self,
        sentence: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        self.translate_with_options(sentence, TranslateOption::target_language(target_language))
            .await
    }

    /// Same as `translate_with_google`, forwarding source language, format
    /// and model from `option` to the provider unchanged.
    pub async fn translate_with_options(
        &self,
        sentence: &str,
        option: TranslateOption,
    ) -> Result<String, TranslationError> {
        let target_language = option.target_language.as_str();
        if target_language != SUPPORTED_TARGET_LANGUAGE {
            warn!(target_language, "Rejected unsupported target language");
            return Err(TranslationError::InvalidArgument(format!(
                "Unsupported target language '{}', only '{}' is supported",
                target_language, SUPPORTED_TARGET_LANGUAGE
            )));
        }

        debug!(target_language, len = sentence.len(), "Dispatching translation");

        match self.provider.translate(sentence, option).await {
            Ok(translation) => Ok(translation.translated_text().to_string()),
            Err(e) => {
                warn!(error = ?e, "Translation provider failed");
                Err(TranslationError::ServiceFailure(e))
            }
        }
    }
}
