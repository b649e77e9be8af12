use crate::domain::error::ProviderError;
use crate::domain::model::{GoogleTranslation, TranslateOption};
use async_trait::async_trait;

/// Result of a single provider call.
pub trait Translation {
    fn translated_text(&self) -> &str;
}

/// Trait for translation providers
///
/// This trait provides an abstraction over the external translation API.
/// Implementations can be swapped without changing the calling code, which
/// is how tests substitute the network-backed client.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    type Output: Translation + Send;

    /// Translate `text` according to `option`
    async fn translate(
        &self,
        text: &str,
        option: TranslateOption,
    ) -> Result<Self::Output, ProviderError>;
}

impl Translation for GoogleTranslation {
    fn translated_text(&self) -> &str {
        &self.translated_text
    }
}
