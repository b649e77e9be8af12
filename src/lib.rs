pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

// Re-export for convenience
pub use application::translate::TranslationService;
pub use domain::error::{ProviderError, TranslationError};
pub use domain::model::TranslateOption;
pub use domain::traits::{Translation, TranslationProvider};
pub use infrastructure::network::google::GoogleTranslator;
