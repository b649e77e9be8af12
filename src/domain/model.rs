use serde::{Deserialize, Serialize};

// 文本格式
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Text,
    Html,
}

/// Options passed to a provider alongside the text to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOption {
    pub target_language: String,
    pub source_language: Option<String>, // None = auto detect
    pub format: TextFormat,
    pub model: Option<String>, // e.g. "nmt", "base"
}

impl TranslateOption {
    pub fn target_language(code: &str) -> Self {
        Self {
            target_language: code.to_string(),
            source_language: None,
            format: TextFormat::Text,
            model: None,
        }
    }

    pub fn with_source_language(mut self, code: &str) -> Self {
        self.source_language = Some(code.to_string());
        self
    }

    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }
}

// Google 翻译结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleTranslation {
    pub translated_text: String,
    pub detected_source_language: Option<String>,
    pub model: Option<String>,
}

// CLI JSON 输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationOutput {
    pub query: String,
    pub target: String,
    pub translation: String,
}
