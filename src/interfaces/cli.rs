use crate::domain::model::{TextFormat, TranslateOption};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mytr")]
#[command(about = "Translate text with the Google Cloud Translation API.")]
#[command(version)]
pub struct Cli {
    /// Target language code (defaults to the configured one)
    #[arg(short = 't', long = "to")]
    pub target: Option<String>,

    /// Source language code (auto detect if omitted)
    #[arg(short = 'f', long = "from")]
    pub source: Option<String>,

    /// Treat the text as HTML
    #[arg(long)]
    pub html: bool,

    /// Translation model, e.g. "nmt" or "base"
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate
    #[arg(num_args = 1..)]
    pub query: Vec<String>,
}

impl Cli {
    /// Build the provider options for `target` from the command-line flags.
    pub fn translate_option(&self, target: &str) -> TranslateOption {
        let mut option = TranslateOption::target_language(target);
        if let Some(source) = &self.source {
            option = option.with_source_language(source);
        }
        if self.html {
            option = option.with_format(TextFormat::Html);
        }
        if let Some(model) = &self.model {
            option = option.with_model(model);
        }
        option
    }
}
