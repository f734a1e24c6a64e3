use crate::config::toml_config::ReaderConfig;
use crate::utils::error::Result;
use clap::Parser;

pub const MISSING_QUESTION_MESSAGE: &str =
    "❌ Error: Please provide your concern as a command-line argument.";
pub const USAGE_EXAMPLE: &str = "Usage: tarot-reader \"Should I change my career?\"";

#[derive(Debug, Clone, Parser)]
#[command(name = "tarot-reader")]
#[command(about = "Draws tarot cards for your question and narrates the reading")]
pub struct CliConfig {
    /// Your question; all words are joined with spaces. Options go first.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub question: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Also request a short video of the spread")]
    pub video: bool,

    #[arg(long, help = "Draw from the 78 upright cards only")]
    pub no_reversed: bool,
}

impl CliConfig {
    pub fn question(&self) -> Option<String> {
        let question = self.question.join(" ");
        if question.trim().is_empty() {
            None
        } else {
            Some(question)
        }
    }

    /// 設定檔 → 環境變數 → 命令列旗標，依序覆蓋
    pub fn load_config(&self) -> Result<ReaderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                ReaderConfig::from_file(path)?
            }
            None => ReaderConfig::default(),
        };

        config.apply_env_overrides();

        if self.video {
            config.video.enabled = true;
        }
        if self.no_reversed {
            config.deck.include_reversed = false;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_trailing_words_form_question() {
        let cli = CliConfig::parse_from(["tarot-reader", "Should", "I", "change", "my", "career?"]);
        assert_eq!(cli.question().as_deref(), Some("Should I change my career?"));

        let quoted = CliConfig::parse_from(["tarot-reader", "Will it rain?"]);
        assert_eq!(quoted.question().as_deref(), Some("Will it rain?"));
    }

    #[test]
    fn test_hyphenated_words_stay_in_question() {
        let cli = CliConfig::parse_from(["tarot-reader", "Is", "-5", "degrees", "too", "cold?"]);
        assert_eq!(cli.question().as_deref(), Some("Is -5 degrees too cold?"));

        let cli = CliConfig::parse_from([
            "tarot-reader",
            "Should",
            "I",
            "quit",
            "-",
            "or",
            "--stay?",
        ]);
        assert_eq!(cli.question().as_deref(), Some("Should I quit - or --stay?"));
    }

    #[test]
    fn test_options_before_question_are_parsed() {
        let cli = CliConfig::parse_from(["tarot-reader", "--video", "-v", "Is", "-5", "cold?"]);
        assert!(cli.video);
        assert!(cli.verbose);
        assert_eq!(cli.question().as_deref(), Some("Is -5 cold?"));
    }

    #[test]
    fn test_missing_question() {
        assert!(CliConfig::parse_from(["tarot-reader"]).question().is_none());
        assert!(CliConfig::parse_from(["tarot-reader", "  "]).question().is_none());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[deck]\ninclude_reversed = true\n\n[video]\nenabled = false").unwrap();

        let cli = CliConfig::parse_from([
            "tarot-reader",
            "--config",
            file.path().to_str().unwrap(),
            "--video",
            "--no-reversed",
            "Is love near?",
        ]);
        let config = cli.load_config().unwrap();

        assert!(config.video.enabled);
        assert!(!config.deck.include_reversed);
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = CliConfig::parse_from(["tarot-reader", "-c", "/nonexistent/tarot.toml", "Hi"]);
        assert!(matches!(
            cli.load_config(),
            Err(crate::utils::error::TarotError::IoError(_))
        ));
    }
}
