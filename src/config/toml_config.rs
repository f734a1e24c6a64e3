use crate::adapters::bedrock::BedrockOptions;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TarotError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_REGION: &str = "us-west-2";
pub const DEFAULT_TEXT_MODEL: &str = "anthropic.claude-3-5-sonnet-20240620-v1:0";
pub const DEFAULT_VIDEO_MODEL: &str = "luma.ray-v2:0";

pub const ENDPOINT_ENV: &str = "TAROT_BEDROCK_ENDPOINT";
pub const API_KEY_ENV: &str = "AWS_BEARER_TOKEN_BEDROCK";
pub const REGION_ENV: &str = "AWS_REGION";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub bedrock: BedrockConfig,
    pub models: ModelsConfig,
    pub text: TextConfig,
    pub deck: DeckConfig,
    pub video: VideoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BedrockConfig {
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: u32,
    pub retry_delay_ms: u64,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint: None,
            api_key: None,
            timeout_seconds: None,
            retry_attempts: 1,
            retry_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    pub text_model: String,
    pub video_model: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            video_model: DEFAULT_VIDEO_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_tokens: 700,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub include_reversed: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            include_reversed: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub enabled: bool,
    pub duration_seconds: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            duration_seconds: 9,
        }
    }
}

impl ReaderConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TarotError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content, |name| std::env::var(name).ok())?;

        toml::from_str(&processed_content).map_err(|e| TarotError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_env_with(|name| std::env::var(name).ok());
    }

    /// 端點以環境變數優先；金鑰與區域只在設定檔未指定時才取環境變數
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Bedrock endpoint overridden by {}", ENDPOINT_ENV);
            self.bedrock.endpoint = Some(endpoint);
        }
        if self.bedrock.api_key.is_none() {
            self.bedrock.api_key = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty());
        }
        if self.bedrock.region.is_none() {
            self.bedrock.region = lookup(REGION_ENV).filter(|v| !v.trim().is_empty());
        }
    }

    pub fn region(&self) -> &str {
        self.bedrock.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    pub fn bedrock_options(&self) -> BedrockOptions {
        let defaults = BedrockOptions::for_region(self.region());
        BedrockOptions {
            endpoint: self.bedrock.endpoint.clone().unwrap_or(defaults.endpoint),
            api_key: self.bedrock.api_key.clone(),
            max_tokens: self.text.max_tokens,
            temperature: self.text.temperature,
            video_duration_seconds: self.video.duration_seconds,
            retry_attempts: self.bedrock.retry_attempts,
            retry_delay: Duration::from_millis(self.bedrock.retry_delay_ms),
            timeout: self.bedrock.timeout_seconds.map(Duration::from_secs),
        }
    }
}

/// 替換 `${VAR}`；找不到的變數保持原樣
fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TarotError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

fn require_model_id(field: &str, model_id: &str) -> Result<()> {
    if model_id.trim().is_empty() {
        return Err(TarotError::MissingConfigError {
            field: field.to_string(),
        });
    }
    Ok(())
}

impl Validate for ReaderConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("bedrock.region", self.region())?;
        validation::validate_url("bedrock.endpoint", &self.bedrock_options().endpoint)?;
        validation::validate_range("bedrock.retry_attempts", self.bedrock.retry_attempts, 0, 3)?;
        if let Some(timeout) = self.bedrock.timeout_seconds {
            validation::validate_range("bedrock.timeout_seconds", timeout, 1, 600)?;
        }

        require_model_id("models.text_model", &self.models.text_model)?;
        require_model_id("models.video_model", &self.models.video_model)?;

        validation::validate_positive_number("text.max_tokens", self.text.max_tokens, 1)?;
        validation::validate_range("text.temperature", self.text.temperature, 0.0, 1.0)?;

        validation::validate_range("video.duration_seconds", self.video.duration_seconds, 1, 60)?;
        Ok(())
    }
}

impl ConfigProvider for ReaderConfig {
    fn text_model(&self) -> &str {
        &self.models.text_model
    }

    fn video_model(&self) -> &str {
        &self.models.video_model
    }

    fn include_reversed(&self) -> bool {
        self.deck.include_reversed
    }

    fn video_enabled(&self) -> bool {
        self.video.enabled
    }
}
