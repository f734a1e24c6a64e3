use thiserror::Error;

#[derive(Error, Debug)]
pub enum TarotError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Remote service returned HTTP {status}: {body}")]
    RemoteServiceError { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Cannot draw {requested} cards from a deck of {available}")]
    DrawError { requested: usize, available: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TarotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TarotError::ApiError(_) | TarotError::RemoteServiceError { .. } => {
                ErrorCategory::Network
            }
            TarotError::ConfigError { .. }
            | TarotError::ConfigValidationError { .. }
            | TarotError::InvalidConfigValueError { .. }
            | TarotError::MissingConfigError { .. } => ErrorCategory::Configuration,
            TarotError::SerializationError(_) | TarotError::DrawError { .. } => {
                ErrorCategory::Data
            }
            TarotError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 傳輸層失敗（連線錯誤、5xx、429）才值得重試
    pub fn is_retryable(&self) -> bool {
        match self {
            TarotError::ApiError(e) => !e.is_builder() && !e.is_decode(),
            TarotError::RemoteServiceError { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TarotError::ApiError(_) => {
                "Check your network connection and the Bedrock endpoint, then try again"
            }
            TarotError::RemoteServiceError { status, .. } if *status == 401 || *status == 403 => {
                "Check that AWS_BEARER_TOKEN_BEDROCK holds a valid Bedrock API key"
            }
            TarotError::RemoteServiceError { .. } => {
                "The model service rejected the request; check the model id and region"
            }
            TarotError::IoError(_) => "Check file permissions and that the path exists",
            TarotError::SerializationError(_) => "The service response could not be decoded",
            TarotError::ConfigError { .. }
            | TarotError::ConfigValidationError { .. }
            | TarotError::InvalidConfigValueError { .. }
            | TarotError::MissingConfigError { .. } => {
                "Review the configuration file and environment variables"
            }
            TarotError::DrawError { .. } => "Use a 3 or 5 card spread",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("The tarot spirits could not be reached: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Data => format!("Reading could not be prepared: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TarotError>;
