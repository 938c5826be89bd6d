use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unsupported OS: {os}")]
    UnsupportedPlatform { os: String },

    #[error("Analytics error: {message}")]
    AnalyticsError { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Network,
    Data,
    Configuration,
    Platform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HelperError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HelperError::IoError(_) => ErrorCategory::Io,
            HelperError::HttpError(_) | HelperError::AnalyticsError { .. } => {
                ErrorCategory::Network
            }
            HelperError::SerializationError(_) | HelperError::InvalidInput { .. } => {
                ErrorCategory::Data
            }
            HelperError::ConfigValidationError { .. }
            | HelperError::InvalidConfigValueError { .. }
            | HelperError::MissingConfigError { .. } => ErrorCategory::Configuration,
            HelperError::UnsupportedPlatform { .. } => ErrorCategory::Platform,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 分析事件送不出去不影響主要功能
            HelperError::AnalyticsError { .. } => ErrorSeverity::Low,
            HelperError::HttpError(_) => ErrorSeverity::Medium,
            HelperError::SerializationError(_)
            | HelperError::InvalidInput { .. }
            | HelperError::ConfigValidationError { .. }
            | HelperError::InvalidConfigValueError { .. }
            | HelperError::MissingConfigError { .. } => ErrorSeverity::High,
            HelperError::IoError(_) | HelperError::UnsupportedPlatform { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HelperError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the file exists and the path is spelled correctly".to_string()
            }
            HelperError::IoError(_) => "Check file permissions and available disk space".to_string(),
            HelperError::HttpError(_) => {
                "Check your network connection and that the target service is running".to_string()
            }
            HelperError::SerializationError(_) => "Make sure the input is valid JSON".to_string(),
            HelperError::ConfigValidationError { field, .. }
            | HelperError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in your configuration file", field)
            }
            HelperError::MissingConfigError { field } => {
                format!("Add '{}' to your configuration file", field)
            }
            HelperError::UnsupportedPlatform { .. } => {
                "Pass --platform with one of: windows, macos, linux".to_string()
            }
            HelperError::AnalyticsError { .. } => {
                "Verify the analytics api_key and api_host settings".to_string()
            }
            HelperError::InvalidInput { .. } => "Check the command arguments".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("File system problem: {}", self),
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Data => format!("Could not process input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Platform => format!("Platform problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;
