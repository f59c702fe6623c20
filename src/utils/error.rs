use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    #[error("Invalid response payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Http,
    Payload,
    Configuration,
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Transport(_) => ErrorCategory::Network,
            ApiError::Status { .. } | ApiError::Rejected { .. } => ErrorCategory::Http,
            ApiError::Payload(_) => ErrorCategory::Payload,
            ApiError::InvalidUrl(_)
            | ApiError::Io(_)
            | ApiError::ConfigParse { .. }
            | ApiError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } | ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Could not reach the UmrahFlex API".to_string(),
            ApiError::Status { status } => format!("The API answered with status {}", status),
            ApiError::Rejected { detail, .. } => format!("The API rejected the request: {}", detail),
            ApiError::Payload(_) => "The API returned a response that is not valid JSON".to_string(),
            _ => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the --api-url value",
            ErrorCategory::Http => match self.status() {
                Some(404) => "Check that the id exists",
                Some(s) if (400..500).contains(&s) => "Check the request data against the API schema",
                _ => "The API is having trouble; try again later",
            },
            ErrorCategory::Payload => "Verify that --api-url points at the UmrahFlex API",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
