//! Error handling for sms-forge

use thiserror::Error;

/// Main error type for sms-forge
#[derive(Error, Debug, Clone)]
pub enum SmsForgeError {
    #[error("Malformed template: {message}")]
    MalformedTemplate { message: String },

    #[error("No positions selected")]
    NoPositionsSelected,

    #[error("Missing encoding: {message}")]
    MissingEncoding { message: String },

    #[error("Invalid encoding '{value}': expected one of ASCII, Zawgyi, Unicode, Other")]
    InvalidEncoding { value: String },

    #[error("Invalid range for position '{position}': start {start} is greater than end {end}")]
    InvalidRange {
        position: String,
        start: i64,
        end: i64,
    },

    #[error("Position '{position}' resolved to no candidate values")]
    EmptyPosition { position: String },

    #[error("Phrase group '{reference}' not found")]
    UnknownPhraseGroup { reference: String },

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SmsForgeError {
    /// Create a malformed-template error
    pub fn malformed_template(message: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            message: message.into(),
        }
    }

    /// Create a missing-encoding error
    pub fn missing_encoding(message: impl Into<String>) -> Self {
        Self::MissingEncoding {
            message: message.into(),
        }
    }

    /// Create an invalid-encoding error
    pub fn invalid_encoding(value: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            value: value.into(),
        }
    }

    /// Create an invalid-range error
    pub fn invalid_range(position: impl Into<String>, start: i64, end: i64) -> Self {
        Self::InvalidRange {
            position: position.into(),
            start,
            end,
        }
    }

    /// Create an empty-position error
    pub fn empty_position(position: impl Into<String>) -> Self {
        Self::EmptyPosition {
            position: position.into(),
        }
    }

    /// Create an unknown-phrase-group error
    pub fn unknown_phrase_group(reference: impl Into<String>) -> Self {
        Self::UnknownPhraseGroup {
            reference: reference.into(),
        }
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedTemplate { message } => {
                format!(
                    "❌ Template problem: {}\n💡 Wrap each position in parentheses, e.g. \"(hello) (1-5)\"",
                    message
                )
            }
            Self::NoPositionsSelected => {
                "❌ No positions selected\n💡 Provide a template with at least one (position) or an explicit position list".to_string()
            }
            Self::MissingEncoding { message } => {
                format!("❌ Missing encoding: {}\n💡 Supply a global encoding or a per-position map", message)
            }
            Self::InvalidEncoding { value } => {
                format!(
                    "❌ Unknown encoding '{}'\n💡 Use one of: ASCII, Zawgyi, Unicode, Other",
                    value
                )
            }
            Self::InvalidRange { position, start, end } => {
                format!(
                    "❌ Bad range at position '{}': {}-{}\n💡 Ranges must run low to high, e.g. 3-10",
                    position, start, end
                )
            }
            Self::EmptyPosition { position } => {
                format!(
                    "❌ Position '{}' has no candidate values\n💡 Add configured values or a phrase group for it",
                    position
                )
            }
            Self::UnknownPhraseGroup { reference } => {
                format!("❌ Phrase group '{}' does not exist", reference)
            }
            Self::Store { message } => format!("❌ Store error: {}", message),
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Parse { message } => format!("❌ Parse error: {}", message),
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<std::io::Error> for SmsForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<serde_json::Error> for SmsForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SmsForgeError>;
