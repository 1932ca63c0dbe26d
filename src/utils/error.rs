use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("{message}")]
    ValidationError { message: String },

    #[error("Phone {phone} already exists in contact {contact}.")]
    DuplicatePhoneError { phone: String, contact: String },

    #[error("Contact '{name}' already exists.")]
    DuplicateContactError { name: String },

    #[error("Phone {phone} has not been found in contact {contact}.")]
    PhoneNotFoundError { phone: String, contact: String },

    #[error("Contact '{name}' has not been found.")]
    ContactNotFoundError { name: String },

    #[error("Invalid birthday for contact '{contact}': {reason}")]
    InvalidBirthdayError { contact: String, reason: String },

    #[error("{message}")]
    MissingArgumentsError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Conflict,
    NotFound,
    Storage,
    Configuration,
}

impl BookError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn missing_arguments(message: impl Into<String>) -> Self {
        Self::MissingArgumentsError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. }
            | Self::MissingArgumentsError { .. }
            | Self::InvalidBirthdayError { .. } => ErrorCategory::Input,
            Self::DuplicatePhoneError { .. } | Self::DuplicateContactError { .. } => {
                ErrorCategory::Conflict
            }
            Self::PhoneNotFoundError { .. } | Self::ContactNotFoundError { .. } => {
                ErrorCategory::NotFound
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Storage,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Errors a session reports to the user and then keeps going after.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self.category(),
            ErrorCategory::Storage | ErrorCategory::Configuration
        )
    }

    /// One-line text shown at the command boundary.
    pub fn user_friendly_message(&self) -> String {
        format!("Error: {}", self)
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
