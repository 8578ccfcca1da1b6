use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown product: {id}")]
    UnknownProduct { id: String },

    #[error("Invalid catalog entry '{product}': {reason}")]
    InvalidCatalog { product: String, reason: String },

    #[error("Invalid quantity '{value}': must be an integer between {min} and {max}")]
    InvalidQuantity { value: String, min: u32, max: u32 },

    #[error("Cart dispatch failed: {message}")]
    CartDispatch { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PricingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PricingError::InvalidConfigValueError { .. }
            | PricingError::MissingConfigError { .. }
            | PricingError::TomlError(_) => ErrorCategory::Configuration,
            PricingError::UnknownProduct { .. }
            | PricingError::InvalidCatalog { .. }
            | PricingError::SerializationError(_) => ErrorCategory::Catalog,
            PricingError::InvalidQuantity { .. } => ErrorCategory::Input,
            PricingError::IoError(_) | PricingError::CartDispatch { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Catalog => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PricingError::IoError(e) => format!("Could not read or write a file: {}", e),
            PricingError::SerializationError(e) => format!("Catalog data is not valid JSON: {}", e),
            PricingError::UnknownProduct { id } => {
                format!("Product '{}' does not exist in the catalog", id)
            }
            PricingError::InvalidQuantity { min, max, .. } => {
                format!("Quantity must be a whole number from {} to {}", min, max)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the settings file and command line flags",
            ErrorCategory::Catalog => "Check the catalog file and the product id (use --list)",
            ErrorCategory::Input => "Re-enter the value within the allowed range",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;
