use thiserror::Error;

/// Outcome taxonomy of every library operation. The core returns these and
/// never prints; the frontend decides how to present them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("book '{code}' not found")]
    BookNotFound { code: String },

    #[error("patron '{id}' not found")]
    PatronNotFound { id: String },

    #[error("a book with code '{code}' is already registered")]
    DuplicateBookCode { code: String },

    #[error("a patron with id '{id}' is already registered")]
    DuplicatePatronId { id: String },

    #[error("book '{code}' is already lent")]
    BookUnavailable { code: String },

    #[error("patron '{id}' already holds {limit} books")]
    PatronLimitReached { id: String, limit: usize },

    #[error("no active loan of book '{code}' to patron '{id}'")]
    NoActiveLoan { code: String, id: String },

    #[error("a loan starting {start} would fall due past the last representable date")]
    DateOutOfRange { start: chrono::NaiveDate },
}

pub type Result<T> = std::result::Result<T, LibraryError>;

/// Broken internal consistency. Seeing one of these is a bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("book code '{0}' registered more than once")]
    DuplicateBook(String),

    #[error("patron id '{0}' registered more than once")]
    DuplicatePatron(String),

    #[error("book '{code}' availability disagrees with {loans} active loan(s)")]
    AvailabilityMismatch { code: String, loans: usize },

    #[error("patron '{id}' lists {borrowed} book(s) but has {loans} active loan(s)")]
    BorrowedCountMismatch { id: String, borrowed: usize, loans: usize },

    #[error("patron '{id}' lists book '{code}' without a matching loan")]
    BorrowedWithoutLoan { id: String, code: String },

    #[error("patron '{id}' exceeds the loan limit with {borrowed} books")]
    LimitExceeded { id: String, borrowed: usize },

    #[error("loan of '{code}' has an inconsistent due date")]
    BadDueDate { code: String },

    #[error("loan references unknown {what} '{key}'")]
    DanglingLoan { what: &'static str, key: String },
}

/// Failures of the interactive frontend and its configuration.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Missing environment variable: {name}")]
    MissingEnvVar { name: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write the console: {}", e),
            Self::SerializationError(e) => format!("Could not render output: {}", e),
            Self::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            Self::PatternError(e) => format!("Internal pattern error: {}", e),
            Self::ConfigNotFound { path } => format!("Configuration file '{}' does not exist", path),
            Self::MissingEnvVar { name } => {
                format!("The configuration refers to ${{{}}} but it is not set", name)
            }
            Self::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => "Check that stdin and stdout are attached".to_string(),
            Self::SerializationError(_) => "Try --format text".to_string(),
            Self::PatternError(_) => "Please report this as a bug".to_string(),
            Self::TomlError(_) | Self::ConfigNotFound { .. } => {
                "Fix the path given to --config or remove the flag".to_string()
            }
            Self::MissingEnvVar { name } => format!("Export {} before starting", name),
            Self::InvalidConfigValueError { reason, .. } => reason.clone(),
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
