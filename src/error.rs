use thiserror::Error;

/// Failures surfaced by the record store.
///
/// The set of kinds is closed so callers can branch on the variant without
/// matching on message text. Each variant carries the human-readable detail,
/// usually the engine's own message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No usable database connection (never opened, or already closed).
    #[error("database not available: {0}")]
    NotAvailable(String),

    /// The database file could not be opened or created.
    #[error("{0}")]
    ConnectionFailed(String),

    /// A statement was rejected or affected no rows where one was required.
    #[error("statement failed: {0}")]
    StatementFailed(String),

    /// A file outside the database (schema, CSV output) could not be used.
    #[error("{0}")]
    IoFailed(String),
}

impl StoreError {
    /// Message without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotAvailable(message)
            | Self::ConnectionFailed(message)
            | Self::StatementFailed(message)
            | Self::IoFailed(message) => message,
        }
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(err: diesel::result::Error) -> Self {
        StoreError::StatementFailed(err.to_string())
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("login rejected for user '{0}'")]
    LoginRejected(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
