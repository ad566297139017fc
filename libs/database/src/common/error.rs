/// Error type for establishing and verifying database connections
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver-level MongoDB error (URI parsing, client construction)
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The server could not be reached or rejected the handshake
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Connection settings are unusable
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
