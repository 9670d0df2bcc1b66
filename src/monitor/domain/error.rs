//! Error types for monitor domain validation.

use super::ServerName;
use thiserror::Error;

/// Errors returned while constructing or gating monitor domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MonitorDomainError {
    /// The server name is empty after trimming.
    #[error("server name must not be empty")]
    EmptyServerName,

    /// The server name contains characters outside `[a-z0-9._-]`.
    #[error(
        "server name '{0}' contains invalid characters (only lowercase alphanumeric, '.', '_' and '-' allowed)"
    )]
    InvalidServerName(String),

    /// The server name exceeds the 100-character limit.
    #[error("server name exceeds 100 character limit: {0}")]
    ServerNameTooLong(String),

    /// Connection parameters were empty.
    #[error("connection parameters must not be empty")]
    EmptyConnectionParams,

    /// A descriptor with the same name is already in the collection.
    #[error("duplicate server name: {0}")]
    DuplicateServerName(ServerName),

    /// Detail views require at least one successful fetch.
    #[error("cannot open detail view for unpopulated server '{name}'")]
    DetailViewRequiresPopulated {
        /// Name of the never-fetched server.
        name: ServerName,
    },
}
