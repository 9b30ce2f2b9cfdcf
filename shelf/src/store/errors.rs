use thiserror::Error;

/// Reasons an action was rejected by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum StoreError {
    #[error("no project with id `{id}`")]
    UnknownProject { id: String },
    #[error("a project with id `{id}` already exists")]
    DuplicateProject { id: String },
    #[error("`{name}` cannot be used as a project name")]
    InvalidName { name: String },
}

/// Errors emitted while reading or writing the projects file.
#[derive(Debug, Error)]
pub(crate) enum StorageError {
    /// Filesystem operation failed.
    #[error("projects IO failed")]
    Io(#[from] std::io::Error),
    /// JSON serialization or deserialization failed.
    #[error("projects JSON failed")]
    Json(#[from] serde_json::Error),
}
