use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Server error code for `NamespaceExists`.
pub const NAMESPACE_EXISTS: i32 = 48;

/// True when the server rejected a `create` because the collection already exists.
pub fn is_namespace_exists(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        mongodb::error::ErrorKind::Command(cmd) if cmd.code == NAMESPACE_EXISTS
    )
}
