/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.corrupted_data")]
    CorruptedData,
}

/// Failures of a call to the remote commerce platform.
///
/// Callers treat every variant as "remote call failed"; the variants only
/// carry enough detail to make the logs useful.
#[derive(Debug, thiserror::Error)]
pub enum CommerceError {
    #[error("commerce.transport")]
    Transport(String),
    #[error("commerce.status_{0}")]
    Status(u16),
    #[error("commerce.graphql")]
    GraphQl(Vec<String>),
    #[error("commerce.user_errors")]
    UserErrors(Vec<String>),
    #[error("commerce.missing_resource")]
    MissingResource,
    #[error("commerce.decode")]
    Decode(String),
}

impl CommerceError {
    /// Remote messages or the underlying cause attached to the failure,
    /// joined for logging.
    pub fn details(&self) -> String {
        match self {
            CommerceError::GraphQl(messages) | CommerceError::UserErrors(messages) => {
                messages.join(", ")
            }
            CommerceError::Transport(cause) | CommerceError::Decode(cause) => {
                format!("{}: {}", self, cause)
            }
            other => other.to_string(),
        }
    }
}
