pub type ApproverResult<T> = Result<T, ApproverError>;

#[derive(thiserror::Error, Debug)]
pub enum ApproverError {
    #[error("Cannot reconcile: {0}")]
    CannotReconcile(String),
    #[error("CSR {0} was modified concurrently")]
    Conflict(String),
    #[error("StdError: {0}")]
    StdError(#[from] std::io::Error),
    #[error("KubeError: {0}")]
    KubeError(#[from] kube::Error),
    #[error("Cannot serialize/deserialize JSON. Reason: {0}")]
    JSONError(#[from] serde_json::Error),
}

impl ApproverError {
    /// Whether the approval lost an optimistic concurrency race.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}
