use thiserror::Error;

/// Failures reported by the Discord gateway collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// An object the game expects to exist on Discord could not be found.
    ///
    /// Aborts the current build or repair step.
    #[error("Platform lookup failed: {0}")]
    Lookup(String),

    /// Discord rejected a create, edit or delete call (rate limit, missing
    /// permission, unknown object).
    #[error("Platform call {action} failed: {reason}")]
    Operation {
        /// Name of the rejected operation, e.g. `create_role`
        action: &'static str,
        reason: String,
    },
}

impl PlatformError {
    pub fn operation(action: &'static str, reason: impl ToString) -> Self {
        Self::Operation {
            action,
            reason: reason.to_string(),
        }
    }
}
