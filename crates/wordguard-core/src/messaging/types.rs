use std::fmt;

/// Result of a message deletion attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The bot lacks admin rights, or the message is too old to delete.
    PermissionDenied,
    /// The message was already gone.
    NotFound,
    Failed(String),
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted => f.write_str("deleted"),
            Self::PermissionDenied => f.write_str("permission denied"),
            Self::NotFound => f.write_str("message not found"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}
