/// Error types for bookmark operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookmarkError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookmarkError {
    #[error("Failed to load bookmarks: {0}")]
    Fetch(String),

    #[error("Failed to {action}: {message}")]
    Mutation { action: &'static str, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("Host call failed: {0}")]
    Host(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BookmarkError {
    pub fn mutation(action: &'static str, cause: BookmarkError) -> Self {
        BookmarkError::Mutation {
            action,
            message: cause.detail(),
        }
    }

    /// The underlying message without the variant prefix
    pub fn detail(&self) -> String {
        match self {
            BookmarkError::Fetch(msg)
            | BookmarkError::Validation(msg)
            | BookmarkError::Host(msg)
            | BookmarkError::Serialization(msg) => msg.clone(),
            BookmarkError::Mutation { message, .. } => message.clone(),
        }
    }
}

impl From<serde_json::Error> for BookmarkError {
    fn from(err: serde_json::Error) -> Self {
        BookmarkError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_wraps_host_message() {
        let err = BookmarkError::mutation("rename folder", BookmarkError::Host("quota".to_string()));

        assert_eq!(err.to_string(), "Failed to rename folder: quota");
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: BookmarkError = parse_err.into();

        assert!(matches!(err, BookmarkError::Serialization(_)));
    }
}
