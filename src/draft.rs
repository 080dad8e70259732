/// "Add bookmark" form state and validation

use crate::bookmark_data::CreateDetails;
use crate::error::{BookmarkError, Result};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    /// Folder chosen in the picker; empty means "no folder"
    pub folder_id: String,
}

/// A draft that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub details: CreateDetails,
    pub folder_id: Option<String>,
}

impl BookmarkDraft {
    pub fn new(title: &str, url: &str) -> BookmarkDraft {
        BookmarkDraft {
            title: title.to_string(),
            url: url.to_string(),
            folder_id: String::new(),
        }
    }

    /// Reject empty fields and give scheme-less URLs an `https://` prefix
    pub fn validate(&self) -> Result<ValidDraft> {
        let title = self.title.trim();
        let url = self.url.trim();
        if title.is_empty() || url.is_empty() {
            return Err(BookmarkError::Validation(
                "Please fill in both the title and the URL".to_string(),
            ));
        }

        let url = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{}", url)
        };

        Ok(ValidDraft {
            details: CreateDetails {
                title: title.to_string(),
                url,
                parent_id: None,
            },
            folder_id: Some(self.folder_id.clone()).filter(|id| !id.is_empty()),
        })
    }
}
