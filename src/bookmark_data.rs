/// Data structures for the bookmark views
use serde::{Deserialize, Serialize};

/// A node of the host bookmark tree, as returned by `chrome.bookmarks.getTree`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkTreeNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BookmarkTreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<f64>,
}

impl BookmarkTreeNode {
    pub fn bookmark(id: &str, title: &str, url: &str) -> BookmarkTreeNode {
        BookmarkTreeNode {
            id: id.to_string(),
            title: title.to_string(),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    pub fn folder(id: &str, title: &str, children: Vec<BookmarkTreeNode>) -> BookmarkTreeNode {
        BookmarkTreeNode {
            id: id.to_string(),
            title: title.to_string(),
            children: Some(children),
            ..Default::default()
        }
    }

    /// A node carrying a URL is a bookmark, even if it also has children
    pub fn is_bookmark(&self) -> bool {
        self.url.is_some()
    }

    pub fn is_folder(&self) -> bool {
        self.url.is_none() && self.children.is_some()
    }

    pub fn children(&self) -> &[BookmarkTreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Title, or the placeholder when the host left it empty
    pub fn display_title(&self, placeholder: &str) -> String {
        if self.title.is_empty() {
            placeholder.to_string()
        } else {
            self.title.clone()
        }
    }
}

/// A bookmark leaf flattened out of the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRecord {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Nearest ancestor folder name, only filled in by the graph projection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_name: Option<String>,
}

impl BookmarkRecord {
    /// Build a record from a tree node; `None` for nodes without a URL
    pub fn from_node(node: &BookmarkTreeNode, placeholder: &str) -> Option<BookmarkRecord> {
        node.url.as_ref().map(|url| BookmarkRecord {
            id: node.id.clone(),
            title: node.display_title(placeholder),
            url: url.clone(),
            folder_name: None,
        })
    }
}

/// A folder with its direct bookmark children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderRecord {
    pub id: String,
    pub name: String,
    pub bookmarks: Vec<BookmarkRecord>,
}

/// Folder entry offered by the "add bookmark" form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderSummary {
    pub id: String,
    pub name: String,
}

/// Result of one list normalization pass
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Listing {
    pub bookmarks: Vec<BookmarkRecord>,
    pub folders: Vec<FolderRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingStats {
    pub folders: usize,
    pub bookmarks: usize,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty() && self.folders.is_empty()
    }

    pub fn stats(&self) -> ListingStats {
        ListingStats {
            folders: self.folders.len(),
            bookmarks: self.bookmarks.len(),
        }
    }
}

/// Fields of a bookmark to create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDetails {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Partial update; absent fields are left unchanged by the host
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookmarkChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
