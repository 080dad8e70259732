/// User actions over the host bookmark store
///
/// Every mutation is followed by a full refetch and normalization; nothing is
/// patched locally. Callers hold the returned snapshot and pass it back in as
/// the fallback for the next load.
use crate::bookmark_data::{BookmarkChanges, BookmarkRecord, BookmarkTreeNode, FolderSummary, Listing};
use crate::config::ViewConfig;
use crate::draft::BookmarkDraft;
use crate::error::{BookmarkError, Result};
use crate::graph::GraphModel;
use crate::host::{BookmarkHost, Dialogs};
use crate::normalize::{extract_folders, normalize_for_graph, normalize_for_listing};
use crate::search::{find_bookmark, find_folder, recent_bookmarks};
use crate::storage::{Preferences, USER_KEY};

#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkService<H, D> {
    host: H,
    dialogs: D,
    config: ViewConfig,
}

impl<H: BookmarkHost, D: Dialogs> BookmarkService<H, D> {
    pub fn new(host: H, dialogs: D, config: ViewConfig) -> Self {
        BookmarkService { host, dialogs, config }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    async fn fetch_tree(&self) -> Result<Vec<BookmarkTreeNode>> {
        self.host
            .get_tree()
            .await
            .map_err(|e| BookmarkError::Fetch(e.detail()))
    }

    /// Fetch and normalize; on failure the previous snapshot is kept
    pub async fn load_listing(&self, previous: &Listing) -> Listing {
        match self.fetch_tree().await {
            Ok(tree) => normalize_for_listing(&tree, &self.config.placeholder_title),
            Err(e) => {
                log::error!("{}", e);
                previous.clone()
            }
        }
    }

    pub async fn load_graph(&self, previous: &GraphModel) -> GraphModel {
        match self.fetch_tree().await {
            Ok(tree) => normalize_for_graph(&tree, &self.config),
            Err(e) => {
                log::error!("{}", e);
                previous.clone()
            }
        }
    }

    pub async fn load_folders(&self) -> Vec<FolderSummary> {
        match self.fetch_tree().await {
            Ok(tree) => extract_folders(&tree, &self.config.placeholder_title),
            Err(e) => {
                log::error!("{}", e);
                Vec::new()
            }
        }
    }

    pub async fn load_recent(&self, previous: &[BookmarkRecord]) -> Vec<BookmarkRecord> {
        match self.host.get_recent(self.config.recent_count).await {
            Ok(nodes) => recent_bookmarks(&nodes, &self.config.placeholder_title),
            Err(e) => {
                log::error!("Failed to load recent bookmarks: {}", e.detail());
                previous.to_vec()
            }
        }
    }

    pub async fn load_user(&self) -> Preferences {
        match self.host.get_storage(USER_KEY).await {
            Ok(value) => Preferences::from_storage(value),
            Err(e) => {
                log::error!("Failed to read preferences: {}", e.detail());
                Preferences::new()
            }
        }
    }

    pub async fn open_bookmark(&self, url: &str) {
        if let Err(e) = self.host.open_tab(url).await {
            log::error!("Failed to open {}: {}", url, e.detail());
        }
    }

    /// Log and show a failed action, then hand the error back
    fn report<T>(&self, err: BookmarkError) -> Result<T> {
        log::error!("{}", err);
        self.dialogs.alert(&err.to_string());
        Err(err)
    }

    pub async fn delete_bookmark(&self, id: &str, current: &Listing) -> Result<Option<Listing>> {
        if !self.dialogs.confirm("Delete this bookmark?") {
            return Ok(None);
        }
        if let Err(e) = self.host.remove(id).await {
            return self.report(BookmarkError::mutation("delete bookmark", e));
        }
        log::info!("Deleted bookmark {}", id);
        Ok(Some(self.load_listing(current).await))
    }

    pub async fn delete_folder(&self, id: &str, current: &Listing) -> Result<Option<Listing>> {
        if !self.dialogs.confirm("Delete this folder and all of its bookmarks?") {
            return Ok(None);
        }
        if let Err(e) = self.host.remove_tree(id).await {
            return self.report(BookmarkError::mutation("delete folder", e));
        }
        log::info!("Deleted folder {}", id);
        Ok(Some(self.load_listing(current).await))
    }

    /// Popup variant of delete: refreshes the recent list instead of the listing
    pub async fn delete_recent(&self, id: &str, recent: &[BookmarkRecord]) -> Result<Option<Vec<BookmarkRecord>>> {
        if !self.dialogs.confirm("Are you sure you want to delete this bookmark?") {
            return Ok(None);
        }
        if let Err(e) = self.host.remove(id).await {
            return self.report(BookmarkError::mutation("delete bookmark", e));
        }
        Ok(Some(self.load_recent(recent).await))
    }

    pub async fn rename_bookmark(&self, id: &str, current: &Listing) -> Result<Option<Listing>> {
        let Some(bookmark) = find_bookmark(current, id) else {
            return Ok(None);
        };
        let changes = self
            .ask("Enter a new title:", &bookmark.title)
            .map(|title| BookmarkChanges { title: Some(title), url: None });
        self.apply(id, changes, "rename bookmark", current).await
    }

    pub async fn rename_folder(&self, id: &str, current: &Listing) -> Result<Option<Listing>> {
        let Some(folder) = find_folder(current, id) else {
            return Ok(None);
        };
        let changes = self
            .ask("Enter a new folder name:", &folder.name)
            .map(|title| BookmarkChanges { title: Some(title), url: None });
        self.apply(id, changes, "rename folder", current).await
    }

    pub async fn edit_bookmark_url(&self, id: &str, current: &Listing) -> Result<Option<Listing>> {
        let Some(bookmark) = find_bookmark(current, id) else {
            return Ok(None);
        };
        let changes = self
            .ask("Enter a new URL:", &bookmark.url)
            .map(|url| BookmarkChanges { title: None, url: Some(url) });
        self.apply(id, changes, "edit bookmark", current).await
    }

    /// Prompt with the current value; `None` when cancelled, empty or unchanged
    fn ask(&self, message: &str, current: &str) -> Option<String> {
        self.dialogs
            .prompt(message, current)
            .filter(|answer| !answer.is_empty() && answer != current)
    }

    async fn apply(
        &self,
        id: &str,
        changes: Option<BookmarkChanges>,
        action: &'static str,
        current: &Listing,
    ) -> Result<Option<Listing>> {
        let Some(changes) = changes else {
            return Ok(None);
        };
        if let Err(e) = self.host.update(id, &changes).await {
            return self.report(BookmarkError::mutation(action, e));
        }
        log::info!("Updated {} ({})", id, action);
        Ok(Some(self.load_listing(current).await))
    }

    /// Validate, create, then move into the chosen folder
    pub async fn create_bookmark(&self, draft: &BookmarkDraft) -> Result<BookmarkTreeNode> {
        let valid = match draft.validate() {
            Ok(valid) => valid,
            Err(e) => return self.report(e),
        };

        let mut created = match self.host.create(&valid.details).await {
            Ok(node) => node,
            Err(e) => return self.report(BookmarkError::mutation("create bookmark", e)),
        };

        if let Some(folder_id) = valid.folder_id {
            created = match self.host.move_to(&created.id, &folder_id).await {
                Ok(node) => node,
                Err(e) => return self.report(BookmarkError::mutation("move bookmark", e)),
            };
        }

        log::info!("Created bookmark {}", created.id);
        self.dialogs.alert("Bookmark added!");
        Ok(created)
    }
}
