/// Search and lookups over a normalized listing

use crate::bookmark_data::{BookmarkRecord, BookmarkTreeNode, FolderRecord, Listing, ListingStats};

/// Case-insensitive substring match on title or URL
pub fn matches_query(bookmark: &BookmarkRecord, query: &str) -> bool {
    bookmark.title.to_lowercase().contains(query) || bookmark.url.to_lowercase().contains(query)
}

/// Keep only the bookmarks matching the query; folders left empty are dropped.
/// A blank query returns every folder unchanged.
pub fn filter_folders(folders: &[FolderRecord], query: &str) -> Vec<FolderRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return folders.to_vec();
    }

    folders
        .iter()
        .filter_map(|folder| {
            let bookmarks: Vec<BookmarkRecord> = folder
                .bookmarks
                .iter()
                .filter(|bookmark| matches_query(bookmark, &query))
                .cloned()
                .collect();

            if bookmarks.is_empty() {
                None
            } else {
                Some(FolderRecord {
                    id: folder.id.clone(),
                    name: folder.name.clone(),
                    bookmarks,
                })
            }
        })
        .collect()
}

pub fn find_bookmark(listing: &Listing, id: &str) -> Option<BookmarkRecord> {
    listing.bookmarks.iter().find(|b| b.id == id).cloned()
}

pub fn find_folder(listing: &Listing, id: &str) -> Option<FolderRecord> {
    listing.folders.iter().find(|f| f.id == id).cloned()
}

/// Bookmarks from a `getRecent` result; folder entries are skipped
pub fn recent_bookmarks(nodes: &[BookmarkTreeNode], placeholder: &str) -> Vec<BookmarkRecord> {
    nodes
        .iter()
        .filter_map(|node| BookmarkRecord::from_node(node, placeholder))
        .collect()
}

/// Counts for a filtered folder list: only bookmarks still shown under a folder
pub fn visible_stats(folders: &[FolderRecord]) -> ListingStats {
    ListingStats {
        folders: folders.len(),
        bookmarks: folders.iter().map(|folder| folder.bookmarks.len()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_for_listing;

    fn create_test_bookmark(id: &str, title: &str, url: &str) -> BookmarkRecord {
        BookmarkRecord {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            folder_name: None,
        }
    }

    fn sample_listing() -> Listing {
        let tree = vec![BookmarkTreeNode::folder(
            "0",
            "",
            vec![BookmarkTreeNode::folder(
                "a",
                "FolderA",
                vec![
                    BookmarkTreeNode::bookmark("x", "X", "http://x"),
                    BookmarkTreeNode::folder("b", "FolderB", vec![BookmarkTreeNode::bookmark("y", "Y", "http://y")]),
                ],
            )],
        )];
        normalize_for_listing(&tree, "Untitled")
    }

    #[test]
    fn test_visible_stats_follow_the_filter() {
        let listing = sample_listing();

        let filtered = filter_folders(&listing.folders, "x");
        let stats = visible_stats(&filtered);

        assert_eq!(stats, ListingStats { folders: 1, bookmarks: 1 });
        assert_eq!(listing.stats(), ListingStats { folders: 2, bookmarks: 2 });
        assert_eq!(visible_stats(&[]), ListingStats { folders: 0, bookmarks: 0 });
    }

    #[test]
    fn test_filter_drops_folders_without_matches() {
        let listing = sample_listing();

        let filtered = filter_folders(&listing.folders, "x");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "FolderA");
        assert_eq!(filtered[0].bookmarks.len(), 1);
        assert_eq!(filtered[0].bookmarks[0].id, "x");
    }

    #[test]
    fn test_filter_blank_query_keeps_everything() {
        let listing = sample_listing();

        assert_eq!(filter_folders(&listing.folders, ""), listing.folders);
        assert_eq!(filter_folders(&listing.folders, "   "), listing.folders);
    }

    #[test]
    fn test_filter_is_case_insensitive_on_title_and_url() {
        let folders = vec![FolderRecord {
            id: "1".to_string(),
            name: "Dev".to_string(),
            bookmarks: vec![
                create_test_bookmark("1", "Rust Book", "https://doc.rust-lang.org/book"),
                create_test_bookmark("2", "Crates", "https://CRATES.io"),
                create_test_bookmark("3", "News", "https://news.ycombinator.com"),
            ],
        }];

        let by_title = filter_folders(&folders, "  rust BOOK ");
        let by_url = filter_folders(&folders, "crates.IO");

        assert_eq!(by_title[0].bookmarks.len(), 1);
        assert_eq!(by_title[0].bookmarks[0].id, "1");
        assert_eq!(by_url[0].bookmarks.len(), 1);
        assert_eq!(by_url[0].bookmarks[0].id, "2");
    }

    #[test]
    fn test_filter_no_matches() {
        let listing = sample_listing();
        assert!(filter_folders(&listing.folders, "nothing-here").is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let listing = sample_listing();

        assert_eq!(find_bookmark(&listing, "y").unwrap().url, "http://y");
        assert_eq!(find_folder(&listing, "b").unwrap().name, "FolderB");
        assert!(find_bookmark(&listing, "a").is_none());
        assert!(find_folder(&listing, "0").is_none());
    }

    #[test]
    fn test_recent_bookmarks_skip_folders() {
        let nodes = vec![
            BookmarkTreeNode::bookmark("1", "One", "https://one.example"),
            BookmarkTreeNode::folder("2", "Folder", vec![]),
            BookmarkTreeNode::bookmark("3", "", "https://three.example"),
        ];

        let recent = recent_bookmarks(&nodes, "Untitled");

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "1");
        assert_eq!(recent[1].title, "Untitled");
    }
}
