/// Bookmark tree normalization: flattens the host tree into the list and graph models
///
/// Top-level nodes of the host forest are root containers. They are never
/// emitted as folders, but their children are processed like any other node.
/// Traversal is an explicit pre-order stack walk, children in host order.
use crate::bookmark_data::{BookmarkRecord, BookmarkTreeNode, FolderRecord, FolderSummary, Listing};
use crate::config::{FolderLinking, ViewConfig};
use crate::domain::truncate_title;
use crate::graph::{GraphEdge, GraphModel, GraphNode, NodeType, ROOT_NODE_ID};

/// Flatten the tree into every bookmark (pre-order) and every non-root folder
/// with its direct bookmark children
pub fn normalize_for_listing(tree: &[BookmarkTreeNode], placeholder: &str) -> Listing {
    let mut listing = Listing::default();
    let mut stack: Vec<(&BookmarkTreeNode, usize)> = tree.iter().rev().map(|node| (node, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        if let Some(record) = BookmarkRecord::from_node(node, placeholder) {
            listing.bookmarks.push(record);
        } else if node.is_folder() && depth > 0 {
            listing.folders.push(FolderRecord {
                id: node.id.clone(),
                name: node.display_title(placeholder),
                bookmarks: node
                    .children()
                    .iter()
                    .filter_map(|child| BookmarkRecord::from_node(child, placeholder))
                    .collect(),
            });
        }

        stack.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
    }

    log::debug!(
        "Normalized {} bookmarks in {} folders",
        listing.bookmarks.len(),
        listing.folders.len()
    );
    listing
}

/// Every non-root folder in pre-order, for the folder picker
pub fn extract_folders(tree: &[BookmarkTreeNode], placeholder: &str) -> Vec<FolderSummary> {
    let mut folders = Vec::new();
    let mut stack: Vec<(&BookmarkTreeNode, usize)> = tree
        .iter()
        .rev()
        .filter(|node| node.is_folder())
        .map(|node| (node, 0))
        .collect();

    while let Some((node, depth)) = stack.pop() {
        if depth > 0 {
            folders.push(FolderSummary {
                id: node.id.clone(),
                name: node.display_title(placeholder),
            });
        }

        stack.extend(
            node.children()
                .iter()
                .rev()
                .filter(|child| child.is_folder())
                .map(|child| (child, depth + 1)),
        );
    }

    folders
}

/// Bookmark seen by the graph walk, with the folder that encloses it
struct GraphBookmark {
    record: BookmarkRecord,
    folder_id: Option<String>,
}

/// Walk the tree carrying the nearest enclosing folder
fn project_for_graph(tree: &[BookmarkTreeNode], placeholder: &str) -> (Vec<FolderSummary>, Vec<GraphBookmark>) {
    let mut folders: Vec<FolderSummary> = Vec::new();
    let mut bookmarks = Vec::new();
    // (node, depth, index into `folders` of the enclosing folder)
    let mut stack: Vec<(&BookmarkTreeNode, usize, Option<usize>)> =
        tree.iter().rev().map(|node| (node, 0, None)).collect();

    while let Some((node, depth, context)) = stack.pop() {
        let mut child_context = context;

        if let Some(mut record) = BookmarkRecord::from_node(node, placeholder) {
            let enclosing = context.map(|i| &folders[i]);
            record.folder_name = enclosing.map(|f| f.name.clone());
            bookmarks.push(GraphBookmark {
                record,
                folder_id: enclosing.map(|f| f.id.clone()),
            });
            // A URL node is a leaf here, even when it has children
            continue;
        } else if node.is_folder() && depth > 0 {
            folders.push(FolderSummary {
                id: node.id.clone(),
                name: node.display_title(placeholder),
            });
            child_context = Some(folders.len() - 1);
        }

        stack.extend(
            node.children()
                .iter()
                .rev()
                .map(|child| (child, depth + 1, child_context)),
        );
    }

    (folders, bookmarks)
}

/// Build the node/link model: one synthetic root, one node per folder and per
/// bookmark, root→folder links and folder→bookmark links where the folder resolves
pub fn normalize_for_graph(tree: &[BookmarkTreeNode], config: &ViewConfig) -> GraphModel {
    let (folders, bookmarks) = project_for_graph(tree, &config.placeholder_title);
    let mut graph = GraphModel::default();

    graph.nodes.push(GraphNode {
        id: ROOT_NODE_ID.to_string(),
        title: config.root_label.clone(),
        label: truncate_title(&config.root_label, config.label_length),
        node_type: NodeType::Root,
        url: None,
        radius: NodeType::Root.radius(),
    });

    for folder in &folders {
        graph.nodes.push(GraphNode {
            id: folder.id.clone(),
            title: folder.name.clone(),
            label: truncate_title(&folder.name, config.label_length),
            node_type: NodeType::Folder,
            url: None,
            radius: NodeType::Folder.radius(),
        });
        graph.links.push(GraphEdge::new(ROOT_NODE_ID, &folder.id));
    }

    for bookmark in &bookmarks {
        let record = &bookmark.record;
        graph.nodes.push(GraphNode {
            id: record.id.clone(),
            title: record.title.clone(),
            label: truncate_title(&record.title, config.label_length),
            node_type: NodeType::Bookmark,
            url: Some(record.url.clone()),
            radius: NodeType::Bookmark.radius(),
        });

        let source = match config.folder_linking {
            FolderLinking::ByName => record
                .folder_name
                .as_ref()
                .and_then(|name| folders.iter().find(|f| &f.name == name))
                .map(|f| f.id.as_str()),
            FolderLinking::ById => bookmark.folder_id.as_deref(),
        };
        if let Some(source) = source {
            graph.links.push(GraphEdge::new(source, &record.id));
        }
    }

    log::debug!(
        "Graph built with {} nodes and {} links",
        graph.nodes.len(),
        graph.links.len()
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "Untitled";

    /// root → [FolderA[X, FolderB[Y]]]
    fn sample_tree() -> Vec<BookmarkTreeNode> {
        vec![BookmarkTreeNode::folder(
            "0",
            "",
            vec![BookmarkTreeNode::folder(
                "a",
                "FolderA",
                vec![
                    BookmarkTreeNode::bookmark("x", "X", "http://x"),
                    BookmarkTreeNode::folder(
                        "b",
                        "FolderB",
                        vec![BookmarkTreeNode::bookmark("y", "Y", "http://y")],
                    ),
                ],
            )],
        )]
    }

    fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<&str> {
        items.iter().map(id).collect()
    }

    #[test]
    fn test_listing_example_tree() {
        let listing = normalize_for_listing(&sample_tree(), PLACEHOLDER);

        assert_eq!(ids(&listing.bookmarks, |b| b.id.as_str()), vec!["x", "y"]);
        assert_eq!(listing.folders.len(), 2);
        assert_eq!(listing.folders[0].name, "FolderA");
        assert_eq!(ids(&listing.folders[0].bookmarks, |b| b.id.as_str()), vec!["x"]);
        assert_eq!(listing.folders[1].name, "FolderB");
        assert_eq!(ids(&listing.folders[1].bookmarks, |b| b.id.as_str()), vec!["y"]);
    }

    #[test]
    fn test_listing_excludes_root_container() {
        let listing = normalize_for_listing(&sample_tree(), PLACEHOLDER);
        assert!(listing.folders.iter().all(|f| f.id != "0"));
    }

    #[test]
    fn test_listing_deeply_nested_bookmarks_appear_once() {
        let tree = vec![BookmarkTreeNode::folder(
            "0",
            "",
            vec![
                BookmarkTreeNode::bookmark("top", "Top", "http://top"),
                BookmarkTreeNode::folder(
                    "1",
                    "L1",
                    vec![BookmarkTreeNode::folder(
                        "2",
                        "L2",
                        vec![BookmarkTreeNode::folder(
                            "3",
                            "L3",
                            vec![BookmarkTreeNode::bookmark("deep", "Deep", "http://deep")],
                        )],
                    )],
                ),
                BookmarkTreeNode::bookmark("last", "Last", "http://last"),
            ],
        )];

        let listing = normalize_for_listing(&tree, PLACEHOLDER);

        assert_eq!(ids(&listing.bookmarks, |b| b.id.as_str()), vec!["top", "deep", "last"]);
        assert!(listing.folders[0].bookmarks.is_empty());
        assert!(listing.folders[1].bookmarks.is_empty());
        assert_eq!(ids(&listing.folders[2].bookmarks, |b| b.id.as_str()), vec!["deep"]);
    }

    #[test]
    fn test_listing_url_takes_precedence_over_children() {
        let mut hybrid = BookmarkTreeNode::folder(
            "h",
            "Hybrid",
            vec![BookmarkTreeNode::bookmark("inner", "Inner", "http://inner")],
        );
        hybrid.url = Some("http://hybrid".to_string());
        let tree = vec![BookmarkTreeNode::folder("0", "", vec![hybrid])];

        let listing = normalize_for_listing(&tree, PLACEHOLDER);

        assert_eq!(ids(&listing.bookmarks, |b| b.id.as_str()), vec!["h", "inner"]);
        assert!(listing.folders.is_empty());
    }

    #[test]
    fn test_listing_placeholders_and_empty_folders() {
        let tree = vec![BookmarkTreeNode::folder(
            "0",
            "",
            vec![
                BookmarkTreeNode::folder("1", "", vec![BookmarkTreeNode::bookmark("2", "", "http://z")]),
                BookmarkTreeNode::folder("3", "Empty", vec![]),
            ],
        )];

        let listing = normalize_for_listing(&tree, PLACEHOLDER);

        assert_eq!(listing.folders[0].name, PLACEHOLDER);
        assert_eq!(listing.folders[0].bookmarks[0].title, PLACEHOLDER);
        assert_eq!(listing.folders[1].name, "Empty");
        assert!(listing.folders[1].bookmarks.is_empty());
        assert_eq!(listing.stats().folders, 2);
        assert_eq!(listing.stats().bookmarks, 1);
    }

    #[test]
    fn test_listing_is_deterministic() {
        let tree = sample_tree();

        let first = serde_json::to_string(&normalize_for_listing(&tree, PLACEHOLDER)).unwrap();
        let second = serde_json::to_string(&normalize_for_listing(&tree, PLACEHOLDER)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_listing_empty_tree() {
        assert!(normalize_for_listing(&[], PLACEHOLDER).is_empty());
    }

    #[test]
    fn test_extract_folders() {
        let tree = vec![BookmarkTreeNode::folder(
            "0",
            "",
            vec![
                BookmarkTreeNode::folder("1", "Bar", vec![BookmarkTreeNode::folder("3", "", vec![])]),
                BookmarkTreeNode::bookmark("9", "Loose", "http://loose"),
                BookmarkTreeNode::folder("2", "Other", vec![]),
            ],
        )];

        let folders = extract_folders(&tree, PLACEHOLDER);

        assert_eq!(ids(&folders, |f| f.id.as_str()), vec!["1", "3", "2"]);
        assert_eq!(folders[1].name, PLACEHOLDER);
    }

    #[test]
    fn test_graph_example_tree() {
        let graph = normalize_for_graph(&sample_tree(), &ViewConfig::default());

        assert_eq!(graph.nodes.len(), 5);
        assert_eq!(graph.count(NodeType::Root), 1);
        assert_eq!(graph.count(NodeType::Folder), 2);
        assert_eq!(graph.count(NodeType::Bookmark), 2);
        assert_eq!(
            graph.links,
            vec![
                GraphEdge::new(ROOT_NODE_ID, "a"),
                GraphEdge::new(ROOT_NODE_ID, "b"),
                GraphEdge::new("a", "x"),
                GraphEdge::new("b", "y"),
            ]
        );

        let root = graph.node(ROOT_NODE_ID).unwrap();
        assert_eq!(root.title, "Bookmarks");
        assert_eq!(root.radius, 15);
        let x = graph.node("x").unwrap();
        assert_eq!(x.url.as_deref(), Some("http://x"));
        assert_eq!(x.radius, 8);
        assert_eq!(graph.node("a").unwrap().url, None);
    }

    #[test]
    fn test_graph_bookmark_without_folder_has_no_edge() {
        let tree = vec![BookmarkTreeNode::folder(
            "0",
            "",
            vec![
                BookmarkTreeNode::bookmark("loose", "Loose", "http://loose"),
                BookmarkTreeNode::folder("f", "F", vec![]),
            ],
        )];

        let graph = normalize_for_graph(&tree, &ViewConfig::default());

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.links, vec![GraphEdge::new(ROOT_NODE_ID, "f")]);
    }

    fn duplicate_name_tree() -> Vec<BookmarkTreeNode> {
        vec![BookmarkTreeNode::folder(
            "0",
            "",
            vec![
                BookmarkTreeNode::folder("1", "Docs", vec![BookmarkTreeNode::bookmark("p", "P", "http://p")]),
                BookmarkTreeNode::folder("2", "Docs", vec![BookmarkTreeNode::bookmark("q", "Q", "http://q")]),
            ],
        )]
    }

    #[test]
    fn test_graph_by_name_first_match_wins() {
        let graph = normalize_for_graph(&duplicate_name_tree(), &ViewConfig::default());

        assert!(graph.links.contains(&GraphEdge::new("1", "p")));
        assert!(graph.links.contains(&GraphEdge::new("1", "q")));
        assert_eq!(graph.links.len(), 4);
    }

    #[test]
    fn test_graph_by_id_uses_enclosing_folder() {
        let config = ViewConfig {
            folder_linking: FolderLinking::ById,
            ..ViewConfig::default()
        };

        let graph = normalize_for_graph(&duplicate_name_tree(), &config);

        assert!(graph.links.contains(&GraphEdge::new("1", "p")));
        assert!(graph.links.contains(&GraphEdge::new("2", "q")));
    }

    #[test]
    fn test_graph_edge_count_matches_resolvable_bookmarks() {
        let tree = vec![BookmarkTreeNode::folder(
            "0",
            "",
            vec![
                BookmarkTreeNode::bookmark("r1", "R1", "http://r1"),
                BookmarkTreeNode::folder(
                    "f1",
                    "F1",
                    vec![
                        BookmarkTreeNode::bookmark("b1", "B1", "http://b1"),
                        BookmarkTreeNode::folder("f2", "F2", vec![BookmarkTreeNode::bookmark("b2", "B2", "http://b2")]),
                    ],
                ),
            ],
        )];

        let graph = normalize_for_graph(&tree, &ViewConfig::default());

        assert_eq!(graph.count(NodeType::Root), 1);
        assert_eq!(graph.nodes.len(), 1 + 2 + 3);
        assert_eq!(graph.links.len(), 2 + 2);
    }

    #[test]
    fn test_graph_does_not_descend_into_url_nodes() {
        let mut hybrid = BookmarkTreeNode::folder(
            "h",
            "Hybrid",
            vec![BookmarkTreeNode::bookmark("inner", "Inner", "http://inner")],
        );
        hybrid.url = Some("http://hybrid".to_string());
        let tree = vec![BookmarkTreeNode::folder(
            "0",
            "",
            vec![BookmarkTreeNode::folder("f", "F", vec![hybrid])],
        )];

        let graph = normalize_for_graph(&tree, &ViewConfig::default());

        assert_eq!(ids(&graph.nodes, |n| n.id.as_str()), vec![ROOT_NODE_ID, "f", "h"]);
        assert!(graph.node("inner").is_none());
        assert_eq!(
            graph.links,
            vec![GraphEdge::new(ROOT_NODE_ID, "f"), GraphEdge::new("f", "h")]
        );
    }

    #[test]
    fn test_graph_is_deterministic() {
        let mut tree = duplicate_name_tree();
        tree[0].children.as_mut().unwrap().push(BookmarkTreeNode::folder(
            "3",
            "",
            vec![BookmarkTreeNode::bookmark("u", "", "http://u")],
        ));

        for folder_linking in [FolderLinking::ByName, FolderLinking::ById] {
            let config = ViewConfig {
                folder_linking,
                ..ViewConfig::default()
            };

            let first = serde_json::to_string(&normalize_for_graph(&tree, &config)).unwrap();
            let second = serde_json::to_string(&normalize_for_graph(&tree, &config)).unwrap();

            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_graph_labels_are_truncated() {
        let tree = vec![BookmarkTreeNode::folder(
            "0",
            "",
            vec![BookmarkTreeNode::folder(
                "f",
                "Reading",
                vec![BookmarkTreeNode::bookmark("l", "A very long bookmark title indeed", "http://l")],
            )],
        )];

        let graph = normalize_for_graph(&tree, &ViewConfig::default());
        let node = graph.node("l").unwrap();

        assert_eq!(node.title, "A very long bookmark title indeed");
        assert_eq!(node.label, "A very long bookmark...");
    }
}
