/// Bookmark Graph - Chrome Extension for browsing bookmarks as a list and a graph
/// Built with Rust + WASM + Yew

pub mod bookmark_data;
pub mod config;
pub mod domain;
pub mod draft;
pub mod error;
pub mod graph;
pub mod host;
pub mod normalize;
pub mod search;
pub mod service;
pub mod storage;
pub mod ui;

pub use bookmark_data::{BookmarkRecord, BookmarkTreeNode, FolderRecord, Listing};
pub use config::{FolderLinking, ViewConfig};
pub use error::BookmarkError;
pub use graph::{GraphEdge, GraphModel, GraphNode, NodeType};
pub use normalize::{normalize_for_graph, normalize_for_listing};

use ui::PageProps;
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Read the optional config object a page passes in; bad input falls back to defaults
fn page_props(config: JsValue) -> PageProps {
    let json = if config.is_undefined() || config.is_null() {
        Ok(serde_json::Value::Null)
    } else {
        serde_wasm_bindgen::from_value::<serde_json::Value>(config)
            .map_err(|e| BookmarkError::Serialization(format!("{:?}", e)))
    };

    let config = json.and_then(ViewConfig::from_json).unwrap_or_else(|e| {
        log::warn!("Invalid view config, using defaults: {}", e);
        ViewConfig::default()
    });
    PageProps { config }
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup(config: JsValue) {
    yew::Renderer::<ui::popup::App>::with_props(page_props(config)).render();
}

// Start the Yew app for the bookmark manager page
#[wasm_bindgen]
pub fn start_manager(config: JsValue) {
    yew::Renderer::<ui::manager::BookmarkManager>::with_props(page_props(config)).render();
}

// Start the Yew app for the graph page
#[wasm_bindgen]
pub fn start_graph(config: JsValue) {
    yew::Renderer::<ui::graph::GraphPage>::with_props(page_props(config)).render();
}

/// Normalize a raw `chrome.bookmarks.getTree` result for plain JavaScript callers
#[wasm_bindgen]
pub fn normalize_tree(tree: JsValue) -> std::result::Result<JsValue, JsValue> {
    let tree: Vec<BookmarkTreeNode> =
        serde_wasm_bindgen::from_value(tree).map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
    let listing = normalize_for_listing(&tree, &ViewConfig::default().placeholder_title);
    host::to_js(&listing).map_err(|e| JsValue::from_str(&e.to_string()))
}
