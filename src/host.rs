/// Host collaborators: the browser bookmark store, tabs, local storage and dialogs
///
/// The traits are the seam the service talks to. `ChromeHost` and
/// `BrowserDialogs` are the extension implementations; tests use in-memory ones.
use crate::bookmark_data::{BookmarkChanges, BookmarkTreeNode, CreateDetails};
use crate::error::{BookmarkError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use bridge::*;
use wasm_bindgen::JsValue;

mod bridge {
    use wasm_bindgen::prelude::*;

    // Import JS bridge functions
    #[wasm_bindgen(module = "/bridge.js")]
    extern "C" {
        #[wasm_bindgen(catch)]
        pub(super) async fn getTree() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch)]
        pub(super) async fn getRecent(count: u32) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch)]
        pub(super) async fn createBookmark(details: JsValue) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch)]
        pub(super) async fn updateBookmark(id: &str, changes: JsValue) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch)]
        pub(super) async fn moveBookmark(id: &str, parent_id: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch)]
        pub(super) async fn removeBookmark(id: &str) -> Result<(), JsValue>;

        #[wasm_bindgen(catch)]
        pub(super) async fn removeTree(id: &str) -> Result<(), JsValue>;

        #[wasm_bindgen(catch)]
        pub(super) async fn openTab(url: &str) -> Result<(), JsValue>;

        #[wasm_bindgen(catch)]
        pub(super) async fn getStorage(key: &str) -> Result<JsValue, JsValue>;
    }
}

/// The browser bookmark store plus the tab and storage APIs the views need
#[allow(async_fn_in_trait)]
pub trait BookmarkHost {
    async fn get_tree(&self) -> Result<Vec<BookmarkTreeNode>>;
    async fn get_recent(&self, count: u32) -> Result<Vec<BookmarkTreeNode>>;
    async fn create(&self, details: &CreateDetails) -> Result<BookmarkTreeNode>;
    async fn update(&self, id: &str, changes: &BookmarkChanges) -> Result<BookmarkTreeNode>;
    async fn move_to(&self, id: &str, parent_id: &str) -> Result<BookmarkTreeNode>;
    async fn remove(&self, id: &str) -> Result<()>;
    /// Remove a folder together with everything in it
    async fn remove_tree(&self, id: &str) -> Result<()>;
    async fn open_tab(&self, url: &str) -> Result<()>;
    async fn get_storage(&self, key: &str) -> Result<serde_json::Value>;
}

/// Blocking confirm/prompt/alert
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChromeHost;

fn host_error(err: JsValue) -> BookmarkError {
    BookmarkError::Host(
        err.as_string()
            .or_else(|| js_sys::Error::from(err.clone()).message().as_string())
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| BookmarkError::Serialization(format!("Failed to parse host value: {:?}", e)))
}

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| BookmarkError::Serialization(format!("Failed to serialize: {:?}", e)))
}

impl BookmarkHost for ChromeHost {
    async fn get_tree(&self) -> Result<Vec<BookmarkTreeNode>> {
        from_js(getTree().await.map_err(host_error)?)
    }

    async fn get_recent(&self, count: u32) -> Result<Vec<BookmarkTreeNode>> {
        from_js(getRecent(count).await.map_err(host_error)?)
    }

    async fn create(&self, details: &CreateDetails) -> Result<BookmarkTreeNode> {
        from_js(createBookmark(to_js(details)?).await.map_err(host_error)?)
    }

    async fn update(&self, id: &str, changes: &BookmarkChanges) -> Result<BookmarkTreeNode> {
        from_js(updateBookmark(id, to_js(changes)?).await.map_err(host_error)?)
    }

    async fn move_to(&self, id: &str, parent_id: &str) -> Result<BookmarkTreeNode> {
        from_js(moveBookmark(id, parent_id).await.map_err(host_error)?)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        removeBookmark(id).await.map_err(host_error)
    }

    async fn remove_tree(&self, id: &str) -> Result<()> {
        removeTree(id).await.map_err(host_error)
    }

    async fn open_tab(&self, url: &str) -> Result<()> {
        openTab(url).await.map_err(host_error)
    }

    async fn get_storage(&self, key: &str) -> Result<serde_json::Value> {
        let value = getStorage(key).await.map_err(host_error)?;
        if value.is_null() || value.is_undefined() {
            Ok(serde_json::Value::Null)
        } else {
            from_js(value)
        }
    }
}

/// `window.confirm` / `window.prompt` / `window.alert`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.prompt_with_message_and_default(message, default).ok())
            .flatten()
    }

    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        match shown {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("Failed to show alert {:?}: {}", message, host_error(e)),
            None => log::warn!("No window to show alert {:?}", message),
        }
    }
}
