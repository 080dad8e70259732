/// UI module exports
pub mod components;
pub mod graph;
pub mod manager;
pub mod popup;

use crate::config::ViewConfig;
use crate::host::{BrowserDialogs, ChromeHost};
use crate::service::BookmarkService;
use yew::prelude::*;

/// Service wired to the real browser APIs
pub type AppService = BookmarkService<ChromeHost, BrowserDialogs>;

pub fn app_service(config: ViewConfig) -> AppService {
    BookmarkService::new(ChromeHost, BrowserDialogs, config)
}

/// Page properties: the configuration passed in from the page's entry point
#[derive(Properties, PartialEq, Default)]
pub struct PageProps {
    #[prop_or_default]
    pub config: ViewConfig,
}
