/// Reusable UI components for bookmark rows, folders and the context menu

use crate::bookmark_data::{BookmarkRecord, FolderRecord};
use crate::domain::{favicon_url, truncate_title};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaviconProps {
    pub url: String,
}

#[function_component(Favicon)]
pub fn favicon(props: &FaviconProps) -> Html {
    html! {
        <img src={favicon_url(&props.url)} class="favicon" alt="" />
    }
}

/// What a right-click landed on
#[derive(Clone, PartialEq, Debug)]
pub enum MenuTarget {
    Bookmark { id: String, url: String },
    Folder { id: String },
}

#[derive(Clone, PartialEq, Debug)]
pub struct MenuRequest {
    pub x: i32,
    pub y: i32,
    pub target: MenuTarget,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MenuAction {
    Open,
    EditUrl,
    Rename,
    Delete,
}

#[derive(Properties, PartialEq)]
pub struct BookmarkRowProps {
    pub bookmark: BookmarkRecord,
    #[prop_or_default]
    pub max_title: Option<usize>,
    pub on_open: Callback<String>,
    #[prop_or_default]
    pub on_menu: Option<Callback<MenuRequest>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<String>>,
}

#[function_component(BookmarkRow)]
pub fn bookmark_row(props: &BookmarkRowProps) -> Html {
    let bookmark = &props.bookmark;
    let title = match props.max_title {
        Some(max) => truncate_title(&bookmark.title, max),
        None => bookmark.title.clone(),
    };

    let onclick = {
        let url = bookmark.url.clone();
        props.on_open.reform(move |e: MouseEvent| {
            e.prevent_default();
            url.clone()
        })
    };

    let oncontextmenu = props.on_menu.clone().map(|on_menu| {
        let target = MenuTarget::Bookmark {
            id: bookmark.id.clone(),
            url: bookmark.url.clone(),
        };
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_menu.emit(MenuRequest {
                x: e.page_x(),
                y: e.page_y(),
                target: target.clone(),
            });
        })
    });

    let delete_button = props.on_delete.clone().map(|on_delete| {
        let id = bookmark.id.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_delete.emit(id.clone());
        });
        html! { <button class="delete-bookmark" title="Delete" {onclick}>{"✗"}</button> }
    });

    html! {
        <div class="bookmark-item" title={bookmark.url.clone()} {oncontextmenu}>
            <a href="#" class="bookmark-content" {onclick}>
                <Favicon url={bookmark.url.clone()} />
                <span class="bookmark-title truncate">{title}</span>
            </a>
            {delete_button}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FolderCardProps {
    pub folder: FolderRecord,
    /// Start expanded, e.g. while a search is active
    #[prop_or(false)]
    pub expanded: bool,
    pub on_open: Callback<String>,
    pub on_menu: Callback<MenuRequest>,
}

#[function_component(FolderCard)]
pub fn folder_card(props: &FolderCardProps) -> Html {
    let initially_expanded = props.expanded;
    let expanded = use_state(move || initially_expanded);
    let folder = &props.folder;

    {
        let expanded = expanded.clone();
        use_effect_with(props.expanded, move |start_expanded| {
            expanded.set(*start_expanded);
            || ()
        });
    }

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| {
            expanded.set(!*expanded);
        })
    };

    let oncontextmenu = {
        let on_menu = props.on_menu.clone();
        let target = MenuTarget::Folder { id: folder.id.clone() };
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_menu.emit(MenuRequest {
                x: e.page_x(),
                y: e.page_y(),
                target: target.clone(),
            });
        })
    };

    let header_class = classes!("folder-header", (*expanded).then_some("expanded"));

    html! {
        <div class="folder-container">
            <div class={header_class} onclick={toggle} {oncontextmenu}>
                <span class="folder-icon">{if *expanded { "▾" } else { "▸" }}</span>
                <span class="folder-name">{&folder.name}</span>
                <span class="folder-count">{folder.bookmarks.len()}</span>
            </div>
            if *expanded {
                <div class="folder-bookmarks expanded">
                    {for folder.bookmarks.iter().map(|bookmark| html! {
                        <BookmarkRow
                            key={bookmark.id.clone()}
                            bookmark={bookmark.clone()}
                            on_open={props.on_open.clone()}
                            on_menu={props.on_menu.clone()}
                        />
                    })}
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContextMenuProps {
    pub request: MenuRequest,
    pub on_action: Callback<(MenuAction, MenuTarget)>,
}

/// Open / edit / rename / delete menu; bookmark-only entries are hidden for folders
#[function_component(ContextMenu)]
pub fn context_menu(props: &ContextMenuProps) -> Html {
    let request = &props.request;
    let is_bookmark = matches!(request.target, MenuTarget::Bookmark { .. });

    let item = |action: MenuAction, label: &'static str| {
        let target = request.target.clone();
        let onclick = props.on_action.reform(move |e: MouseEvent| {
            e.stop_propagation();
            (action, target.clone())
        });
        html! { <div class="context-menu-item" {onclick}>{label}</div> }
    };

    html! {
        <div
            class="context-menu active"
            style={format!("left: {}px; top: {}px;", request.x, request.y)}
        >
            if is_bookmark {
                {item(MenuAction::Open, "Open")}
                {item(MenuAction::EditUrl, "Edit link")}
            }
            {item(MenuAction::Rename, "Rename")}
            {item(MenuAction::Delete, "Delete")}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: String,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! { <p class="empty">{&props.message}</p> }
}
