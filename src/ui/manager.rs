/// Bookmark manager page: folder list, search and context-menu actions

use crate::bookmark_data::Listing;
use crate::search::{filter_folders, visible_stats};
use crate::ui::components::{ContextMenu, EmptyState, FolderCard, MenuAction, MenuRequest, MenuTarget};
use crate::ui::{app_service, AppService, PageProps};
use patternfly_yew::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum ViewState {
    Loading,
    Idle,
}

#[function_component(BookmarkManager)]
pub fn bookmark_manager(props: &PageProps) -> Html {
    let service = {
        let config = props.config.clone();
        use_memo((), move |_| app_service(config))
    };
    let state = use_state(|| ViewState::Loading);
    let listing = use_state(Listing::default);
    let search_query = use_state(String::new);
    let menu = use_state(|| None::<MenuRequest>);

    let reload = {
        let service = service.clone();
        let state = state.clone();
        let listing = listing.clone();
        Callback::from(move |_: ()| {
            let service = service.clone();
            let state = state.clone();
            let listing = listing.clone();
            spawn_local(async move {
                listing.set(service.load_listing(&listing).await);
                state.set(ViewState::Idle);
            });
        })
    };

    // Load bookmarks on mount
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let on_search_input = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search_query.set(input.value());
            }
        })
    };

    let on_refresh = {
        let search_query = search_query.clone();
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| {
            search_query.set(String::new());
            reload.emit(());
        })
    };

    let on_open = {
        let service = service.clone();
        Callback::from(move |url: String| {
            let service = service.clone();
            spawn_local(async move {
                service.open_bookmark(&url).await;
            });
        })
    };

    let on_menu = {
        let menu = menu.clone();
        Callback::from(move |request: MenuRequest| {
            menu.set(Some(request));
        })
    };

    let hide_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(None);
        })
    };

    let on_keydown = {
        let menu = menu.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu.set(None);
            }
        })
    };

    let on_action = {
        let service = service.clone();
        let listing = listing.clone();
        let menu = menu.clone();
        Callback::from(move |(action, target): (MenuAction, MenuTarget)| {
            menu.set(None);
            run_action(service.clone(), listing.clone(), action, target);
        })
    };

    let folders = filter_folders(&listing.folders, &search_query);
    let searching = !search_query.trim().is_empty();
    let stats = if searching { visible_stats(&folders) } else { listing.stats() };

    html! {
        <div class="manager" tabindex="0" onclick={hide_menu} onkeydown={on_keydown}>
            <div class="toolbar">
                <input
                    type="search"
                    id="searchInput"
                    class="search-input"
                    placeholder="Search bookmarks..."
                    value={(*search_query).clone()}
                    oninput={on_search_input}
                />
                <Button onclick={on_refresh} variant={ButtonVariant::Secondary}>
                    {"Refresh"}
                </Button>
            </div>

            if *state == ViewState::Loading {
                <div class="loading-text-center">
                    <Spinner />
                </div>
            } else if folders.is_empty() {
                <EmptyState message={"No bookmarks found"} />
            } else {
                <div id="bookmarksList">
                    <div class="stats">
                        {format!("Folders: {} | Bookmarks: {}", stats.folders, stats.bookmarks)}
                    </div>
                    {for folders.iter().map(|folder| html! {
                        <FolderCard
                            key={folder.id.clone()}
                            folder={folder.clone()}
                            expanded={searching}
                            on_open={on_open.clone()}
                            on_menu={on_menu.clone()}
                        />
                    })}
                </div>
            }

            if let Some(request) = (*menu).clone() {
                <ContextMenu {request} on_action={on_action} />
            }
        </div>
    }
}

/// Dispatch a context-menu action; a successful mutation replaces the listing
fn run_action(
    service: Rc<AppService>,
    listing: UseStateHandle<Listing>,
    action: MenuAction,
    target: MenuTarget,
) {
    spawn_local(async move {
        let result = match (action, &target) {
            (MenuAction::Open, MenuTarget::Bookmark { url, .. }) => {
                service.open_bookmark(url).await;
                Ok(None)
            }
            (MenuAction::EditUrl, MenuTarget::Bookmark { id, .. }) => {
                service.edit_bookmark_url(id, &listing).await
            }
            (MenuAction::Rename, MenuTarget::Bookmark { id, .. }) => {
                service.rename_bookmark(id, &listing).await
            }
            (MenuAction::Rename, MenuTarget::Folder { id }) => service.rename_folder(id, &listing).await,
            (MenuAction::Delete, MenuTarget::Bookmark { id, .. }) => {
                service.delete_bookmark(id, &listing).await
            }
            (MenuAction::Delete, MenuTarget::Folder { id }) => service.delete_folder(id, &listing).await,
            (MenuAction::Open | MenuAction::EditUrl, MenuTarget::Folder { .. }) => Ok(None),
        };

        if let Ok(Some(updated)) = result {
            listing.set(updated);
        }
    });
}
