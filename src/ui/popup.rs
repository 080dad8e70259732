/// Popup UI: recent bookmarks and the "add bookmark" form

use crate::bookmark_data::{BookmarkRecord, FolderSummary};
use crate::draft::BookmarkDraft;
use crate::storage::UserProfile;
use crate::ui::components::{BookmarkRow, EmptyState};
use crate::ui::{app_service, PageProps};
use patternfly_yew::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const GRAPH_PAGE: &str = "graph.html";
const MANAGER_PAGE: &str = "manager.html";

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Loading(String),
    Saving,
}

#[derive(Clone, PartialEq)]
enum ActiveTab {
    Bookmarks,
    AddBookmark,
}

#[function_component(App)]
pub fn app(props: &PageProps) -> Html {
    let service = {
        let config = props.config.clone();
        use_memo((), move |_| app_service(config))
    };
    let state = use_state(|| AppState::Loading("Loading bookmarks...".to_string()));
    let active_tab = use_state(|| ActiveTab::Bookmarks);
    let user = use_state(|| None::<UserProfile>);
    let recent = use_state(Vec::<BookmarkRecord>::new);
    let folders = use_state(Vec::<FolderSummary>::new);
    let draft = use_state(BookmarkDraft::default);

    // Load user, recent bookmarks and folders on mount
    {
        let service = service.clone();
        let state = state.clone();
        let user = user.clone();
        let recent = recent.clone();
        let folders = folders.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                user.set(service.load_user().await.user);
                recent.set(service.load_recent(&[]).await);
                folders.set(service.load_folders().await);
                state.set(AppState::Idle);
            });
            || ()
        });
    }

    let on_open = {
        let service = service.clone();
        Callback::from(move |url: String| {
            let service = service.clone();
            spawn_local(async move {
                service.open_bookmark(&url).await;
            });
        })
    };

    let open_page = |page: &'static str| {
        let service = service.clone();
        Callback::from(move |_: MouseEvent| {
            let service = service.clone();
            spawn_local(async move {
                service.open_bookmark(page).await;
            });
        })
    };

    let on_delete = {
        let service = service.clone();
        let recent = recent.clone();
        Callback::from(move |id: String| {
            let service = service.clone();
            let recent = recent.clone();
            spawn_local(async move {
                if let Ok(Some(updated)) = service.delete_recent(&id, &recent).await {
                    recent.set(updated);
                }
            });
        })
    };

    let on_save = {
        let service = service.clone();
        let state = state.clone();
        let draft = draft.clone();
        let recent = recent.clone();
        Callback::from(move |_: MouseEvent| {
            let service = service.clone();
            let state = state.clone();
            let draft = draft.clone();
            let recent = recent.clone();

            state.set(AppState::Saving);
            spawn_local(async move {
                if service.create_bookmark(&draft).await.is_ok() {
                    draft.set(BookmarkDraft::default());
                    recent.set(service.load_recent(&recent).await);
                }
                state.set(AppState::Idle);
            });
        })
    };

    let on_title_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(BookmarkDraft {
                    title: input.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_url_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(BookmarkDraft {
                    url: input.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_folder_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                draft.set(BookmarkDraft {
                    folder_id: select.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_tab_click = {
        let active_tab = active_tab.clone();
        move |tab: ActiveTab| {
            let active_tab = active_tab.clone();
            Callback::from(move |_| {
                active_tab.set(tab.clone());
            })
        }
    };

    let tab_class = |tab: ActiveTab| {
        if *active_tab == tab { "pf-v5-c-tabs__item pf-m-current" } else { "pf-v5-c-tabs__item" }
    };

    let is_busy = !matches!(*state, AppState::Idle);
    let popup_title_length = service.config().popup_title_length;

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Bookmark Graph"}</h1>
            if let Some(name) = (*user).as_ref().and_then(|u| u.display_name()) {
                <p class="popup-user">{name}</p>
            }

            // Tab navigation
            <div class="pf-v5-c-tabs tabs-nav">
                <ul class="pf-v5-c-tabs__list">
                    <li class={tab_class(ActiveTab::Bookmarks)}>
                        <button class="pf-v5-c-tabs__link" onclick={on_tab_click(ActiveTab::Bookmarks)}>
                            <span class="pf-v5-c-tabs__item-text">{"Bookmarks"}</span>
                        </button>
                    </li>
                    <li class={tab_class(ActiveTab::AddBookmark)}>
                        <button class="pf-v5-c-tabs__link" onclick={on_tab_click(ActiveTab::AddBookmark)}>
                            <span class="pf-v5-c-tabs__item-text">{"Add bookmark"}</span>
                        </button>
                    </li>
                </ul>
            </div>

            if let AppState::Loading(msg) = &*state {
                <div class="loading-text-center">
                    <Spinner />
                    <p class="loading-text">{msg}</p>
                </div>
            }

            <div class="tab-pane-content">
                {match &*active_tab {
                    ActiveTab::Bookmarks => html! {
                        <div class="flex-column-gap">
                            <Button onclick={open_page(GRAPH_PAGE)} variant={ButtonVariant::Primary} block={true}>
                                {"Bookmark Graph"}
                            </Button>
                            <Button onclick={open_page(MANAGER_PAGE)} variant={ButtonVariant::Secondary} block={true}>
                                {"Manage bookmarks"}
                            </Button>

                            <div class="section">
                                <h3>{"Recent bookmarks"}</h3>
                                if recent.is_empty() {
                                    <EmptyState message={"No bookmarks"} />
                                } else {
                                    <div class="list">
                                        {for recent.iter().map(|bookmark| html! {
                                            <BookmarkRow
                                                key={bookmark.id.clone()}
                                                bookmark={bookmark.clone()}
                                                max_title={Some(popup_title_length)}
                                                on_open={on_open.clone()}
                                                on_delete={Some(on_delete.clone())}
                                            />
                                        })}
                                    </div>
                                }
                            </div>
                        </div>
                    },
                    ActiveTab::AddBookmark => html! {
                        <AddBookmarkForm
                            draft={(*draft).clone()}
                            folders={Rc::new((*folders).clone())}
                            busy={is_busy}
                            on_title_input={on_title_input}
                            on_url_input={on_url_input}
                            on_folder_change={on_folder_change}
                            on_save={on_save}
                        />
                    },
                }}
            </div>

            <p class="footer-popup">
                {"Bookmark Graph v0.1.0"}
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AddBookmarkFormProps {
    draft: BookmarkDraft,
    folders: Rc<Vec<FolderSummary>>,
    busy: bool,
    on_title_input: Callback<InputEvent>,
    on_url_input: Callback<InputEvent>,
    on_folder_change: Callback<Event>,
    on_save: Callback<MouseEvent>,
}

#[function_component(AddBookmarkForm)]
fn add_bookmark_form(props: &AddBookmarkFormProps) -> Html {
    let draft = &props.draft;

    html! {
        <div class="section">
            <h3>{"Add a new bookmark"}</h3>
            <div class="bookmark-form">
                <div class="form-group">
                    <label for="bookmarkTitle">{"Title:"}</label>
                    <input
                        type="text"
                        id="bookmarkTitle"
                        value={draft.title.clone()}
                        oninput={props.on_title_input.clone()}
                        placeholder="Bookmark title"
                        maxlength="100"
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="bookmarkUrl">{"URL:"}</label>
                    <input
                        type="url"
                        id="bookmarkUrl"
                        value={draft.url.clone()}
                        oninput={props.on_url_input.clone()}
                        placeholder="https://example.com"
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="bookmarkFolder">{"Folder:"}</label>
                    <select id="bookmarkFolder" onchange={props.on_folder_change.clone()}>
                        <option value="" selected={draft.folder_id.is_empty()}>{"No folder"}</option>
                        {for props.folders.iter().map(|folder| html! {
                            <option
                                key={folder.id.clone()}
                                value={folder.id.clone()}
                                selected={draft.folder_id == folder.id}
                            >
                                {&folder.name}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-actions">
                    <Button onclick={props.on_save.clone()} disabled={props.busy} variant={ButtonVariant::Primary}>
                        {"Save bookmark"}
                    </Button>
                </div>
            </div>
        </div>
    }
}
