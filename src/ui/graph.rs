/// Graph page: hands the node/link model to the force-directed renderer in bridge.js

use crate::graph::GraphModel;
use crate::host::to_js;
use crate::ui::{app_service, PageProps};
use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const GRAPH_CONTAINER: &str = "graph";

#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn renderForceGraph(
        container_id: &str,
        graph: JsValue,
        layout: JsValue,
        on_open: &js_sys::Function,
        on_hover: &js_sys::Function,
    ) -> Result<(), JsValue>;
}

#[function_component(GraphPage)]
pub fn graph_page(props: &PageProps) -> Html {
    let service = {
        let config = props.config.clone();
        use_memo((), move |_| app_service(config))
    };
    let graph = use_state(|| None::<GraphModel>);

    // Load bookmarks on mount
    {
        let service = service.clone();
        let graph = graph.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                graph.set(Some(service.load_graph(&GraphModel::default()).await));
            });
            || ()
        });
    }

    // Render whenever a new model arrives; the handlers live as long as the drawing
    {
        let service = service.clone();
        use_effect_with((*graph).clone(), move |graph| {
            let on_open = Closure::wrap(Box::new({
                let service = service.clone();
                move |url: String| {
                    let service = service.clone();
                    spawn_local(async move {
                        service.open_bookmark(&url).await;
                    });
                }
            }) as Box<dyn Fn(String)>);

            let on_hover = Closure::wrap(Box::new({
                let model = graph.clone().unwrap_or_default();
                move |id: String| {
                    to_js(&model.highlight(&id)).unwrap_or_else(|e| {
                        log::warn!("Failed to send highlight for {}: {}", id, e);
                        JsValue::NULL
                    })
                }
            }) as Box<dyn Fn(String) -> JsValue>);

            if let Some(graph) = graph {
                let rendered = to_js(graph).and_then(|graph_js| {
                    let layout_js = to_js(&service.config().layout)?;
                    renderForceGraph(
                        GRAPH_CONTAINER,
                        graph_js,
                        layout_js,
                        on_open.as_ref().unchecked_ref(),
                        on_hover.as_ref().unchecked_ref(),
                    )
                    .map_err(|e| crate::error::BookmarkError::Host(format!("{:?}", e)))
                });
                if let Err(e) = rendered {
                    log::error!("Failed to render graph: {}", e);
                }
            }

            move || {
                drop(on_open);
                drop(on_hover);
            }
        });
    }

    html! {
        <div class="graph-page">
            if (*graph).is_none() {
                <div class="loading-text-center">
                    <Spinner />
                    <p class="loading-text">{"Loading bookmarks..."}</p>
                </div>
            } else if (*graph).as_ref().is_some_and(|g| g.nodes.len() <= 1) {
                <p class="empty">{"No bookmarks found"}</p>
            }
            <div id={GRAPH_CONTAINER} class="graph-container"></div>
        </div>
    }
}
