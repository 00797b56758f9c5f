use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::layout::views::ViewId;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_view: RwSignal<ViewId>,
    pub default_view: ViewId,
}

/// Параметры адресной строки, которые понимает витрина
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct ViewQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<String>,
}

impl AppGlobalContext {
    pub fn new(default_view: ViewId) -> Self {
        Self {
            active_view: RwSignal::new(default_view),
            default_view,
        }
    }

    pub fn select_view(&self, view: ViewId) {
        leptos::logging::log!("select_view: '{}'", view.key());
        self.active_view.set(view);
    }

    /// Восстанавливает вид из `?view=` и дальше держит параметр в актуальном состоянии
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.active_view
            .set(view_from_query(&search, self.default_view));

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for(this.active_view.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

fn view_from_query(search: &str, fallback: ViewId) -> ViewId {
    let query: ViewQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    ViewId::resolve(query.view.as_deref(), fallback)
}

fn query_for(view: ViewId) -> String {
    let query = ViewQuery {
        view: Some(view.key().to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}
