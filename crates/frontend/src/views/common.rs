use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::shared::config::{SamplesConfig, ShowcaseConfig};
use crate::shared::tui_grid::rows_from;

/// Строки для грида; ошибка сериализации только логируется
pub fn grid_rows<T: Serialize>(items: &[T]) -> Vec<Value> {
    rows_from(items).unwrap_or_else(|err| {
        log::error!("grid rows: {}", err);
        Vec::new()
    })
}

/// Размеры наборов образцов из конфигурации
pub fn use_samples() -> SamplesConfig {
    use_context::<ShowcaseConfig>()
        .unwrap_or_default()
        .samples
}

/// Корневая обёртка вида: заголовок и пояснение
#[component]
pub fn ViewFrame(
    page_id: &'static str,
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page" id=page_id>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <p class="page__description">{description}</p>
                </div>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
