use contracts::shared::grid::{ColumnInfo, GridOptions};
use leptos::html::Div;
use leptos::prelude::*;
use serde_json::Value;

use super::adapter::{GridAdapter, MountRequest, DEFAULT_RETRY_INTERVAL_MS};
use super::browser::{TuiGrid, TuiGridLibrary};
use super::event::GridEvent;
use super::timer::BrowserTimer;
use crate::shared::config::ShowcaseConfig;

type BrowserAdapter = GridAdapter<TuiGridLibrary, BrowserTimer>;

/// Клик по гриду вместе с экземпляром, на котором он произошёл
#[derive(Clone)]
pub struct GridClick {
    pub event: GridEvent,
    pub grid: TuiGrid,
}

/// Контейнер под `tui.Grid`.
///
/// Колонки и опции читаются один раз при монтировании; при изменении `rows`
/// строки заменяются через `resetData` без пересоздания грида.
#[component]
pub fn TuiGridView(
    #[prop(into)] rows: Signal<Vec<Value>>,
    columns: Vec<ColumnInfo>,
    #[prop(optional)] options: GridOptions,
    #[prop(optional)] on_grid_click: Option<Callback<GridClick>>,
    #[prop(optional)] on_grid_ready: Option<Callback<TuiGrid>>,
) -> impl IntoView {
    let retry_interval_ms = use_context::<ShowcaseConfig>()
        .map(|config| config.grid.retry_interval_ms)
        .unwrap_or(DEFAULT_RETRY_INTERVAL_MS);

    let container = NodeRef::<Div>::new();
    let adapter = StoredValue::new_local(BrowserAdapter::new(
        TuiGridLibrary,
        BrowserTimer,
        retry_interval_ms,
    ));
    let setup = StoredValue::new_local(Some((columns, options)));

    // Монтирование: как только появился div
    Effect::new(move |_| {
        let Some(div) = container.get() else {
            return;
        };
        let Some((columns, options)) = setup.try_update_value(|setup| setup.take()).flatten() else {
            return;
        };

        let mut request =
            MountRequest::<TuiGridLibrary>::new(div.into(), rows.get_untracked(), columns)
                .options(options);
        if let Some(on_grid_click) = on_grid_click {
            request = request.on_click(move |event, grid| {
                on_grid_click.run(GridClick {
                    event: event.clone(),
                    grid: grid.clone(),
                })
            });
        }
        if let Some(on_grid_ready) = on_grid_ready {
            request = request.on_ready(move |grid| on_grid_ready.run(grid.clone()));
        }

        adapter.with_value(|adapter| adapter.mount(request));
    });

    // Обновление строк; первый прогон пропускается, строки уже ушли в mount
    Effect::new(move |prev: Option<()>| {
        let rows = rows.get();
        if prev.is_some() {
            adapter.with_value(|adapter| adapter.refresh(rows));
        }
    });

    on_cleanup(move || {
        adapter.try_with_value(|adapter| adapter.unmount());
    });

    view! { <div class="tui-grid-host" node_ref=container></div> }
}
