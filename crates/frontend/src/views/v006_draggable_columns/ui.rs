use contracts::domain::a101_user::sample_users;
use contracts::shared::grid::{Align, ColumnInfo, GridOptions, RendererKind};
use leptos::prelude::*;

use crate::shared::tui_grid::TuiGridView;
use crate::views::common::{grid_rows, use_samples, ViewFrame};
use crate::views::v001_basic_grid::basic_columns;

/// Колонка без данных: значение рисует рендерер
const ROW_NUMBER_COLUMN: &str = "rowNumDesc";

const DRAG_STYLES: &str = r#"
.tui-grid-header-area .tui-grid-cell-draggable .tui-grid-cell-content {
    cursor: grab;
}
.tui-grid-header-area .tui-grid-cell-draggable .tui-grid-cell-content:active {
    cursor: grabbing;
}
.tui-grid-cell[data-column-name="rowNumDesc"] {
    background: #f4f4f5;
    border-right-color: #e0e0e0;
    font-weight: bold;
}
"#;

fn columns() -> Vec<ColumnInfo> {
    let mut columns = vec![ColumnInfo::new("№", ROW_NUMBER_COLUMN)
        .width(60)
        .align(Align::Center)
        .renderer(RendererKind::DescendingRowNumber)];
    columns.extend(basic_columns());
    columns
}

fn grid_options() -> GridOptions {
    GridOptions::new().draggable_columns().body_height(500)
}

#[component]
pub fn DraggableColumnsView() -> impl IntoView {
    let rows = Signal::stored(grid_rows(&sample_users(use_samples().draggable)));

    view! {
        <ViewFrame
            page_id="v006_draggable_columns--view"
            title="Перетаскивание колонок"
            description="Заголовки колонок можно перетащить мышью. Номера строк идут в обратном порядке."
        >
            <style>{DRAG_STYLES}</style>
            <TuiGridView rows=rows columns=columns() options=grid_options() />
        </ViewFrame>
    }
}
