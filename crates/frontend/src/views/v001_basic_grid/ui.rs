use contracts::domain::a101_user::sample_users;
use contracts::shared::grid::{Align, ColumnInfo, GridOptions, RowHeader};
use leptos::prelude::*;
use serde_json::{json, Value};

use crate::shared::tui_grid::TuiGridView;
use crate::views::common::{grid_rows, use_samples, ViewFrame};

/// Колонки сотрудника; их же переиспользует грид с перетаскиванием
pub fn basic_columns() -> Vec<ColumnInfo> {
    vec![
        ColumnInfo::new("ID", "id").align(Align::Center).width(80),
        ColumnInfo::new("Имя", "name").sortable(),
        ColumnInfo::new("Отдел", "department").sortable(),
        ColumnInfo::new("Грейд", "grade").align(Align::Center),
        ColumnInfo::new("Дата приёма", "joinDate").align(Align::Center),
        ColumnInfo::new("Баллы", "score").align(Align::Right).sortable(),
    ]
}

// Выделенная строка закрашивается серым целиком
fn selection_theme() -> Value {
    json!({
        "selection": {
            "background": "#666666",
            "border": "#000000"
        },
        "cell": {
            "selectedRowHeader": { "background": "#666666" },
            "selectedRow": { "background": "#666666", "color": "#fff" }
        }
    })
}

fn grid_options() -> GridOptions {
    GridOptions::new()
        .body_height(500)
        .selection_unit_row()
        .row_headers(&[RowHeader::RowNum])
        .theme(selection_theme())
}

#[component]
pub fn BasicGridView() -> impl IntoView {
    let rows = Signal::stored(grid_rows(&sample_users(use_samples().basic)));

    view! {
        <ViewFrame
            page_id="v001_basic_grid--view"
            title="Базовый грид (выбор строки)"
            description="Клик по ячейке выделяет всю строку серым фоном."
        >
            <TuiGridView rows=rows columns=basic_columns() options=grid_options() />
        </ViewFrame>
    }
}
