use contracts::domain::a101_user::{sample_users, EditableUser};
use contracts::enums::department::Department;
use contracts::shared::grid::{
    Align, ColumnInfo, DataType, Editor, GridOptions, RendererKind, RowHeader, Validation,
};
use leptos::prelude::*;

use crate::shared::tui_grid::TuiGridView;
use crate::views::common::{grid_rows, use_samples, ViewFrame};

fn columns() -> Vec<ColumnInfo> {
    vec![
        ColumnInfo::new("ID", "id").align(Align::Center).width(80),
        ColumnInfo::new("Имя", "name").editor(Editor::text()),
        ColumnInfo::new("Отдел", "department")
            .editor(Editor::select(Department::all().iter().map(|d| d.code()))),
        ColumnInfo::new("Дата приёма", "joinDate").editor(Editor::date_picker("yyyy-MM-dd")),
        ColumnInfo::new("Активен", "active")
            .align(Align::Center)
            .width(80)
            .renderer(RendererKind::Checkbox),
        ColumnInfo::new("Баллы", "score")
            .editor(Editor::text())
            .validation(Validation {
                data_type: Some(DataType::Number),
                required: Some(true),
                min: Some(0.0),
                max: Some(100.0),
            }),
    ]
}

fn grid_options() -> GridOptions {
    GridOptions::new()
        .body_height(500)
        .row_headers(&[RowHeader::Checkbox])
}

#[component]
pub fn EditableGridView() -> impl IntoView {
    let users = EditableUser::from_users(sample_users(use_samples().editable));
    let rows = Signal::stored(grid_rows(&users));

    view! {
        <ViewFrame
            page_id="v003_editable_grid--view"
            title="Редактирование ячеек"
            description="Двойной клик открывает редактор ячейки. Флаг «Активен» меняется прямо в гриде через checkbox."
        >
            <TuiGridView rows=rows columns=columns() options=grid_options() />
        </ViewFrame>
    }
}
