use contracts::enums::department::Department;
use contracts::shared::grid::{Align, ColumnInfo, GridOptions, RowKey};
use leptos::prelude::*;

use super::logic::{department_of_click, detail_rows, highlight_master_row};
use crate::shared::sample_data::use_sample_dataset;
use crate::shared::tui_grid::{GridClick, TuiGridView};
use crate::views::common::{grid_rows, ViewFrame};

fn master_columns() -> Vec<ColumnInfo> {
    vec![
        ColumnInfo::new("Отдел", "department").sortable(),
        ColumnInfo::new("Сотрудников", "userCount").align(Align::Right).width(120),
    ]
}

fn detail_columns() -> Vec<ColumnInfo> {
    vec![
        ColumnInfo::new("ID", "id").align(Align::Center).width(80),
        ColumnInfo::new("Имя", "name"),
        ColumnInfo::new("Грейд", "grade").align(Align::Center),
        ColumnInfo::new("Дата приёма", "joinDate").align(Align::Center),
        ColumnInfo::new("Баллы", "score").align(Align::Right),
    ]
}

#[component]
pub fn MasterDetailView() -> impl IntoView {
    let dataset = use_sample_dataset();
    let selected = RwSignal::new(None::<Department>);

    let master_rows = Signal::stored(grid_rows(dataset.departments.as_slice()));
    let users = dataset.users.clone();
    let detail = Signal::derive(move || detail_rows(users.as_slice(), selected.get()));

    let highlighted = StoredValue::new(None::<RowKey>);

    let on_master_click = Callback::new(move |click: GridClick| {
        let Some(department) = department_of_click(&click.event, &click.grid) else {
            return;
        };
        if let Some(row_key) = click.event.row_key {
            highlight_master_row(&click.grid, highlighted.get_value(), row_key);
            highlighted.set_value(Some(row_key));
        }
        selected.set(Some(department));
    });

    view! {
        <ViewFrame
            page_id="v004_master_detail--view"
            title="Master-Detail"
            description="Выберите отдел в верхнем гриде, в нижнем появятся его сотрудники."
        >
            <div class="grid-section">
                <h3 class="grid-section__title">"Отделы (Master)"</h3>
                <TuiGridView
                    rows=master_rows
                    columns=master_columns()
                    options=GridOptions::new().body_height(200)
                    on_grid_click=on_master_click
                />
            </div>
            <div class="grid-section">
                <h3 class="grid-section__title">
                    "Сотрудники (Detail)"
                    {move || selected.get().map(|d| format!(" - {}", d.code()))}
                </h3>
                <TuiGridView
                    rows=detail
                    columns=detail_columns()
                    options=GridOptions::new().body_height(300)
                />
            </div>
        </ViewFrame>
    }
}
