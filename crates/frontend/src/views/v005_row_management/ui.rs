use contracts::domain::a101_user::sample_users;
use contracts::shared::grid::{Align, ColumnInfo, Editor, GridOptions, RowHeader};
use leptos::prelude::*;
use thaw::*;

use super::logic::{add_row, delete_checked_rows, toggle_row_check};
use crate::shared::icons::icon;
use crate::shared::tui_grid::{GridClick, TuiGrid, TuiGridView};
use crate::views::common::{grid_rows, use_samples, ViewFrame};

fn columns() -> Vec<ColumnInfo> {
    vec![
        ColumnInfo::new("ID", "id").align(Align::Center).width(80),
        ColumnInfo::new("Имя", "name").editor(Editor::text()),
        ColumnInfo::new("Отдел", "department").editor(Editor::text()),
        ColumnInfo::new("Баллы", "score").align(Align::Right).editor(Editor::text()),
    ]
}

#[component]
pub fn RowManagementView() -> impl IntoView {
    let rows = Signal::stored(grid_rows(&sample_users(use_samples().row_management)));
    let grid = StoredValue::new_local(None::<TuiGrid>);

    let on_ready = Callback::new(move |instance: TuiGrid| grid.set_value(Some(instance)));
    let on_click = Callback::new(move |click: GridClick| {
        toggle_row_check(&click.event, &click.grid);
    });

    let handle_add = move |_: leptos::ev::MouseEvent| {
        grid.with_value(|grid| {
            if let Some(grid) = grid {
                if let Err(err) = add_row(grid, chrono::Utc::now().timestamp_millis()) {
                    log::error!("add row: {}", err);
                }
            }
        });
    };

    let handle_delete = move |_: leptos::ev::MouseEvent| {
        grid.with_value(|grid| {
            if let Some(grid) = grid {
                let removed = delete_checked_rows(grid);
                log::debug!("removed {} checked rows", removed);
            }
        });
    };

    view! {
        <ViewFrame
            page_id="v005_row_management--view"
            title="Добавление и удаление строк"
            description="Клик по строке переключает её отметку. Кнопками можно добавить строку или удалить отмеченные."
        >
            <div class="grid-toolbar">
                <Button appearance=ButtonAppearance::Primary on_click=handle_add>
                    {icon("plus")}
                    " Добавить строку"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=handle_delete>
                    {icon("trash")}
                    " Удалить отмеченные"
                </Button>
            </div>
            <TuiGridView
                rows=rows
                columns=columns()
                options=GridOptions::new().row_headers(&[RowHeader::Checkbox]).body_height(500)
                on_grid_ready=on_ready
                on_grid_click=on_click
            />
        </ViewFrame>
    }
}
