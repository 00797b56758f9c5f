use contracts::domain::a101_user::sample_users;
use contracts::shared::grid::{Align, ColumnInfo, ComplexColumn, GridOptions, HeaderOptions};
use leptos::prelude::*;
use serde_json::{json, Value};

use crate::shared::tui_grid::TuiGridView;
use crate::views::common::{grid_rows, use_samples, ViewFrame};

fn columns() -> Vec<ColumnInfo> {
    vec![
        ColumnInfo::new("ID", "id").align(Align::Center).width(80),
        ColumnInfo::new("Имя", "name"),
        ColumnInfo::new("Отдел", "department"),
        ColumnInfo::new("Грейд", "grade").align(Align::Center),
        ColumnInfo::new("Город", "city"),
        ColumnInfo::new("Дата приёма", "joinDate").align(Align::Center),
        ColumnInfo::new("Баллы", "score").align(Align::Right),
    ]
}

fn header_theme() -> Value {
    json!({
        "cell": {
            "header": {
                "background": "#f4f4f5",
                "border": "#e0e0e0",
                "text": "#333",
                "fontWeight": "bold"
            },
            "rowHeader": { "background": "#f4f4f5" }
        }
    })
}

// Высота задана явно, иначе второй ярус заголовка обрезается
fn grid_options() -> GridOptions {
    GridOptions::new()
        .header(HeaderOptions {
            height: 80,
            complex_columns: vec![
                ComplexColumn::new("Сотрудник", "userInfo", &["name", "department", "grade"]),
                ComplexColumn::new("Подробности", "details", &["city", "joinDate", "score"]),
            ],
        })
        .theme(header_theme())
}

#[component]
pub fn ComplexColumnsView() -> impl IntoView {
    let rows = Signal::stored(grid_rows(&sample_users(use_samples().complex)));

    view! {
        <ViewFrame
            page_id="v002_complex_columns--view"
            title="Составные заголовки"
            description="Колонки сгруппированы под общими заголовками; высота шапки задана опцией header.height."
        >
            <div class="grid-card">
                <TuiGridView rows=rows columns=columns() options=grid_options() />
            </div>
        </ViewFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_cover_existing_columns() {
        let options = grid_options();
        let header = options.get("header").unwrap();
        assert_eq!(header["height"], json!(80));

        let names: Vec<String> = columns().into_iter().map(|c| c.name).collect();
        let groups = header["complexColumns"].as_array().unwrap();
        assert_eq!(groups.len(), 2);
        for group in groups {
            for child in group["childNames"].as_array().unwrap() {
                assert!(names.iter().any(|n| n == child.as_str().unwrap()));
            }
        }
        // id остаётся вне групп
        assert_eq!(groups[0]["childNames"], json!(["name", "department", "grade"]));
        assert_eq!(groups[1]["name"], json!("details"));
    }
}
