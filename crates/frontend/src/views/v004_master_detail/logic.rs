use contracts::domain::a101_user::UserData;
use contracts::domain::a102_department::users_of_department;
use contracts::enums::department::Department;
use contracts::shared::grid::RowKey;
use serde_json::Value;

use crate::shared::tui_grid::{GridEvent, GridInstance};
use crate::views::common::grid_rows;

/// Отдел строки мастер-грида, по которой кликнули.
///
/// Ключ строки 0 допустим; отбрасываются только клики без строки.
pub fn department_of_click<G: GridInstance>(event: &GridEvent, grid: &G) -> Option<Department> {
    let row_key = event.row_key?;
    let row = grid.get_row(row_key)?;
    row.get("department")
        .and_then(Value::as_str)
        .and_then(Department::from_code)
}

/// CSS-класс выбранной строки мастер-грида
pub const SELECTED_ROW_CLASS: &str = "master-row--selected";

/// Переносит подсветку с прежней выбранной строки на новую
pub fn highlight_master_row<G: GridInstance>(grid: &G, previous: Option<RowKey>, current: RowKey) {
    if previous == Some(current) {
        return;
    }
    if let Some(previous) = previous {
        grid.remove_row_class_name(previous, SELECTED_ROW_CLASS);
    }
    grid.add_row_class_name(current, SELECTED_ROW_CLASS);
}

/// Строки детального грида: копия сотрудников выбранного отдела
pub fn detail_rows(users: &[UserData], selected: Option<Department>) -> Vec<Value> {
    match selected {
        Some(department) => grid_rows(&users_of_department(users, department)),
        None => Vec::new(),
    }
}
