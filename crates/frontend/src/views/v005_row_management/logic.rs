use contracts::domain::a101_user::NewUserRow;
use contracts::shared::grid::RowKey;

use crate::shared::tui_grid::{row_key_of, GridError, GridEvent, GridInstance};

/// Клик по ячейке переключает отметку строки.
///
/// Возвращает ключ строки, если клик был по ячейке с данными.
pub fn toggle_row_check<G: GridInstance>(event: &GridEvent, grid: &G) -> Option<RowKey> {
    let row_key = event.cell_row_key()?;
    let checked = grid
        .get_checked_rows()
        .iter()
        .any(|row| row_key_of(row) == Some(row_key));

    if checked {
        grid.uncheck(row_key);
    } else {
        grid.check(row_key);
    }
    Some(row_key)
}

/// Вставляет строку-заготовку первой
pub fn add_row<G: GridInstance>(grid: &G, id: i64) -> Result<(), GridError> {
    let row = serde_json::to_value(NewUserRow::new(id))?;
    grid.append_row(&row, Some(0));
    Ok(())
}

/// Удаляет все отмеченные строки, возвращает их число
pub fn delete_checked_rows<G: GridInstance>(grid: &G) -> usize {
    let keys: Vec<RowKey> = grid.get_checked_rows().iter().filter_map(row_key_of).collect();
    for row_key in &keys {
        grid.remove_row(*row_key);
    }
    keys.len()
}
