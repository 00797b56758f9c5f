//! Логика пользовательских рендереров ячеек.
//!
//! Здесь только состояние и обращения к гриду; DOM-элементы создаёт
//! `browser::renderers`, который оборачивает эти типы в JS-классы.

use contracts::shared::grid::RowKey;
use serde_json::Value;

use super::library::GridInstance;

/// Свойства, которые грид передаёт рендереру при создании и перерисовке
#[derive(Debug, Clone, PartialEq)]
pub struct RendererProps {
    pub value: Value,
    pub row_key: RowKey,
    pub column_name: String,
}

/// Истинность значения по правилам JS `Boolean(value)`
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Checkbox для булева поля.
///
/// Переключение пишет новое значение обратно в строку через `setValue`,
/// перерисовка только синхронизирует отметку с данными.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxCell {
    row_key: RowKey,
    column_name: String,
    checked: bool,
}

impl CheckboxCell {
    pub fn new(props: &RendererProps) -> Self {
        Self {
            row_key: props.row_key,
            column_name: props.column_name.clone(),
            checked: truthy(&props.value),
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn row_key(&self) -> RowKey {
        self.row_key
    }

    /// Пользователь переключил checkbox
    pub fn toggle<G: GridInstance>(&mut self, grid: &G, checked: bool) {
        self.checked = checked;
        grid.set_value(self.row_key, &self.column_name, &Value::Bool(checked));
    }

    pub fn render(&mut self, props: &RendererProps) {
        self.row_key = props.row_key;
        self.checked = truthy(&props.value);
    }
}

/// Номер строки в обратном порядке, только для отображения
pub fn descending_row_number(row_count: usize, row_key: RowKey) -> i64 {
    row_count as i64 - row_key
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescendingRowNumCell {
    text: String,
}

impl DescendingRowNumCell {
    pub fn new<G: GridInstance>(props: &RendererProps, grid: &G) -> Self {
        let mut cell = Self::default();
        cell.render(props, grid);
        cell
    }

    // Пересчитывается на каждой перерисовке: число строк могло измениться
    pub fn render<G: GridInstance>(&mut self, props: &RendererProps, grid: &G) {
        self.text = descending_row_number(grid.get_row_count(), props.row_key).to_string();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::tui_grid::library::GridLibrary;
    use crate::shared::tui_grid::testing::{FakeGrid, FakeLibrary};
    use contracts::shared::grid::{ColumnInfo, GridOptions};
    use serde_json::json;

    fn grid_with(rows: Vec<Value>) -> (FakeLibrary, FakeGrid) {
        let library = FakeLibrary::loaded();
        let grid = library
            .create(
                &"root".to_string(),
                &rows,
                &[ColumnInfo::new("Активен", "active")],
                &GridOptions::new(),
            )
            .unwrap();
        (library, grid)
    }

    fn props(row_key: RowKey, value: Value) -> RendererProps {
        RendererProps {
            value,
            row_key,
            column_name: "active".to_string(),
        }
    }

    #[test]
    fn test_truthy_matches_js() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(truthy(&json!("false")));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!({})));
    }

    #[test]
    fn test_checkbox_toggle_writes_one_value() {
        let (library, grid) = grid_with(vec![json!({ "active": true }), json!({ "active": false })]);
        let mut cell = CheckboxCell::new(&props(1, json!(false)));
        assert!(!cell.checked());

        cell.toggle(&grid, true);

        let state = library.state();
        assert_eq!(state.set_value_calls, vec![(1, "active".to_string(), json!(true))]);
        drop(state);
        assert_eq!(grid.get_row(1).unwrap()["active"], json!(true));
        assert!(cell.checked());
    }

    #[test]
    fn test_checkbox_render_follows_data() {
        let (library, _grid) = grid_with(vec![json!({ "active": true })]);
        let mut cell = CheckboxCell::new(&props(0, json!(true)));

        cell.render(&props(0, json!(false)));

        assert!(!cell.checked());
        assert!(library.state().set_value_calls.is_empty());
    }

    #[test]
    fn test_descending_numbers_shift_after_append() {
        let rows: Vec<Value> = (0..5).map(|i| json!({ "id": i })).collect();
        let (_library, grid) = grid_with(rows);

        let mut cells: Vec<DescendingRowNumCell> = (0..5)
            .map(|key| DescendingRowNumCell::new(&props(key, Value::Null), &grid))
            .collect();
        let before: Vec<String> = cells.iter().map(|c| c.text().to_string()).collect();
        assert_eq!(before, vec!["5", "4", "3", "2", "1"]);

        grid.append_row(&json!({ "id": 99 }), Some(0));
        for (key, cell) in cells.iter_mut().enumerate() {
            cell.render(&props(key as RowKey, Value::Null), &grid);
        }

        let after: Vec<i64> = cells.iter().map(|c| c.text().parse().unwrap()).collect();
        let before: Vec<i64> = before.iter().map(|t| t.parse().unwrap()).collect();
        for (old, new) in before.iter().zip(after.iter()) {
            assert_eq!(*new, old + 1);
        }
        // новая строка получила ключ 5 и стоит первой
        let appended = DescendingRowNumCell::new(&props(5, Value::Null), &grid);
        assert_eq!(appended.text(), "1");
    }
}
