//! Граница между адаптером и внешней библиотекой грида.
//!
//! В браузере это `window.tui.Grid` (см. `browser`), в тестах
//! in-memory подделка из `testing`.

use std::rc::Rc;

use contracts::shared::grid::{ColumnInfo, GridOptions, RowKey};
use serde_json::Value;

use super::error::GridError;
use super::event::GridEvent;

/// Обработчик события, подписанный через `GridInstance::on`
pub type EventHandler = Rc<dyn Fn(GridEvent)>;

/// Загруженная (или ещё загружающаяся) библиотека грида
pub trait GridLibrary: 'static {
    /// Элемент, в который монтируется грид
    type Container: Clone + 'static;
    type Instance: GridInstance;

    /// Библиотека уже доступна в окружении
    fn is_loaded(&self) -> bool;

    /// `new Grid({ el, data, columns, ...options })`
    fn create(
        &self,
        container: &Self::Container,
        rows: &[Value],
        columns: &[ColumnInfo],
        options: &GridOptions,
    ) -> Result<Self::Instance, GridError>;
}

/// Дескриптор экземпляра грида. Клонирование даёт ссылку на тот же экземпляр.
pub trait GridInstance: Clone + 'static {
    fn destroy(&self);
    fn reset_data(&self, rows: &[Value]);
    fn on(&self, event_name: &str, handler: EventHandler);
    fn get_row(&self, row_key: RowKey) -> Option<Value>;
    /// `at = None` добавляет строку в конец
    fn append_row(&self, row: &Value, at: Option<usize>);
    fn remove_row(&self, row_key: RowKey);
    fn get_checked_rows(&self) -> Vec<Value>;
    fn set_value(&self, row_key: RowKey, column_name: &str, value: &Value);
    fn add_row_class_name(&self, row_key: RowKey, class_name: &str);
    fn remove_row_class_name(&self, row_key: RowKey, class_name: &str);
    fn check(&self, row_key: RowKey);
    fn uncheck(&self, row_key: RowKey);
    fn get_row_count(&self) -> usize;
}

/// `rowKey` строки, как его кладёт грид в объекты `getRow`/`getCheckedRows`
pub fn row_key_of(row: &Value) -> Option<RowKey> {
    row.get("rowKey").and_then(Value::as_i64)
}

/// Сериализует записи в строки грида
pub fn rows_from<T: serde::Serialize>(items: &[T]) -> Result<Vec<Value>, GridError> {
    items
        .iter()
        .map(|item| serde_json::to_value(item).map_err(GridError::from))
        .collect()
}
