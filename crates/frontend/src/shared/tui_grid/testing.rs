//! In-memory подделки библиотеки грида и таймера для нативных тестов.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use contracts::shared::grid::{ColumnInfo, GridOptions, RowKey};
use serde_json::Value;

use super::error::GridError;
use super::event::GridEvent;
use super::library::{EventHandler, GridInstance, GridLibrary};
use super::timer::RetryTimer;

#[derive(Default)]
pub struct FakeGridState {
    pub loaded: bool,
    pub fail_construction: bool,
    pub constructed: usize,
    pub destroyed: usize,
    pub reset_calls: usize,
    pub last_container: Option<String>,
    pub columns: Vec<ColumnInfo>,
    pub options: GridOptions,
    pub set_value_calls: Vec<(RowKey, String, Value)>,
    pub row_classes: HashMap<RowKey, Vec<String>>,
    next_instance_id: u64,
    rows: Vec<Value>,
    next_row_key: RowKey,
    checked: BTreeSet<RowKey>,
    handlers: Vec<(String, EventHandler)>,
}

impl FakeGridState {
    // Как и tui.Grid, resetData заново раздаёт ключи с нуля
    fn load_rows(&mut self, rows: &[Value]) {
        self.rows = rows
            .iter()
            .enumerate()
            .map(|(index, row)| with_row_key(row, index as RowKey))
            .collect();
        self.next_row_key = self.rows.len() as RowKey;
        self.checked.clear();
    }

    fn position(&self, row_key: RowKey) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.get("rowKey").and_then(Value::as_i64) == Some(row_key))
    }
}

fn with_row_key(row: &Value, row_key: RowKey) -> Value {
    let mut row = row.clone();
    if let Some(object) = row.as_object_mut() {
        object.insert("rowKey".to_string(), Value::from(row_key));
    }
    row
}

/// Поддельная библиотека; все экземпляры делят одно состояние
#[derive(Clone, Default)]
pub struct FakeLibrary {
    state: Rc<RefCell<FakeGridState>>,
}

impl FakeLibrary {
    pub fn loaded() -> Self {
        let library = Self::default();
        library.set_loaded(true);
        library
    }

    pub fn not_loaded() -> Self {
        Self::default()
    }

    pub fn set_loaded(&self, loaded: bool) {
        self.state.borrow_mut().loaded = loaded;
    }

    pub fn state(&self) -> Ref<'_, FakeGridState> {
        self.state.borrow()
    }

    pub fn state_mut(&self) -> RefMut<'_, FakeGridState> {
        self.state.borrow_mut()
    }
}

impl GridLibrary for FakeLibrary {
    type Container = String;
    type Instance = FakeGrid;

    fn is_loaded(&self) -> bool {
        self.state.borrow().loaded
    }

    fn create(
        &self,
        container: &String,
        rows: &[Value],
        columns: &[ColumnInfo],
        options: &GridOptions,
    ) -> Result<FakeGrid, GridError> {
        let mut state = self.state.borrow_mut();
        if state.fail_construction {
            return Err(GridError::Construction("columns[0].name is required".to_string()));
        }
        state.constructed += 1;
        state.next_instance_id += 1;
        state.last_container = Some(container.clone());
        state.columns = columns.to_vec();
        state.options = options.clone();
        state.load_rows(rows);

        Ok(FakeGrid {
            id: state.next_instance_id,
            state: self.state.clone(),
        })
    }
}

#[derive(Clone)]
pub struct FakeGrid {
    pub id: u64,
    state: Rc<RefCell<FakeGridState>>,
}

impl FakeGrid {
    /// Эмулирует событие виджета; обработчики вызываются вне заимствования
    pub fn emit(&self, event_name: &str, event: GridEvent) {
        let handlers: Vec<EventHandler> = self
            .state
            .borrow()
            .handlers
            .iter()
            .filter(|(name, _)| name == event_name)
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(event.clone());
        }
    }

    pub fn click_cell(&self, row_key: RowKey, column_name: &str) {
        self.emit("click", GridEvent::cell(row_key, column_name));
    }

    pub fn rows(&self) -> Vec<Value> {
        self.state.borrow().rows.clone()
    }

    pub fn is_checked(&self, row_key: RowKey) -> bool {
        self.state.borrow().checked.contains(&row_key)
    }
}

impl GridInstance for FakeGrid {
    fn destroy(&self) {
        let mut state = self.state.borrow_mut();
        state.destroyed += 1;
        state.handlers.clear();
    }

    fn reset_data(&self, rows: &[Value]) {
        let mut state = self.state.borrow_mut();
        state.reset_calls += 1;
        state.load_rows(rows);
    }

    fn on(&self, event_name: &str, handler: EventHandler) {
        self.state
            .borrow_mut()
            .handlers
            .push((event_name.to_string(), handler));
    }

    fn get_row(&self, row_key: RowKey) -> Option<Value> {
        let state = self.state.borrow();
        state.position(row_key).map(|index| state.rows[index].clone())
    }

    fn append_row(&self, row: &Value, at: Option<usize>) {
        let mut state = self.state.borrow_mut();
        let row_key = state.next_row_key;
        state.next_row_key += 1;
        let row = with_row_key(row, row_key);
        let at = at.unwrap_or(state.rows.len()).min(state.rows.len());
        state.rows.insert(at, row);
    }

    fn remove_row(&self, row_key: RowKey) {
        let mut state = self.state.borrow_mut();
        if let Some(index) = state.position(row_key) {
            state.rows.remove(index);
        }
        state.checked.remove(&row_key);
    }

    fn get_checked_rows(&self) -> Vec<Value> {
        let state = self.state.borrow();
        state
            .rows
            .iter()
            .filter(|row| {
                row.get("rowKey")
                    .and_then(Value::as_i64)
                    .map(|key| state.checked.contains(&key))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    fn set_value(&self, row_key: RowKey, column_name: &str, value: &Value) {
        let mut state = self.state.borrow_mut();
        state
            .set_value_calls
            .push((row_key, column_name.to_string(), value.clone()));
        if let Some(index) = state.position(row_key) {
            if let Some(object) = state.rows[index].as_object_mut() {
                object.insert(column_name.to_string(), value.clone());
            }
        }
    }

    fn add_row_class_name(&self, row_key: RowKey, class_name: &str) {
        self.state
            .borrow_mut()
            .row_classes
            .entry(row_key)
            .or_default()
            .push(class_name.to_string());
    }

    fn remove_row_class_name(&self, row_key: RowKey, class_name: &str) {
        if let Some(classes) = self.state.borrow_mut().row_classes.get_mut(&row_key) {
            classes.retain(|c| c != class_name);
        }
    }

    fn check(&self, row_key: RowKey) {
        let mut state = self.state.borrow_mut();
        if state.position(row_key).is_some() {
            state.checked.insert(row_key);
        }
    }

    fn uncheck(&self, row_key: RowKey) {
        self.state.borrow_mut().checked.remove(&row_key);
    }

    fn get_row_count(&self) -> usize {
        self.state.borrow().rows.len()
    }
}

#[derive(Default)]
struct ManualQueue {
    next_id: u64,
    scheduled: usize,
    cancelled: usize,
    last_delay_ms: Option<u32>,
    pending: Vec<(u64, Box<dyn FnOnce()>)>,
}

/// Таймер, который срабатывает только по `fire_all`
#[derive(Clone, Default)]
pub struct ManualTimer {
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualTimer {
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    pub fn scheduled(&self) -> usize {
        self.queue.borrow().scheduled
    }

    pub fn cancelled(&self) -> usize {
        self.queue.borrow().cancelled
    }

    pub fn last_delay_ms(&self) -> Option<u32> {
        self.queue.borrow().last_delay_ms
    }

    /// Запускает все ожидающие колбэки; вновь запланированные ждут следующего вызова
    pub fn fire_all(&self) -> usize {
        let due = std::mem::take(&mut self.queue.borrow_mut().pending);
        let fired = due.len();
        for (_, callback) in due {
            callback();
        }
        fired
    }
}

impl RetryTimer for ManualTimer {
    type Handle = u64;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> u64 {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        queue.scheduled += 1;
        queue.last_delay_ms = Some(delay_ms);
        let id = queue.next_id;
        queue.pending.push((id, callback));
        id
    }

    fn cancel(&self, handle: u64) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.pending.len();
        queue.pending.retain(|(id, _)| *id != handle);
        if queue.pending.len() < before {
            queue.cancelled += 1;
        }
    }
}
