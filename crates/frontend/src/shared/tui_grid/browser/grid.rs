use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::grid::{ColumnInfo, GridOptions, RowKey};
use js_sys::Reflect;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::bindings::{self, js_error_message};
use super::renderers::renderer_class_for;
use crate::shared::tui_grid::error::GridError;
use crate::shared::tui_grid::event::{GridEvent, TargetType};
use crate::shared::tui_grid::library::{EventHandler, GridInstance, GridLibrary};

/// `window.tui.Grid`
#[derive(Clone, Copy, Debug, Default)]
pub struct TuiGridLibrary;

impl GridLibrary for TuiGridLibrary {
    type Container = web_sys::HtmlElement;
    type Instance = TuiGrid;

    fn is_loaded(&self) -> bool {
        bindings::grid_loaded()
    }

    fn create(
        &self,
        container: &web_sys::HtmlElement,
        rows: &[Value],
        columns: &[ColumnInfo],
        options: &GridOptions,
    ) -> Result<TuiGrid, GridError> {
        // Вид успели закрыть, пока ждали загрузки библиотеки
        if !container.is_connected() {
            return Err(GridError::ContainerMissing);
        }
        let config = constructor_options(container, rows, columns, options)?;
        let grid = bindings::Grid::new(&config)
            .map_err(|err| GridError::Construction(js_error_message(&err)))?;
        Ok(TuiGrid::from_raw(grid))
    }
}

/// Экземпляр `tui.Grid` вместе с замыканиями его подписчиков
#[derive(Clone)]
pub struct TuiGrid {
    grid: bindings::Grid,
    listeners: Rc<RefCell<Vec<Closure<dyn FnMut(JsValue)>>>>,
}

impl TuiGrid {
    pub fn from_raw(grid: bindings::Grid) -> Self {
        Self {
            grid,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl GridInstance for TuiGrid {
    fn destroy(&self) {
        self.grid.destroy();
        self.listeners.borrow_mut().clear();
    }

    fn reset_data(&self, rows: &[Value]) {
        match to_js(rows) {
            Ok(data) => self.grid.reset_data(&data),
            Err(err) => log::error!("tui_grid: resetData skipped: {}", err),
        }
    }

    fn on(&self, event_name: &str, handler: EventHandler) {
        let closure = Closure::wrap(Box::new(move |event: JsValue| {
            handler(parse_event(&event));
        }) as Box<dyn FnMut(JsValue)>);
        self.grid.on(event_name, closure.as_ref().unchecked_ref());
        self.listeners.borrow_mut().push(closure);
    }

    fn get_row(&self, row_key: RowKey) -> Option<Value> {
        let row = self.grid.get_row(row_key as f64);
        if row.is_null() || row.is_undefined() {
            return None;
        }
        serde_wasm_bindgen::from_value(row).ok()
    }

    fn append_row(&self, row: &Value, at: Option<usize>) {
        let row = match to_js(row) {
            Ok(row) => row,
            Err(err) => {
                log::error!("tui_grid: appendRow skipped: {}", err);
                return;
            }
        };
        let options = js_sys::Object::new();
        if let Some(at) = at {
            let _ = Reflect::set(&options, &JsValue::from_str("at"), &JsValue::from_f64(at as f64));
        }
        self.grid.append_row(&row, &options);
    }

    fn remove_row(&self, row_key: RowKey) {
        self.grid.remove_row(row_key as f64);
    }

    fn get_checked_rows(&self) -> Vec<Value> {
        self.grid
            .get_checked_rows()
            .iter()
            .filter_map(|row| serde_wasm_bindgen::from_value(row).ok())
            .collect()
    }

    fn set_value(&self, row_key: RowKey, column_name: &str, value: &Value) {
        match to_js(value) {
            Ok(value) => self.grid.set_value(row_key as f64, column_name, &value),
            Err(err) => log::error!("tui_grid: setValue skipped: {}", err),
        }
    }

    fn add_row_class_name(&self, row_key: RowKey, class_name: &str) {
        self.grid.add_row_class_name(row_key as f64, class_name);
    }

    fn remove_row_class_name(&self, row_key: RowKey, class_name: &str) {
        self.grid.remove_row_class_name(row_key as f64, class_name);
    }

    fn check(&self, row_key: RowKey) {
        self.grid.check(row_key as f64);
    }

    fn uncheck(&self, row_key: RowKey) {
        self.grid.uncheck(row_key as f64);
    }

    fn get_row_count(&self) -> usize {
        self.grid.get_row_count() as usize
    }
}

/// Достаёт из события грида поля, нужные обработчикам
pub fn parse_event(event: &JsValue) -> GridEvent {
    let field = |name: &str| Reflect::get(event, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED);

    GridEvent {
        row_key: field("rowKey").as_f64().map(|key| key as RowKey),
        column_name: field("columnName").as_string(),
        target_type: field("targetType")
            .as_string()
            .map(|t| TargetType::from_str(&t))
            .unwrap_or(TargetType::Etc),
    }
}

// Карты должны стать обычными объектами, а не JS Map
pub(super) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, GridError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| GridError::Serialization(err.to_string()))
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), GridError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|err| GridError::Serialization(js_error_message(&err)))
}

/// `{ ...options, el, data, columns }`
fn constructor_options(
    container: &web_sys::HtmlElement,
    rows: &[Value],
    columns: &[ColumnInfo],
    options: &GridOptions,
) -> Result<JsValue, GridError> {
    let config = to_js(options)?;
    set(&config, "el", container)?;
    set(&config, "data", &to_js(rows)?)?;
    set(&config, "columns", &column_list(columns)?)?;
    Ok(config)
}

fn column_list(columns: &[ColumnInfo]) -> Result<JsValue, GridError> {
    let list = js_sys::Array::new();

    for column in columns {
        let js_column = to_js(column)?;

        if let Some(kind) = column.renderer {
            let renderer = js_sys::Object::new();
            set(&renderer, "type", &renderer_class_for(kind))?;
            set(&js_column, "renderer", &renderer)?;
        }

        let attach_to_body = column.editor.as_ref().map(|e| e.attach_to_body()).unwrap_or(false);
        if attach_to_body {
            attach_editor_to_body(&js_column)?;
        }

        list.push(&js_column);
    }

    Ok(list.into())
}

// Календарь datePicker иначе обрезается рамкой грида
fn attach_editor_to_body(js_column: &JsValue) -> Result<(), GridError> {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return Ok(());
    };

    let editor = Reflect::get(js_column, &JsValue::from_str("editor")).unwrap_or(JsValue::UNDEFINED);
    if !editor.is_object() {
        return Ok(());
    }

    let mut editor_options = Reflect::get(&editor, &JsValue::from_str("options")).unwrap_or(JsValue::UNDEFINED);
    if !editor_options.is_object() {
        editor_options = js_sys::Object::new().into();
        set(&editor, "options", &editor_options)?;
    }
    set(&editor_options, "container", &body)
}
