//! DOM-часть пользовательских рендереров.
//!
//! Каждый вид рендерера превращается в JS-класс один раз за время жизни
//! страницы; экземпляры класса держат `RendererCell` и освобождают его в
//! `beforeDestroy`.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::grid::{RendererKind, RowKey};
use js_sys::Reflect;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

use super::bindings;
use super::grid::TuiGrid;
use crate::shared::tui_grid::renderers::{CheckboxCell, DescendingRowNumCell, RendererProps};

thread_local! {
    static CHECKBOX_CLASS: JsValue = build_renderer_class(RendererKind::Checkbox);
    static ROW_NUMBER_CLASS: JsValue = build_renderer_class(RendererKind::DescendingRowNumber);
}

/// JS-класс рендерера для `columns[i].renderer.type`
pub fn renderer_class_for(kind: RendererKind) -> JsValue {
    match kind {
        RendererKind::Checkbox => CHECKBOX_CLASS.with(|class| class.clone()),
        RendererKind::DescendingRowNumber => ROW_NUMBER_CLASS.with(|class| class.clone()),
    }
}

fn build_renderer_class(kind: RendererKind) -> JsValue {
    let factory = Closure::wrap(Box::new(move |props: JsValue| -> Result<JsValue, JsValue> {
        RendererCell::create(kind, &props).map(JsValue::from)
    }) as Box<dyn FnMut(JsValue) -> Result<JsValue, JsValue>>);

    let class = bindings::renderer_class(factory.as_ref().unchecked_ref());
    // Класс нужен до закрытия страницы
    factory.forget();
    class
}

enum CellKind {
    Checkbox {
        element: HtmlInputElement,
        cell: Rc<RefCell<CheckboxCell>>,
        _on_change: Closure<dyn FnMut(web_sys::Event)>,
    },
    DescendingRowNumber {
        element: HtmlElement,
        cell: DescendingRowNumCell,
    },
}

/// Состояние одной ячейки, которым владеет JS-экземпляр рендерера
#[wasm_bindgen]
pub struct RendererCell {
    kind: CellKind,
}

#[wasm_bindgen]
impl RendererCell {
    pub fn element(&self) -> HtmlElement {
        match &self.kind {
            CellKind::Checkbox { element, .. } => element.clone().into(),
            CellKind::DescendingRowNumber { element, .. } => element.clone(),
        }
    }

    pub fn render(&mut self, props: JsValue) {
        let (props, grid) = parse_props(&props);
        match &mut self.kind {
            CellKind::Checkbox { element, cell, .. } => {
                let checked = {
                    let mut cell = cell.borrow_mut();
                    cell.render(&props);
                    cell.checked()
                };
                element.set_checked(checked);
            }
            CellKind::DescendingRowNumber { element, cell } => {
                cell.render(&props, &grid);
                element.set_inner_text(cell.text());
            }
        }
    }
}

impl RendererCell {
    fn create(kind: RendererKind, props: &JsValue) -> Result<RendererCell, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document is not available"))?;
        let (props, grid) = parse_props(props);

        let kind = match kind {
            RendererKind::Checkbox => {
                let element: HtmlInputElement = document.create_element("input")?.dyn_into()?;
                element.set_type("checkbox");
                element.set_class_name("tui-grid-cell-checkbox");

                let cell = Rc::new(RefCell::new(CheckboxCell::new(&props)));
                element.set_checked(cell.borrow().checked());

                let on_change = {
                    let cell = cell.clone();
                    let input = element.clone();
                    Closure::wrap(Box::new(move |_event: web_sys::Event| {
                        // setValue может синхронно вызвать render этой же ячейки
                        let mut toggled = cell.borrow().clone();
                        toggled.toggle(&grid, input.checked());
                        *cell.borrow_mut() = toggled;
                    }) as Box<dyn FnMut(web_sys::Event)>)
                };
                element.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;

                CellKind::Checkbox {
                    element,
                    cell,
                    _on_change: on_change,
                }
            }
            RendererKind::DescendingRowNumber => {
                let element: HtmlElement = document.create_element("div")?.dyn_into()?;
                let cell = DescendingRowNumCell::new(&props, &grid);
                element.set_inner_text(cell.text());
                CellKind::DescendingRowNumber { element, cell }
            }
        };

        Ok(RendererCell { kind })
    }
}

fn parse_props(props: &JsValue) -> (RendererProps, TuiGrid) {
    let field = |target: &JsValue, name: &str| {
        Reflect::get(target, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
    };

    let value = serde_wasm_bindgen::from_value::<Value>(field(props, "value")).unwrap_or(Value::Null);
    let row_key = field(props, "rowKey").as_f64().unwrap_or_default() as RowKey;
    let column_name = field(&field(props, "columnInfo"), "name")
        .as_string()
        .unwrap_or_default();
    let grid = TuiGrid::from_raw(field(props, "grid").unchecked_into());

    (
        RendererProps {
            value,
            row_key,
            column_name,
        },
        grid,
    )
}
