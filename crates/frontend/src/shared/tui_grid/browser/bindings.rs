use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// JS binding для `tui.Grid`, подключаемого из CDN в index.html
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = tui)]
    #[derive(Clone, Debug)]
    pub type Grid;

    #[wasm_bindgen(constructor, js_namespace = tui, catch)]
    pub fn new(options: &JsValue) -> Result<Grid, JsValue>;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Grid);

    #[wasm_bindgen(method, js_name = resetData)]
    pub fn reset_data(this: &Grid, data: &JsValue);

    #[wasm_bindgen(method)]
    pub fn on(this: &Grid, event_name: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = getRow)]
    pub fn get_row(this: &Grid, row_key: f64) -> JsValue;

    #[wasm_bindgen(method, js_name = appendRow)]
    pub fn append_row(this: &Grid, row: &JsValue, options: &JsValue);

    #[wasm_bindgen(method, js_name = removeRow)]
    pub fn remove_row(this: &Grid, row_key: f64);

    #[wasm_bindgen(method, js_name = getCheckedRows)]
    pub fn get_checked_rows(this: &Grid) -> js_sys::Array;

    #[wasm_bindgen(method, js_name = setValue)]
    pub fn set_value(this: &Grid, row_key: f64, column_name: &str, value: &JsValue);

    #[wasm_bindgen(method, js_name = addRowClassName)]
    pub fn add_row_class_name(this: &Grid, row_key: f64, class_name: &str);

    #[wasm_bindgen(method, js_name = removeRowClassName)]
    pub fn remove_row_class_name(this: &Grid, row_key: f64, class_name: &str);

    #[wasm_bindgen(method)]
    pub fn check(this: &Grid, row_key: f64);

    #[wasm_bindgen(method)]
    pub fn uncheck(this: &Grid, row_key: f64);

    #[wasm_bindgen(method, js_name = getRowCount)]
    pub fn get_row_count(this: &Grid) -> f64;
}

/// Рендерер tui.Grid должен быть классом: грид сам вызывает `new`.
/// Класс делегирует всё объекту, который возвращает фабрика из Rust.
#[wasm_bindgen(inline_js = r#"
export function rendererClass(factory) {
    return class {
        constructor(props) {
            this.cell = factory(props);
        }
        getElement() {
            return this.cell.element();
        }
        render(props) {
            this.cell.render(props);
        }
        beforeDestroy() {
            this.cell.free();
        }
    };
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = rendererClass)]
    pub fn renderer_class(factory: &js_sys::Function) -> JsValue;
}

/// `window.tui.Grid` уже определён
pub fn grid_loaded() -> bool {
    let global = js_sys::global();
    js_sys::Reflect::get(&global, &JsValue::from_str("tui"))
        .ok()
        .filter(|tui| tui.is_object())
        .and_then(|tui| js_sys::Reflect::get(&tui, &JsValue::from_str("Grid")).ok())
        .map(|grid| grid.is_function())
        .unwrap_or(false)
}

/// Текст JS-исключения для лога
pub fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
