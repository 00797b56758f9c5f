use serde::Serialize;
use serde_json::{json, Map, Value};

/// Служебные колонки слева от данных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RowHeader {
    RowNum,
    Checkbox,
}

/// Группа колонок в составном заголовке
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexColumn {
    pub header: String,
    pub name: String,
    pub child_names: Vec<String>,
}

impl ComplexColumn {
    pub fn new(header: &str, name: &str, child_names: &[&str]) -> Self {
        Self {
            header: header.to_string(),
            name: name.to_string(),
            child_names: child_names.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Опция `header` конструктора грида
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderOptions {
    pub height: u32,
    pub complex_columns: Vec<ComplexColumn>,
}

/// Свободная карта опций, передаваемая конструктору вместе с `el`, `data` и `columns`.
///
/// Для опций, которые используют демонстрационные гриды, есть типизированные
/// методы; всё прочее задаётся через `set`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GridOptions(Map<String, Value>);

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    pub fn body_height(self, height: u32) -> Self {
        self.set("bodyHeight", json!(height))
    }

    pub fn selection_unit_row(self) -> Self {
        self.set("selectionUnit", json!("row"))
    }

    pub fn row_headers(self, headers: &[RowHeader]) -> Self {
        let headers: Vec<Value> = headers
            .iter()
            .map(|h| match h {
                RowHeader::RowNum => json!("rowNum"),
                RowHeader::Checkbox => json!("checkbox"),
            })
            .collect();
        self.set("rowHeaders", Value::Array(headers))
    }

    pub fn theme(self, theme: Value) -> Self {
        self.set("theme", theme)
    }

    pub fn header(self, header: HeaderOptions) -> Self {
        let complex_columns: Vec<Value> = header
            .complex_columns
            .iter()
            .map(|c| {
                json!({
                    "header": c.header,
                    "name": c.name,
                    "childNames": c.child_names,
                })
            })
            .collect();
        self.set(
            "header",
            json!({ "height": header.height, "complexColumns": complex_columns }),
        )
    }

    pub fn draggable_columns(self) -> Self {
        self.set("columnOptions", json!({ "draggable": true }))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
