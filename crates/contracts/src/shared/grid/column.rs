use serde::Serialize;

/// Выравнивание содержимого колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Встроенные редакторы ячеек TUI Grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorKind {
    Text,
    Select,
    DatePicker,
}

/// Элемент списка для редактора `select`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub text: String,
    pub value: String,
}

impl ListItem {
    pub fn same(value: &str) -> Self {
        Self {
            text: value.to_string(),
            value: value.to_string(),
        }
    }
}

/// Опции настроенного редактора
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list_items: Vec<ListItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Календарь datePicker рендерится прямо в `document.body`
    #[serde(skip)]
    pub attach_to_body: bool,
}

impl EditorOptions {
    fn is_empty(&self) -> bool {
        self.list_items.is_empty() && self.format.is_none() && !self.attach_to_body
    }
}

/// Редактор колонки.
///
/// `Simple` сериализуется строкой (`"text"`), `Configured` объектом
/// `{ "type": ..., "options": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Editor {
    Simple(EditorKind),
    Configured {
        #[serde(rename = "type")]
        kind: EditorKind,
        #[serde(skip_serializing_if = "EditorOptions::is_empty")]
        options: EditorOptions,
    },
}

impl Editor {
    pub fn text() -> Self {
        Editor::Simple(EditorKind::Text)
    }

    pub fn select<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Editor::Configured {
            kind: EditorKind::Select,
            options: EditorOptions {
                list_items: values.into_iter().map(|v| ListItem::same(v.as_ref())).collect(),
                ..EditorOptions::default()
            },
        }
    }

    pub fn date_picker(format: &str) -> Self {
        Editor::Configured {
            kind: EditorKind::DatePicker,
            options: EditorOptions {
                format: Some(format.to_string()),
                attach_to_body: true,
                ..EditorOptions::default()
            },
        }
    }

    pub fn kind(&self) -> EditorKind {
        match self {
            Editor::Simple(kind) => *kind,
            Editor::Configured { kind, .. } => *kind,
        }
    }

    pub fn attach_to_body(&self) -> bool {
        matches!(self, Editor::Configured { options, .. } if options.attach_to_body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
}

/// Правила валидации ячейки, проверяемые самим гридом
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Пользовательские рендереры ячеек
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    /// Булево поле в виде checkbox, изменения пишутся через `setValue`
    Checkbox,
    /// Номер строки в обратном порядке: `getRowCount() - rowKey`
    DescendingRowNumber,
}

/// Описание колонки грида. После создания экземпляра грида не меняется.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub header: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sortable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<Editor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
    #[serde(skip)]
    pub renderer: Option<RendererKind>,
}

impl ColumnInfo {
    pub fn new(header: &str, name: &str) -> Self {
        Self {
            header: header.to_string(),
            name: name.to_string(),
            width: None,
            align: None,
            sortable: false,
            editor: None,
            validation: None,
            renderer: None,
        }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn editor(mut self, editor: Editor) -> Self {
        self.editor = Some(editor);
        self
    }

    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn renderer(mut self, renderer: RendererKind) -> Self {
        self.renderer = Some(renderer);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_column_omits_defaults() {
        let column = ColumnInfo::new("Имя", "name");
        assert_eq!(
            serde_json::to_value(&column).unwrap(),
            json!({ "header": "Имя", "name": "name" })
        );
    }

    #[test]
    fn test_simple_editor_is_string_tag() {
        let column = ColumnInfo::new("Имя", "name").editor(Editor::text()).sortable();
        assert_eq!(
            serde_json::to_value(&column).unwrap(),
            json!({ "header": "Имя", "name": "name", "sortable": true, "editor": "text" })
        );
    }

    #[test]
    fn test_configured_editors() {
        let select = Editor::select(["Sales", "HR"]);
        assert_eq!(
            serde_json::to_value(&select).unwrap(),
            json!({
                "type": "select",
                "options": { "listItems": [
                    { "text": "Sales", "value": "Sales" },
                    { "text": "HR", "value": "HR" }
                ] }
            })
        );

        let picker = Editor::date_picker("yyyy-MM-dd");
        assert!(picker.attach_to_body());
        assert_eq!(picker.kind(), EditorKind::DatePicker);
        assert_eq!(
            serde_json::to_value(&picker).unwrap(),
            json!({ "type": "datePicker", "options": { "format": "yyyy-MM-dd" } })
        );
    }

    #[test]
    fn test_validation_and_renderer() {
        let column = ColumnInfo::new("Балл", "score")
            .align(Align::Right)
            .validation(Validation {
                data_type: Some(DataType::Number),
                required: Some(true),
                min: Some(0.0),
                max: Some(100.0),
            })
            .renderer(RendererKind::Checkbox);

        let value = serde_json::to_value(&column).unwrap();
        assert_eq!(value["align"], json!("right"));
        assert_eq!(value["validation"]["dataType"], json!("number"));
        assert_eq!(value["validation"]["required"], json!(true));
        assert_eq!(value["validation"]["max"], json!(100.0));
        assert!(value.get("renderer").is_none());
        assert_eq!(column.renderer, Some(RendererKind::Checkbox));
    }
}
