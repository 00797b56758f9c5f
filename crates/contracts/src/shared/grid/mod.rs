//! Конфигурация TUI Grid: описания колонок и свободная карта опций.
//!
//! Типы сериализуются ровно в ту форму, которую ожидает конструктор
//! `tui.Grid`. Рендереры и контейнер календаря не сериализуются: их
//! подставляет браузерный слой.

pub mod column;
pub mod options;

pub use column::{
    Align, ColumnInfo, DataType, Editor, EditorKind, EditorOptions, ListItem, RendererKind,
    Validation,
};
pub use options::{ComplexColumn, GridOptions, HeaderOptions, RowHeader};

/// Ключ строки внутри грида (`rowKey`)
pub type RowKey = i64;
