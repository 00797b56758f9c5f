use contracts::shared::grid::RowKey;

/// Область грида, по которой пришёлся клик
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    Cell,
    RowHeader,
    ColumnHeader,
    Dummy,
    Etc,
}

impl TargetType {
    /// Неизвестные значения сводятся к `Etc`
    pub fn from_str(s: &str) -> Self {
        match s {
            "cell" => TargetType::Cell,
            "rowHeader" => TargetType::RowHeader,
            "columnHeader" => TargetType::ColumnHeader,
            "dummy" => TargetType::Dummy,
            _ => TargetType::Etc,
        }
    }
}

/// Событие грида в том объёме, который нужен обработчикам витрины
#[derive(Debug, Clone, PartialEq)]
pub struct GridEvent {
    pub row_key: Option<RowKey>,
    pub column_name: Option<String>,
    pub target_type: TargetType,
}

impl GridEvent {
    pub fn cell(row_key: RowKey, column_name: &str) -> Self {
        Self {
            row_key: Some(row_key),
            column_name: Some(column_name.to_string()),
            target_type: TargetType::Cell,
        }
    }

    /// Ключ строки, если клик пришёлся на ячейку с данными
    pub fn cell_row_key(&self) -> Option<RowKey> {
        match self.target_type {
            TargetType::Cell => self.row_key,
            _ => None,
        }
    }
}
