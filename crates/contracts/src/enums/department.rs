use serde::{Deserialize, Serialize};

/// Отделы, по которым распределяются сотрудники-образцы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Sales,
    Marketing,
    Development,
    #[serde(rename = "HR")]
    Hr,
    Management,
}

impl Department {
    /// Код отдела (он же значение поля `department` в строках грида)
    pub fn code(&self) -> &'static str {
        match self {
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Development => "Development",
            Department::Hr => "HR",
            Department::Management => "Management",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Department::Sales => "Продажи",
            Department::Marketing => "Маркетинг",
            Department::Development => "Разработка",
            Department::Hr => "Кадры",
            Department::Management => "Руководство",
        }
    }

    /// Все отделы в порядке распределения сотрудников
    pub fn all() -> [Department; 5] {
        [
            Department::Sales,
            Department::Marketing,
            Department::Development,
            Department::Hr,
            Department::Management,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|d| d.code() == code)
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_wire_format() {
        for department in Department::all() {
            let json = serde_json::to_value(department).unwrap();
            assert_eq!(json, serde_json::Value::String(department.code().to_string()));
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Department::from_code("HR"), Some(Department::Hr));
        assert_eq!(Department::from_code("Sales"), Some(Department::Sales));
        assert_eq!(Department::from_code("N/A"), None);
    }
}
