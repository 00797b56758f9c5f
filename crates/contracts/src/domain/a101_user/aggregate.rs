use serde::{Deserialize, Serialize};

use crate::enums::department::Department;

// ============================================================================
// Records
// ============================================================================

/// Сотрудник-образец, строка большинства демонстрационных гридов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub department: Department,
    pub grade: u8,
    pub city: String,
    pub join_date: String,
    pub score: u32,
}

/// Сотрудник с флагом активности для грида редактирования.
///
/// Поле `active` рисуется checkbox-рендерером и меняется через `setValue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableUser {
    #[serde(flatten)]
    pub user: UserData,
    pub active: bool,
}

impl EditableUser {
    /// Чётные по порядку строки активны, нечётные нет
    pub fn from_users(users: Vec<UserData>) -> Vec<EditableUser> {
        users
            .into_iter()
            .enumerate()
            .map(|(index, user)| EditableUser {
                user,
                active: index % 2 == 0,
            })
            .collect()
    }
}

/// Строка, добавляемая кнопкой "Добавить строку"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserRow {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub score: u32,
}

impl NewUserRow {
    /// `id` берётся из текущего времени в миллисекундах
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: "New User".to_string(),
            department: "N/A".to_string(),
            score: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: i64) -> UserData {
        UserData {
            id,
            name: format!("User {}", id - 1000),
            department: Department::Hr,
            grade: 2,
            city: "City 3".to_string(),
            join_date: "2020-04-05".to_string(),
            score: 77,
        }
    }

    #[test]
    fn test_user_wire_shape() {
        let value = serde_json::to_value(user(1003)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1003,
                "name": "User 3",
                "department": "HR",
                "grade": 2,
                "city": "City 3",
                "joinDate": "2020-04-05",
                "score": 77
            })
        );
    }

    #[test]
    fn test_editable_user_is_flat() {
        let rows = EditableUser::from_users(vec![user(1001), user(1002), user(1003)]);
        let flags: Vec<bool> = rows.iter().map(|r| r.active).collect();
        assert_eq!(flags, vec![true, false, true]);

        let value = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(value["active"], json!(true));
        assert_eq!(value["joinDate"], json!("2020-04-05"));
        assert!(value.get("user").is_none());
    }

    #[test]
    fn test_new_user_row_defaults() {
        let row = NewUserRow::new(1_700_000_000_000);
        assert_eq!(row.name, "New User");
        assert_eq!(row.department, "N/A");
        assert_eq!(row.score, 0);
    }
}
