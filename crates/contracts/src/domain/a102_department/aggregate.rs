use serde::{Deserialize, Serialize};

use crate::domain::a101_user::UserData;
use crate::enums::department::Department;

/// Строка мастер-грида: отдел и число сотрудников в нём
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentData {
    pub department: Department,
    pub user_count: usize,
}

/// Сводка по всем отделам в порядке `Department::all()`
pub fn department_summary(users: &[UserData]) -> Vec<DepartmentData> {
    Department::all()
        .into_iter()
        .map(|department| DepartmentData {
            department,
            user_count: users.iter().filter(|u| u.department == department).count(),
        })
        .collect()
}

/// Сотрудники отдела; исходный срез не меняется, возвращается копия
pub fn users_of_department(users: &[UserData], department: Department) -> Vec<UserData> {
    users
        .iter()
        .filter(|u| u.department == department)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a101_user::generate_users;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_department_summary() {
        let users = generate_users(12, &mut StdRng::seed_from_u64(3));
        let summary = department_summary(&users);

        assert_eq!(summary.len(), 5);
        assert_eq!(summary[0].department, Department::Sales);
        // i = 5, 10
        assert_eq!(summary[0].user_count, 2);
        // i = 1, 6, 11
        assert_eq!(summary[1].user_count, 3);
        assert_eq!(summary.iter().map(|d| d.user_count).sum::<usize>(), 12);
    }

    #[test]
    fn test_users_of_department() {
        let users = generate_users(100, &mut StdRng::seed_from_u64(3));
        let sales = users_of_department(&users, Department::Sales);

        assert_eq!(sales.len(), 20);
        assert!(sales.iter().all(|u| u.department == Department::Sales));
        assert_eq!(users.len(), 100);
    }

    #[test]
    fn test_summary_wire_shape() {
        let row = DepartmentData {
            department: Department::Hr,
            user_count: 4,
        };
        assert_eq!(
            serde_json::to_value(row).unwrap(),
            serde_json::json!({ "department": "HR", "userCount": 4 })
        );
    }
}
