//! Общий набор сотрудников-образцов.
//!
//! Строится один раз при старте и раздаётся через context только на чтение;
//! виды берут из него отфильтрованные копии.

use std::sync::Arc;

use contracts::domain::a101_user::{sample_users, UserData};
use contracts::domain::a102_department::{department_summary, DepartmentData};
use leptos::prelude::*;

#[derive(Debug, Clone)]
pub struct SampleDataset {
    pub users: Arc<Vec<UserData>>,
    pub departments: Arc<Vec<DepartmentData>>,
}

impl SampleDataset {
    pub fn new(users: Vec<UserData>) -> Self {
        let departments = department_summary(&users);
        Self {
            users: Arc::new(users),
            departments: Arc::new(departments),
        }
    }

    pub fn generate(count: usize) -> Self {
        Self::new(sample_users(count))
    }
}

pub fn use_sample_dataset() -> SampleDataset {
    use_context::<SampleDataset>().expect("SampleDataset context not found")
}
