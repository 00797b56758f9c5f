//! Генерация сотрудников-образцов.
//!
//! Все поля, кроме `score`, детерминированы номером строки; `score`
//! берётся из переданного генератора, поэтому в тестах используется
//! `StdRng` с фиксированным seed.

use rand::Rng;

use super::aggregate::UserData;
use crate::enums::department::Department;

/// Генерирует `count` сотрудников со случайным `score` из `rng`
pub fn generate_users<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<UserData> {
    let departments = Department::all();

    (1..=count)
        .map(|i| UserData {
            id: 1000 + i as i64,
            name: format!("User {}", i),
            department: departments[i % departments.len()],
            grade: (i % 3) as u8 + 1,
            city: format!("City {}", i % 10),
            join_date: join_date_for(i),
            score: rng.gen_range(0..100),
        })
        .collect()
}

/// То же, что `generate_users`, но с `thread_rng`
pub fn sample_users(count: usize) -> Vec<UserData> {
    generate_users(count, &mut rand::thread_rng())
}

// Год склеивается из "202" и i / 10, поэтому при i >= 100 он пятизначный.
fn join_date_for(i: usize) -> String {
    format!("202{}-{:02}-{:02}", i / 10, (i % 12) + 1, (i % 28) + 1)
}
