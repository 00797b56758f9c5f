pub mod aggregate;

pub use aggregate::{department_summary, users_of_department, DepartmentData};
