pub mod a101_user;
pub mod a102_department;
