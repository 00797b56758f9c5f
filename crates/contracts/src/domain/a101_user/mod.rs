pub mod aggregate;
pub mod sample;

pub use aggregate::{EditableUser, NewUserRow, UserData};
pub use sample::{generate_users, sample_users};
