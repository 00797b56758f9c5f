pub mod ui;

pub use ui::{basic_columns, BasicGridView};
