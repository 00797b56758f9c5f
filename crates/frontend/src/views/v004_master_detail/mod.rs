pub mod logic;
pub mod ui;

pub use ui::MasterDetailView;
