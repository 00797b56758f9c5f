pub mod ui;

pub use ui::ComplexColumnsView;
