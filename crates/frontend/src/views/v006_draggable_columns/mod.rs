pub mod ui;

pub use ui::DraggableColumnsView;
