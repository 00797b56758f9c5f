pub mod config;
pub mod icons;
pub mod sample_data;
pub mod tui_grid;
