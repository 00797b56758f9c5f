//! Демонстрационные виды, по одному на пункт меню

pub mod common;
pub mod v001_basic_grid;
pub mod v002_complex_columns;
pub mod v003_editable_grid;
pub mod v004_master_detail;
pub mod v005_row_management;
pub mod v006_draggable_columns;
