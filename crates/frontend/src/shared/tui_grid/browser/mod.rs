//! Браузерная реализация границы `GridLibrary` поверх `window.tui.Grid`.

pub mod bindings;
pub mod grid;
pub mod renderers;

pub use grid::{TuiGrid, TuiGridLibrary};
