//! Обёртка над TOAST UI Grid (`window.tui.Grid`).
//!
//! - `adapter`: жизненный цикл одного экземпляра (создание, повторы, обновление строк, уничтожение)
//! - `library`/`timer`: границы, за которыми прячется браузер
//! - `browser`: реализация границ через wasm-bindgen
//! - `renderers`: логика пользовательских рендереров ячеек
//! - `component`: Leptos-компонент `TuiGridView`

pub mod adapter;
pub mod browser;
pub mod component;
pub mod error;
pub mod event;
pub mod library;
pub mod renderers;
pub mod timer;

#[cfg(test)]
pub mod testing;

pub use adapter::{GridAdapter, GridState, MountRequest, DEFAULT_RETRY_INTERVAL_MS};
pub use browser::{TuiGrid, TuiGridLibrary};
pub use component::{GridClick, TuiGridView};
pub use error::GridError;
pub use event::{GridEvent, TargetType};
pub use library::{row_key_of, rows_from, GridInstance, GridLibrary};
pub use timer::{BrowserTimer, RetryTimer};
