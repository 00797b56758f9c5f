//! Демонстрационные виды витрины
//!
//! Содержит:
//! - `view_id` - перечень видов и их заголовки (единственный источник правды)
//! - `registry` - маппинг ViewId → View

pub mod registry;
pub mod view_id;

pub use registry::render_view;
pub use view_id::ViewId;
