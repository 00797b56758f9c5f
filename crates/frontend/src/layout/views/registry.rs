//! View registry - единственный источник правды для маппинга ViewId → View

use super::ViewId;
use crate::views::v001_basic_grid::BasicGridView;
use crate::views::v002_complex_columns::ComplexColumnsView;
use crate::views::v003_editable_grid::EditableGridView;
use crate::views::v004_master_detail::MasterDetailView;
use crate::views::v005_row_management::RowManagementView;
use crate::views::v006_draggable_columns::DraggableColumnsView;
use leptos::logging::log;
use leptos::prelude::*;

pub fn render_view(view: ViewId) -> AnyView {
    log!("render_view: '{}'", view.key());
    match view {
        ViewId::Basic => view! { <BasicGridView /> }.into_any(),
        ViewId::Complex => view! { <ComplexColumnsView /> }.into_any(),
        ViewId::Editable => view! { <EditableGridView /> }.into_any(),
        ViewId::MasterDetail => view! { <MasterDetailView /> }.into_any(),
        ViewId::CheckboxAndRow => view! { <RowManagementView /> }.into_any(),
        ViewId::Draggable => view! { <DraggableColumnsView /> }.into_any(),
    }
}
