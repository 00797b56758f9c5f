//! Application Shell - корневой layout приложения (Sidebar + активный вид)

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::views::render_view;
use crate::layout::Shell;
use leptos::prelude::*;

/// Main application layout.
///
/// Инициализирует router integration для синхронизации вида с URL (?view=...).
#[component]
pub fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                // Смена вида размонтирует предыдущий, а с ним и его гриды
                view! { {move || render_view(ctx.active_view.get())} }.into_any()
            }
        />
    }
}
