use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::views::ViewId;
use crate::shared::config::{load_config, ShowcaseConfig};
use crate::shared::sample_data::SampleDataset;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|err| {
        log::error!("Failed to load config, using defaults: {}", err);
        ShowcaseConfig::default()
    });

    let default_view = ViewId::resolve(Some(config.navigation.default_view.as_str()), ViewId::default());

    // Набор образцов строится один раз и дальше только читается
    provide_context(SampleDataset::generate(config.samples.dataset));
    provide_context(AppGlobalContext::new(default_view));
    provide_context(config);

    view! {
        <MainLayout />
    }
}
