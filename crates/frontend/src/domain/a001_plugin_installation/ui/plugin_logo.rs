use crate::shared::icons::icon;
use leptos::prelude::*;

/// Catalog icon of a plugin, or a neutral placeholder when it has none
#[component]
pub fn PluginLogo(name: String, icon_url: Option<String>) -> impl IntoView {
    match icon_url.filter(|url| !url.trim().is_empty()) {
        Some(url) => view! {
            <img class="plugin-logo" src=url alt=name width="40" height="40" />
        }
        .into_any(),
        None => view! {
            <span class="plugin-logo plugin-logo--placeholder" title=name>
                {icon("plug")}
            </span>
        }
        .into_any(),
    }
}
