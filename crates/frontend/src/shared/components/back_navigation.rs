use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn BackNavigation(
    #[prop(into)] to: Signal<String>,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <a class="back-navigation" href=move || to.get()>
            {icon("arrow-left")}
            <span>{label}</span>
        </a>
    }
}
