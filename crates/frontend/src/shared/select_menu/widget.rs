use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// One entry of a [`SelectMenu`]
#[derive(Debug, Clone, PartialEq)]
pub struct SelectMenuItem<T> {
    pub key: String,
    pub label: String,
    pub selected: bool,
    pub data: T,
}

/// Button showing `title` that opens a list of items; choosing an item
/// calls `on_select` with its data and closes the list.
#[component]
pub fn SelectMenu<T>(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] items: Signal<Vec<SelectMenuItem<T>>>,
    on_select: Callback<T>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let is_open = RwSignal::new(false);

    view! {
        <div class="select-menu" style="position: relative; display: inline-block;">
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=disabled
                on_click=move |_| is_open.update(|open| *open = !*open)
            >
                {move || title.get()}
                " "
                {icon("chevron-down")}
            </Button>

            {move || {
                if !is_open.get() {
                    return view! { <></> }.into_any();
                }
                view! {
                    <div
                        class="select-menu__list"
                        role="listbox"
                        style="position: absolute; top: calc(100% + 4px); left: 0; min-width: 220px; max-height: 260px; overflow-y: auto; background: var(--color-surface); border: 1px solid var(--color-border); border-radius: var(--radius-md); box-shadow: var(--shadow-md); z-index: 1000;"
                    >
                        <For
                            each=move || items.get()
                            key=|item| (item.key.clone(), item.selected)
                            children=move |item| {
                                let data = item.data.clone();
                                let class = if item.selected {
                                    "select-menu__item select-menu__item--selected"
                                } else {
                                    "select-menu__item"
                                };
                                view! {
                                    <div
                                        class=class
                                        role="option"
                                        aria-selected=item.selected.to_string()
                                        style="padding: 8px 12px; cursor: pointer; border-bottom: 1px solid var(--color-border-light); display: flex; gap: 8px; align-items: center;"
                                        on:mousedown=move |_| {
                                            is_open.set(false);
                                            on_select.run(data.clone());
                                        }
                                    >
                                        <span style="width: 16px;">
                                            {item.selected.then(|| icon("check"))}
                                        </span>
                                        {item.label.clone()}
                                    </div>
                                }
                            }
                        />
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
