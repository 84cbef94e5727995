use crate::shared::icons::icon;
use leptos::prelude::*;

/// How long a notification stays on screen
const AUTO_HIDE_MS: u32 = 6000;

/// Transient, dismissible error banner.
///
/// Reopens whenever `open` turns true again with a new message.
#[component]
pub fn Notification(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] message: Signal<String>,
) -> impl IntoView {
    let dismissed = RwSignal::new(false);
    // Incremented on every show so a stale timer does not hide a newer message
    let generation = StoredValue::new(0u32);

    Effect::new(move |_| {
        // Track the message too: a second failure with a new text shows again
        let _ = message.get();
        if open.get() {
            dismissed.set(false);
            generation.update_value(|g| *g += 1);
            let current = generation.get_value();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(AUTO_HIDE_MS).await;
                if generation.get_value() == current {
                    dismissed.set(true);
                }
            });
        }
    });

    let visible = move || open.get() && !dismissed.get();

    view! {
        <Show when=visible>
            <div
                class="notification"
                role="alert"
                style="position: fixed; bottom: 24px; left: 50%; transform: translateX(-50%); display: flex; gap: 12px; align-items: center; padding: 12px 16px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px; z-index: 2000;"
            >
                <span style="color: var(--color-error);">{move || message.get()}</span>
                <button
                    class="button button--icon notification__close"
                    title="Dismiss"
                    on:click=move |_| dismissed.set(true)
                >
                    {icon("x")}
                </button>
            </div>
        </Show>
    }
}
