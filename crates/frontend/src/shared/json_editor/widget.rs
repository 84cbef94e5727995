use leptos::prelude::*;

/// Descriptor passed to `on_change` together with the new text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorChange {
    /// Increases by one on every user edit; resets do not count
    pub version_id: u32,
    pub new_len: usize,
}

/// Imperative handle owned by the parent form.
///
/// The displayed text lives here so the parent can `reset()` the editor
/// without remounting it.
#[derive(Clone, Copy)]
pub struct JsonEditorHandle {
    text: RwSignal<String>,
    default_value: StoredValue<String>,
    reset_token: RwSignal<Option<String>>,
    version_id: StoredValue<u32>,
}

impl JsonEditorHandle {
    pub fn new() -> Self {
        Self {
            text: RwSignal::new(String::new()),
            default_value: StoredValue::new(String::new()),
            reset_token: RwSignal::new(None),
            version_id: StoredValue::new(0),
        }
    }

    /// Replace the default content and show it
    pub fn set_default(&self, value: String) {
        self.default_value.set_value(value.clone());
        self.text.set(value);
    }

    /// Show `value` without changing the default (used for version defaults)
    pub fn show(&self, value: String) {
        self.text.set(value);
    }

    /// Restore the default content; `token` identifies this reset
    pub fn reset(&self, token: String) {
        self.reset_token.set(Some(token));
        self.text.set(self.default_value.get_value());
    }

    fn record_edit(&self, value: String) -> EditorChange {
        let new_len = value.len();
        self.version_id.update_value(|v| *v += 1);
        self.text.set(value);
        EditorChange {
            version_id: self.version_id.get_value(),
            new_len,
        }
    }
}

impl Default for JsonEditorHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn JsonEditor(
    handle: JsonEditorHandle,
    /// Called with the new text on every user edit
    on_change: Callback<(String, EditorChange)>,
    #[prop(optional, into)] readonly: Signal<bool>,
) -> impl IntoView {
    let handle_input = move |ev| {
        let value = event_target_value(&ev);
        let change = handle.record_edit(value.clone());
        on_change.run((value, change));
    };

    view! {
        <div class="json-editor" data-reset-key=move || handle.reset_token.get().unwrap_or_default()>
            <div class="json-editor__body">
                <textarea
                    class="json-editor__content"
                    spellcheck="false"
                    rows="18"
                    readonly=move || readonly.get()
                    prop:value=move || handle.text.get()
                    on:input=handle_input
                />
            </div>
            <div class="json-editor__footer">
                {"Size: "}
                <strong>{move || format!("{} chars", handle.text.with(|t| t.len()))}</strong>
                {" | "}
                {"Lines: "}
                <strong>{move || handle.text.with(|t| t.lines().count())}</strong>
            </div>
        </div>
    }
}
