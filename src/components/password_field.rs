//! Password input with a visibility toggle.
//!
//! The Show/Hide control flips the input `type` between `password` and
//! `text`. An optional `invalid` signal toggles the wrapper's modifier
//! class for live validation feedback.

#[cfg(test)]
#[path = "password_field_test.rs"]
mod password_field_test;

use leptos::prelude::*;

fn field_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

fn toggle_label(visible: bool) -> &'static str {
    if visible { "Hide" } else { "Show" }
}

/// A password field bound to `value`.
#[component]
pub fn PasswordField(
    value: RwSignal<String>,
    #[prop(into)] placeholder: String,
    #[prop(optional)] invalid: Option<Signal<bool>>,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let is_invalid = move || invalid.map_or(false, |invalid| invalid.get());

    view! {
        <div class="form-field" class:form-field--invalid=is_invalid>
            <input
                class="form-input"
                type=move || field_type(visible.get())
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                class="form-field__toggle"
                type="button"
                on:click=move |_| visible.set(!visible.get())
            >
                {move || toggle_label(visible.get())}
            </button>
        </div>
    }
}
