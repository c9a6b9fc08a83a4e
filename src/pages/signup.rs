//! Signup page: account creation against `POST /signup`.
//!
//! Success stays on the form and displays the server's message verbatim;
//! signup never mutates auth state or navigates. The confirm-password field
//! gets a live invalid-class toggle while the values disagree.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::password_field::PasswordField;
use crate::state::submit::SubmitState;
use crate::util::validation::{passwords_match, validate_signup_input};

#[cfg(any(test, feature = "csr"))]
fn signup_failed_message(err: &crate::net::error::ApiError) -> String {
    format!("Signup failed: {err}")
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let party_id = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let submit = RwSignal::new(SubmitState::Idle);

    let confirm_invalid = Signal::derive(move || {
        let confirm_value = confirm.get();
        !confirm_value.is_empty() && !passwords_match(&password.get(), &confirm_value)
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submitting) = submit.get().begin() else {
            return;
        };
        let request = match validate_signup_input(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
            &party_id.get(),
        ) {
            Ok(request) => request,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        submit.set(submitting);
        message.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::signup(&request).await;
            submit.update(|state| *state = state.finish());
            match result {
                Ok(server_message) => message.set(server_message),
                Err(err) => message.set(signup_failed_message(&err)),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
        }
    };

    view! {
        <section class="page page--form">
            <h1>"Sign Up"</h1>
            <form class="form" on:submit=on_submit>
                <div class="form-field">
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <input
                        class="form-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <PasswordField value=password placeholder="Password"/>
                <PasswordField
                    value=confirm
                    placeholder="Confirm password"
                    invalid=confirm_invalid
                />
                <div class="form-field">
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Party ID (optional)"
                        prop:value=move || party_id.get()
                        on:input=move |ev| party_id.set(event_target_value(&ev))
                    />
                </div>
                <button
                    class="form-button"
                    type="submit"
                    disabled=move || submit.get().is_submitting()
                >
                    "Sign Up"
                </button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class="form-message">{move || message.get()}</p>
            </Show>
        </section>
    }
}
