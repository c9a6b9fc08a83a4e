//! Login page: email + password against `POST /login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is one of the two auth-state writers. A 2xx response applies
//! `AuthEvent::LoginSucceeded` (persisting the session flag) before the
//! redirect to `/`, so the navigation menu never observes a target
//! inconsistent with the flag.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::state::auth::AuthState;
use crate::state::submit::SubmitState;
use crate::util::validation::validate_login_input;

#[cfg(any(test, feature = "csr"))]
fn login_failed_message(err: &crate::net::error::ApiError) -> String {
    format!("Login failed: {err}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let submit = RwSignal::new(SubmitState::Idle);
    let navigate = use_navigate();
    #[cfg(not(feature = "csr"))]
    let _ = (&navigate, auth);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submitting) = submit.get().begin() else {
            return;
        };
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        submit.set(submitting);
        message.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&request).await;
                submit.update(|state| *state = state.finish());
                match result {
                    Ok(()) => {
                        let session = crate::util::session::SessionStore::new(
                            crate::util::session::BrowserStorage,
                        );
                        auth.set(AuthState::apply(
                            crate::state::auth::AuthEvent::LoginSucceeded,
                            &session,
                        ));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => message.set(login_failed_message(&err)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
        }
    };

    view! {
        <section class="page page--form">
            <h1>"Log In"</h1>
            <form class="form" on:submit=on_submit>
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
                <button
                    class="form-button"
                    type="submit"
                    disabled=move || submit.get().is_submitting()
                >
                    "Log In"
                </button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class="form-message">{move || message.get()}</p>
            </Show>
        </section>
    }
}
