//! Logout route: fires the logout request on entry, then redirects home.
//!
//! The other auth-state writer. A 2xx response applies
//! `AuthEvent::LogoutSucceeded` (clearing the durable flag) before the
//! redirect; a failure keeps auth state as it was and shows the message.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[cfg(feature = "csr")]
fn logout_failed_message(err: &crate::net::error::ApiError) -> String {
    format!("Logout failed: {err}")
}

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let message = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        let navigate = use_navigate();
        leptos::task::spawn_local(async move {
            match crate::net::api::logout().await {
                Ok(()) => {
                    let session = crate::util::session::SessionStore::new(
                        crate::util::session::BrowserStorage,
                    );
                    auth.set(AuthState::apply(
                        crate::state::auth::AuthEvent::LogoutSucceeded,
                        &session,
                    ));
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => message.set(logout_failed_message(&err)),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = auth;

    view! {
        <section class="page">
            <Show
                when=move || message.get().is_empty()
                fallback=move || view! { <p class="form-message">{move || message.get()}</p> }
            >
                <p>"Signing out..."</p>
            </Show>
        </section>
    }
}
