//! Profile page — the protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile load runs on every navigation here (no caching across
//! visits) and the view reacts to the `Result` variant explicitly: a
//! failure renders the error indicator and never falls through to profile
//! markup. An unauthenticated visit is rejected by the backend's 401, which
//! lands in the same failure arm.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::Profile;

/// Outcome of the route's loader.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ProfileLoad {
    Loading,
    Ready(Profile),
    Failed(String),
}

impl ProfileLoad {
    fn from_result(result: Result<Profile, ApiError>) -> Self {
        match result {
            Ok(profile) => Self::Ready(profile),
            Err(err) => Self::Failed(format!("Could not load profile: {err}")),
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let load = RwSignal::new(ProfileLoad::Loading);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        load.set(ProfileLoad::from_result(crate::net::api::fetch_profile().await));
    });

    view! {
        <section class="page page--profile">
            {move || match load.get() {
                ProfileLoad::Loading => {
                    view! { <p class="profile-loading">"Loading profile..."</p> }.into_any()
                }
                ProfileLoad::Ready(profile) => {
                    view! {
                        <div class="profile-card">
                            <h1>{profile.name}</h1>
                            <p class="profile-card__login">{profile.login}</p>
                        </div>
                    }
                        .into_any()
                }
                ProfileLoad::Failed(msg) => {
                    view! { <p class="profile-error">{msg}</p> }.into_any()
                }
            }}
        </section>
    }
}
