//! Top navigation bar derived from the auth flag.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// One navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: &'static str,
}

/// The auth-dependent part of the menu. Pure and idempotent; the brand/home
/// link is rendered unconditionally outside this set.
pub fn nav_items(authenticated: bool) -> Vec<NavItem> {
    if authenticated {
        vec![
            NavItem { label: "Profile", target: "/profile" },
            NavItem { label: "Logout", target: "/logout" },
        ]
    } else {
        vec![
            NavItem { label: "Login", target: "/login" },
            NavItem { label: "Signup", target: "/signup" },
        ]
    }
}

/// Navigation bar. Holds no state of its own; links are re-derived from the
/// auth signal on every change.
#[component]
pub fn Nav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <nav class="nav">
            <a class="nav__brand" href="/">"MoviesWithFriends"</a>
            <div class="nav__links">
                {move || {
                    nav_items(auth.get().authenticated)
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a class="nav__link" href=item.target>{item.label}</a>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </nav>
    }
}
