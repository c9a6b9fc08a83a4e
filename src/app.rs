//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::Nav;
use crate::pages::{
    home::HomePage, login::LoginPage, logout::LogoutPage, profile::ProfilePage,
    signup::SignupPage,
};
use crate::state::auth::AuthState;
use crate::util::session::{BrowserStorage, SessionStore};

/// Root application component.
///
/// Restores the auth flag from the durable session entry, provides it via
/// context, and sets up the static route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new(BrowserStorage);
    let auth = RwSignal::new(AuthState::restore(&session));
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/movieswithfriends.css"/>
        <Title text="MoviesWithFriends"/>

        <Router>
            <Nav/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("logout") view=LogoutPage/>
                </Routes>
            </main>
        </Router>
    }
}
