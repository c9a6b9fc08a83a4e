//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<AuthState>` is provided via context at the root; the
//! navigation menu and route components read it, and only the login and
//! logout success handlers feed an `AuthEvent` through `apply`. The durable
//! session flag is persisted inside `apply`, before the new state reaches
//! the signal, so a reload restores what the UI last showed.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::session::{KeyValueStore, SessionStore};

/// Whether the current browser session is authenticated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}

/// The only two permitted auth transitions. Each corresponds to a 2xx
/// response from the matching endpoint; failures produce no event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    LoginSucceeded,
    LogoutSucceeded,
}

impl AuthState {
    /// Initial state at application start, read from the durable flag.
    pub fn restore<S: KeyValueStore>(session: &SessionStore<S>) -> Self {
        Self {
            authenticated: session.read(),
        }
    }

    /// Apply a successful login/logout outcome: persist the flag, then
    /// return the state the caller publishes to the signal.
    pub fn apply<S: KeyValueStore>(event: AuthEvent, session: &SessionStore<S>) -> Self {
        let authenticated = matches!(event, AuthEvent::LoginSucceeded);
        session.write(authenticated);
        Self { authenticated }
    }
}
