//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login and join routes should apply identical signed-in redirect
//! behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::consts::HOME_PATH;
use crate::state::session::SessionSnapshot;
use crate::state::session_store::SessionStore;

/// Signed-in users have no reason to stay on an auth entry page.
pub fn should_redirect_home(snapshot: &SessionSnapshot) -> bool {
    snapshot.is_authenticated()
}

/// Redirect to `/` as soon as the session bootstrap reports a user.
pub fn install_signed_in_redirect<F>(session: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_home(&session.snapshot()) {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });
}
