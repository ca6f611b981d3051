//! Root provider exposing the signed-in user to descendant components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once around the router. The bootstrap fetch starts when the
//! provider is created and is orphaned when its owner is cleaned up, so a
//! remount always starts from a fresh signed-out snapshot.

use leptos::prelude::*;

use crate::state::session_store::SessionStore;

/// Creates the session store, provides it as context, and binds its
/// activation to this component's lifetime.
#[component]
pub fn UserProvider(children: Children) -> impl IntoView {
    let session = SessionStore::new();
    provide_context(session);

    #[cfg(feature = "hydrate")]
    {
        session.activate(crate::net::api::HttpAuthService, crate::util::diagnostics::ConsoleDiagnostics);
    }
    on_cleanup(move || session.deactivate());

    children()
}

/// Session store provided by the nearest [`UserProvider`].
pub fn use_user() -> SessionStore {
    expect_context::<SessionStore>()
}
