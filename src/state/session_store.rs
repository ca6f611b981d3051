//! Reactive handle over the session model.
//!
//! SYSTEM CONTEXT
//! ==============
//! One store is created by `UserProvider` at the application root and shared
//! through context. Components read `current_snapshot()` in event handlers and
//! `snapshot()` inside reactive closures to re-render when the bootstrap lands.
//!
//! All mutation happens on the UI thread; the signal is the only shared state.
//! Access goes through the `try_` signal APIs because a bootstrap may resolve
//! after the provider's owner has been disposed.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use leptos::prelude::*;

use super::session::{Generation, Resolution, Session, SessionPhase, SessionSnapshot};
use crate::net::api::{ApiError, AuthService};
use crate::net::types::UserIdentity;
use crate::util::diagnostics::Diagnostics;

#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    session: RwSignal<Session>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self { session: RwSignal::new(Session::new()) }
    }

    /// Latest snapshot, read without subscribing. Never suspends.
    pub fn current_snapshot(&self) -> SessionSnapshot {
        self.session
            .try_with_untracked(|s| s.snapshot().clone())
            .unwrap_or_default()
    }

    /// Latest snapshot, subscribing the calling reactive scope to changes.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session
            .try_with(|s| s.snapshot().clone())
            .unwrap_or_default()
    }

    /// Bootstrap phase, subscribing the calling reactive scope to changes.
    pub fn phase(&self) -> SessionPhase {
        self.session.try_with(Session::phase).unwrap_or_default()
    }

    /// Start the bootstrap fetch on the local executor.
    ///
    /// A no-op while an activation is already live.
    pub fn activate<S, D>(&self, service: S, diagnostics: D)
    where
        S: AuthService + 'static,
        D: Diagnostics + 'static,
    {
        let Some(generation) = self.begin() else {
            return;
        };
        let store = *self;
        leptos::task::spawn_local(async move {
            store.bootstrap(generation, service, diagnostics).await;
        });
    }

    /// Open a new activation lifetime without running the fetch.
    pub fn begin(&self) -> Option<Generation> {
        self.session.try_update(Session::activate).flatten()
    }

    /// Run the fetch for `generation` and apply its result.
    pub async fn bootstrap<S, D>(self, generation: Generation, service: S, diagnostics: D) -> Resolution
    where
        S: AuthService,
        D: Diagnostics,
    {
        let result = service.fetch_current_user().await;
        self.resolve(generation, result, &diagnostics)
    }

    /// Apply a bootstrap result. Stale generations are dropped before the
    /// signal is touched so observers are not notified.
    pub fn resolve<D: Diagnostics>(
        &self,
        generation: Generation,
        result: Result<UserIdentity, ApiError>,
        diagnostics: &D,
    ) -> Resolution {
        let accepted = self
            .session
            .try_with_untracked(|s| s.accepts(generation))
            .unwrap_or(false);
        if !accepted {
            leptos::logging::log!("discarding stale session bootstrap (generation {})", generation.value());
            return Resolution::Discarded;
        }
        self.session
            .try_update(|s| s.resolve(generation, result, diagnostics))
            .unwrap_or(Resolution::Discarded)
    }

    /// End the activation; later results from it are suppressed.
    pub fn deactivate(&self) {
        if self.session.try_update(Session::deactivate).is_none() {
            leptos::logging::log!("session store already disposed");
        }
    }
}
