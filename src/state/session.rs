//! Session bootstrap state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` wraps this model in a signal; gated components read the
//! snapshot to decide between running a protected action and prompting for
//! login.
//!
//! DESIGN
//! ======
//! Each activation lifetime is tagged with a monotonically increasing
//! [`Generation`]. Only the generation that is still active and still
//! bootstrapping may resolve; anything else is a stale completion and is
//! dropped without touching the snapshot.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::consts::BOOTSTRAP_REPORT_CONTEXT;
use crate::net::api::ApiError;
use crate::net::types::UserIdentity;
use crate::util::diagnostics::Diagnostics;

/// Point-in-time view of authentication state.
///
/// Fields are private so `is_authenticated` can never be true without a user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    user: Option<UserIdentity>,
    is_authenticated: bool,
}

impl SessionSnapshot {
    pub fn authenticated(user: UserIdentity) -> Self {
        Self { user: Some(user), is_authenticated: true }
    }

    pub fn unauthenticated() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }
}

/// Lifecycle phase of the session bootstrap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Not activated, or deactivated. Nothing may publish.
    #[default]
    Unbootstrapped,
    /// The user fetch for the active generation is in flight.
    Bootstrapping,
    /// The fetch succeeded; terminal for this activation.
    Authenticated,
    /// The fetch failed; terminal for this activation.
    Unauthenticated,
}

/// Tag identifying one activation lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Outcome of handing a bootstrap result to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The fetch succeeded and the snapshot now carries the user.
    Authenticated,
    /// The fetch failed; the snapshot is signed-out and a report was emitted.
    Unauthenticated,
    /// The result belonged to a superseded or deactivated generation.
    Discarded,
}

/// Bootstrap state machine plus the snapshot it publishes.
#[derive(Clone, Debug, Default)]
pub struct Session {
    phase: SessionPhase,
    snapshot: SessionSnapshot,
    issued: u64,
    active: Option<Generation>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    /// Generation of the current activation, if any.
    pub fn active_generation(&self) -> Option<Generation> {
        self.active
    }

    /// Start a new activation lifetime.
    ///
    /// Returns the generation whose fetch the caller must run, or `None` when
    /// an activation is already live (a second call is a no-op).
    pub fn activate(&mut self) -> Option<Generation> {
        if self.active_generation().is_some() {
            return None;
        }
        self.issued += 1;
        let generation = Generation(self.issued);
        self.active = Some(generation);
        self.phase = SessionPhase::Bootstrapping;
        self.snapshot = SessionSnapshot::unauthenticated();
        Some(generation)
    }

    /// End the current activation. Any in-flight fetch is orphaned.
    pub fn deactivate(&mut self) {
        self.active = None;
        self.phase = SessionPhase::Unbootstrapped;
        self.snapshot = SessionSnapshot::unauthenticated();
    }

    /// Whether a result tagged `generation` would be applied right now.
    pub fn accepts(&self, generation: Generation) -> bool {
        self.active_generation() == Some(generation) && self.phase == SessionPhase::Bootstrapping
    }

    /// Apply the bootstrap result for `generation`.
    ///
    /// Failures are downgraded to a signed-out snapshot and reported once
    /// through `diagnostics`; they never propagate.
    pub fn resolve<D: Diagnostics>(
        &mut self,
        generation: Generation,
        result: Result<UserIdentity, ApiError>,
        diagnostics: &D,
    ) -> Resolution {
        if !self.accepts(generation) {
            return Resolution::Discarded;
        }
        match result {
            Ok(user) => {
                self.snapshot = SessionSnapshot::authenticated(user);
                self.phase = SessionPhase::Authenticated;
                Resolution::Authenticated
            }
            Err(e) => {
                self.snapshot = SessionSnapshot::unauthenticated();
                self.phase = SessionPhase::Unauthenticated;
                diagnostics.report(BOOTSTRAP_REPORT_CONTEXT, &e);
                Resolution::Unauthenticated
            }
        }
    }
}
