//! Authentication gate for protected per-item actions.
//!
//! DESIGN
//! ======
//! The decision reads a synchronous snapshot, never a pending fetch: while the
//! bootstrap is in flight the user is treated as signed out and gets the
//! login prompt.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use super::session::SessionSnapshot;
use crate::consts::LOGIN_PATH;

/// What a protected control should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    PromptLogin,
}

pub fn gate(snapshot: &SessionSnapshot) -> GateDecision {
    if snapshot.is_authenticated() {
        GateDecision::Proceed
    } else {
        GateDecision::PromptLogin
    }
}

/// The two ways out of the login prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptAction {
    ProceedToLogin,
    Dismiss,
}

impl PromptAction {
    /// Route to visit after the prompt closes, if any.
    pub fn destination(self) -> Option<&'static str> {
        match self {
            Self::ProceedToLogin => Some(LOGIN_PATH),
            Self::Dismiss => None,
        }
    }
}

/// Open/closed state of the login-required dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginPrompt {
    open: bool,
}

impl LoginPrompt {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the prompt through `action`, returning where to navigate.
    pub fn resolve(&mut self, action: PromptAction) -> Option<&'static str> {
        self.open = false;
        action.destination()
    }
}

/// Run `action` on `item` when signed in, otherwise open `prompt`.
///
/// Exactly one of the two effects happens per call.
pub fn guard_protected_action<T, F>(
    snapshot: &SessionSnapshot,
    prompt: &mut LoginPrompt,
    item: T,
    action: F,
) -> GateDecision
where
    F: FnOnce(T),
{
    let decision = gate(snapshot);
    match decision {
        GateDecision::Proceed => action(item),
        GateDecision::PromptLogin => prompt.open(),
    }
    decision
}
