use super::*;
use crate::net::types::UserIdentity;

fn signed_in() -> SessionSnapshot {
    SessionSnapshot::authenticated(UserIdentity::from_value(serde_json::json!({ "id": "u1" })).unwrap())
}

// =============================================================
// gate
// =============================================================

#[test]
fn gate_prompts_when_signed_out() {
    assert_eq!(gate(&SessionSnapshot::unauthenticated()), GateDecision::PromptLogin);
}

#[test]
fn gate_proceeds_when_signed_in() {
    assert_eq!(gate(&signed_in()), GateDecision::Proceed);
}

// =============================================================
// guard_protected_action
// =============================================================

#[test]
fn signed_out_opens_prompt_without_running_action() {
    let mut prompt = LoginPrompt::default();
    let mut ran = Vec::new();

    let decision = guard_protected_action(&SessionSnapshot::unauthenticated(), &mut prompt, 7, |id| ran.push(id));

    assert_eq!(decision, GateDecision::PromptLogin);
    assert!(prompt.is_open());
    assert!(ran.is_empty());
}

#[test]
fn signed_in_runs_action_without_prompt() {
    let mut prompt = LoginPrompt::default();
    let mut ran = Vec::new();

    let decision = guard_protected_action(&signed_in(), &mut prompt, 7, |id| ran.push(id));

    assert_eq!(decision, GateDecision::Proceed);
    assert!(!prompt.is_open());
    assert_eq!(ran, vec![7]);
}

#[test]
fn repeated_signed_out_actions_keep_prompt_open() {
    let mut prompt = LoginPrompt::default();
    guard_protected_action(&SessionSnapshot::unauthenticated(), &mut prompt, (), |()| {});
    guard_protected_action(&SessionSnapshot::unauthenticated(), &mut prompt, (), |()| {});
    assert!(prompt.is_open());
}

// =============================================================
// LoginPrompt
// =============================================================

#[test]
fn prompt_starts_closed() {
    assert!(!LoginPrompt::default().is_open());
}

#[test]
fn proceed_to_login_closes_and_targets_login() {
    let mut prompt = LoginPrompt::default();
    prompt.open();
    assert_eq!(prompt.resolve(PromptAction::ProceedToLogin), Some("/login"));
    assert!(!prompt.is_open());
}

#[test]
fn dismiss_closes_without_navigation() {
    let mut prompt = LoginPrompt::default();
    prompt.open();
    assert_eq!(prompt.resolve(PromptAction::Dismiss), None);
    assert!(!prompt.is_open());
}
