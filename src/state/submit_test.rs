use super::*;

// =============================================================
// SubmitState
// =============================================================

#[test]
fn default_is_idle() {
    assert_eq!(SubmitState::default(), SubmitState::Idle);
}

#[test]
fn begin_from_idle_enters_submitting() {
    assert_eq!(SubmitState::Idle.begin(), Some(SubmitState::Submitting));
}

#[test]
fn begin_while_submitting_is_denied() {
    assert_eq!(SubmitState::Submitting.begin(), None);
}

#[test]
fn finish_returns_to_idle_from_both_states() {
    assert_eq!(SubmitState::Submitting.finish(), SubmitState::Idle);
    assert_eq!(SubmitState::Idle.finish(), SubmitState::Idle);
}

#[test]
fn only_submitting_disables_the_control() {
    assert!(SubmitState::Submitting.is_submitting());
    assert!(!SubmitState::Idle.is_submitting());
}
