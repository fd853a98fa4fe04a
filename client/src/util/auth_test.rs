use super::*;

const RESOLVING: AuthState = AuthState { is_authenticated: false, loading: true };
const GRANTED: AuthState = AuthState { is_authenticated: true, loading: false };
const DENIED: AuthState = AuthState { is_authenticated: false, loading: false };

fn count_redirects(states: &[AuthState]) -> usize {
    let mut latch = RedirectLatch::default();
    states
        .iter()
        .filter(|s| latch.observe(GateState::from_auth(**s)))
        .count()
}

#[test]
fn gate_state_maps_auth_state() {
    assert_eq!(GateState::from_auth(RESOLVING), GateState::Resolving);
    assert_eq!(GateState::from_auth(GRANTED), GateState::Granted);
    assert_eq!(GateState::from_auth(DENIED), GateState::Denied);
}

#[test]
fn loading_never_renders_children_even_if_authenticated_flag_is_set() {
    let odd = AuthState { is_authenticated: true, loading: true };
    assert!(!GateState::from_auth(odd).renders_children());
    assert!(!GateState::Resolving.renders_children());
    assert!(!GateState::Denied.renders_children());
    assert!(GateState::Granted.renders_children());
}

#[test]
fn never_redirects_while_resolving() {
    assert_eq!(count_redirects(&[RESOLVING, RESOLVING, RESOLVING]), 0);
}

#[test]
fn one_redirect_per_denial() {
    assert_eq!(count_redirects(&[RESOLVING, DENIED]), 1);
    assert_eq!(count_redirects(&[RESOLVING, DENIED, DENIED, RESOLVING, DENIED]), 1);
}

#[test]
fn granted_then_expired_redirects_once() {
    assert_eq!(count_redirects(&[RESOLVING, GRANTED, DENIED, DENIED]), 1);
}

#[test]
fn re_arms_after_access_is_granted_again() {
    assert_eq!(count_redirects(&[DENIED, GRANTED, DENIED]), 2);
}

#[test]
fn children_render_only_in_granted_across_sequences() {
    let sequences: [&[AuthState]; 3] =
        [&[RESOLVING, GRANTED, DENIED], &[RESOLVING, DENIED], &[GRANTED, RESOLVING, GRANTED]];
    for seq in sequences {
        for state in seq {
            let gate = GateState::from_auth(*state);
            assert_eq!(gate.renders_children(), !state.loading && state.is_authenticated);
        }
    }
}
