use super::*;
use identity::SessionUser;
use time::macros::datetime;

fn session_expiring_at(expires: OffsetDateTime) -> Session {
    Session {
        user: SessionUser { id: "u-1".to_owned(), name: Some("Ash".to_owned()), email: "ash@example.com".to_owned() },
        expires,
    }
}

fn with_owner(test: impl FnOnce()) {
    let owner = Owner::new();
    owner.with(test);
}

// =============================================================
// SessionSnapshot
// =============================================================

#[test]
fn default_snapshot_is_unresolved() {
    let snap = SessionSnapshot::default();
    assert!(snap.loading);
    assert!(snap.session.is_none());
}

#[test]
fn signed_out_is_resolved_and_empty() {
    assert_eq!(SessionSnapshot::signed_out(), SessionSnapshot { session: None, loading: false });
}

#[test]
fn reconcile_expiry_only_replaces_expired_sessions() {
    let live = SessionSnapshot::resolved(Some(session_expiring_at(datetime!(2030-01-01 00:00 UTC))));
    assert_eq!(live.reconcile_expiry(datetime!(2029-12-31 00:00 UTC)), None);
    assert_eq!(
        live.reconcile_expiry(datetime!(2030-01-01 00:00 UTC)),
        Some(SessionSnapshot::signed_out())
    );
    assert_eq!(SessionSnapshot::unresolved().reconcile_expiry(datetime!(2030-01-01 00:00 UTC)), None);
}

#[test]
fn from_provider_drops_already_expired_sessions() {
    let now = datetime!(2030-01-01 00:00 UTC);
    let stale = session_expiring_at(datetime!(2029-12-31 00:00 UTC));
    assert_eq!(SessionSnapshot::from_provider(Some(stale), now), SessionSnapshot::signed_out());
    let fresh = session_expiring_at(datetime!(2030-02-01 00:00 UTC));
    assert_eq!(
        SessionSnapshot::from_provider(Some(fresh.clone()), now),
        SessionSnapshot::resolved(Some(fresh))
    );
    assert_eq!(SessionSnapshot::from_provider(None, now), SessionSnapshot::signed_out());
}

#[test]
fn expiry_timer_delay_is_clamped_to_browser_limit() {
    let now = datetime!(2030-01-01 00:00 UTC);
    let soon = session_expiring_at(datetime!(2030-01-01 00:00:05 UTC));
    assert_eq!(expiry_timer_delay(&soon, now), 5_000);
    let far = session_expiring_at(datetime!(2031-01-01 00:00 UTC));
    assert_eq!(u64::from(expiry_timer_delay(&far, now)), MAX_TIMER_MS);
}

#[test]
fn expiry_step_rearms_when_a_long_session_outlasts_the_timer() {
    let issued = datetime!(2026-01-01 00:00 UTC);
    let session = session_expiring_at(datetime!(2026-01-31 00:00 UTC));
    let snap = SessionSnapshot::resolved(Some(session.clone()));

    let first = expiry_timer_delay(&session, issued);
    assert_eq!(u64::from(first), MAX_TIMER_MS);

    let fired_at = issued + time::Duration::milliseconds(i64::from(first));
    let ExpiryStep::Rearm(second) = expiry_step(&snap, fired_at) else {
        panic!("timer fired early but did not re-arm");
    };
    assert!(second > 0);
    assert_eq!(fired_at + time::Duration::milliseconds(i64::from(second)), session.expires);
    assert_eq!(expiry_step(&snap, session.expires), ExpiryStep::Expire);
}

#[test]
fn expiry_step_is_idle_without_a_session() {
    let now = datetime!(2030-01-01 00:00 UTC);
    assert_eq!(expiry_step(&SessionSnapshot::signed_out(), now), ExpiryStep::Idle);
    assert_eq!(expiry_step(&SessionSnapshot::unresolved(), now), ExpiryStep::Idle);
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_starts_unresolved() {
    with_owner(|| {
        let store = SessionStore::new();
        assert_eq!(store.snapshot().get_untracked(), SessionSnapshot::unresolved());
    });
}

#[test]
fn refresh_is_noop_outside_the_browser() {
    with_owner(|| {
        let store = SessionStore::new();
        store.refresh();
        assert!(store.snapshot().get_untracked().loading);
    });
}

#[test]
fn sign_out_transitions_in_one_step() {
    with_owner(|| {
        let store = SessionStore::new();
        store.apply(SessionSnapshot::resolved(Some(session_expiring_at(datetime!(2030-01-01 00:00 UTC)))));
        store.sign_out();
        assert_eq!(store.snapshot().get_untracked(), SessionSnapshot::signed_out());
    });
}

#[test]
fn expire_if_due_reports_change() {
    with_owner(|| {
        let store = SessionStore::new();
        store.apply(SessionSnapshot::resolved(Some(session_expiring_at(datetime!(2030-01-01 00:00 UTC)))));
        assert!(!store.expire_if_due(datetime!(2029-06-01 00:00 UTC)));
        assert!(store.expire_if_due(datetime!(2030-06-01 00:00 UTC)));
        assert_eq!(store.snapshot().get_untracked(), SessionSnapshot::signed_out());
        assert!(!store.expire_if_due(datetime!(2030-06-01 00:00 UTC)));
    });
}
