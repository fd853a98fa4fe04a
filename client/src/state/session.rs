//! Session store wrapping the external identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! One store exists per browser tab. It is the only writer of session state;
//! everything else (auth context, route gate, status display) observes it
//! through a read-only signal.
//!
//! LIFECYCLE
//! =========
//! The store starts unresolved (`loading = true`). The first `refresh` in the
//! browser resolves it. While a session is held, a one-shot timer fires at
//! its expiry, drops the session and asks the provider again so a renewed
//! session is picked up. Static generation never calls `refresh`, so every
//! pre-rendered shell sees the unresolved snapshot.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use identity::Session;
use leptos::prelude::*;
use time::OffsetDateTime;

/// Raw state observed from the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::unresolved()
    }
}

impl SessionSnapshot {
    /// Session presence not yet known.
    #[must_use]
    pub fn unresolved() -> Self {
        Self { session: None, loading: true }
    }

    /// Provider answered, with or without a session.
    #[must_use]
    pub fn resolved(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }

    /// Terminal state after sign-out or expiry.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::resolved(None)
    }

    /// Snapshot for a provider answer. A session that is already expired
    /// counts as no session, so an expiry timer never fires in a loop.
    #[must_use]
    pub fn from_provider(session: Option<Session>, now: OffsetDateTime) -> Self {
        Self::resolved(session.filter(|s| !s.is_expired_at(now)))
    }

    /// Replacement snapshot when the held session has expired as of `now`.
    #[must_use]
    pub fn reconcile_expiry(&self, now: OffsetDateTime) -> Option<Self> {
        match &self.session {
            Some(session) if session.is_expired_at(now) => Some(Self::signed_out()),
            _ => None,
        }
    }
}

/// Longest delay a browser timer accepts (`i32::MAX` milliseconds).
#[cfg(any(test, feature = "hydrate"))]
const MAX_TIMER_MS: u64 = 2_147_483_647;

#[cfg(any(test, feature = "hydrate"))]
fn expiry_timer_delay(session: &Session, now: OffsetDateTime) -> u32 {
    let ms = session.millis_until_expiry(now).min(MAX_TIMER_MS);
    u32::try_from(ms).unwrap_or(u32::MAX)
}

/// What a firing expiry timer does.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, PartialEq, Eq)]
enum ExpiryStep {
    /// Nothing held; no timer.
    Idle,
    /// The session has expired: drop it and refetch.
    Expire,
    /// Fired early (long sessions outlast one timer): wait this many ms more.
    Rearm(u32),
}

#[cfg(any(test, feature = "hydrate"))]
fn expiry_step(snapshot: &SessionSnapshot, now: OffsetDateTime) -> ExpiryStep {
    match &snapshot.session {
        None => ExpiryStep::Idle,
        Some(session) if session.is_expired_at(now) => ExpiryStep::Expire,
        Some(session) => ExpiryStep::Rearm(expiry_timer_delay(session, now)),
    }
}

/// Owned session state with a subscription interface.
#[derive(Clone, Copy)]
pub struct SessionStore {
    snapshot: RwSignal<SessionSnapshot>,
    #[cfg(feature = "hydrate")]
    expiry_timer: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create an unresolved store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(SessionSnapshot::unresolved()),
            #[cfg(feature = "hydrate")]
            expiry_timer: StoredValue::new_local(None),
        }
    }

    /// Read-only view of the latest snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ReadSignal<SessionSnapshot> {
        self.snapshot.read_only()
    }

    /// Replace the snapshot. Equal snapshots do not notify subscribers.
    pub(crate) fn apply(&self, next: SessionSnapshot) {
        if self.snapshot.with_untracked(|current| *current == next) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            log::debug!(
                "session snapshot: loading={} present={}",
                next.loading,
                next.session.is_some()
            );
            self.schedule_expiry(next.session.as_ref());
        }
        self.snapshot.set(next);
    }

    /// Drop the held session if it has expired as of `now`.
    ///
    /// Returns `true` when the snapshot changed.
    pub fn expire_if_due(&self, now: OffsetDateTime) -> bool {
        let next = self.snapshot.with_untracked(|current| current.reconcile_expiry(now));
        match next {
            Some(next) => {
                self.apply(next);
                true
            }
            None => false,
        }
    }

    /// Ask the identity provider for the current session.
    ///
    /// Browser-only; a no-op during static generation. Provider failures
    /// resolve to "no session" so the gate can leave the loading state.
    pub fn refresh(&self) {
        #[cfg(feature = "hydrate")]
        {
            let store = *self;
            leptos::task::spawn_local(async move {
                let next = match crate::net::api::fetch_session().await {
                    Ok(session) => SessionSnapshot::from_provider(session, crate::util::browser::now_utc()),
                    Err(e) => {
                        log::warn!("session fetch failed: {e}");
                        SessionSnapshot::signed_out()
                    }
                };
                store.apply(next);
            });
        }
    }

    /// End the session.
    ///
    /// The local transition to signed-out happens first and in one step, so
    /// every observer sees `{authenticated: false, loading: false}` before
    /// the provider call completes.
    pub fn sign_out(&self) {
        self.apply(SessionSnapshot::signed_out());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::sign_out().await {
                log::warn!("sign-out request failed: {e}");
            }
        });
    }

    #[cfg(feature = "hydrate")]
    fn schedule_expiry(&self, session: Option<&Session>) {
        let delay = session.map(|session| expiry_timer_delay(session, crate::util::browser::now_utc()));
        self.arm_expiry_timer(delay);
    }

    #[cfg(feature = "hydrate")]
    fn arm_expiry_timer(&self, delay: Option<u32>) {
        let store = *self;
        let timer = delay.map(|delay| gloo_timers::callback::Timeout::new(delay, move || store.on_expiry_timer()));
        // Replacing the handle drops (and cancels) any earlier timer.
        self.expiry_timer.set_value(timer);
    }

    #[cfg(feature = "hydrate")]
    fn on_expiry_timer(&self) {
        // The firing timer's closure is still on the stack; detach it instead
        // of dropping it.
        let mut fired = None;
        self.expiry_timer.update_value(|timer| fired = timer.take());
        if let Some(fired) = fired {
            let _ = fired.forget();
        }

        let now = crate::util::browser::now_utc();
        let step = self.snapshot.with_untracked(|current| expiry_step(current, now));
        match step {
            ExpiryStep::Idle => {}
            ExpiryStep::Expire => {
                if self.expire_if_due(now) {
                    self.refresh();
                }
            }
            ExpiryStep::Rearm(delay) => {
                log::debug!("session expiry timer re-armed: {delay}ms");
                self.arm_expiry_timer(Some(delay));
            }
        }
    }
}
