//! Auth context: the app-wide `{is_authenticated, loading}` view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and the header status display both read this context, so
//! call sites can never disagree about authentication truth. It is provided
//! once at the app root over a single [`SessionStore`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use identity::SessionUser;
use leptos::prelude::*;

use super::session::{SessionSnapshot, SessionStore};

/// Authentication state derived from the latest session snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::from_snapshot(&SessionSnapshot::unresolved())
    }
}

impl AuthState {
    /// Pure projection of a snapshot. While loading, `is_authenticated` is
    /// always `false` regardless of any stale session still held.
    #[must_use]
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        Self {
            is_authenticated: !snapshot.loading && snapshot.session.is_some(),
            loading: snapshot.loading,
        }
    }
}

/// Shared handle given to every consumer of auth state.
#[derive(Clone, Copy)]
pub struct AuthContext {
    store: SessionStore,
    state: Memo<AuthState>,
    user: Memo<Option<SessionUser>>,
}

impl AuthContext {
    /// Build the context over `store`. Use [`provide_auth_context`] at the app
    /// root instead of calling this from components.
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        let snapshot = store.snapshot();
        let state = Memo::new(move |_| snapshot.with(AuthState::from_snapshot));
        let user = Memo::new(move |_| {
            snapshot.with(|s| {
                if s.loading {
                    None
                } else {
                    s.session.as_ref().map(|session| session.user.clone())
                }
            })
        });
        Self { store, state, user }
    }

    /// Reactive auth state.
    #[must_use]
    pub fn state(&self) -> Memo<AuthState> {
        self.state
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Memo<Option<SessionUser>> {
        self.user
    }

    /// Ask the store to re-check the session with the provider.
    pub fn refresh(&self) {
        self.store.refresh();
    }

    /// Sign out through the store.
    pub fn sign_out(&self) {
        self.store.sign_out();
    }
}

/// Create the session store and auth context and provide the context to the
/// component tree.
pub fn provide_auth_context() -> AuthContext {
    let auth = AuthContext::new(SessionStore::new());
    provide_context(auth);
    auth
}

/// Fetch the auth context provided at the app root.
///
/// # Panics
///
/// Panics if called outside the tree below [`provide_auth_context`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
