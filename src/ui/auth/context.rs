//! Auth context for managing user session state
//!
//! This module provides a reactive authentication context that:
//! - Holds the current user record for the whole component tree
//! - Handles the login/logout state transitions
//! - Persists the session to tab-scoped sessionStorage

use leptos::prelude::*;

use crate::core::session::storage::BrowserStorage;
use crate::core::session::{SessionStore, User};

/// Auth context providing session state and actions.
///
/// A `Copy` bundle of signals; every consumer in the tab observes the
/// same instance. The session store behind it owns the storage access.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current user, `None` while anonymous.
    pub current_user: RwSignal<Option<User>>,
    /// `true` until hydration from sessionStorage has completed. UI must
    /// render a neutral placeholder while this is set.
    pub loading: RwSignal<bool>,
    store: RwSignal<SessionStore<BrowserStorage>>,
}

impl AuthContext {
    /// Check if a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.current_user.get().is_some()
    }

    /// Username of the current user, used as the `X-User-Id` value.
    pub fn user_id(&self) -> Option<String> {
        self.current_user.get().map(|user| user.username)
    }

    /// Make a user record obtained from a successful backend call the
    /// current session. Returns `false` if persisting it failed, in
    /// which case nothing changes.
    pub fn login(&self, user: User) -> bool {
        let ok = self
            .store
            .try_update_untracked(|store| store.login(user.clone()))
            .unwrap_or(false);
        if ok {
            self.current_user.set(Some(user));
        }
        ok
    }

    /// End the session. The in-memory user is always cleared; the return
    /// value reports whether the storage entries could be removed.
    pub fn logout(&self) -> bool {
        let ok = self
            .store
            .try_update_untracked(|store| store.logout())
            .unwrap_or(false);
        self.current_user.set(None);
        ok
    }
}

/// Provide the auth context to the component tree.
pub fn provide_auth_context() -> AuthContext {
    let ctx = AuthContext {
        current_user: RwSignal::new(None),
        loading: RwSignal::new(true),
        store: RwSignal::new(SessionStore::new(BrowserStorage)),
    };

    // Restore the session from sessionStorage once mounted in the
    // browser. Corrupt data is discarded by the store, never surfaced.
    #[cfg(target_arch = "wasm32")]
    Effect::new(move |_| {
        ctx.store.update_untracked(|store| store.hydrate());
        ctx.current_user
            .set(ctx.store.with_untracked(|store| store.current().cloned()));
        ctx.loading.set(false);
    });

    #[cfg(not(target_arch = "wasm32"))]
    ctx.loading.set(false);

    provide_context(ctx);
    ctx
}

/// Get the auth context from the component tree.
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
