//! Navigation route guard
//!
//! Runs before every navigation. Ensures the session state is current,
//! classifies the target path, and decides: allow, or redirect. The guard
//! always reaches a decision; an unexpected failure during the refresh
//! degrades to the anonymous decision instead of stalling navigation.

use super::store::AuthStore;
use depot_core::{RouteClass, RouteTable};
use serde::{Deserialize, Serialize};
use tracing::error;

/// When the guard re-fetches the session from the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionRefresh {
    /// Fetch only while no session is cached; trust a cached one.
    /// A stale authenticated read just causes a redirect that the next
    /// guard run corrects.
    #[default]
    FirstRunOnly,
    /// Fetch on every navigation
    EveryNavigation,
}

/// Guard configuration: route classification plus staleness policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuardPolicy {
    pub routes: RouteTable,
    pub refresh: SessionRefresh,
}

/// Outcome of a guard run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

/// Navigation-time access decision function
#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    policy: GuardPolicy,
}

impl RouteGuard {
    pub fn new(policy: GuardPolicy) -> Self {
        Self { policy }
    }

    /// Decide whether navigation to `path` may proceed
    ///
    /// Suspends until the session state is settled, so a protected view is
    /// never rendered mid-fetch.
    pub async fn check(&self, store: &mut AuthStore, path: &str) -> Decision {
        let needs_fetch = match self.policy.refresh {
            SessionRefresh::FirstRunOnly => !store.is_authenticated(),
            SessionRefresh::EveryNavigation => true,
        };

        if needs_fetch {
            if let Err(err) = store.fetch_session().await {
                // Unexpected failure, distinct from a normal "no session"
                // outcome. Recover to a known state and decide as anonymous.
                error!(error = %err, "session refresh failed unexpectedly");
                store.reset();
            }
        }

        match (store.is_authenticated(), self.policy.routes.classify(path)) {
            (false, RouteClass::Protected) => Decision::RedirectToLogin,
            (false, RouteClass::PublicOnly) => Decision::Allow,
            (true, RouteClass::PublicOnly) => Decision::RedirectToHome,
            (true, RouteClass::Protected) => Decision::Allow,
        }
    }
}
