//! Session state and navigation guarding for the Depot frontend
//!
//! Two pieces collaborate here. The [`AuthStore`] owns the current session
//! and is the only component that talks to the auth endpoints. The
//! [`RouteGuard`] runs before each navigation, asks the store for fresh
//! state, and decides whether to allow the navigation or redirect.

pub mod auth;
pub mod config;

pub use auth::guard::{Decision, GuardPolicy, RouteGuard, SessionRefresh};
pub use auth::store::AuthStore;
pub use config::{ConfigError, FrontendConfig};
