//! Session store and navigation guard

pub mod guard;
pub mod store;

pub use guard::{Decision, GuardPolicy, RouteGuard, SessionRefresh};
pub use store::AuthStore;
