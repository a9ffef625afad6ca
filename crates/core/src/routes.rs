//! Static route classification
//!
//! Every navigable path is either public-only (reachable without a session,
//! like the login and register pages) or protected. The mapping is fixed
//! configuration; nothing here looks at runtime state.

use serde::{Deserialize, Serialize};

/// Access class of a navigable path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteClass {
    /// Reachable only without a session (login, register)
    PublicOnly,
    /// Requires a session
    Protected,
}

/// Static mapping of paths to their access class
///
/// Paths not listed as public-only are protected. Matching is on the exact
/// path, ignoring a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    public_only: Vec<String>,
}

impl RouteTable {
    pub fn new(public_only: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            public_only: public_only
                .into_iter()
                .map(|p| normalize(&p.into()).to_string())
                .collect(),
        }
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        let path = normalize(path);
        if self.public_only.iter().any(|p| p == path) {
            RouteClass::PublicOnly
        } else {
            RouteClass::Protected
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(["/login", "/register"])
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_marks_login_and_register_public() {
        let table = RouteTable::default();
        assert_eq!(table.classify("/login"), RouteClass::PublicOnly);
        assert_eq!(table.classify("/register"), RouteClass::PublicOnly);
    }

    #[test]
    fn unknown_paths_are_protected() {
        let table = RouteTable::default();
        assert_eq!(table.classify("/"), RouteClass::Protected);
        assert_eq!(table.classify("/dashboard"), RouteClass::Protected);
        assert_eq!(table.classify("/files/abc"), RouteClass::Protected);
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let table = RouteTable::default();
        assert_eq!(table.classify("/login/"), RouteClass::PublicOnly);
    }

    #[test]
    fn extra_public_pages_are_configurable() {
        let table = RouteTable::new(["/login", "/register", "/changelog"]);
        assert_eq!(table.classify("/changelog"), RouteClass::PublicOnly);
        assert_eq!(table.classify("/login"), RouteClass::PublicOnly);
    }
}
