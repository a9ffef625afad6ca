//! Depot core types and utilities

pub mod routes;
pub mod types;

pub use routes::{RouteClass, RouteTable};
pub use types::{ApiResponse, AuthUser};
