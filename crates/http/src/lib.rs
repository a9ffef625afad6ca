//! Depot HTTP client
//!
//! Thin typed wrapper over the file-storage API. Authentication is
//! cookie-based: the client carries a cookie store and sends credentials
//! with every request, mirroring a browser `fetch` with
//! `credentials: "include"`.

pub mod client;
pub mod types;

pub use client::{error::ClientError, DepotClient, DepotClientBuilder};
