//! # Backend module — the server-side catalog singleton
//!
//! Every server function in the `api` crate persists through one shared
//! [`Catalog`] over a [`MemoryStore`]. It is entirely gated behind
//! `#[cfg(feature = "server")]` so that client (WASM) builds never pull in
//! Tokio.
//!
//! ## Design
//!
//! The catalog is a **lazy, process-wide singleton** backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`catalog`] constructs the
//! store; every subsequent caller gets the same instance, so all sessions see
//! the same records for the lifetime of the process.

use store::{Catalog, MemoryStore};
use tokio::sync::OnceCell;

static CATALOG: OnceCell<Catalog<MemoryStore>> = OnceCell::const_new();

/// Get or initialize the shared catalog.
pub async fn catalog() -> &'static Catalog<MemoryStore> {
    CATALOG
        .get_or_init(|| async { Catalog::new(MemoryStore::new()) })
        .await
}
