//! # API crate — shared fullstack server functions for Bookshelf
//!
//! Defines every Dioxus server function the web frontend calls. Each public
//! `async fn` here is annotated with `#[get(...)]` or `#[post(...)]` and
//! compiled twice: once with full server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that forwards
//! the call over HTTP.
//!
//! ## Server functions
//!
//! - **Reference entities**: `list_entities`, `create_entity`
//! - **Books**: `create_book`, `query_books`
//!
//! All durable state lives in the server-side catalog singleton (see
//! [`backend`]); the client holds nothing beyond per-session view state.

use dioxus::prelude::*;

#[cfg(feature = "server")]
pub mod backend;

pub use store::{BookDetails, BookQuery, EntityKind, NamedRecord, NewBook, ObjectId, TitleOrder};

/// List every record of one entity kind ("Publisher", "Author", "Genre", "ISBD").
#[cfg(feature = "server")]
#[get("/api/records/:kind")]
pub async fn list_entities(kind: String) -> Result<Vec<NamedRecord>, ServerFnError> {
    let kind = EntityKind::parse(&kind)
        .ok_or_else(|| ServerFnError::new(format!("Unknown entity kind: {kind}")))?;

    backend::catalog()
        .await
        .list_entities(kind)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/records/:kind")]
pub async fn list_entities(kind: String) -> Result<Vec<NamedRecord>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create one record of the given kind with its `name` attribute set.
#[cfg(feature = "server")]
#[post("/api/records/:kind")]
pub async fn create_entity(kind: String, name: String) -> Result<NamedRecord, ServerFnError> {
    let kind = EntityKind::parse(&kind)
        .ok_or_else(|| ServerFnError::new(format!("Unknown entity kind: {kind}")))?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }

    backend::catalog()
        .await
        .create_entity(kind, &name)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/records/:kind")]
pub async fn create_entity(kind: String, name: String) -> Result<NamedRecord, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a book with its publisher, genre, a fresh uniqueness-checked ISBD
/// record, and zero or more authors.
#[cfg(feature = "server")]
#[post("/api/books")]
pub async fn create_book(book: NewBook) -> Result<BookDetails, ServerFnError> {
    if book.title.trim().is_empty() {
        return Err(ServerFnError::new("Title is required"));
    }
    if book.isbd.trim().is_empty() {
        return Err(ServerFnError::new("ISBD is required"));
    }

    backend::catalog()
        .await
        .create_book(book)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/books")]
pub async fn create_book(book: NewBook) -> Result<BookDetails, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Run a composed query over books. Results come back joined with their
/// resolved references and author sets, sorted by title in query order.
#[cfg(feature = "server")]
#[post("/api/books/query")]
pub async fn query_books(query: BookQuery) -> Result<Vec<BookDetails>, ServerFnError> {
    backend::catalog()
        .await
        .query_books(&query)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/books/query")]
pub async fn query_books(query: BookQuery) -> Result<Vec<BookDetails>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
