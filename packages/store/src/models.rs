//! # Domain models for the book catalog
//!
//! Defines the record types held by an [`crate::ObjectStore`] backend and the
//! joined shapes returned by [`crate::Catalog`]. These types are
//! `Serialize + Deserialize` so they can cross the server/client boundary via
//! Dioxus server functions.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`ObjectId`] | The opaque id the store assigns to every persisted record. |
//! | [`EntityKind`] | One of the four single-attribute record kinds: Publisher, Author, Genre, ISBD. |
//! | [`NamedRecord`] | A persisted record of an [`EntityKind`]: an id plus a `name`. |
//! | [`BookRecord`] | A book as stored: scalar `title`/`year` plus to-one references (by id) to its publisher, genre, and ISBD. |
//! | [`BookDetails`] | A book joined for display: references resolved to [`NamedRecord`]s, plus the related author set. |
//! | [`NewBook`] | Input to [`crate::Catalog::create_book`]; carries the free-text ISBD value that gets uniqueness-checked. |

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the store when a record is created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four reference-entity kinds. Each kind is a flat record with a single
/// `name` attribute; books point at them by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Publisher,
    Author,
    Genre,
    Isbd,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Publisher,
        EntityKind::Author,
        EntityKind::Genre,
        EntityKind::Isbd,
    ];

    /// The kind name used in routes and store keys: "Publisher", "Author",
    /// "Genre", "ISBD".
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Publisher => "Publisher",
            EntityKind::Author => "Author",
            EntityKind::Genre => "Genre",
            EntityKind::Isbd => "ISBD",
        }
    }

    /// Parse a kind name as it appears in the `/create-object/:kind` route.
    pub fn parse(s: &str) -> Option<EntityKind> {
        match s {
            "Publisher" => Some(EntityKind::Publisher),
            "Author" => Some(EntityKind::Author),
            "Genre" => Some(EntityKind::Genre),
            "ISBD" => Some(EntityKind::Isbd),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted reference-entity record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedRecord {
    pub id: ObjectId,
    pub name: String,
}

/// A book as stored: scalars plus to-one references by id. The related
/// author set lives in the store's relation table, not on the record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: ObjectId,
    pub title: String,
    pub year: i32,
    pub publisher: ObjectId,
    pub genre: ObjectId,
    pub isbd: ObjectId,
}

/// A book joined with its resolved references and related authors, the shape
/// the list screen renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookDetails {
    pub id: ObjectId,
    pub title: String,
    pub year: i32,
    pub publisher: NamedRecord,
    pub genre: NamedRecord,
    pub isbd: NamedRecord,
    pub authors: Vec<NamedRecord>,
}

/// Input for creating a book. `isbd` is the free-text identifier value; the
/// catalog checks it for uniqueness and creates a fresh ISBD record from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub year: i32,
    pub isbd: String,
    pub publisher: ObjectId,
    pub genre: ObjectId,
    pub authors: Vec<ObjectId>,
}
