//! # Catalog — high-level book-catalog flows on an abstract object store
//!
//! This module is the core of the storage layer. [`Catalog`] implements the
//! catalog's domain flows on top of the [`ObjectStore`] trait, so the same
//! logic works against the in-memory store (server side, tests) or any
//! future backend.
//!
//! ## [`ObjectStore`] trait
//!
//! The store's client contract: create/list/probe for the four flat record
//! kinds, create and query book records, and attach/read the book↔author
//! relation. The [`crate::MemoryStore`] implementation lives in a sibling
//! module.
//!
//! ## Flows
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`create_entity`](Catalog::create_entity) | Persist one reference record with a `name` attribute. |
//! | [`list_entities`](Catalog::list_entities) | Fetch the full list for one kind (the screens' choice lists). |
//! | [`create_book`](Catalog::create_book) | The book-creation flow: ISBD uniqueness probe, fresh ISBD record, book record, author relation. |
//! | [`query_books`](Catalog::query_books) | Run a composed [`BookQuery`], then resolve references and join authors in memory. |
//!
//! ## Joins
//!
//! `query_books` fetches each reference list and the relation edge set once
//! per call and joins in memory, instead of one relation round trip per
//! result record.
//!
//! ## Consistency
//!
//! `create_book` performs no writes when the ISBD probe finds a match. It does
//! not roll back the ISBD record if a later step fails, so a failed book save
//! can leave an orphan ISBD behind.

use std::collections::HashMap;

use crate::error::{CatalogError, StoreError};
use crate::models::{BookDetails, BookRecord, EntityKind, NamedRecord, NewBook, ObjectId};
use crate::query::BookQuery;

/// Async contract of a record store: typed create/query plus relation
/// management. Mirrors what a hosted object store exposes per record kind.
pub trait ObjectStore {
    /// Create one record of `kind` with its `name` attribute set.
    fn create_named(
        &self,
        kind: EntityKind,
        name: &str,
    ) -> impl std::future::Future<Output = Result<NamedRecord, StoreError>>;

    /// Every record of `kind`, in insertion order.
    fn list_named(
        &self,
        kind: EntityKind,
    ) -> impl std::future::Future<Output = Result<Vec<NamedRecord>, StoreError>>;

    /// Exact-name equality probe. Returns the first match, if any.
    fn find_named(
        &self,
        kind: EntityKind,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Option<NamedRecord>, StoreError>>;

    /// Create a book record with its scalar fields and to-one references.
    fn create_book(
        &self,
        title: &str,
        year: i32,
        publisher: &ObjectId,
        genre: &ObjectId,
        isbd: &ObjectId,
    ) -> impl std::future::Future<Output = Result<BookRecord, StoreError>>;

    /// Evaluate a composed query and return matching books in query order.
    fn find_books(
        &self,
        query: &BookQuery,
    ) -> impl std::future::Future<Output = Result<Vec<BookRecord>, StoreError>>;

    /// Attach authors to a book's relation. Attaching an empty set is a no-op.
    fn attach_authors(
        &self,
        book: &ObjectId,
        authors: &[ObjectId],
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;

    /// Every (book, author) relation edge, for batched joins.
    fn author_edges(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<(ObjectId, ObjectId)>, StoreError>>;
}

/// The book catalog, backed by an [`ObjectStore`].
pub struct Catalog<S: ObjectStore> {
    store: S,
}

/// Reference records keyed by id, fetched once per catalog operation.
struct RefTables {
    publishers: HashMap<ObjectId, NamedRecord>,
    genres: HashMap<ObjectId, NamedRecord>,
    isbds: HashMap<ObjectId, NamedRecord>,
    authors: HashMap<ObjectId, NamedRecord>,
}

impl RefTables {
    fn get(
        &self,
        kind: EntityKind,
        id: &ObjectId,
    ) -> Result<NamedRecord, CatalogError> {
        let table = match kind {
            EntityKind::Publisher => &self.publishers,
            EntityKind::Genre => &self.genres,
            EntityKind::Isbd => &self.isbds,
            EntityKind::Author => &self.authors,
        };
        table
            .get(id)
            .cloned()
            .ok_or(CatalogError::Store(StoreError::MissingRecord {
                kind,
                id: id.clone(),
            }))
    }
}

impl<S: ObjectStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create one reference record with the given name.
    pub async fn create_entity(
        &self,
        kind: EntityKind,
        name: &str,
    ) -> Result<NamedRecord, CatalogError> {
        Ok(self.store.create_named(kind, name).await?)
    }

    /// List every record of one kind.
    pub async fn list_entities(&self, kind: EntityKind) -> Result<Vec<NamedRecord>, CatalogError> {
        Ok(self.store.list_named(kind).await?)
    }

    /// Create a book linking its publisher, genre, a freshly created ISBD
    /// record, and zero or more authors.
    ///
    /// Title and ISBD are trimmed before any use, so padded spellings of the
    /// same ISBD collide. The ISBD value is probed for uniqueness first; a
    /// conflict fails the whole flow before any write happens.
    pub async fn create_book(&self, book: NewBook) -> Result<BookDetails, CatalogError> {
        let title = book.title.trim();
        let isbd_name = book.isbd.trim();

        if let Some(existing) = self.store.find_named(EntityKind::Isbd, isbd_name).await? {
            return Err(CatalogError::DuplicateIsbd(existing.name));
        }

        // Each book gets its own ISBD record, never a reused one.
        let isbd = self.store.create_named(EntityKind::Isbd, isbd_name).await?;

        let record = self
            .store
            .create_book(title, book.year, &book.publisher, &book.genre, &isbd.id)
            .await?;
        self.store.attach_authors(&record.id, &book.authors).await?;

        let tables = self.ref_tables().await?;
        self.resolve_book(record, book.authors, &tables)
    }

    /// Run a composed query, then join every result with its resolved
    /// references and related authors. The reference lists and the relation
    /// edges are each fetched once, not once per result.
    pub async fn query_books(&self, query: &BookQuery) -> Result<Vec<BookDetails>, CatalogError> {
        let books = self.store.find_books(query).await?;

        let mut authors_by_book: HashMap<ObjectId, Vec<ObjectId>> = HashMap::new();
        for (book, author) in self.store.author_edges().await? {
            authors_by_book.entry(book).or_default().push(author);
        }

        let tables = self.ref_tables().await?;
        books
            .into_iter()
            .map(|book| {
                let authors = authors_by_book.remove(&book.id).unwrap_or_default();
                self.resolve_book(book, authors, &tables)
            })
            .collect()
    }

    async fn ref_tables(&self) -> Result<RefTables, CatalogError> {
        let by_id = |records: Vec<NamedRecord>| {
            records
                .into_iter()
                .map(|r| (r.id.clone(), r))
                .collect::<HashMap<_, _>>()
        };
        Ok(RefTables {
            publishers: by_id(self.store.list_named(EntityKind::Publisher).await?),
            genres: by_id(self.store.list_named(EntityKind::Genre).await?),
            isbds: by_id(self.store.list_named(EntityKind::Isbd).await?),
            authors: by_id(self.store.list_named(EntityKind::Author).await?),
        })
    }

    fn resolve_book(
        &self,
        book: BookRecord,
        author_ids: Vec<ObjectId>,
        tables: &RefTables,
    ) -> Result<BookDetails, CatalogError> {
        let authors = author_ids
            .iter()
            .map(|id| tables.get(EntityKind::Author, id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BookDetails {
            publisher: tables.get(EntityKind::Publisher, &book.publisher)?,
            genre: tables.get(EntityKind::Genre, &book.genre)?,
            isbd: tables.get(EntityKind::Isbd, &book.isbd)?,
            authors,
            id: book.id,
            title: book.title,
            year: book.year,
        })
    }
}
