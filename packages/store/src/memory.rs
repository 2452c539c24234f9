use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::catalog::ObjectStore;
use crate::error::StoreError;
use crate::models::{BookRecord, EntityKind, NamedRecord, ObjectId};
use crate::query::BookQuery;

/// In-memory ObjectStore for the server-side singleton and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    named: HashMap<EntityKind, Vec<NamedRecord>>,
    books: Vec<BookRecord>,
    // (book, author) relation edges in attach order
    edges: Vec<(ObjectId, ObjectId)>,
}

impl Inner {
    fn mint_id(&mut self) -> ObjectId {
        self.next_id += 1;
        ObjectId::new(format!("{:08x}", self.next_id))
    }

    fn authors_of(&self, book: &ObjectId) -> Vec<ObjectId> {
        self.edges
            .iter()
            .filter(|(b, _)| b == book)
            .map(|(_, a)| a.clone())
            .collect()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ObjectStore for MemoryStore {
    async fn create_named(
        &self,
        kind: EntityKind,
        name: &str,
    ) -> Result<NamedRecord, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let record = NamedRecord {
            id: inner.mint_id(),
            name: name.to_string(),
        };
        inner.named.entry(kind).or_default().push(record.clone());
        Ok(record)
    }

    async fn list_named(&self, kind: EntityKind) -> Result<Vec<NamedRecord>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.named.get(&kind).cloned().unwrap_or_default())
    }

    async fn find_named(
        &self,
        kind: EntityKind,
        name: &str,
    ) -> Result<Option<NamedRecord>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .named
            .get(&kind)
            .and_then(|records| records.iter().find(|r| r.name == name).cloned()))
    }

    async fn create_book(
        &self,
        title: &str,
        year: i32,
        publisher: &ObjectId,
        genre: &ObjectId,
        isbd: &ObjectId,
    ) -> Result<BookRecord, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let record = BookRecord {
            id: inner.mint_id(),
            title: title.to_string(),
            year,
            publisher: publisher.clone(),
            genre: genre.clone(),
            isbd: isbd.clone(),
        };
        inner.books.push(record.clone());
        Ok(record)
    }

    async fn find_books(&self, query: &BookQuery) -> Result<Vec<BookRecord>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut books: Vec<BookRecord> = inner
            .books
            .iter()
            .filter(|&book| query.matches(book, &inner.authors_of(&book.id)))
            .cloned()
            .collect();
        query.sort(&mut books);
        Ok(books)
    }

    async fn attach_authors(
        &self,
        book: &ObjectId,
        authors: &[ObjectId],
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        for author in authors {
            inner.edges.push((book.clone(), author.clone()));
        }
        Ok(())
    }

    async fn author_edges(&self) -> Result<Vec<(ObjectId, ObjectId)>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.edges.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::CatalogError;
    use crate::models::NewBook;
    use crate::query::TitleOrder;

    fn catalog() -> Catalog<MemoryStore> {
        Catalog::new(MemoryStore::new())
    }

    async fn seed_references(
        catalog: &Catalog<MemoryStore>,
    ) -> (NamedRecord, NamedRecord, NamedRecord) {
        let publisher = catalog
            .create_entity(EntityKind::Publisher, "Penguin")
            .await
            .unwrap();
        let genre = catalog
            .create_entity(EntityKind::Genre, "Fiction")
            .await
            .unwrap();
        let author = catalog
            .create_entity(EntityKind::Author, "Jane Doe")
            .await
            .unwrap();
        (publisher, genre, author)
    }

    fn dune(
        publisher: &NamedRecord,
        genre: &NamedRecord,
        authors: Vec<ObjectId>,
    ) -> NewBook {
        NewBook {
            title: "Dune".to_string(),
            year: 1965,
            isbd: "ISBD-001".to_string(),
            publisher: publisher.id.clone(),
            genre: genre.id.clone(),
            authors,
        }
    }

    #[tokio::test]
    async fn created_entity_shows_up_in_a_subsequent_list() {
        let catalog = catalog();

        for kind in EntityKind::ALL {
            assert!(catalog.list_entities(kind).await.unwrap().is_empty());
        }

        let created = catalog
            .create_entity(EntityKind::Publisher, "Penguin")
            .await
            .unwrap();

        let publishers = catalog.list_entities(EntityKind::Publisher).await.unwrap();
        assert_eq!(publishers.len(), 1);
        assert_eq!(publishers[0], created);
        assert_eq!(publishers[0].name, "Penguin");

        // Other kinds stay untouched.
        assert!(catalog
            .list_entities(EntityKind::Author)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn create_book_links_every_relation() {
        let catalog = catalog();
        let (publisher, genre, author) = seed_references(&catalog).await;

        let details = catalog
            .create_book(dune(&publisher, &genre, vec![author.id.clone()]))
            .await
            .unwrap();

        assert_eq!(details.title, "Dune");
        assert_eq!(details.year, 1965);
        assert_eq!(details.publisher.name, "Penguin");
        assert_eq!(details.genre.name, "Fiction");
        assert_eq!(details.isbd.name, "ISBD-001");
        assert_eq!(details.authors.len(), 1);
        assert_eq!(details.authors[0].name, "Jane Doe");

        // The ISBD record was created fresh as part of the flow.
        let isbds = catalog.list_entities(EntityKind::Isbd).await.unwrap();
        assert_eq!(isbds.len(), 1);
        assert_eq!(isbds[0].name, "ISBD-001");
    }

    #[tokio::test]
    async fn duplicate_isbd_fails_without_writing() {
        let catalog = catalog();
        let (publisher, genre, author) = seed_references(&catalog).await;

        catalog
            .create_book(dune(&publisher, &genre, vec![author.id.clone()]))
            .await
            .unwrap();

        let mut second = dune(&publisher, &genre, vec![]);
        second.title = "Dune Messiah".to_string();
        let err = catalog.create_book(second).await.unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIsbd(ref v) if v == "ISBD-001"));

        // Neither a second ISBD record nor a second book exists.
        assert_eq!(catalog.list_entities(EntityKind::Isbd).await.unwrap().len(), 1);
        let books = catalog.query_books(&BookQuery::default()).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
    }

    #[tokio::test]
    async fn book_fields_are_trimmed_before_storing() {
        let catalog = catalog();
        let (publisher, genre, _) = seed_references(&catalog).await;

        let mut padded = dune(&publisher, &genre, vec![]);
        padded.title = " Dune ".to_string();
        padded.isbd = " ISBD-001 ".to_string();
        let details = catalog.create_book(padded).await.unwrap();
        assert_eq!(details.title, "Dune");
        assert_eq!(details.isbd.name, "ISBD-001");

        // A padded spelling is not a distinct ISBD.
        let err = catalog
            .create_book(dune(&publisher, &genre, vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIsbd(ref v) if v == "ISBD-001"));
    }

    #[tokio::test]
    async fn book_with_no_authors_is_valid() {
        let catalog = catalog();
        let (publisher, genre, _) = seed_references(&catalog).await;

        let details = catalog
            .create_book(dune(&publisher, &genre, vec![]))
            .await
            .unwrap();
        assert!(details.authors.is_empty());

        let books = catalog.query_books(&BookQuery::default()).await.unwrap();
        assert_eq!(books.len(), 1);
        assert!(books[0].authors.is_empty());
    }

    #[tokio::test]
    async fn title_filter_returns_the_matching_book_with_its_authors() {
        let catalog = catalog();
        let (publisher, genre, author) = seed_references(&catalog).await;
        catalog
            .create_book(dune(&publisher, &genre, vec![author.id.clone()]))
            .await
            .unwrap();

        let query = BookQuery {
            title_contains: Some("Dun".to_string()),
            ..Default::default()
        };
        let books = catalog.query_books(&query).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].authors.len(), 1);
        assert_eq!(books[0].authors[0].name, "Jane Doe");

        // Containment is case-sensitive.
        let query = BookQuery {
            title_contains: Some("dun".to_string()),
            ..Default::default()
        };
        assert!(catalog.query_books(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn year_lower_bound_excludes_older_books() {
        let catalog = catalog();
        let (publisher, genre, _) = seed_references(&catalog).await;
        catalog
            .create_book(dune(&publisher, &genre, vec![]))
            .await
            .unwrap();

        let query = BookQuery {
            year_from: Some(1970),
            ..Default::default()
        };
        assert!(catalog.query_books(&query).await.unwrap().is_empty());

        let query = BookQuery {
            year_from: Some(1965),
            ..Default::default()
        };
        assert_eq!(catalog.query_books(&query).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn filters_compose_conjunctively() {
        let catalog = catalog();
        let (publisher, genre, author) = seed_references(&catalog).await;
        let tor = catalog
            .create_entity(EntityKind::Publisher, "Tor")
            .await
            .unwrap();

        catalog
            .create_book(dune(&publisher, &genre, vec![author.id.clone()]))
            .await
            .unwrap();
        catalog
            .create_book(NewBook {
                title: "Duneland Atlas".to_string(),
                year: 1982,
                isbd: "ISBD-002".to_string(),
                publisher: tor.id.clone(),
                genre: genre.id.clone(),
                authors: vec![],
            })
            .await
            .unwrap();

        // Title predicate alone matches both.
        let query = BookQuery {
            title_contains: Some("Dune".to_string()),
            ..Default::default()
        };
        assert_eq!(catalog.query_books(&query).await.unwrap().len(), 2);

        // Adding publisher equality narrows to one.
        let query = BookQuery {
            title_contains: Some("Dune".to_string()),
            publisher: Some(publisher.id.clone()),
            ..Default::default()
        };
        let books = catalog.query_books(&query).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");

        // Adding the author relation filter on top still matches.
        let query = BookQuery {
            title_contains: Some("Dune".to_string()),
            publisher: Some(publisher.id.clone()),
            author: Some(author.id.clone()),
            ..Default::default()
        };
        assert_eq!(catalog.query_books(&query).await.unwrap().len(), 1);

        // A non-satisfiable conjunct empties the result.
        let query = BookQuery {
            title_contains: Some("Dune".to_string()),
            publisher: Some(tor.id.clone()),
            author: Some(author.id.clone()),
            ..Default::default()
        };
        assert!(catalog.query_books(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn isbd_equality_filter_selects_one_book() {
        let catalog = catalog();
        let (publisher, genre, _) = seed_references(&catalog).await;
        catalog
            .create_book(dune(&publisher, &genre, vec![]))
            .await
            .unwrap();
        catalog
            .create_book(NewBook {
                title: "Children of Dune".to_string(),
                year: 1976,
                isbd: "ISBD-002".to_string(),
                publisher: publisher.id.clone(),
                genre: genre.id.clone(),
                authors: vec![],
            })
            .await
            .unwrap();

        let isbds = catalog.list_entities(EntityKind::Isbd).await.unwrap();
        let first = isbds.iter().find(|r| r.name == "ISBD-001").unwrap();

        let query = BookQuery {
            isbd: Some(first.id.clone()),
            ..Default::default()
        };
        let books = catalog.query_books(&query).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
    }

    #[tokio::test]
    async fn cleared_query_returns_everything_ascending_by_title() {
        let catalog = catalog();
        let (publisher, genre, _) = seed_references(&catalog).await;

        for (title, isbd) in [("Zebra", "Z-1"), ("Alpha", "A-1"), ("Mango", "M-1")] {
            catalog
                .create_book(NewBook {
                    title: title.to_string(),
                    year: 2000,
                    isbd: isbd.to_string(),
                    publisher: publisher.id.clone(),
                    genre: genre.id.clone(),
                    authors: vec![],
                })
                .await
                .unwrap();
        }

        let books = catalog.query_books(&BookQuery::default()).await.unwrap();
        let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Alpha", "Mango", "Zebra"]);

        let query = BookQuery {
            order: TitleOrder::Descending,
            ..Default::default()
        };
        let books = catalog.query_books(&query).await.unwrap();
        let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Zebra", "Mango", "Alpha"]);
    }

    #[tokio::test]
    async fn author_filter_follows_the_relation() {
        let catalog = catalog();
        let (publisher, genre, jane) = seed_references(&catalog).await;
        let john = catalog
            .create_entity(EntityKind::Author, "John Roe")
            .await
            .unwrap();

        catalog
            .create_book(dune(&publisher, &genre, vec![jane.id.clone(), john.id.clone()]))
            .await
            .unwrap();
        catalog
            .create_book(NewBook {
                title: "Solo Work".to_string(),
                year: 1990,
                isbd: "ISBD-002".to_string(),
                publisher: publisher.id.clone(),
                genre: genre.id.clone(),
                authors: vec![john.id.clone()],
            })
            .await
            .unwrap();

        let query = BookQuery {
            author: Some(jane.id.clone()),
            ..Default::default()
        };
        let books = catalog.query_books(&query).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");

        let query = BookQuery {
            author: Some(john.id.clone()),
            ..Default::default()
        };
        assert_eq!(catalog.query_books(&query).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_named_probes_exact_names_only() {
        let store = MemoryStore::new();
        store
            .create_named(EntityKind::Isbd, "ISBD-001")
            .await
            .unwrap();

        assert!(store
            .find_named(EntityKind::Isbd, "ISBD-001")
            .await
            .unwrap()
            .is_some());
        assert!(store
            .find_named(EntityKind::Isbd, "ISBD-00")
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_named(EntityKind::Isbd, "isbd-001")
            .await
            .unwrap()
            .is_none());
    }
}
