pub mod catalog;
pub mod error;
pub mod models;
pub mod query;

mod memory;
pub use memory::MemoryStore;

pub use catalog::{Catalog, ObjectStore};
pub use error::{CatalogError, StoreError};
pub use models::{BookDetails, BookRecord, EntityKind, NamedRecord, NewBook, ObjectId};
pub use query::{BookQuery, TitleOrder};
