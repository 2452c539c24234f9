//! Query model for the book list.
//!
//! A [`BookQuery`] is the composed filter state of the search screen. Every
//! predicate is optional; absent predicates are simply not applied, and all
//! applied predicates compose conjunctively. Year bounds are `Option<i32>` so
//! that "no bound" stays distinguishable from an actual zero bound.

use serde::{Deserialize, Serialize};

use crate::models::{BookRecord, ObjectId};

/// Result ordering, always keyed on the book title.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleOrder {
    #[default]
    Ascending,
    Descending,
}

/// Composed filter over book records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookQuery {
    pub order: TitleOrder,
    /// Case-sensitive substring match on the title.
    pub title_contains: Option<String>,
    /// Inclusive lower bound on the publishing year.
    pub year_from: Option<i32>,
    /// Inclusive upper bound on the publishing year.
    pub year_to: Option<i32>,
    pub publisher: Option<ObjectId>,
    pub genre: Option<ObjectId>,
    pub isbd: Option<ObjectId>,
    /// Membership test against the book's authors relation.
    pub author: Option<ObjectId>,
}

impl BookQuery {
    /// Evaluate every applied predicate against one book. `book_authors` is
    /// the book's related author set from the relation table.
    pub fn matches(&self, book: &BookRecord, book_authors: &[ObjectId]) -> bool {
        if let Some(ref needle) = self.title_contains {
            if !book.title.contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(from) = self.year_from {
            if book.year < from {
                return false;
            }
        }
        if let Some(to) = self.year_to {
            if book.year > to {
                return false;
            }
        }
        if let Some(ref publisher) = self.publisher {
            if book.publisher != *publisher {
                return false;
            }
        }
        if let Some(ref genre) = self.genre {
            if book.genre != *genre {
                return false;
            }
        }
        if let Some(ref isbd) = self.isbd {
            if book.isbd != *isbd {
                return false;
            }
        }
        if let Some(ref author) = self.author {
            if !book_authors.contains(author) {
                return false;
            }
        }
        true
    }

    /// Sort a result set by title in this query's order.
    pub fn sort(&self, books: &mut [BookRecord]) {
        match self.order {
            TitleOrder::Ascending => books.sort_by(|a, b| a.title.cmp(&b.title)),
            TitleOrder::Descending => books.sort_by(|a, b| b.title.cmp(&a.title)),
        }
    }
}
