//! Reference-list cache shared by the form and search screens.
//!
//! The four choice lists (publishers, authors, genres, ISBDs) are fetched once
//! per session by [`ChoicesProvider`] and held in context. Screens read them
//! through [`use_choices`] and call [`refresh_choices`] after creating a
//! record, so invalidation is an explicit contract rather than a re-fetch
//! hidden in render checks.

use dioxus::prelude::*;
use store::{EntityKind, NamedRecord};

use crate::notify::notify_error;

/// The cached reference lists plus a loading flag for the whole cache.
#[derive(Clone, Debug, PartialEq)]
pub struct ChoiceLists {
    pub publishers: Vec<NamedRecord>,
    pub authors: Vec<NamedRecord>,
    pub genres: Vec<NamedRecord>,
    pub isbds: Vec<NamedRecord>,
    pub loading: bool,
}

impl Default for ChoiceLists {
    fn default() -> Self {
        Self {
            publishers: Vec::new(),
            authors: Vec::new(),
            genres: Vec::new(),
            isbds: Vec::new(),
            loading: true,
        }
    }
}

impl ChoiceLists {
    pub fn list(&self, kind: EntityKind) -> &[NamedRecord] {
        match kind {
            EntityKind::Publisher => &self.publishers,
            EntityKind::Author => &self.authors,
            EntityKind::Genre => &self.genres,
            EntityKind::Isbd => &self.isbds,
        }
    }

    fn set_list(&mut self, kind: EntityKind, records: Vec<NamedRecord>) {
        match kind {
            EntityKind::Publisher => self.publishers = records,
            EntityKind::Author => self.authors = records,
            EntityKind::Genre => self.genres = records,
            EntityKind::Isbd => self.isbds = records,
        }
    }
}

/// Get the cached choice lists.
/// Returns a signal that updates when the cache is refreshed.
pub fn use_choices() -> Signal<ChoiceLists> {
    use_context::<Signal<ChoiceLists>>()
}

/// Re-fetch every reference list from the store. A failure surfaces the error
/// and aborts the remaining fetches; lists loaded before the failure are kept.
pub async fn refresh_choices(mut choices: Signal<ChoiceLists>) {
    choices.write().loading = true;
    for kind in EntityKind::ALL {
        match api::list_entities(kind.as_str().to_string()).await {
            Ok(records) => choices.write().set_list(kind, records),
            Err(e) => {
                notify_error(&e.to_string());
                break;
            }
        }
    }
    choices.write().loading = false;
}

/// Provider component that loads and owns the reference-list cache.
/// Wrap the app with this component so every screen shares one cache.
#[component]
pub fn ChoicesProvider(children: Element) -> Element {
    let choices = use_signal(ChoiceLists::default);

    // Fetch all four lists on mount
    let _loader = use_resource(move || refresh_choices(choices));

    use_context_provider(|| choices);

    rsx! {
        {children}
    }
}
