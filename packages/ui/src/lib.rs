//! This crate contains all shared UI for the workspace.

mod choices;
pub use choices::{refresh_choices, use_choices, ChoiceLists, ChoicesProvider};

mod notify;
pub use notify::{notify_error, notify_success};

mod input;
pub use input::parse_year_bound;

mod navbar;
pub use navbar::Navbar;

mod entity_radio;
pub use entity_radio::EntityRadioGroup;

mod author_checklist;
pub use author_checklist::AuthorChecklist;

mod book_card;
pub use book_card::BookCard;
