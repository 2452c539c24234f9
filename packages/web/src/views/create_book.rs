use dioxus::prelude::*;

use store::{NewBook, ObjectId};
use ui::{
    notify_error, notify_success, parse_year_bound, refresh_choices, use_choices,
    AuthorChecklist, EntityRadioGroup, Navbar,
};

use crate::Route;

#[component]
pub fn CreateBook() -> Element {
    let mut book_title = use_signal(String::new);
    let mut book_year = use_signal(String::new);
    let mut book_isbd = use_signal(String::new);
    let mut book_publisher = use_signal(|| Option::<ObjectId>::None);
    let mut book_genre = use_signal(|| Option::<ObjectId>::None);
    let mut book_authors = use_signal(Vec::<ObjectId>::new);
    let nav = use_navigator();
    let choices = use_choices();

    let handle_toggle_author = move |author: ObjectId| {
        let mut selected = book_authors();
        if selected.contains(&author) {
            selected.retain(|a| *a != author);
        } else {
            selected.push(author);
        }
        book_authors.set(selected);
    };

    let handle_create = move |_| {
        let title = book_title().trim().to_string();
        if title.is_empty() {
            notify_error("Title is required");
            return;
        }
        let year = match parse_year_bound(&book_year()) {
            Ok(Some(year)) => year,
            Ok(None) => {
                notify_error("Publishing year is required");
                return;
            }
            Err(msg) => {
                notify_error(&msg);
                return;
            }
        };
        let isbd = book_isbd().trim().to_string();
        if isbd.is_empty() {
            notify_error("ISBD is required");
            return;
        }
        let Some(publisher) = book_publisher() else {
            notify_error("Choose a publisher");
            return;
        };
        let Some(genre) = book_genre() else {
            notify_error("Choose a genre");
            return;
        };
        let authors = book_authors();

        spawn(async move {
            let book = NewBook {
                title,
                year,
                isbd,
                publisher,
                genre,
                authors,
            };
            match api::create_book(book).await {
                Ok(_) => {
                    // The flow created a fresh ISBD record; refresh the cache
                    // so the list screen's ISBD filter can offer it.
                    refresh_choices(choices).await;
                    notify_success("Success!");
                    nav.push(Route::Books {});
                }
                Err(e) => notify_error(&e.to_string()),
            }
        });
    };

    let lists = choices();

    rsx! {
        Navbar {
            button {
                class: "heading-button",
                onclick: move |_| { nav.push(Route::Books {}); },
                "BOOK LIST"
            }
        }
        div {
            class: "container",
            h2 { class: "heading", "New Book" }
            input {
                class: "form-input",
                r#type: "text",
                placeholder: "Title",
                value: book_title(),
                oninput: move |evt| book_title.set(evt.value()),
            }
            input {
                class: "form-input",
                r#type: "text",
                placeholder: "Publishing Year",
                value: book_year(),
                oninput: move |evt| book_year.set(evt.value()),
            }
            input {
                class: "form-input",
                r#type: "text",
                placeholder: "ISBD",
                value: book_isbd(),
                oninput: move |evt| book_isbd.set(evt.value()),
            }

            EntityRadioGroup {
                label: "Publisher",
                options: lists.publishers.clone(),
                selected: book_publisher(),
                on_select: move |id| book_publisher.set(Some(id)),
            }
            EntityRadioGroup {
                label: "Genre",
                options: lists.genres.clone(),
                selected: book_genre(),
                on_select: move |id| book_genre.set(Some(id)),
            }
            AuthorChecklist {
                authors: lists.authors.clone(),
                selected: book_authors(),
                on_toggle: handle_toggle_author,
            }

            div {
                class: "form-buttons",
                button { class: "primary", onclick: handle_create, "CREATE BOOK" }
            }
        }
    }
}
