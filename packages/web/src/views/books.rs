use dioxus::prelude::*;

use store::{BookDetails, BookQuery, ObjectId, TitleOrder};
use ui::{
    notify_error, parse_year_bound, use_choices, BookCard, EntityRadioGroup, Navbar,
};

use crate::Route;

/// The list/search screen: the full filter panel on the right, query results
/// on the left.
#[component]
pub fn Books() -> Element {
    let mut queried_books = use_signal(Vec::<BookDetails>::new);
    let mut query_title = use_signal(String::new);
    let mut query_ordering = use_signal(|| TitleOrder::Ascending);
    let mut query_year_from = use_signal(String::new);
    let mut query_year_to = use_signal(String::new);
    let mut query_publisher = use_signal(|| Option::<ObjectId>::None);
    let mut query_genre = use_signal(|| Option::<ObjectId>::None);
    let mut query_author = use_signal(|| Option::<ObjectId>::None);
    let mut query_isbd = use_signal(|| Option::<ObjectId>::None);
    // Request token: only the newest in-flight query may publish its results,
    // so a slow older response cannot overwrite a newer one.
    let mut query_seq = use_signal(|| 0u64);
    let nav = use_navigator();
    let choices = use_choices();

    let mut run_query = move |query: BookQuery| {
        // Peek: minting a token must not subscribe the caller (the mount-time
        // loader in particular) to the token signal it is about to bump.
        let token = *query_seq.peek() + 1;
        query_seq.set(token);
        spawn(async move {
            match api::query_books(query).await {
                Ok(books) => {
                    if *query_seq.peek() == token {
                        queried_books.set(books);
                    }
                }
                Err(e) => {
                    if *query_seq.peek() == token {
                        notify_error(&e.to_string());
                    }
                }
            }
        });
    };

    // Initial unfiltered query on mount
    let _loader = use_resource(move || async move {
        run_query(BookQuery::default());
    });

    let build_query = move || -> Result<BookQuery, String> {
        let title = query_title();
        Ok(BookQuery {
            order: query_ordering(),
            title_contains: if title.is_empty() { None } else { Some(title) },
            year_from: parse_year_bound(&query_year_from())?,
            year_to: parse_year_bound(&query_year_to())?,
            publisher: query_publisher(),
            genre: query_genre(),
            isbd: query_isbd(),
            author: query_author(),
        })
    };

    let handle_query = move |_| match build_query() {
        Ok(query) => run_query(query),
        Err(msg) => notify_error(&msg),
    };

    let handle_clear = move |_| {
        query_title.set(String::new());
        query_ordering.set(TitleOrder::Ascending);
        query_year_from.set(String::new());
        query_year_to.set(String::new());
        query_publisher.set(None);
        query_genre.set(None);
        query_author.set(None);
        query_isbd.set(None);
        run_query(BookQuery::default());
    };

    let lists = choices();

    rsx! {
        Navbar {
            button {
                class: "heading-button",
                onclick: move |_| { nav.push(Route::CreateEntity { kind: "Publisher".to_string() }); },
                "ADD PUBLISHER"
            }
            button {
                class: "heading-button",
                onclick: move |_| { nav.push(Route::CreateEntity { kind: "Genre".to_string() }); },
                "ADD GENRE"
            }
            button {
                class: "heading-button",
                onclick: move |_| { nav.push(Route::CreateEntity { kind: "Author".to_string() }); },
                "ADD AUTHOR"
            }
            button {
                class: "heading-button",
                onclick: move |_| { nav.push(Route::CreateBook {}); },
                "ADD BOOK"
            }
        }
        div {
            class: "container",
            h2 { class: "heading", "Book List" }
            div {
                class: "flex-between",
                div {
                    class: "flex-child",
                    for book in queried_books() {
                        BookCard { key: "{book.id}", book: book.clone() }
                    }
                    if queried_books().is_empty() {
                        p { "No books here!" }
                    }
                }
                div {
                    class: "flex-child",
                    h3 { class: "subheading", "Search" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Book Title",
                        value: query_title(),
                        oninput: move |evt| query_title.set(evt.value()),
                    }

                    h3 { class: "subheading", "Ordering" }
                    div {
                        class: "radio-group",
                        label {
                            class: "radio-item",
                            input {
                                r#type: "radio",
                                name: "ordering",
                                checked: query_ordering() == TitleOrder::Ascending,
                                onchange: move |_| query_ordering.set(TitleOrder::Ascending),
                            }
                            span { "Title A-Z" }
                        }
                        label {
                            class: "radio-item",
                            input {
                                r#type: "radio",
                                name: "ordering",
                                checked: query_ordering() == TitleOrder::Descending,
                                onchange: move |_| query_ordering.set(TitleOrder::Descending),
                            }
                            span { "Title Z-A" }
                        }
                    }

                    h3 { class: "subheading", "Publishing Year" }
                    div {
                        class: "flex-between",
                        input {
                            class: "form-input flex-child-form",
                            r#type: "text",
                            placeholder: "Year from",
                            value: query_year_from(),
                            oninput: move |evt| query_year_from.set(evt.value()),
                        }
                        input {
                            class: "form-input flex-child-form",
                            r#type: "text",
                            placeholder: "Year to",
                            value: query_year_to(),
                            oninput: move |evt| query_year_to.set(evt.value()),
                        }
                    }

                    EntityRadioGroup {
                        label: "Publisher",
                        options: lists.publishers.clone(),
                        selected: query_publisher(),
                        on_select: move |id| query_publisher.set(Some(id)),
                    }
                    EntityRadioGroup {
                        label: "Genre",
                        options: lists.genres.clone(),
                        selected: query_genre(),
                        on_select: move |id| query_genre.set(Some(id)),
                    }
                    EntityRadioGroup {
                        label: "Author",
                        options: lists.authors.clone(),
                        selected: query_author(),
                        on_select: move |id| query_author.set(Some(id)),
                    }
                    EntityRadioGroup {
                        label: "ISBDs",
                        options: lists.isbds.clone(),
                        selected: query_isbd(),
                        on_select: move |id| query_isbd.set(Some(id)),
                    }

                    div {
                        class: "form-buttons",
                        button { class: "primary", onclick: handle_query, "QUERY" }
                        button {
                            class: "secondary",
                            onclick: handle_clear,
                            "CLEAR QUERY CHOICES"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use dioxus::prelude::*;

    static LOADER_RUNS: AtomicUsize = AtomicUsize::new(0);

    /// Mirrors the list screen's mount-time loader: a resource that mints a
    /// request token and fires a query. Reading the token signal inside the
    /// resource would subscribe it to its own bump and re-run it forever, so
    /// the token must be peeked, not read.
    #[component]
    fn Loader() -> Element {
        let mut query_seq = use_signal(|| 0u64);
        let mut run_query = move || {
            let token = *query_seq.peek() + 1;
            query_seq.set(token);
            LOADER_RUNS.fetch_add(1, Ordering::SeqCst);
        };
        let _loader = use_resource(move || async move {
            run_query();
        });
        rsx! { div {} }
    }

    #[tokio::test]
    async fn mount_time_query_runs_exactly_once() {
        let mut dom = VirtualDom::new(Loader);
        dom.rebuild_in_place();

        // Pump the scheduler until it goes idle. A loader that re-triggers
        // itself keeps producing work and racks up extra runs here.
        for _ in 0..10 {
            let worked =
                tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            if worked.is_err() {
                break;
            }
            dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);
        }

        assert_eq!(LOADER_RUNS.load(Ordering::SeqCst), 1);
    }
}
