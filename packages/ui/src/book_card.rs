use dioxus::prelude::*;
use store::BookDetails;

/// One book in the list: title plus a single description line with the
/// resolved publisher, year, ISBD, genre, and author names.
#[component]
pub fn BookCard(book: BookDetails) -> Element {
    let authors = book
        .authors
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        div {
            class: "book",
            p { class: "book-title", "{book.title}" }
            p {
                class: "book-description",
                "Publisher: {book.publisher.name}, Year: {book.year}, ISBD: {book.isbd.name}, Genre: {book.genre.name}, Author(s): {authors}"
            }
        }
    }
}
