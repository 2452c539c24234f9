use dioxus::prelude::*;

/// Header strip shown on every screen. Children are the screen's navigation
/// buttons.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        div {
            class: "header",
            p { class: "header-text-bold", "Bookshelf" }
            p { class: "header-text", "Book Catalog" }
            div {
                class: "navbar",
                {children}
            }
        }
    }
}
