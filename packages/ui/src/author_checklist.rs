use dioxus::prelude::*;
use store::{NamedRecord, ObjectId};

/// Multi-select toggle over the author list, rendered as checkboxes.
#[component]
pub fn AuthorChecklist(
    authors: Vec<NamedRecord>,
    selected: Vec<ObjectId>,
    on_toggle: EventHandler<ObjectId>,
) -> Element {
    rsx! {
        h3 { class: "subheading", "Author(s)" }
        div {
            class: "checkbox-group",
            for author in &authors {
                label {
                    key: "{author.id}",
                    class: "checkbox-item",
                    span { class: "checkbox-text", "{author.name}" }
                    input {
                        r#type: "checkbox",
                        checked: selected.contains(&author.id),
                        onchange: {
                            let id = author.id.clone();
                            move |_| on_toggle.call(id.clone())
                        },
                    }
                }
            }
        }
    }
}
