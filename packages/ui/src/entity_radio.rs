use dioxus::prelude::*;
use store::{NamedRecord, ObjectId};

/// Single-select list over one reference kind, rendered as a radio group.
#[component]
pub fn EntityRadioGroup(
    label: String,
    options: Vec<NamedRecord>,
    selected: Option<ObjectId>,
    on_select: EventHandler<ObjectId>,
) -> Element {
    rsx! {
        h3 { class: "subheading", "{label}" }
        div {
            class: "radio-group",
            for record in &options {
                label {
                    key: "{record.id}",
                    class: "radio-item",
                    input {
                        r#type: "radio",
                        name: "{label}",
                        checked: selected.as_ref() == Some(&record.id),
                        onchange: {
                            let id = record.id.clone();
                            move |_| on_select.call(id.clone())
                        },
                    }
                    span { "{record.name}" }
                }
            }
        }
    }
}
