use dioxus::prelude::*;

use store::EntityKind;
use ui::{notify_error, notify_success, refresh_choices, use_choices, Navbar};

use crate::Route;

/// Creation form for one reference entity, parameterized by the kind name in
/// the route (`/create-object/Publisher` etc.).
#[component]
pub fn CreateEntity(kind: String) -> Element {
    let mut name = use_signal(String::new);
    let nav = use_navigator();
    let choices = use_choices();

    let Some(entity_kind) = EntityKind::parse(&kind) else {
        return rsx! {
            Navbar {
                button {
                    class: "heading-button",
                    onclick: move |_| { nav.push(Route::Books {}); },
                    "BOOK LIST"
                }
            }
            div {
                class: "container",
                h2 { class: "heading", "Unknown entity kind: {kind}" }
            }
        };
    };

    let handle_create = move |_| {
        let value = name().trim().to_string();
        if value.is_empty() {
            notify_error("Name is required");
            return;
        }
        spawn(async move {
            match api::create_entity(entity_kind.as_str().to_string(), value).await {
                Ok(_) => {
                    // Keep the shared choice cache current before landing on
                    // the list screen.
                    refresh_choices(choices).await;
                    notify_success("Success!");
                    nav.push(Route::Books {});
                }
                Err(e) => notify_error(&e.to_string()),
            }
        });
    };

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
            h2 { class: "heading", "New {entity_kind}" }
            input {
                class: "form-input",
                r#type: "text",
                placeholder: "Name",
                value: name(),
                oninput: move |evt| name.set(evt.value()),
            }
            div {
                class: "form-buttons",
                button { class: "primary", onclick: handle_create, "CREATE" }
            }
        }
    }
}
