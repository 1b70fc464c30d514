use dioxus::prelude::*;

use crate::util::version::{version_label, APP_DESCRIPTION, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        document::Title { "{APP_NAME}" }
        document::Meta { name: "description", content: APP_DESCRIPTION }
        div {
            lang: "fr",
            {children}
            footer {
                class: "footer",
                p { "{APP_DESCRIPTION}" }
                p { "{version}" }
            }
        }
    }
}
