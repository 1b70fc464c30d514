use dioxus::prelude::*;

/// A `<select>` over facet values; the sentinel entry gets its own caption.
#[component]
pub fn FacetSelect(
    label: &'static str,
    options: Vec<String>,
    value: String,
    sentinel: &'static str,
    sentinel_caption: &'static str,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "filter-field",
            span { class: "filter-label", "{label}" }
            select {
                class: "filter-input",
                value: "{value}",
                onchange: move |event: Event<FormData>| on_change.call(event.value()),
                for choice in options {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: choice == value,
                        if choice == sentinel { "{sentinel_caption}" } else { "{choice}" }
                    }
                }
            }
        }
    }
}
