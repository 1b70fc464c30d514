use dioxus::prelude::*;

#[component]
pub fn SectorBadge(label: String, highlighted: bool) -> Element {
    let class = if highlighted { "badge badge-active" } else { "badge" };

    rsx! {
        span { class: "{class}", "{label}" }
    }
}
