//! Directory page: search field, facet selects and the company grid.

use dioxus::prelude::*;

use crate::domain::{Company, DirectoryState, Facets, FilterState, ALL_REGIONS, ALL_SECTORS};
use crate::ui::components::{company_card::CompanyCard, facet_select::FacetSelect};
use crate::util::version::APP_NAME;

#[component]
pub fn DirectoryPage() -> Element {
    let mut state = use_context::<Signal<DirectoryState>>();

    let facets = use_memo(move || state.read().facets());
    let filters = use_memo(move || state.read().filters().clone());
    let results = use_memo(move || {
        state
            .read()
            .results()
            .into_iter()
            .cloned()
            .collect::<Vec<Company>>()
    });
    let summary = use_memo(move || state.read().summary());

    let Facets { sectors, regions } = facets();
    let current = filters();
    let active_sector = current.sector.label().map(str::to_string);
    let summary = summary();
    let count_label = summary.label();
    let ratio = summary.ratio();

    rsx! {
        main {
            class: "page",
            section {
                class: "hero",
                div {
                    h1 { class: "hero-title", "{APP_NAME}" }
                    p {
                        class: "hero-subtitle",
                        "Explorez les entreprises algériennes connectées à la mer, du transport aux services portuaires en passant par l'offshore."
                    }
                }
                div {
                    class: "filters",
                    label {
                        class: "filter-field",
                        span { class: "filter-label", "Recherche" }
                        input {
                            class: "filter-input",
                            r#type: "text",
                            placeholder: "Nom, activité ou description…",
                            value: "{current.query}",
                            oninput: move |event: Event<FormData>| {
                                apply_filters(state, |f| f.with_query(event.value()));
                            },
                        }
                    }
                    FacetSelect {
                        label: "Secteur",
                        options: sectors,
                        value: current.sector_value().to_string(),
                        sentinel: ALL_SECTORS,
                        sentinel_caption: "Tous les secteurs",
                        on_change: move |value: String| apply_filters(state, |f| f.with_sector(&value)),
                    }
                    FacetSelect {
                        label: "Région",
                        options: regions,
                        value: current.region_value().to_string(),
                        sentinel: ALL_REGIONS,
                        sentinel_caption: "Toutes les wilayas",
                        on_change: move |value: String| apply_filters(state, |f| f.with_region(&value)),
                    }
                    button {
                        class: "reset-button",
                        disabled: current.is_default(),
                        onclick: move |_| state.with_mut(|st| st.reset_filters()),
                        "Réinitialiser"
                    }
                }
                p {
                    class: "result-count",
                    "{count_label}"
                    if !summary.is_unfiltered() {
                        span { class: "result-ratio", " ({ratio})" }
                    }
                }
            }

            if summary.total == 0 {
                div {
                    class: "empty-state",
                    p { "L'annuaire est vide pour le moment." }
                }
            } else if summary.is_empty() {
                div {
                    class: "empty-state",
                    p { "Aucune entreprise ne correspond à ces critères." }
                }
            } else {
                section {
                    class: "grid",
                    for company in results() {
                        CompanyCard {
                            key: "{company.name}",
                            company: company.clone(),
                            active_sector: active_sector.clone(),
                        }
                    }
                }
            }
        }
    }
}

/// Derives the next filter state from the current one and swaps it in.
fn apply_filters(
    mut state: Signal<DirectoryState>,
    edit: impl FnOnce(&FilterState) -> FilterState,
) {
    state.with_mut(|st| {
        let next = edit(st.filters());
        st.replace_filters(next);
    });
}
