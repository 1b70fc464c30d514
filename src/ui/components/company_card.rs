use dioxus::prelude::*;

use super::sector_badge::SectorBadge;
use crate::domain::Company;

#[component]
pub fn CompanyCard(company: Company, active_sector: Option<String>) -> Element {
    let website = company.website_link().map(str::to_string);

    rsx! {
        article {
            class: "card",
            header {
                h2 { class: "card-title", "{company.name}" }
                p { class: "card-region", "{company.headquarters}" }
            }
            p { class: "card-description", "{company.description}" }
            div {
                class: "badge-row",
                for sector in company.sectors.iter() {
                    SectorBadge {
                        key: "{sector}",
                        label: sector.clone(),
                        highlighted: active_sector.as_deref() == Some(sector.as_str()),
                    }
                }
            }
            if let Some(url) = website {
                a {
                    class: "link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noreferrer",
                    "Consulter le site"
                }
            } else {
                span { class: "link-disabled", "Site non communiqué" }
            }
        }
    }
}
