//! Filter state and the evaluator that narrows the company list.

use serde::{Deserialize, Serialize};

use super::entities::Company;

/// Facet value standing for "every sector".
pub const ALL_SECTORS: &str = "tous";
/// Facet value standing for "every region".
pub const ALL_REGIONS: &str = "toutes";

/// A facet choice: either the sentinel or one exact label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Maps a raw facet value (as listed by the facet extractor) to a selection.
    pub fn from_value(value: &str, sentinel: &str) -> Self {
        if value == sentinel {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Raw facet value for this selection, suitable for a `<select>` value.
    pub fn as_value<'a>(&'a self, sentinel: &'a str) -> &'a str {
        match self {
            Self::All => sentinel,
            Self::Only(value) => value.as_str(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Current search criteria. Always replaced as a whole; the `with_*`
/// methods return a new value and leave `self` untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub sector: Selection,
    pub region: Selection,
}

impl FilterState {
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    pub fn with_sector(&self, value: &str) -> Self {
        Self {
            sector: Selection::from_value(value, ALL_SECTORS),
            ..self.clone()
        }
    }

    pub fn with_region(&self, value: &str) -> Self {
        Self {
            region: Selection::from_value(value, ALL_REGIONS),
            ..self.clone()
        }
    }

    pub fn sector_value(&self) -> &str {
        self.sector.as_value(ALL_SECTORS)
    }

    pub fn region_value(&self) -> &str {
        self.region.as_value(ALL_REGIONS)
    }

    /// True when no criterion narrows the list.
    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.sector.is_all() && self.region.is_all()
    }
}

#[cfg(test)]
impl FilterState {
    /// Builds a state from raw select values, recognising the sentinels.
    pub fn from_values(query: &str, sector: &str, region: &str) -> Self {
        Self::default()
            .with_query(query)
            .with_sector(sector)
            .with_region(region)
    }
}

/// Lower-cased searchable text of one company.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoldedText {
    pub name: String,
    pub description: String,
}

impl FoldedText {
    pub fn new(company: &Company) -> Self {
        Self {
            name: fold(&company.name),
            description: fold(&company.description),
        }
    }
}

fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// A filter state prepared for repeated matching: the query is folded once.
#[derive(Clone, Debug)]
pub struct CompiledFilter<'a> {
    needle: Option<String>,
    sector: Option<&'a str>,
    region: Option<&'a str>,
}

impl<'a> CompiledFilter<'a> {
    pub fn new(filters: &'a FilterState) -> Self {
        Self {
            needle: (!filters.query.is_empty()).then(|| fold(&filters.query)),
            sector: filters.sector.label(),
            region: filters.region.label(),
        }
    }

    pub fn matches(&self, company: &Company) -> bool {
        if !self.matches_facets(company) {
            return false;
        }
        match &self.needle {
            None => true,
            Some(needle) => {
                fold(&company.name).contains(needle.as_str())
                    || fold(&company.description).contains(needle.as_str())
            }
        }
    }

    /// Same as [`matches`](Self::matches) but reuses pre-folded text.
    pub fn matches_folded(&self, company: &Company, text: &FoldedText) -> bool {
        if !self.matches_facets(company) {
            return false;
        }
        match &self.needle {
            None => true,
            Some(needle) => {
                text.name.contains(needle.as_str()) || text.description.contains(needle.as_str())
            }
        }
    }

    fn matches_facets(&self, company: &Company) -> bool {
        if let Some(sector) = self.sector {
            if !company.has_sector(sector) {
                return false;
            }
        }
        if let Some(region) = self.region {
            if company.headquarters != region {
                return false;
            }
        }
        true
    }
}

/// Returns the companies matching every active criterion, in input order.
pub fn evaluate<'a>(companies: &'a [Company], filters: &FilterState) -> Vec<&'a Company> {
    evaluate_with_text(companies, None, filters)
}

/// [`evaluate`], reusing pre-folded search text where `folded[i]` belongs to
/// `companies[i]`. Companies without an entry are folded on the fly.
pub fn evaluate_with_text<'a>(
    companies: &'a [Company],
    folded: Option<&[FoldedText]>,
    filters: &FilterState,
) -> Vec<&'a Company> {
    let filter = CompiledFilter::new(filters);
    companies
        .iter()
        .enumerate()
        .filter(|(index, company)| match folded.and_then(|texts| texts.get(*index)) {
            Some(text) => filter.matches_folded(company, text),
            None => filter.matches(company),
        })
        .map(|(_, company)| company)
        .collect()
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    const SECTORS: &[&str] = &["Transport", "Services", "Offshore", "Pêche", "Réparation navale"];
    const REGIONS: &[&str] = &["Alger", "Oran", "Annaba", "Béjaïa", "Skikda"];

    fn any_company() -> impl Strategy<Value = Company> {
        (
            "[A-Za-zé ]{1,12}",
            "[A-Za-zé ]{0,24}",
            prop::sample::subsequence(SECTORS.to_vec(), 0..=3),
            prop::sample::select(REGIONS.to_vec()),
        )
            .prop_map(|(name, description, sectors, region)| {
                Company::new(name, description, &sectors, region)
            })
    }

    fn filter_state() -> impl Strategy<Value = FilterState> {
        let sector = prop_oneof![
            Just(ALL_SECTORS.to_string()),
            prop::sample::select(SECTORS.to_vec()).prop_map(str::to_string),
        ];
        let region = prop_oneof![
            Just(ALL_REGIONS.to_string()),
            prop::sample::select(REGIONS.to_vec()).prop_map(str::to_string),
        ];
        ("[a-zé]{0,3}", sector, region)
            .prop_map(|(query, sector, region)| FilterState::from_values(&query, &sector, &region))
    }

    proptest! {
        #[test]
        fn evaluation_is_idempotent(companies in prop::collection::vec(any_company(), 0..16), filters in filter_state()) {
            prop_assert_eq!(evaluate(&companies, &filters), evaluate(&companies, &filters));
        }

        #[test]
        fn default_filters_pass_everything_through(companies in prop::collection::vec(any_company(), 0..16)) {
            let result: Vec<Company> = evaluate(&companies, &FilterState::default())
                .into_iter()
                .cloned()
                .collect();
            prop_assert_eq!(result, companies);
        }

        #[test]
        fn adding_a_query_only_narrows(
            companies in prop::collection::vec(any_company(), 0..16),
            filters in filter_state(),
            query in "[a-zé]{1,3}",
        ) {
            let broad = filters.with_query("");
            let narrow = filters.with_query(query);
            let broad_result = evaluate(&companies, &broad);
            for company in evaluate(&companies, &narrow) {
                prop_assert!(broad_result.iter().any(|c| std::ptr::eq(*c, company)));
            }
        }

        #[test]
        fn evaluation_preserves_input_order(companies in prop::collection::vec(any_company(), 0..16), filters in filter_state()) {
            let positions: Vec<usize> = evaluate(&companies, &filters)
                .into_iter()
                .map(|found| companies.iter().position(|c| std::ptr::eq(c, found)).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        }

        #[test]
        fn folded_matching_agrees_with_plain_matching(company in any_company(), filters in filter_state()) {
            let compiled = CompiledFilter::new(&filters);
            prop_assert_eq!(
                compiled.matches(&company),
                compiled.matches_folded(&company, &FoldedText::new(&company))
            );
        }
    }
}
