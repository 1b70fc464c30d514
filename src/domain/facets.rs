//! Facet extraction: the selectable sector and region values.

use std::collections::BTreeSet;

use super::collation;
use super::entities::Company;
use super::filter::{ALL_REGIONS, ALL_SECTORS};

/// Sentinel followed by every distinct sector label, in display order.
pub fn extract_sectors(companies: &[Company]) -> Vec<String> {
    facet_values(
        ALL_SECTORS,
        companies
            .iter()
            .flat_map(|company| company.sectors.iter().map(String::as_str)),
    )
}

/// Sentinel followed by every distinct headquarters region, in display order.
pub fn extract_regions(companies: &[Company]) -> Vec<String> {
    facet_values(
        ALL_REGIONS,
        companies
            .iter()
            .map(|company| company.headquarters.as_str()),
    )
}

fn facet_values<'a>(sentinel: &str, values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let distinct: BTreeSet<&str> = values.collect();
    let mut sorted: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    collation::sort_labels(&mut sorted);

    let mut facet = Vec::with_capacity(sorted.len() + 1);
    facet.push(sentinel.to_string());
    facet.extend(sorted);
    facet
}

/// Both facet lists for one collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facets {
    pub sectors: Vec<String>,
    pub regions: Vec<String>,
}

impl Facets {
    pub fn extract(companies: &[Company]) -> Self {
        Self {
            sectors: extract_sectors(companies),
            regions: extract_regions(companies),
        }
    }
}

impl Default for Facets {
    fn default() -> Self {
        Self::extract(&[])
    }
}

/// Memoized facets, keyed by the revision of the collection they were built from.
///
/// Only a new collection revision invalidates the entry.
#[derive(Clone, Debug, Default)]
pub struct FacetCache {
    entry: Option<(u64, Facets)>,
}

impl FacetCache {
    pub fn get_or_extract(&mut self, revision: u64, companies: &[Company]) -> &Facets {
        let stale = self
            .entry
            .as_ref()
            .map(|(cached, _)| *cached != revision)
            .unwrap_or(true);
        if stale {
            tracing::debug!(revision, companies = companies.len(), "extracting facets");
            self.entry = Some((revision, Facets::extract(companies)));
        }
        let (_, facets) = self.entry.get_or_insert_with(|| (revision, Facets::default()));
        facets
    }

    /// Cached facets, if they were built for `revision`.
    pub fn get(&self, revision: u64) -> Option<&Facets> {
        self.entry
            .as_ref()
            .filter(|(cached, _)| *cached == revision)
            .map(|(_, facets)| facets)
    }

    pub fn revision(&self) -> Option<u64> {
        self.entry.as_ref().map(|(revision, _)| *revision)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Vec<Company> {
        vec![
            Company::new("Alpha Marine", "transport", &["Transport"], "Alger"),
            Company::new("Beta Port", "services portuaires", &["Services"], "Oran"),
            Company::new("Gamma", "", &["Services", "Éolien offshore"], "Annaba"),
            Company::new("Delta", "", &["Transport"], "Béjaïa"),
        ]
    }

    #[test]
    fn empty_collection_yields_only_sentinels() {
        assert_eq!(extract_sectors(&[]), vec!["tous"]);
        assert_eq!(extract_regions(&[]), vec!["toutes"]);
    }

    #[test]
    fn sectors_are_distinct_and_sorted() {
        assert_eq!(
            extract_sectors(&sample()),
            vec!["tous", "Éolien offshore", "Services", "Transport"]
        );
    }

    #[test]
    fn regions_are_distinct_and_sorted() {
        assert_eq!(
            extract_regions(&sample()),
            vec!["toutes", "Alger", "Annaba", "Béjaïa", "Oran"]
        );
    }

    #[test]
    fn labels_differing_only_by_case_stay_distinct() {
        let companies = vec![
            Company::new("A", "", &["port"], "Oran"),
            Company::new("B", "", &["Port"], "Oran"),
        ];
        assert_eq!(extract_sectors(&companies), vec!["tous", "port", "Port"]);
    }

    #[test]
    fn cache_reuses_facets_until_revision_changes() {
        let companies = sample();
        let mut cache = FacetCache::default();
        assert_eq!(cache.get_or_extract(1, &companies).regions.len(), 5);

        // Same revision: the cached value wins even if handed different data.
        assert_eq!(cache.get_or_extract(1, &[]).regions.len(), 5);
        assert_eq!(cache.get_or_extract(2, &[]).regions, vec!["toutes"]);
        assert_eq!(cache.revision(), Some(2));

        assert!(cache.get(1).is_none());
        assert!(cache.get(2).is_some());
        assert_eq!(FacetCache::default().revision(), None);
    }
}
