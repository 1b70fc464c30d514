use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use super::entities::Company;
use super::facets::{FacetCache, Facets};
use super::filter::{evaluate_with_text, FilterState, FoldedText};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Immutable, fully loaded company collection.
///
/// Every snapshot gets its own revision; caches key on it instead of on
/// filter changes.
#[derive(Clone, Debug)]
pub struct Directory {
    companies: Arc<[Company]>,
    folded: Arc<[FoldedText]>,
    revision: u64,
}

impl Directory {
    pub fn new(companies: Vec<Company>) -> Self {
        let folded = companies.iter().map(FoldedText::new).collect();
        Self {
            companies: companies.into(),
            folded,
            revision: NEXT_REVISION.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Filtered view in collection order, using the pre-folded search text.
    pub fn filter(&self, filters: &FilterState) -> Vec<&Company> {
        evaluate_with_text(&self.companies, Some(&self.folded[..]), filters)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PartialEq for Directory {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision
    }
}

/// Directory state owned by the UI: the loaded snapshot, its facets and the
/// current filters.
#[derive(Clone, Debug, Default)]
pub struct DirectoryState {
    directory: Directory,
    facets: FacetCache,
    filters: FilterState,
}

impl DirectoryState {
    pub fn new(directory: Directory) -> Self {
        let mut state = Self {
            directory,
            ..Self::default()
        };
        state.refresh_facets();
        state
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Swaps in a new snapshot and re-extracts its facets. Filters are kept.
    pub fn replace_directory(&mut self, directory: Directory) {
        tracing::info!(
            revision = directory.revision(),
            companies = directory.len(),
            "directory snapshot replaced"
        );
        self.directory = directory;
        self.refresh_facets();
    }

    fn refresh_facets(&mut self) {
        self.facets
            .get_or_extract(self.directory.revision(), self.directory.companies());
    }

    /// Replaces the filter state as a whole.
    pub fn replace_filters(&mut self, filters: FilterState) {
        tracing::debug!(?filters, "filters replaced");
        self.filters = filters;
    }

    pub fn reset_filters(&mut self) {
        self.replace_filters(FilterState::default());
    }

    pub fn facets(&self) -> Facets {
        match self.facets.get(self.directory.revision()) {
            Some(facets) => facets.clone(),
            None => Facets::extract(self.directory.companies()),
        }
    }

    pub fn results(&self) -> Vec<&Company> {
        self.directory.filter(&self.filters)
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(self.results().len(), self.directory.len())
    }
}

/// Match count shown above the result grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultSummary {
    pub matched: usize,
    pub total: usize,
}

impl ResultSummary {
    pub fn new(matched: usize, total: usize) -> Self {
        Self { matched, total }
    }

    pub fn label(&self) -> String {
        let plural = if self.matched > 1 { "s" } else { "" };
        format!("{} entreprise{plural} référencée", self.matched)
    }

    /// Matches out of the whole directory, e.g. `3 / 15`.
    pub fn ratio(&self) -> String {
        format!("{} / {}", self.matched, self.total)
    }

    /// True when the filters leave every company in view.
    pub fn is_unfiltered(&self) -> bool {
        self.matched == self.total
    }

    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}
