//! Directory core: company records, facet extraction and filtering.

pub mod collation;
pub mod directory;
pub mod entities;
pub mod facets;
pub mod filter;

pub use directory::{Directory, DirectoryState, ResultSummary};
pub use entities::Company;
pub use facets::{extract_regions, extract_sectors, FacetCache, Facets};
pub use filter::{evaluate, FilterState, Selection, ALL_REGIONS, ALL_SECTORS};
