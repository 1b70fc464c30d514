//! Maritime company directory: the filter/facet core, the company data
//! provider and the runtime helpers shared by the desktop app.

pub mod domain;
pub mod infra;
pub mod util;
