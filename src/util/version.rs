pub const APP_NAME: &str = "Panorama Maritime Algérien";
pub const APP_DESCRIPTION: &str =
    "Répertoire interactif des entreprises algériennes liées aux activités maritimes.";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Release tag when built from a tagged checkout, crate version otherwise.
pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}
