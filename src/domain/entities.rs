use serde::{Deserialize, Serialize};

/// A company listed in the directory, as supplied by the data provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Display name; assumed unique across the collection.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Sector labels in display order. An empty list never matches a sector filter.
    #[serde(default)]
    pub sectors: Vec<String>,
    /// Region (wilaya) where the company is headquartered.
    pub headquarters: String,
    #[serde(default)]
    pub website: Option<String>,
}

#[cfg(test)]
impl Company {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        sectors: &[&str],
        headquarters: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            sectors: sectors.iter().map(|s| s.to_string()).collect(),
            headquarters: headquarters.into(),
            website: None,
        }
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }
}

impl Company {
    /// Website to link to, if the provider supplied a non-blank one.
    pub fn website_link(&self) -> Option<&str> {
        self.website
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn has_sector(&self, sector: &str) -> bool {
        self.sectors.iter().any(|candidate| candidate == sector)
    }
}
