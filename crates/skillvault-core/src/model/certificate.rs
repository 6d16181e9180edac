use serde::Serialize;

use super::project::ProjectReference;

/// Certificate - one immutable record of the gallery
///
/// Field names serialize in camelCase to match the catalog data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Unique identifier within the catalog
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// Issuing platform (e.g. "Udemy")
    pub platform: String,

    /// Subject field (e.g. "Web Development")
    pub field: String,

    /// Technology tags, in display order
    pub tags: Vec<String>,

    /// URL of the certificate view
    pub certificate_url: String,

    /// URL of the downloadable file
    pub download_url: String,

    /// URL of the thumbnail image
    pub thumbnail_url: String,

    /// Free-text summary of what was learned
    #[serde(rename = "whatILearned")]
    pub what_i_learned: String,

    /// Related projects, in display order
    pub projects: Vec<ProjectReference>,
}

impl Certificate {
    /// Create a certificate with the facet fields set and everything else empty
    ///
    /// Handy for tests and fixtures; catalogs loaded from disk go through
    /// the validating loader instead.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        platform: impl Into<String>,
        field: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            platform: platform.into(),
            field: field.into(),
            tags,
            certificate_url: String::new(),
            download_url: String::new(),
            thumbnail_url: String::new(),
            what_i_learned: String::new(),
            projects: Vec::new(),
        }
    }

    /// Check whether the certificate carries the given tag (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check if any related projects are listed
    pub fn has_projects(&self) -> bool {
        !self.projects.is_empty()
    }
}
