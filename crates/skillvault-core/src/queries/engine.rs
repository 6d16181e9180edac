use serde::Deserialize;

use crate::catalog::Catalog;
use crate::model::Certificate;
use crate::queries::filter_state::FilterState;

/// How the query text is prepared before matching
///
/// The gallery page matches the raw text, so `None` is the default and a
/// query of "  " only matches certificates containing two spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryTrim {
    #[default]
    None,
    /// Strip leading and trailing whitespace
    Both,
}

impl QueryTrim {
    pub fn apply<'q>(&self, query: &'q str) -> &'q str {
        match self {
            QueryTrim::None => query,
            QueryTrim::Both => query.trim(),
        }
    }
}

/// Visible certificates for one filter state
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome<'a> {
    pub certificates: Vec<&'a Certificate>,
}

impl QueryOutcome<'_> {
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    /// True when the "No certificates found" state should be shown
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.certificates.iter().map(|c| c.id.as_str()).collect()
    }

    /// Results counter, e.g. "1 certificate found" or "4 certificates found"
    pub fn count_label(&self) -> String {
        let n = self.len();
        format!("{} certificate{} found", n, if n == 1 { "" } else { "s" })
    }
}

/// Case-insensitive containment of an already lowercased needle in title,
/// platform, field or any tag. An empty needle matches everything.
pub fn matches_text(cert: &Certificate, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }

    let hit = |haystack: &str| haystack.to_lowercase().contains(needle_lower);

    hit(&cert.title)
        || hit(&cert.platform)
        || hit(&cert.field)
        || cert.tags.iter().any(|tag| hit(tag))
}

/// True if any active value equals the platform, the field or one of the
/// tags. Exact, case-sensitive comparison. No active values matches everything.
pub fn matches_facets(cert: &Certificate, active: &[String]) -> bool {
    active.is_empty()
        || active
            .iter()
            .any(|value| cert.platform == *value || cert.field == *value || cert.has_tag(value))
}

/// Derives the visible subset of the catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine {
    trim: QueryTrim,
}

impl QueryEngine {
    pub fn new(trim: QueryTrim) -> Self {
        Self { trim }
    }

    pub fn trim(&self) -> QueryTrim {
        self.trim
    }

    /// Certificates passing both the text and the facet match, in catalog order
    pub fn run<'a>(&self, catalog: &'a Catalog, filters: &FilterState) -> QueryOutcome<'a> {
        let needle = self.trim.apply(filters.query()).to_lowercase();

        let certificates: Vec<&Certificate> = catalog
            .iter()
            .filter(|cert| matches_text(cert, &needle) && matches_facets(cert, filters.active()))
            .collect();

        tracing::debug!(
            op = "query",
            query = filters.query(),
            active_filters = filters.active_count() as u64,
            result_len = certificates.len() as u64,
        );

        QueryOutcome { certificates }
    }
}
