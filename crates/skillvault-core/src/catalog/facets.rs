//! Facet option derivation
//!
//! Distinct platforms, fields and tags, each in first-seen catalog order.
//! Always recomputed from the certificates; nothing here is cached.

use std::collections::HashSet;

use crate::model::Certificate;

/// One of the three filterable dimensions, in filter panel order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetCategory {
    Platform,
    Field,
    Technology,
}

impl FacetCategory {
    pub const ALL: [FacetCategory; 3] = [
        FacetCategory::Platform,
        FacetCategory::Field,
        FacetCategory::Technology,
    ];

    /// Heading shown above the category's options
    pub fn label(&self) -> &'static str {
        match self {
            FacetCategory::Platform => "Platform",
            FacetCategory::Field => "Field",
            FacetCategory::Technology => "Technology",
        }
    }
}

/// A category heading with its options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetGroup<'a> {
    pub category: FacetCategory,
    pub options: &'a [String],
}

/// Deduplicated facet values of a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub platforms: Vec<String>,
    pub fields: Vec<String>,
    pub tags: Vec<String>,
}

impl FacetOptions {
    /// Derive facet options from certificates
    pub fn derive(certificates: &[Certificate]) -> Self {
        Self {
            platforms: distinct(certificates.iter().map(|c| c.platform.as_str())),
            fields: distinct(certificates.iter().map(|c| c.field.as_str())),
            tags: distinct(
                certificates
                    .iter()
                    .flat_map(|c| c.tags.iter().map(String::as_str)),
            ),
        }
    }

    /// Options of a single category
    pub fn options(&self, category: FacetCategory) -> &[String] {
        match category {
            FacetCategory::Platform => &self.platforms,
            FacetCategory::Field => &self.fields,
            FacetCategory::Technology => &self.tags,
        }
    }

    /// All three categories in panel order
    pub fn groups(&self) -> Vec<FacetGroup<'_>> {
        FacetCategory::ALL
            .iter()
            .map(|&category| FacetGroup {
                category,
                options: self.options(category),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty() && self.fields.is_empty() && self.tags.is_empty()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_seen_order_is_kept() {
        let certs = vec![
            Certificate::new("1", "A", "Udemy", "Web Dev", tags(&["react", "js"])),
            Certificate::new("2", "B", "Coursera", "Backend", tags(&["go", "js"])),
            Certificate::new("3", "C", "Udemy", "Web Dev", tags(&["css", "react"])),
        ];

        let options = FacetOptions::derive(&certs);
        assert_eq!(options.platforms, vec!["Udemy", "Coursera"]);
        assert_eq!(options.fields, vec!["Web Dev", "Backend"]);
        assert_eq!(options.tags, vec!["react", "js", "go", "css"]);
    }

    #[test]
    fn test_values_are_case_sensitive() {
        let certs = vec![
            Certificate::new("1", "A", "udemy", "F", tags(&["JS"])),
            Certificate::new("2", "B", "Udemy", "F", tags(&["js"])),
        ];

        let options = FacetOptions::derive(&certs);
        assert_eq!(options.platforms, vec!["udemy", "Udemy"]);
        assert_eq!(options.tags, vec!["JS", "js"]);
    }

    #[test]
    fn test_groups_in_panel_order() {
        let certs = vec![Certificate::new("1", "A", "Udemy", "Web Dev", tags(&["react"]))];
        let options = FacetOptions::derive(&certs);
        let labels: Vec<&str> = options.groups().iter().map(|g| g.category.label()).collect();
        assert_eq!(labels, vec!["Platform", "Field", "Technology"]);
        assert_eq!(options.groups()[2].options, &["react".to_string()]);
    }

    #[test]
    fn test_empty_input() {
        assert!(FacetOptions::derive(&[]).is_empty());
    }
}
