use std::collections::HashMap;
use std::path::Path;

use crate::catalog::facets::FacetOptions;
use crate::catalog::loader;
use crate::errors::{Result, SkillVaultError};
use crate::model::Certificate;

/// In-memory catalog of certificates
///
/// Built once and never mutated. Order is the order of the data file and is
/// the order every view preserves. Certificate ids are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    certificates: Vec<Certificate>,
}

impl Catalog {
    /// Build a catalog from already-typed certificates
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCertificateId` if two certificates share an id.
    pub fn new(certificates: Vec<Certificate>) -> Result<Self> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, cert) in certificates.iter().enumerate() {
            if let Some(&first_index) = seen.get(cert.id.as_str()) {
                return Err(SkillVaultError::DuplicateCertificateId {
                    id: cert.id.clone(),
                    first_index,
                    index,
                });
            }
            seen.insert(cert.id.as_str(), index);
        }

        Ok(Self { certificates })
    }

    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse and validate a catalog from JSON text
    ///
    /// # Errors
    ///
    /// See [`loader::parse_catalog_str`].
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::new(loader::parse_catalog_str(content)?)
    }

    /// Parse and validate a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise see
    /// [`loader::parse_catalog_str`].
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::new(loader::parse_catalog_file(path)?)
    }

    /// All certificates, in catalog order
    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Certificate> {
        self.certificates.iter()
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    /// Get a certificate by id
    ///
    /// # Errors
    ///
    /// Returns `CertificateNotFound` if no certificate has this id.
    pub fn get(&self, id: &str) -> Result<&Certificate> {
        self.certificates
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| SkillVaultError::CertificateNotFound { id: id.to_string() })
    }

    /// Distinct platforms, fields and tags of this catalog
    pub fn facet_options(&self) -> FacetOptions {
        FacetOptions::derive(&self.certificates)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Certificate;
    type IntoIter = std::slice::Iter<'a, Certificate>;

    fn into_iter(self) -> Self::IntoIter {
        self.certificates.iter()
    }
}
