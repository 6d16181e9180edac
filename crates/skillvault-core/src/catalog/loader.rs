//! Catalog loader with validation
//!
//! Converts the untyped JSON data file into typed certificates in a single
//! step. The whole catalog is rejected on the first malformed entry, naming
//! the entry index and the offending field.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::errors::{Result, SkillVaultError};
use crate::model::{Certificate, ProjectReference};
use crate::{log_op_end, log_op_error, log_op_start};

/// Parse a catalog file from a path
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, otherwise see [`parse_catalog_str`].
pub fn parse_catalog_file(path: &Path) -> Result<Vec<Certificate>> {
    let content = fs::read_to_string(path).map_err(|e| SkillVaultError::Io {
        message: format!("Failed to read catalog {}: {}", path.display(), e),
    })?;

    parse_catalog_str(&content)
}

/// Parse a catalog from JSON text
///
/// # Errors
///
/// Returns `CatalogParse` for invalid JSON, otherwise see [`parse_catalog_value`].
pub fn parse_catalog_str(content: &str) -> Result<Vec<Certificate>> {
    let value: Value = serde_json::from_str(content).map_err(|e| SkillVaultError::CatalogParse {
        message: format!("JSON parse error: {}", e),
    })?;

    parse_catalog_value(&value)
}

/// Validate an untyped JSON document and convert it into certificates
///
/// The document must be an array of objects, each carrying every field of
/// the certificate shape with the right JSON type. Unknown extra fields are
/// ignored.
///
/// # Errors
///
/// - `CatalogParse` if the document is not an array
/// - `NotAnObject` if an entry is not an object
/// - `MissingField` if an entry lacks a required field
/// - `InvalidFieldType` if a field has the wrong type
pub fn parse_catalog_value(value: &Value) -> Result<Vec<Certificate>> {
    log_op_start!("load_catalog");
    let start = std::time::Instant::now();

    let result = parse_catalog_value_impl(value).map_err(|e| {
        log_op_error!(
            "load_catalog",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "load_catalog",
        duration_ms = start.elapsed().as_millis() as u64,
        catalog_len = result.len() as u64
    );

    Ok(result)
}

fn parse_catalog_value_impl(value: &Value) -> Result<Vec<Certificate>> {
    let entries = value
        .as_array()
        .ok_or_else(|| SkillVaultError::CatalogParse {
            message: "Catalog must be a JSON array of certificates".to_string(),
        })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_certificate(index, entry))
        .collect()
}

fn parse_certificate(index: usize, entry: &Value) -> Result<Certificate> {
    let obj = entry
        .as_object()
        .ok_or(SkillVaultError::NotAnObject { index })?;

    let fields = EntryFields { index, obj };

    Ok(Certificate {
        id: fields.string("id")?,
        title: fields.string("title")?,
        platform: fields.string("platform")?,
        field: fields.string("field")?,
        tags: fields.string_list("tags")?,
        certificate_url: fields.string("certificateUrl")?,
        download_url: fields.string("downloadUrl")?,
        thumbnail_url: fields.string("thumbnailUrl")?,
        what_i_learned: fields.string("whatILearned")?,
        projects: fields.projects("projects")?,
    })
}

/// Typed accessors over one catalog entry
struct EntryFields<'a> {
    index: usize,
    obj: &'a Map<String, Value>,
}

impl EntryFields<'_> {
    fn required(&self, field: &str) -> Result<&Value> {
        self.obj
            .get(field)
            .ok_or_else(|| SkillVaultError::MissingField {
                index: self.index,
                field: field.to_string(),
            })
    }

    fn wrong_type(&self, field: impl Into<String>, expected: &str) -> SkillVaultError {
        SkillVaultError::InvalidFieldType {
            index: self.index,
            field: field.into(),
            expected: expected.to_string(),
        }
    }

    fn string(&self, field: &str) -> Result<String> {
        self.required(field)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.wrong_type(field, "a string"))
    }

    fn string_list(&self, field: &str) -> Result<Vec<String>> {
        let items = self
            .required(field)?
            .as_array()
            .ok_or_else(|| self.wrong_type(field, "an array of strings"))?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.wrong_type(format!("{}[{}]", field, i), "a string"))
            })
            .collect()
    }

    fn projects(&self, field: &str) -> Result<Vec<ProjectReference>> {
        let items = self
            .required(field)?
            .as_array()
            .ok_or_else(|| self.wrong_type(field, "an array of projects"))?;

        let mut projects = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let path = format!("{}[{}]", field, i);
            let project = item
                .as_object()
                .ok_or_else(|| self.wrong_type(path.clone(), "an object"))?;

            let member = |key: &str| -> Result<String> {
                let member_path = format!("{}.{}", path, key);
                match project.get(key) {
                    None => Err(SkillVaultError::MissingField {
                        index: self.index,
                        field: member_path,
                    }),
                    Some(v) => v
                        .as_str()
                        .map(str::to_string)
                        .ok_or_else(|| self.wrong_type(member_path, "a string")),
                }
            };

            projects.push(ProjectReference {
                name: member("name")?,
                link: member("link")?,
            });
        }

        Ok(projects)
    }
}
