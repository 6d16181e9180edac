use serde::Serialize;

/// A project built with what a certificate taught
///
/// Identified only by its name; it is never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReference {
    /// Display name of the project
    pub name: String,

    /// External URL of the project
    pub link: String,
}

impl ProjectReference {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}
