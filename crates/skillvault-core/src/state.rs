use crate::catalog::Catalog;
use crate::errors::{Result, SkillVaultError};
use crate::queries::{FilterState, QueryEngine, QueryOutcome};
use crate::selection::SelectionState;

/// Everything one gallery session can change
///
/// Owned by the session and replaced wholesale by [`crate::apply::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub filters: FilterState,
    pub selection: SelectionState,
    /// Whether the facet panel behind the "Filters" button is expanded
    pub filter_panel_open: bool,
    /// Ids of cards whose "What I Learned" section is open, in opening order
    pub expanded: Vec<String>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, certificate_id: &str) -> bool {
        self.expanded.iter().any(|id| id == certificate_id)
    }

    /// Open or close one card's "What I Learned" section
    ///
    /// Returns `true` if the card is now expanded.
    pub fn toggle_expanded(&mut self, certificate_id: &str) -> bool {
        if let Some(pos) = self.expanded.iter().position(|id| id == certificate_id) {
            self.expanded.remove(pos);
            false
        } else {
            self.expanded.push(certificate_id.to_string());
            true
        }
    }

    /// Visible certificates for the current filters
    pub fn visible<'a>(&self, catalog: &'a Catalog, engine: &QueryEngine) -> QueryOutcome<'a> {
        engine.run(catalog, &self.filters)
    }

    /// Verify the selection still refers to a catalog member
    ///
    /// `apply` never produces a state that fails this; it guards states
    /// built by hand against a different catalog.
    ///
    /// # Errors
    ///
    /// Returns `StaleSelection` if the held certificate is not in `catalog`.
    pub fn check_invariants(&self, catalog: &Catalog) -> Result<()> {
        match self.selection.certificate() {
            Some(cert) if catalog.get(&cert.id).map(|c| c != cert).unwrap_or(true) => {
                Err(SkillVaultError::StaleSelection {
                    id: cert.id.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}
