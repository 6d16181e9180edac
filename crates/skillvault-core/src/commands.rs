//! Command inventory for the gallery session
//!
//! Every user action on the gallery is one of these commands, applied to the
//! current state by [`crate::apply::apply`].

/// A discrete user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search box text
    SetQuery { query: String },

    /// Toggle one facet value (filter panel option or active-filter chip)
    ToggleFilter { value: String },

    /// "Clear All": drop every active filter and the query
    ClearAll,

    /// Expand or collapse the facet panel
    ToggleFilterPanel,

    /// Open the detail view for a certificate
    View { certificate_id: String },

    /// Close the detail view
    Dismiss,

    /// Expand or collapse one card's "What I Learned" section
    ToggleCardDetails { certificate_id: String },
}

impl Command {
    /// Stable operation name used in log events
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::SetQuery { .. } => "set_query",
            Command::ToggleFilter { .. } => "toggle_filter",
            Command::ClearAll => "clear_all",
            Command::ToggleFilterPanel => "toggle_filter_panel",
            Command::View { .. } => "view",
            Command::Dismiss => "dismiss",
            Command::ToggleCardDetails { .. } => "toggle_card_details",
        }
    }
}
