//! Functional-boundary apply function
//!
//! `apply()` is the single entry point for gallery state transitions. It
//! takes ownership of the current state and returns the next one.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: on error no partially updated state escapes
//! - **No panics**: an unknown certificate id returns a typed error
//! - **Deterministic**: the same state, command and catalog always give the
//!   same next state
//!
//! ## Example
//!
//! ```
//! use skillvault_core::{apply, Catalog, Certificate, Command, GalleryState};
//!
//! let catalog = Catalog::new(vec![Certificate::new(
//!     "1",
//!     "React Basics",
//!     "Udemy",
//!     "Web Dev",
//!     vec!["react".to_string()],
//! )])
//! .unwrap();
//!
//! let state = GalleryState::new();
//! let state = apply(state, Command::ToggleFilter { value: "Udemy".to_string() }, &catalog).unwrap();
//! assert!(state.filters.is_active("Udemy"));
//! ```

use crate::catalog::Catalog;
use crate::commands::Command;
use crate::errors::Result;
use crate::state::GalleryState;
use crate::log_op_error;

/// Apply a command to the gallery state, returning the next state
///
/// # Errors
///
/// Returns `CertificateNotFound` when `Command::View` or
/// `Command::ToggleCardDetails` names an id that is not in the catalog. The
/// selection is only ever set from a catalog member.
pub fn apply(mut state: GalleryState, cmd: Command, catalog: &Catalog) -> Result<GalleryState> {
    let op = cmd.op_name();
    let start = std::time::Instant::now();

    match cmd {
        Command::SetQuery { query } => {
            state.filters.set_query(query);
        }

        Command::ToggleFilter { value } => {
            let now_active = state.filters.toggle(&value);
            tracing::debug!(op, filter_value = value.as_str(), now_active);
        }

        Command::ClearAll => {
            state.filters.clear_all();
        }

        Command::ToggleFilterPanel => {
            state.filter_panel_open = !state.filter_panel_open;
        }

        Command::View { certificate_id } => {
            let cert = catalog.get(&certificate_id).map_err(|e| {
                log_op_error!(
                    op,
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    certificate_id = certificate_id.as_str()
                );
                e
            })?;
            state.selection.select(cert.clone());
            tracing::debug!(op, certificate_id = certificate_id.as_str());
        }

        Command::Dismiss => {
            state.selection.dismiss();
        }

        Command::ToggleCardDetails { certificate_id } => {
            catalog.get(&certificate_id).map_err(|e| {
                log_op_error!(
                    op,
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    certificate_id = certificate_id.as_str()
                );
                e
            })?;
            let now_expanded = state.toggle_expanded(&certificate_id);
            tracing::debug!(op, certificate_id = certificate_id.as_str(), now_expanded);
        }
    }

    Ok(state)
}
