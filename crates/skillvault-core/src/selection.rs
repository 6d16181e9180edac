//! Selection Controller
//!
//! Which single certificate, if any, is expanded in the detail view. The
//! open flag is derived from the held record, so the detail view can never
//! be open without one.

use crate::model::Certificate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    None,
    Selected(Certificate),
}

impl SelectionState {
    /// Hold `certificate` and open the detail view
    pub fn select(&mut self, certificate: Certificate) {
        *self = SelectionState::Selected(certificate);
    }

    /// Close the detail view and drop the held record
    pub fn dismiss(&mut self) {
        *self = SelectionState::None;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SelectionState::Selected(_))
    }

    pub fn certificate(&self) -> Option<&Certificate> {
        match self {
            SelectionState::None => None,
            SelectionState::Selected(cert) => Some(cert),
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.certificate().map(|c| c.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(id: &str) -> Certificate {
        Certificate::new(id, "Title", "Udemy", "Web Dev", vec![])
    }

    #[test]
    fn test_default_is_closed() {
        let selection = SelectionState::default();
        assert!(!selection.is_open());
        assert!(selection.certificate().is_none());
    }

    #[test]
    fn test_select_then_dismiss() {
        let mut selection = SelectionState::default();

        selection.select(cert("1"));
        assert!(selection.is_open());
        assert_eq!(selection.selected_id(), Some("1"));

        selection.dismiss();
        assert!(!selection.is_open());
        assert_eq!(selection, SelectionState::None);
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut selection = SelectionState::default();
        selection.select(cert("1"));
        selection.select(cert("2"));
        assert_eq!(selection.selected_id(), Some("2"));
    }
}
