/// Free-text query plus the active facet values
///
/// Active values behave as a set (each at most once) but keep insertion
/// order, which is the order the active-filter chips are shown in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    active: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text, untrimmed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Active facet values in insertion order
    pub fn active(&self) -> &[String] {
        &self.active
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.active.iter().any(|v| v == value)
    }

    /// Number shown on the "Filters" badge
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Replace the query text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Remove `value` if active, otherwise append it
    ///
    /// Returns whether the value is active afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        if let Some(pos) = self.active.iter().position(|v| v == value) {
            self.active.remove(pos);
            false
        } else {
            self.active.push(value.to_string());
            true
        }
    }

    /// Empty the active set and the query together
    pub fn clear_all(&mut self) {
        self.active.clear();
        self.query.clear();
    }

    /// True when neither a query nor a filter narrows the results
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.active.is_empty()
    }
}
