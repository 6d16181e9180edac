pub mod download;
pub mod facets;
pub mod filename;
pub mod list;
pub mod show;

use skillvault_core::{apply, Command, GalleryState, Result};

use crate::session::Session;

/// Values in first-seen order with repeats dropped
pub(crate) fn distinct(values: &[String]) -> Vec<&String> {
    let mut seen: Vec<&String> = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// Replay the search box and filter toggles onto a fresh gallery state
///
/// Each distinct `--filter` value is toggled once, so repeating a value on
/// the command line keeps it active.
pub(crate) fn filtered_state(
    session: &Session,
    query: Option<String>,
    filters: &[String],
) -> Result<GalleryState> {
    let mut state = GalleryState::new();

    if let Some(query) = query {
        state = apply(state, Command::SetQuery { query }, &session.catalog)?;
    }

    for value in distinct(filters) {
        state = apply(
            state,
            Command::ToggleFilter {
                value: value.clone(),
            },
            &session.catalog,
        )?;
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_keeps_first_seen_order() {
        let values: Vec<String> = ["Backend", "Udemy", "Backend", "go", "Udemy"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let kept: Vec<&str> = distinct(&values).into_iter().map(String::as_str).collect();
        assert_eq!(kept, vec!["Backend", "Udemy", "go"]);
    }
}
