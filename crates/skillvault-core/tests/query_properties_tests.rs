use proptest::prelude::*;
use proptest::test_runner::Config;
use skillvault_core::{
    apply, Catalog, Certificate, Command, FilterState, GalleryState, QueryEngine,
};

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(
        (
            "[a-cA-C ]{0,6}",
            prop::sample::select(vec!["Udemy", "Coursera", "edX"]),
            prop::sample::select(vec!["Web Dev", "Backend", "Data"]),
            prop::collection::vec(prop::sample::select(vec!["react", "go", "Go", "sql"]), 0..4),
        ),
        0..12,
    )
    .prop_map(|rows| {
        let certs = rows
            .into_iter()
            .enumerate()
            .map(|(i, (title, platform, field, tags))| {
                Certificate::new(
                    i.to_string(),
                    title,
                    platform,
                    field,
                    tags.into_iter().map(str::to_string).collect(),
                )
            })
            .collect();
        Catalog::new(certs).unwrap()
    })
}

fn arb_filter_values() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(
        prop::sample::select(vec!["Udemy", "Coursera", "Backend", "Data", "go", "sql", "nope"]),
        0..4,
    )
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn text_oracle(cert: &Certificate, query: &str) -> bool {
    query.is_empty()
        || contains_ci(&cert.title, query)
        || contains_ci(&cert.platform, query)
        || contains_ci(&cert.field, query)
        || cert.tags.iter().any(|t| contains_ci(t, query))
}

fn facet_oracle(cert: &Certificate, active: &[String]) -> bool {
    active.is_empty()
        || active.contains(&cert.platform)
        || active.contains(&cert.field)
        || cert.tags.iter().any(|t| active.contains(t))
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn unfiltered_query_is_identity(catalog in arb_catalog()) {
        let outcome = QueryEngine::default().run(&catalog, &FilterState::new());
        let expected: Vec<&str> = catalog.iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(outcome.ids(), expected);
    }

    #[test]
    fn text_match_is_sound_and_complete(catalog in arb_catalog(), query in "[a-cA-C ]{0,3}") {
        let mut filters = FilterState::new();
        filters.set_query(query.clone());

        let outcome = QueryEngine::default().run(&catalog, &filters);
        let expected: Vec<&str> = catalog
            .iter()
            .filter(|c| text_oracle(c, &query))
            .map(|c| c.id.as_str())
            .collect();
        prop_assert_eq!(outcome.ids(), expected);
    }

    #[test]
    fn facet_match_is_sound_and_complete(catalog in arb_catalog(), values in arb_filter_values()) {
        let mut filters = FilterState::new();
        for value in &values {
            filters.toggle(value);
        }

        let outcome = QueryEngine::default().run(&catalog, &filters);
        let expected: Vec<&str> = catalog
            .iter()
            .filter(|c| facet_oracle(c, filters.active()))
            .map(|c| c.id.as_str())
            .collect();
        prop_assert_eq!(outcome.ids(), expected);
    }

    #[test]
    fn toggle_twice_is_involution(values in arb_filter_values(), extra in "[a-zA-Z]{1,6}") {
        let mut filters = FilterState::new();
        for value in &values {
            filters.toggle(value);
        }
        let before = filters.clone();

        filters.toggle(&extra);
        filters.toggle(&extra);

        // Set semantics: membership is restored even if the value moved
        let mut after_sorted = filters.active().to_vec();
        let mut before_sorted = before.active().to_vec();
        after_sorted.sort();
        before_sorted.sort();
        prop_assert_eq!(after_sorted, before_sorted);
    }

    #[test]
    fn clear_all_always_empties(values in arb_filter_values(), query in ".{0,8}") {
        let catalog = Catalog::empty();
        let mut state = GalleryState::new();
        state.filters.set_query(query);
        for value in &values {
            state.filters.toggle(value);
        }

        let state = apply(state, Command::ClearAll, &catalog).unwrap();
        prop_assert_eq!(state.filters.query(), "");
        prop_assert!(state.filters.active().is_empty());
    }

    #[test]
    fn view_then_dismiss_closes(catalog in arb_catalog(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!catalog.is_empty());
        let id = catalog.certificates()[pick.index(catalog.len())].id.clone();

        let state = apply(GalleryState::new(), Command::View { certificate_id: id.clone() }, &catalog).unwrap();
        prop_assert_eq!(state.selection.selected_id(), Some(id.as_str()));

        let state = apply(state, Command::Dismiss, &catalog).unwrap();
        prop_assert!(!state.selection.is_open());
        prop_assert!(state.selection.certificate().is_none());
    }
}
