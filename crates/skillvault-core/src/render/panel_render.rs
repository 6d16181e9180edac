use crate::catalog::FacetOptions;
use crate::queries::FilterState;

/// Render the filter bar
///
/// The "Filters" button with its active count, the active-filter chip row
/// with "Clear All", and, when `panel_open`, the three facet categories with
/// each option marked `[x]` when active.
pub fn render_filter_bar(options: &FacetOptions, filters: &FilterState, panel_open: bool) -> String {
    let mut output = String::new();

    if !filters.query().is_empty() {
        output.push_str(&format!("Search: \"{}\"\n\n", filters.query()));
    }

    if filters.has_active() {
        output.push_str(&format!("Filters ({})\n\n", filters.active_count()));
        let chips: Vec<String> = filters.active().iter().map(|v| format!("[{} x]", v)).collect();
        output.push_str(&chips.join(" "));
        output.push_str(" [Clear All]\n\n");
    } else {
        output.push_str("Filters\n\n");
    }

    if panel_open {
        for group in options.groups() {
            output.push_str(&format!("## {}\n\n", group.category.label()));
            for option in group.options {
                let mark = if filters.is_active(option) { "x" } else { " " };
                output.push_str(&format!("- [{}] {}\n", mark, option));
            }
            output.push('\n');
        }
    }

    output
}
