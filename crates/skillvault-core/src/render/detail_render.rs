use crate::download::suggested_filename;
use crate::model::Certificate;
use crate::selection::SelectionState;

/// Render the expanded detail view of one certificate
pub fn render_detail(cert: &Certificate) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", cert.title));
    output.push_str(&format!("**Platform**: {}\n\n", cert.platform));
    output.push_str(&format!("**Field**: {}\n\n", cert.field));

    if !cert.tags.is_empty() {
        output.push_str(&format!("**Technologies**: {}\n\n", cert.tags.join(", ")));
    }

    if !cert.what_i_learned.is_empty() {
        output.push_str(&format!("## What I Learned\n\n{}\n\n", cert.what_i_learned));
    }

    if cert.has_projects() {
        output.push_str("## Related Projects\n\n");
        for project in &cert.projects {
            output.push_str(&format!("- [{}]({})\n", project.name, project.link));
        }
        output.push('\n');
    }

    if !cert.certificate_url.is_empty() {
        output.push_str(&format!("**Certificate**: {}\n\n", cert.certificate_url));
    }

    output.push_str(&format!(
        "[Download Certificate: {}] [Close]\n",
        suggested_filename(&cert.title)
    ));

    output
}

/// Render the detail view if one is open
///
/// Returns `None` when nothing is selected; the view never renders without
/// a held certificate.
pub fn render_selection(selection: &SelectionState) -> Option<String> {
    selection.certificate().map(render_detail)
}
