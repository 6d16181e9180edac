use crate::download::suggested_filename;
use crate::model::Certificate;
use crate::queries::QueryOutcome;

/// Tags shown on a summary card plus how many were left out
pub fn tag_preview(tags: &[String], limit: usize) -> (&[String], usize) {
    let shown = &tags[..tags.len().min(limit)];
    (shown, tags.len() - shown.len())
}

/// Page header with the catalog total
pub fn render_header(catalog_len: usize) -> String {
    format!(
        "{} verified certificates across multiple domains and platforms\n\n",
        catalog_len
    )
}

/// Render one summary card
///
/// Shows the title, platform badge, field, the first `tag_limit` tags with
/// a "+N more" marker, the View / Download actions and the "What I Learned"
/// toggle. An expanded card also shows the learned text and related projects.
pub fn render_card(cert: &Certificate, tag_limit: usize, expanded: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("### {}\n\n", cert.title));
    output.push_str(&format!("`{}` · {}\n\n", cert.platform, cert.field));

    let (shown, hidden) = tag_preview(&cert.tags, tag_limit);
    if !shown.is_empty() {
        let mut line: Vec<String> = shown.iter().map(|t| format!("`{}`", t)).collect();
        if hidden > 0 {
            line.push(format!("+{} more", hidden));
        }
        output.push_str(&line.join(" "));
        output.push_str("\n\n");
    }

    output.push_str(&format!(
        "[View: {}] [Download: {}]\n\n",
        cert.id,
        suggested_filename(&cert.title)
    ));

    if !expanded {
        output.push_str("[What I Learned ▼]\n\n");
        return output;
    }

    output.push_str("[What I Learned ▲]\n\n");
    output.push_str(&format!("{}\n\n", cert.what_i_learned));
    if cert.has_projects() {
        output.push_str("Related Projects:\n");
        for project in &cert.projects {
            output.push_str(&format!("- [{}]({})\n", project.name, project.link));
        }
        output.push('\n');
    }

    output
}

/// Render the results counter followed by the summary grid
///
/// An empty outcome renders the "No certificates found" state instead of a
/// grid. Cards whose id is in `expanded` render with their details open.
pub fn render_results(
    outcome: &QueryOutcome<'_>,
    tag_limit: usize,
    expanded: &[String],
) -> String {
    let mut output = format!("**{}**\n\n", outcome.count_label());

    if outcome.is_empty() {
        output.push_str("No certificates found\n\nTry adjusting your search or filters\n");
        return output;
    }

    for cert in &outcome.certificates {
        let open = expanded.iter().any(|id| *id == cert.id);
        output.push_str(&render_card(cert, tag_limit, open));
    }

    output
}
