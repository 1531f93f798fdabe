//! Plain-text rendering of ranked results

use super::SearchResult;
use crate::loader::section_label;

/// Maximum characters of the description shown per row
const SNIPPET_CHARS: usize = 100;

/// Render a full listing for a query, including the header line
pub fn render_results(query: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!("No results found for \"{}\"\n", query);
    }

    let mut output = format!("Found {} results for \"{}\":\n\n", results.len(), query);
    output.push_str(&render_rows(results, None));
    output
}

/// Render result rows, marking the selected one with `>`
///
/// The `(NN%)` badge is the rounded raw relevance score, not a percentage,
/// so strong matches print values above 100.
pub fn render_rows(results: &[SearchResult], selected: Option<usize>) -> String {
    let mut output = String::new();
    for (i, result) in results.iter().enumerate() {
        let marker = if selected == Some(i) { ">" } else { " " };
        let difficulty = result
            .difficulty
            .map(|d| format!(" [{}]", d))
            .unwrap_or_default();

        output.push_str(&format!(
            "{} {}. {}{} ({}%)\n",
            marker,
            i + 1,
            result.title,
            difficulty,
            result.score.round()
        ));
        output.push_str(&format!(
            "     {} | in {}\n",
            result.category,
            section_label(&result.section)
        ));
        if !result.description.is_empty() {
            output.push_str(&format!("     {}\n", snippet(&result.description)));
        }
    }
    output
}

/// First line of `text`, cut to [`SNIPPET_CHARS`] characters
fn snippet(text: &str) -> String {
    let line = text.lines().next().unwrap_or("");
    let mut cut: String = line.chars().take(SNIPPET_CHARS).collect();
    if line.chars().count() > SNIPPET_CHARS || text.lines().nth(1).is_some() {
        cut.push_str("...");
    }
    cut
}
