//! Plain-text rendering of a derived table.

use unicode_width::UnicodeWidthStr;
use usetable_lib::derive::TableView;
use usetable_lib::sort::SortBy;

/// Renders the view as left-aligned columns separated by two spaces.
///
/// The header line is printed only when every column has a header.
pub fn format_table(view: &TableView, sort_by: Option<&SortBy>) -> String {
    let body: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|cells| cells.iter().map(|cell| cell.cell.render().to_string()).collect())
        .collect();
    let width = body.first().map(Vec::len).unwrap_or(view.headers.len());

    let header: Option<Vec<String>> = (view.headers.len() == width).then(|| {
        view.headers
            .iter()
            .map(|header| header.cell.render().to_string())
            .collect()
    });

    let mut widths = vec![0; width];
    for line in header.iter().chain(body.iter()) {
        for (w, text) in widths.iter_mut().zip(line) {
            *w = (*w).max(text.width());
        }
    }

    let mut out = String::new();
    if let Some(header) = &header {
        push_line(&mut out, header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
    }
    for line in &body {
        push_line(&mut out, line, &widths);
    }
    if let Some(sort) = sort_by {
        out.push_str(&format!("\nsorted by {} {}\n", sort.column_id, sort.direction));
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(text, w)| format!("{}{}", text, " ".repeat(w.saturating_sub(text.width()))))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
