//! Plain-text table rendering
//!
//! Mirrors what the web renderer shows: title with a record count, headers
//! with a sort glyph on the active column, the suppressed page rows, and a
//! "Showing X to Y of Z results" footer with the page position.

use std::fmt::Write;

use mentordash_lib::TableSnapshot;
use mentordash_lib::table::Direction;

/// Renders a snapshot as padded plain text.
pub fn render_table(snapshot: &TableSnapshot) -> String {
    let mut out = String::new();

    let plural = if snapshot.total_records == 1 { "" } else { "s" };
    let _ = writeln!(
        out,
        "{} ({} record{plural})",
        snapshot.title, snapshot.total_records
    );

    if snapshot.is_empty() {
        out.push_str("No records found\n");
        return out;
    }

    let labels: Vec<String> = snapshot
        .headers
        .iter()
        .map(|header| match header.sort {
            Some(Direction::Asc) => format!("{} ^", header.label),
            Some(Direction::Desc) => format!("{} v", header.label),
            None => header.label.clone(),
        })
        .collect();

    let mut widths: Vec<usize> = labels.iter().map(|label| label.chars().count()).collect();
    for row in &snapshot.rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let _ = writeln!(out, "{}", format_row(&labels, &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", format_row(&rule, &widths));
    for row in &snapshot.rows {
        let _ = writeln!(out, "{}", format_row(row, &widths));
    }

    let _ = writeln!(
        out,
        "Showing {} to {} of {} results (page {}/{})",
        snapshot.showing_from,
        snapshot.showing_to,
        snapshot.total_records,
        snapshot.page,
        snapshot.total_pages
    );

    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<w$}", w = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use mentordash_lib::TableView;
    use mentordash_lib::model::Record;

    use super::*;

    #[test]
    fn test_render_empty_dataset() {
        let view = TableView::new("Mentors", 5);
        let text = render_table(&view.render());

        assert!(text.contains("Mentors (0 records)"));
        assert!(text.contains("No records found"));
    }

    #[test]
    fn test_render_page_with_sort_glyph() {
        let mut view = TableView::new("Exams", 5);
        view.set_records(&[
            Record::new().set("examName", "PLAB 1").set("price", 90i64),
            Record::new().set("examName", "USMLE Step 1").set("price", 120i64),
        ]);
        view.click_header("examName");

        let text = render_table(&view.render());

        assert!(text.contains("Exams (2 records)"));
        assert!(text.contains("ExamName ^"));
        assert!(text.contains("PLAB 1"));
        assert!(text.contains("Showing 1 to 2 of 2 results (page 1/1)"));
    }
}
