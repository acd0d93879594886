use std::path::Path;
use std::time::Duration;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mme_model::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("{}", summary_table(summary));
}

/// Machine-readable summary, printed instead of the table for JSON logging.
pub fn print_summary_json(summary: &RunSummary) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

pub fn summary_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Run"), header_cell("Value")]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Left);
    }
    table.add_row(vec![label_cell("Rows"), Cell::new(summary.rows)]);
    table.add_row(vec![
        label_cell("Errors"),
        count_cell(summary.errors, Color::Red),
    ]);
    table.add_row(vec![
        label_cell("Successes"),
        count_cell(summary.successes, Color::Green),
    ]);
    table.add_row(vec![
        label_cell("Elapsed"),
        Cell::new(format_elapsed(summary.elapsed_ms)),
    ]);
    table.add_row(vec![
        label_cell("Error log"),
        path_cell(summary.error_log.as_deref()),
    ]);
    table.add_row(vec![
        label_cell("Success log"),
        path_cell(summary.success_log.as_deref()),
    ]);
    table
}

/// Render milliseconds as `1h 02m 03s`, `2m 03s`, or `3.25s`.
pub fn format_elapsed(elapsed_ms: u128) -> String {
    let duration = Duration::from_millis(u64::try_from(elapsed_ms).unwrap_or(u64::MAX));
    let secs = duration.as_secs();
    match (secs / 3600, (secs / 60) % 60, secs % 60) {
        (0, 0, _) => format!("{:.2}s", duration.as_secs_f64()),
        (0, m, s) => format!("{m}m {s:02}s"),
        (h, m, s) => format!("{h}h {m:02}m {s:02}s"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn path_cell(path: Option<&Path>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formats() {
        assert_eq!(format_elapsed(3_250), "3.25s");
        assert_eq!(format_elapsed(123_000), "2m 03s");
        assert_eq!(format_elapsed(3_723_000), "1h 02m 03s");
    }
}
