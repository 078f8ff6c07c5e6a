use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{LicenseRecord, Status};

/// Build a per-status breakdown of every record read, approved ones included.
pub fn breakdown(records: &[LicenseRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Records").add_attribute(Attribute::Bold),
            Cell::new("Needs review").add_attribute(Attribute::Bold),
        ]);

    for status in Status::ALL {
        let count = records.iter().filter(|r| r.status == status).count();

        let color = match status {
            Status::Approved => Color::Green,
            Status::Restricted => Color::Yellow,
            Status::Rejected => Color::Red,
            Status::Unknown => Color::DarkGrey,
        };
        let review = if status.needs_review() { "yes" } else { "no" };

        table.add_row(vec![
            Cell::new(status.to_string()).fg(color),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(review).set_alignment(CellAlignment::Center),
        ]);
    }

    let flagged = records.iter().filter(|r| r.needs_review()).count();
    table.add_row(vec![
        Cell::new("total").add_attribute(Attribute::Bold),
        Cell::new(records.len()).set_alignment(CellAlignment::Right),
        Cell::new(flagged).set_alignment(CellAlignment::Center),
    ]);

    table
}

/// Print the breakdown to stderr so stdout stays reserved for the report.
pub fn render_breakdown(records: &[LicenseRecord]) {
    eprintln!("{}", breakdown(records));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_counts() {
        let records = vec![
            LicenseRecord::new("z@1", Status::Restricted),
            LicenseRecord::new("a@2", Status::Approved),
            LicenseRecord::new("m@3", Status::Rejected),
            LicenseRecord::new("a@1", Status::Unknown),
            LicenseRecord::new("b@1", Status::Approved),
        ];

        let table = breakdown(&records);
        let rows: Vec<Vec<String>> = table
            .row_iter()
            .map(|row| row.cell_iter().map(|c| c.content()).collect())
            .collect();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], ["approved", "2", "no"]);
        assert_eq!(rows[1], ["restricted", "1", "yes"]);
        assert_eq!(rows[4], ["total", "5", "3"]);
    }
}
