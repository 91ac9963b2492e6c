//! Donor summary report: sorted rows with computed column widths.

use crate::core::money::Amount;
use crate::core::registry::Registry;

pub const HEADER: [&str; 4] = ["Donor Name", "Total Given", "Num Gifts", "Average Gift"];

/// One donor rendered as report cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub total: Amount,
    pub donations: u32,
    pub average: Amount,
}

impl ReportRow {
    fn cells(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.total.to_string(),
            self.donations.to_string(),
            self.average.to_string(),
        ]
    }
}

/// Rows sorted by total donated (descending), ties by display name.
pub fn report_rows(registry: &Registry) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = registry
        .iter()
        .map(|record| ReportRow {
            name: record.name.clone(),
            total: record.total,
            donations: record.donations,
            average: record.average,
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
    rows
}

/// Widest cell per column, header included, measured in characters.
pub fn column_widths(rows: &[ReportRow]) -> [usize; 4] {
    let mut widths = HEADER.map(|title| title.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

/// Render the full report: header, dash separator, one line per donor.
pub fn render_report(registry: &Registry) -> String {
    let rows = report_rows(registry);
    let [w1, w2, w3, w4] = column_widths(&rows);

    let header = format!(
        "{:<w1$} | {:>w2$} | {:>w3$} | {:>w4$}",
        HEADER[0], HEADER[1], HEADER[2], HEADER[3]
    );
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.chars().count()));
    out.push('\n');
    for row in &rows {
        let [name, total, count, average] = row.cells();
        out.push_str(&format!(
            "{name:<w1$}  ${total:>w2$}   {count:>w3$}  ${average:>w4$}\n"
        ));
    }
    out
}
