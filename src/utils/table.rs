//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_right, truncate, visible_width};

pub struct Column {
    pub header: String,
    /// Upper bound for the column width; plain-text cells longer than this are cut.
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn cell<'a>(&self, row: &'a [String], i: usize) -> std::borrow::Cow<'a, str> {
        let raw = row.get(i).map(String::as_str).unwrap_or("");
        let max = self.columns[i].max_width;
        // coloured cells are never cut, the escape codes would be split
        if raw.contains('\x1b') || visible_width(raw) <= max {
            std::borrow::Cow::Borrowed(raw)
        } else {
            std::borrow::Cow::Owned(truncate(raw, max))
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = self
                    .rows
                    .iter()
                    .map(|r| visible_width(&self.cell(r, i)))
                    .max()
                    .unwrap_or(0);
                content.max(visible_width(&col.header))
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad_right(&c.header, *w))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("  "));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad_right(&self.cell(row, i), *w))
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_the_widest_cell() {
        let mut t = Table::new(vec![Column::new("ID", 5), Column::new("Title", 10)]);
        t.add_row(vec!["1".into(), "Pump".into()]);
        t.add_row(vec!["12".into(), "A very long task title".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID  Title");
        assert_eq!(lines[1], "--  ----------");
        assert_eq!(lines[2], "1   Pump");
        assert_eq!(lines[3], "12  A very lo…");
    }

    #[test]
    fn missing_cells_render_blank() {
        let mut t = Table::new(vec![Column::new("A", 3), Column::new("B", 3)]);
        t.add_row(vec!["x".into()]);
        assert!(t.render().lines().nth(2).unwrap().starts_with('x'));
    }
}
