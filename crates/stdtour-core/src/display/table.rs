use crate::core::stats::Statistics;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, presets};

pub struct TableDisplay {
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            use_colors: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(color)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    fn new_table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
        let cells: Vec<Cell> = headers
            .iter()
            .map(|h| self.bold_header(h, Color::Cyan))
            .collect();
        table.set_header(cells);
        table
    }

    pub fn render_statistics(&self, stats: &Statistics) -> String {
        let mut table = self.new_table(&["Measure", "Value"]);
        for (label, value) in [
            ("Mean", stats.mean),
            ("Median", stats.median),
            ("Variance", stats.variance),
        ] {
            table.add_row(vec![
                Cell::new(label),
                Cell::new(value.to_string()).set_alignment(CellAlignment::Right),
            ]);
        }
        table.to_string()
    }

    pub fn render_file_list(&self, files: &[String]) -> String {
        let mut table = self.new_table(&["#", "File"]);
        for (index, file) in files.iter().enumerate() {
            table.add_row(vec![Cell::new(index + 1), Cell::new(file)]);
        }
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_statistics_contains_values() {
        let stats = Statistics {
            mean: 30.0,
            median: 30.0,
            variance: 250.0,
        };
        let rendered = TableDisplay::new().with_colors(false).render_statistics(&stats);
        assert!(rendered.contains("Mean"));
        assert!(rendered.contains("Median"));
        assert!(rendered.contains("Variance"));
        assert!(rendered.contains("250"));
    }

    #[test]
    fn test_render_file_list_numbers_rows() {
        let files = vec!["a.py".to_string(), "c.py".to_string()];
        let rendered = TableDisplay::new().with_colors(false).render_file_list(&files);
        assert!(rendered.contains("a.py"));
        assert!(rendered.contains("c.py"));
        assert!(rendered.contains('2'));
    }
}
