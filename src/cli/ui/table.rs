use crate::ledger::Expense;
use crate::services::CategoryTotal;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: &str, min_width: usize, alignment: Alignment) -> Self {
        Self {
            header: header.to_string(),
            min_width,
            max_width: None,
            alignment,
        }
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// Represents a table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Computes the content widths for each column based on headers, rows, and
    /// column constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    /// Renders a single row using the provided column widths.
    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, widths[idx], column.alignment)
            })
            .collect();
        cells.join(" ").trim_end().to_string()
    }

    /// Renders header, rule and rows.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_row(&header, &widths));
        lines.push(horizontal_rule(&widths));
        for row in &self.rows {
            lines.push(self.render_row(row, &widths));
        }
        lines.join("\n")
    }
}

/// Date, Amount, Category, Note listing in store order.
pub fn expense_table(expenses: &[Expense]) -> Table {
    Table {
        columns: vec![
            TableColumn::new("Date", 10, Alignment::Left),
            TableColumn::new("Amount", 9, Alignment::Right),
            TableColumn::new("Category", 12, Alignment::Left).with_max_width(24),
            TableColumn::new("Note", 0, Alignment::Left),
        ],
        rows: expenses
            .iter()
            .map(|expense| {
                vec![
                    expense.date.clone(),
                    format!("{:.2}", expense.amount),
                    expense.category.clone(),
                    expense.note.clone(),
                ]
            })
            .collect(),
    }
}

pub fn category_table(totals: &[CategoryTotal]) -> Table {
    Table {
        columns: vec![
            TableColumn::new("Category", 15, Alignment::Left),
            TableColumn::new("Amount", 9, Alignment::Right),
        ],
        rows: totals
            .iter()
            .map(|entry| vec![entry.category.clone(), format!("{:.2}", entry.amount)])
            .collect(),
    }
}

fn visible_width(text: &str) -> usize {
    text.chars().count()
}

fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut result: String = text.chars().take(width - 1).collect();
    result.push('…');
    result
}

/// Renders a single cell with alignment applied.
fn render_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));
    match alignment {
        Alignment::Left => format!("{fitted}{}", " ".repeat(remaining)),
        Alignment::Right => format!("{}{fitted}", " ".repeat(remaining)),
    }
}

/// Builds a horizontal rule that spans the width of the table.
fn horizontal_rule(widths: &[usize]) -> String {
    let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
    "-".repeat(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(date: &str, amount: f64, category: &str, note: &str) -> Expense {
        Expense {
            date: date.into(),
            amount,
            category: category.into(),
            note: note.into(),
        }
    }

    #[test]
    fn expense_table_aligns_columns() {
        let table = expense_table(&[
            expense("2024-01-01", 50.0, "Food", "lunch"),
            expense("2024-01-03", 15.5, "Travel", "bus"),
        ]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Date          Amount Category     Note");
        assert_eq!(lines[2], "2024-01-01     50.00 Food         lunch");
        assert_eq!(lines[3], "2024-01-03     15.50 Travel       bus");
        assert!(lines[1].chars().all(|ch| ch == '-'));
    }

    #[test]
    fn long_categories_are_truncated() {
        let long = "A".repeat(30);
        let table = expense_table(&[expense("d", 1.0, &long, "")]);
        let widths = table.compute_widths();
        assert_eq!(widths[2], 24);
        let row = table.render_row(&table.rows[0], &widths);
        assert!(row.contains(&format!("{}…", "A".repeat(23))));
    }
}
