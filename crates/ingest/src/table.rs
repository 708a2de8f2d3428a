//! In-memory tabular data read from a spreadsheet.

/// Header row plus data rows. Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row of present values.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows
            .push(cells.into_iter().map(|c| Some(c.into())).collect());
    }

    /// Index of the column named exactly `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at `row`/`col`; short rows read as empty.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|c| c.as_deref())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_lookup_is_exact() {
        let table = Table::new(vec!["id".into(), "question".into(), "Response".into()]);
        assert_eq!(table.column("question"), Some(1));
        assert_eq!(table.column("response"), None);
        assert_eq!(table.column("Response"), Some(2));
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let mut table = Table::new(vec!["question".into(), "response".into()]);
        table.push_row(["only a question"]);
        assert_eq!(table.cell(0, 0), Some("only a question"));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(5, 0), None);
        assert_eq!(table.len(), 1);
    }
}
