/// Text cells of one result row, `None` for SQL `NULL`.
pub type Cells = Box<[Option<String>]>;

/// Result of a read query exchanged over the text protocol.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RowSet {
    /// Number of columns of each row.
    pub columns: usize,
    /// Rows in the order returned by the database.
    pub rows: Vec<Cells>,
}

impl RowSet {
    pub fn new(columns: usize, rows: Vec<Cells>) -> Self {
        Self { columns, rows }
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row { cells })
    }
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row { cells })
    }
}

/// Borrowed view over the cells of one row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    cells: &'a [Option<String>],
}

impl<'a> Row<'a> {
    pub fn new(cells: &'a [Option<String>]) -> Self {
        Self { cells }
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Text of the cell, empty for `NULL` or a column past the end.
    pub fn cell(&self, column: usize) -> &'a str {
        self.cells
            .get(column)
            .and_then(Option::as_deref)
            .unwrap_or_default()
    }
    pub fn is_null(&self, column: usize) -> bool {
        matches!(self.cells.get(column), Some(None) | None)
    }
}
