//! Pipe-delimited text tables.
//!
//! A [`Table`] accumulates rows, tracks the widest value seen in each column,
//! and renders the whole table in one pass: a header line, a dashed separator,
//! one line per row, and a trailing blank line. The output is plain text
//! suitable for terminals or markdown:
//!
//! ```text
//! | Name  | Age |
//! |-------|-----|
//! | Alice | 30  |
//! |  Bob  |  7  |
//! ```

use std::io::{self, Write};

use tracing::debug;

use crate::error::Result;

/// Alignment policy applied when padding a cell's text to its column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Pad on the right.
    Left,
    /// Pad on the left.
    Right,
    /// Split padding between both sides; the extra fill goes on the right
    /// when the padding is odd.
    #[default]
    Center,
}

/// Display metadata and width tracking for one table column.
///
/// The width is the maximum character count over the title and every cell
/// ever observed; it never shrinks.
#[derive(Debug, Clone)]
pub struct Column {
    title: String,
    justify: Justify,
    max_width: usize,
}

impl Column {
    /// Create a center-justified column.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_justify(title, Justify::Center)
    }

    /// Create a column with an explicit justification.
    pub fn with_justify(title: impl Into<String>, justify: Justify) -> Self {
        let title = title.into();
        let max_width = title.chars().count();
        Self {
            title,
            justify,
            max_width,
        }
    }

    /// The column's display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The column's configured justification.
    pub fn justify(&self) -> Justify {
        self.justify
    }

    /// The widest value seen so far, including the title.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Widen the column to fit `item` if necessary.
    pub fn observe(&mut self, item: &str) {
        self.max_width = self.max_width.max(item.chars().count());
    }

    /// Write one cell: `pad`, then `text` justified to the column width with
    /// `pad` as the fill character, then `pad` and the column separator.
    ///
    /// `justify` overrides the configured justification when given. Text
    /// already at or beyond the column width is written unpadded, never
    /// truncated.
    fn write_cell<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        justify: Option<Justify>,
        pad: char,
    ) -> io::Result<()> {
        let fill = self.max_width.saturating_sub(text.chars().count());
        let (left, right) = match justify.unwrap_or(self.justify) {
            Justify::Left => (0, fill),
            Justify::Right => (fill, 0),
            Justify::Center => (fill / 2, fill - fill / 2),
        };
        write!(w, "{}", pad)?;
        write_fill(w, pad, left)?;
        w.write_all(text.as_bytes())?;
        write_fill(w, pad, right)?;
        write!(w, "{}|", pad)
    }
}

/// A plain title becomes a center-justified column.
impl From<&str> for Column {
    fn from(title: &str) -> Self {
        Column::new(title)
    }
}

impl From<String> for Column {
    fn from(title: String) -> Self {
        Column::new(title)
    }
}

fn write_fill<W: Write>(w: &mut W, pad: char, count: usize) -> io::Result<()> {
    for _ in 0..count {
        write!(w, "{}", pad)?;
    }
    Ok(())
}

/// An ordered set of columns plus accumulated rows.
///
/// Rows are paired with columns positionally and may be shorter or longer
/// than the column set; extra cells are silently ignored and missing cells
/// simply end the line early. This permissive pairing is deliberate.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from anything convertible to columns, e.g. explicit
    /// [`Column`] values or plain `&str` titles.
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Column>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// The table's columns, with their current widths.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Append a row, converting every value to its text representation and
    /// widening each column to fit its cell.
    pub fn add_row<I>(&mut self, row: I)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let row: Vec<String> = row.into_iter().map(|v| v.to_string()).collect();
        for (cell, column) in row.iter().zip(self.columns.iter_mut()) {
            column.observe(cell);
        }
        self.rows.push(row);
    }

    /// Render the whole table to `w`: header (titles always left-justified),
    /// dashed separator, one line per row with each column's own
    /// justification, and a trailing blank line.
    ///
    /// Rendering does not mutate the table, so rendering twice with no
    /// intervening [`add_row`](Self::add_row) produces identical output.
    pub fn render_to<W: Write>(&self, w: &mut W) -> Result<()> {
        debug!(
            columns = self.columns.len(),
            rows = self.rows.len(),
            "rendering table"
        );

        w.write_all(b"|")?;
        for column in &self.columns {
            column.write_cell(w, &column.title, Some(Justify::Left), ' ')?;
        }
        w.write_all(b"\n|")?;
        for column in &self.columns {
            column.write_cell(w, "", None, '-')?;
        }
        w.write_all(b"\n")?;

        for row in &self.rows {
            w.write_all(b"|")?;
            for (cell, column) in row.iter().zip(&self.columns) {
                column.write_cell(w, cell, None, ' ')?;
            }
            w.write_all(b"\n")?;
        }
        w.write_all(b"\n")?;
        Ok(())
    }

    /// Render the table to standard output.
    pub fn render(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.render_to(&mut handle)
    }
}
