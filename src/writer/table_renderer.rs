//! Table rendering for PDF generation.
//!
//! Tables are laid out on a single line per cell: column widths come from
//! the widest cell text in each column, and row heights from the font size
//! plus padding.
//!
//! # Example
//!
//! ```ignore
//! use pdf_term_report::writer::{SimpleFontMetrics, Table};
//!
//! let table = Table::from_grid(&[
//!     vec!["Caminho".to_string(), "cat".to_string()],
//!     vec!["a.pdf".to_string(), "2".to_string()],
//! ]);
//! let layout = table.calculate_layout(&SimpleFontMetrics::default());
//! ```

use super::content_stream::ContentStreamBuilder;
use crate::error::Result;

/// Horizontal alignment for cell content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellAlign {
    /// Align to the left
    #[default]
    Left,
    /// Center horizontally
    Center,
    /// Align to the right
    Right,
}

/// Border style for tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableBorderStyle {
    /// Border width in points
    pub width: f32,
    /// Border color (RGB, 0.0-1.0)
    pub color: (f32, f32, f32),
}

impl Default for TableBorderStyle {
    fn default() -> Self {
        Self {
            width: 0.5,
            color: (0.0, 0.0, 0.0),
        }
    }
}

impl TableBorderStyle {
    /// Create a new border style.
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Create a thin border (0.25pt).
    pub fn thin() -> Self {
        Self::new(0.25)
    }
}

/// Cell padding configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPadding {
    /// Top padding in points
    pub top: f32,
    /// Right padding in points
    pub right: f32,
    /// Bottom padding in points
    pub bottom: f32,
    /// Left padding in points
    pub left: f32,
}

impl Default for CellPadding {
    fn default() -> Self {
        Self::symmetric(6.0, 3.0)
    }
}

impl CellPadding {
    /// Create uniform padding.
    pub fn uniform(padding: f32) -> Self {
        Self::symmetric(padding, padding)
    }

    /// Create padding with horizontal and vertical values.
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    /// Cell content (text)
    pub content: String,
    /// Horizontal alignment
    pub align: CellAlign,
    /// Bold text
    pub bold: bool,
}

impl TableCell {
    /// Create a new text cell.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            align: CellAlign::Left,
            bold: false,
        }
    }

    /// Set horizontal alignment.
    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = align;
        self
    }

    /// Set bold style.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Create a header cell (centered, bold).
    pub fn header(content: impl Into<String>) -> Self {
        Self::text(content).align(CellAlign::Center).bold()
    }

    /// Create a numeric cell (right-aligned).
    pub fn number(content: impl Into<String>) -> Self {
        Self::text(content).align(CellAlign::Right)
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Cells in this row
    pub cells: Vec<TableCell>,
    /// Whether this is a header row
    pub is_header: bool,
}

impl TableRow {
    /// Create a new row from cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Create a header row.
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: true,
        }
    }
}

/// Table style configuration.
#[derive(Debug, Clone)]
pub struct TableStyle {
    /// Cell padding
    pub cell_padding: CellPadding,
    /// Grid lines drawn around every cell
    pub cell_border: TableBorderStyle,
    /// Font for body rows; header rows use its bold variant
    pub font_name: String,
    /// Font size
    pub font_size: f32,
    /// Header row background color
    pub header_background: Option<(f32, f32, f32)>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            cell_padding: CellPadding::default(),
            cell_border: TableBorderStyle::thin(),
            font_name: "Helvetica".to_string(),
            font_size: 10.0,
            header_background: Some((0.85, 0.85, 0.85)),
        }
    }
}

impl TableStyle {
    /// Create a new default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cell padding.
    pub fn cell_padding(mut self, padding: CellPadding) -> Self {
        self.cell_padding = padding;
        self
    }

    fn font_for(&self, bold: bool) -> String {
        if bold {
            format!("{}-Bold", self.font_name)
        } else {
            self.font_name.clone()
        }
    }
}

/// A complete table.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table rows
    pub rows: Vec<TableRow>,
    /// Table style
    pub style: TableStyle,
}

impl Table {
    /// Create a table from TableRow objects.
    pub fn from_rows(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            style: TableStyle::default(),
        }
    }

    /// Create a table from a grid of strings.
    ///
    /// The first row becomes a bold header. In body rows the first column is
    /// left-aligned and the remaining columns, which hold counts, are
    /// right-aligned.
    pub fn from_grid(grid: &[Vec<String>]) -> Self {
        let mut rows = Vec::with_capacity(grid.len());
        let mut iter = grid.iter();
        if let Some(header) = iter.next() {
            rows.push(TableRow::header(header.iter().map(TableCell::header).collect()));
        }
        for row in iter {
            let cells = row
                .iter()
                .enumerate()
                .map(|(col, value)| {
                    if col == 0 {
                        TableCell::text(value.as_str())
                    } else {
                        TableCell::number(value.as_str())
                    }
                })
                .collect();
            rows.push(TableRow::new(cells));
        }
        Self::from_rows(rows)
    }

    /// Set table style.
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Get the number of columns.
    pub fn num_columns(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Get the number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Calculated layout for a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Calculated column widths in points
    pub column_widths: Vec<f32>,
    /// Calculated row heights in points
    pub row_heights: Vec<f32>,
    /// Total table width
    pub total_width: f32,
    /// Total table height
    pub total_height: f32,
}

impl Table {
    /// Calculate the natural layout for this table.
    pub fn calculate_layout(&self, font_metrics: &dyn FontMetrics) -> TableLayout {
        let num_cols = self.num_columns();
        if num_cols == 0 {
            return TableLayout {
                column_widths: vec![],
                row_heights: vec![],
                total_width: 0.0,
                total_height: 0.0,
            };
        }

        let padding = &self.style.cell_padding;
        let font_size = self.style.font_size;

        let mut column_widths = vec![0.0f32; num_cols];
        for row in &self.rows {
            for (col, cell) in row.cells.iter().enumerate() {
                let bold = cell.bold || row.is_header;
                let text_width = font_metrics.text_width(&cell.content, font_size, bold);
                column_widths[col] = column_widths[col].max(text_width + padding.horizontal());
            }
        }
        for width in &mut column_widths {
            *width = width.max(20.0); // Minimum 20pt
        }

        let row_height = font_size * 1.2 + padding.vertical();
        let row_heights = vec![row_height; self.rows.len()];

        TableLayout {
            total_width: column_widths.iter().sum(),
            total_height: row_heights.iter().sum(),
            column_widths,
            row_heights,
        }
    }

    /// Render the table to a content stream.
    ///
    /// `(x, y)` is the top-left corner of the table; PDF coordinates grow
    /// upward, so rows are drawn below `y`.
    pub fn render(
        &self,
        builder: &mut ContentStreamBuilder,
        x: f32,
        y: f32,
        layout: &TableLayout,
        font_metrics: &dyn FontMetrics,
    ) -> Result<()> {
        let style = &self.style;

        // Backgrounds first so grid lines and text stay on top
        let mut row_top = y;
        for (row_idx, row) in self.rows.iter().enumerate() {
            let height = layout.row_heights[row_idx];
            let background = style.header_background.filter(|_| row.is_header);
            if let Some((r, g, b)) = background {
                builder
                    .set_fill_color(r, g, b)
                    .rect(x, row_top - height, layout.total_width, height)
                    .fill();
            }
            row_top -= height;
        }

        if style.cell_border.width > 0.0 {
            let (r, g, b) = style.cell_border.color;
            builder
                .set_stroke_color(r, g, b)
                .set_line_width(style.cell_border.width);
            let mut row_top = y;
            for height in &layout.row_heights {
                let mut cell_x = x;
                for width in &layout.column_widths {
                    builder.rect(cell_x, row_top - height, *width, *height);
                    cell_x += width;
                }
                row_top -= height;
            }
            builder.stroke();
        }

        builder.set_fill_gray(0.0);
        let padding = &style.cell_padding;
        let mut row_top = y;
        for (row_idx, row) in self.rows.iter().enumerate() {
            let mut cell_x = x;
            for (col, cell) in row.cells.iter().enumerate() {
                let width = layout.column_widths[col];
                if !cell.content.is_empty() {
                    let bold = cell.bold || row.is_header;
                    let text_width = font_metrics.text_width(&cell.content, style.font_size, bold);
                    let content_width = width - padding.horizontal();
                    let text_x = match cell.align {
                        CellAlign::Left => cell_x + padding.left,
                        CellAlign::Center => cell_x + padding.left + (content_width - text_width) / 2.0,
                        CellAlign::Right => cell_x + width - padding.right - text_width,
                    };
                    let text_y = row_top - padding.top - style.font_size;

                    builder
                        .begin_text()
                        .set_font(&style.font_for(bold), style.font_size)
                        .text(&cell.content, text_x, text_y);
                }
                cell_x += width;
            }
            row_top -= layout.row_heights[row_idx];
        }
        builder.end_text();

        Ok(())
    }
}

/// Trait for font metrics needed for layout.
pub trait FontMetrics {
    /// Calculate the width of text in points.
    fn text_width(&self, text: &str, font_size: f32, bold: bool) -> f32;
}

/// Simple font metrics using average character width.
#[derive(Debug, Clone, Copy)]
pub struct SimpleFontMetrics {
    /// Average character width as proportion of font size
    pub char_width_ratio: f32,
    /// Extra width factor applied to bold text
    pub bold_factor: f32,
}

impl Default for SimpleFontMetrics {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.55,
            bold_factor: 1.1,
        }
    }
}

impl FontMetrics for SimpleFontMetrics {
    fn text_width(&self, text: &str, font_size: f32, bold: bool) -> f32 {
        let width = text.chars().count() as f32 * font_size * self.char_width_ratio;
        if bold {
            width * self.bold_factor
        } else {
            width
        }
    }
}
