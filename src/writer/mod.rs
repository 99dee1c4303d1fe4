//! PDF writing module for generating the report document.
//!
//! ## Architecture
//!
//! ```text
//! Flowable[] (tables, drawings)
//!     ↓
//! [DocumentLayout] (pagination, shrink-to-fit, centering)
//!     ↓
//! [ContentStreamBuilder] (operators → content stream bytes)
//!     ↓
//! [PdfWriter] (assembles complete PDF structure)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## Low-Level API (PdfWriter)
//!
//! ```
//! use pdf_term_report::writer::{PdfWriter, PAGE_A4};
//!
//! let mut writer = PdfWriter::new();
//! let mut page = writer.add_page(PAGE_A4.0, PAGE_A4.1);
//! page.add_text("Hello, World!", 72.0, 720.0, "Helvetica", 12.0);
//! page.finish();
//! let bytes = writer.finish().unwrap();
//! assert!(bytes.starts_with(b"%PDF-"));
//! ```

mod content_stream;
mod layout;
mod object_serializer;
mod pdf_writer;
mod table_renderer;

pub use content_stream::{ContentStreamBuilder, ContentStreamOp};
pub use layout::{DocumentLayout, Drawing, Flowable, PageFrame, Placement, TableFlowable};
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::{PageBuilder, PdfWriter, PdfWriterConfig, STANDARD_FONTS};
pub use table_renderer::{
    CellAlign, CellPadding, FontMetrics, SimpleFontMetrics, Table, TableBorderStyle, TableCell,
    TableLayout, TableRow, TableStyle,
};

/// A4 portrait `(width, height)` in points.
pub const PAGE_A4: (f32, f32) = (595.0, 842.0);

/// A4 landscape `(width, height)` in points.
pub const PAGE_A4_LANDSCAPE: (f32, f32) = (PAGE_A4.1, PAGE_A4.0);

/// Convert millimetres to points.
pub fn mm(value: f32) -> f32 {
    value * 72.0 / 25.4
}
