//! # pdf_term_report
//!
//! Count search terms across a folder of PDF documents and write a PDF
//! report with a per-document count table and a pie chart of the totals.
//!
//! ## Pipeline
//!
//! ```text
//! terms.json ──► ReportConfig ──► TermCounter
//!                                     │
//! folder ──► discover_pdfs ──► TextExtractor ──► CountMap per document
//!                                                    │
//!                         build_table ◄──────────────┤
//!                              │                     ▼
//!                              │               sum_mappings ──► PieChart
//!                              ▼                                   │
//!                        DocumentLayout ◄──────────────────────────┘
//!                              │
//!                              ▼
//!                         terms.pdf
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_term_report::ReportAssembler;
//! use std::path::Path;
//!
//! # fn main() -> pdf_term_report::Result<()> {
//! let report = ReportAssembler::new().run(Path::new("terms.json"), Path::new("docs"))?;
//! println!("{} documents, totals {:?}", report.documents.len(), report.totals);
//! # Ok(())
//! # }
//! ```
//!
//! Counting is plain substring matching: case-sensitive, non-overlapping,
//! scanning left to right.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Term configuration
pub mod config;

// Counting and tabulation
pub mod aggregate;
pub mod counting;
pub mod table;

// Document discovery and reading
pub mod extract;
pub mod scan;

// Output
pub mod chart;
pub mod object;
pub mod writer;

// Orchestration
pub mod report;

pub use aggregate::sum_mappings;
pub use chart::PieChart;
pub use config::{report_path_for, ReportConfig};
pub use counting::{count_term, count_terms, CountMap, TermCounter};
pub use error::{Error, Result};
pub use extract::{LopdfExtractor, TextExtractor};
pub use report::{Report, ReportAssembler};
pub use scan::{discover_pdfs, is_pdf};
pub use table::{build_table, IdentityTable, PATH_LABEL};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "pdf_term_report");
    }
}
