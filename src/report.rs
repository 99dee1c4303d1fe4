//! Report assembly: configuration, discovery, counting, tabulation,
//! charting, and layout.

use crate::aggregate::sum_mappings;
use crate::chart::PieChart;
use crate::config::{report_path_for, ReportConfig};
use crate::counting::{CountMap, TermCounter};
use crate::error::{Error, Result};
use crate::extract::{LopdfExtractor, TextExtractor};
use crate::scan::discover_pdfs;
use crate::table::{build_table, IdentityTable, PATH_LABEL};
use crate::writer::{DocumentLayout, PageFrame, PdfWriterConfig, Table, TableFlowable};
use std::path::{Path, PathBuf};

/// Result of a report run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Per-document counts, header first
    pub table: IdentityTable,
    /// Counts summed over every document
    pub totals: CountMap,
    /// Documents that were counted, in row order
    pub documents: Vec<PathBuf>,
    /// Where the PDF is (or would be) written
    pub output_path: PathBuf,
}

/// Builds term-count reports for a folder of documents.
#[derive(Debug, Clone)]
pub struct ReportAssembler<E = LopdfExtractor> {
    extractor: E,
    writer_config: PdfWriterConfig,
    frame: PageFrame,
}

impl ReportAssembler<LopdfExtractor> {
    /// Assembler that reads PDFs with `lopdf`.
    pub fn new() -> Self {
        Self::with_extractor(LopdfExtractor::new())
    }
}

impl Default for ReportAssembler<LopdfExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TextExtractor + Sync> ReportAssembler<E> {
    /// Assembler with a custom text source.
    pub fn with_extractor(extractor: E) -> Self {
        Self {
            extractor,
            writer_config: PdfWriterConfig::default().with_title("Term frequency report"),
            frame: PageFrame::landscape_a4(),
        }
    }

    /// Override the document settings.
    pub fn with_writer_config(mut self, config: PdfWriterConfig) -> Self {
        self.writer_config = config;
        self
    }

    /// Override the page frame.
    pub fn with_frame(mut self, frame: PageFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Build the report and its PDF bytes without writing anything.
    pub fn build(&self, config_path: &Path, folder: &Path) -> Result<(Report, Vec<u8>)> {
        if !config_path.is_file() {
            return Err(Error::ConfigNotFound(config_path.to_path_buf()));
        }
        if !folder.is_dir() {
            return Err(Error::NotADirectory(folder.to_path_buf()));
        }

        let config = ReportConfig::load(config_path)?;
        let counter = TermCounter::new(config.terms)?;
        log::info!("Searching for {} terms", counter.terms().len());

        let documents = discover_pdfs(folder)?;

        let counts = self.count_documents(&counter, &documents)?;

        let entries: Vec<(String, CountMap)> = documents
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .zip(counts)
            .collect();
        let table = build_table(&entries, PATH_LABEL);
        let totals = sum_mappings(entries.iter().map(|(_, counts)| counts));
        log::info!("Counted {} documents, totals: {:?}", table.len(), totals);

        let mut layout = DocumentLayout::new(self.frame);
        layout
            .add(TableFlowable::new(Table::from_grid(table.rows())))
            .add(PieChart::new(&totals).render());
        let bytes = layout.build(self.writer_config.clone())?;

        let report = Report {
            table,
            totals,
            documents,
            output_path: report_path_for(config_path),
        };
        Ok((report, bytes))
    }

    /// Build the report and write it next to the configuration file.
    pub fn run(&self, config_path: &Path, folder: &Path) -> Result<Report> {
        let (report, bytes) = self.build(config_path, folder)?;
        std::fs::write(&report.output_path, bytes)?;
        log::info!("Wrote report to {}", report.output_path.display());
        Ok(report)
    }

    #[cfg(not(feature = "parallel"))]
    fn count_documents(&self, counter: &TermCounter, documents: &[PathBuf]) -> Result<Vec<CountMap>> {
        documents
            .iter()
            .map(|path| self.count_document(counter, path))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn count_documents(&self, counter: &TermCounter, documents: &[PathBuf]) -> Result<Vec<CountMap>> {
        use rayon::prelude::*;

        documents
            .par_iter()
            .map(|path| self.count_document(counter, path))
            .collect()
    }

    fn count_document(&self, counter: &TermCounter, path: &Path) -> Result<CountMap> {
        let text = self.extractor.extract(path)?;
        let counts = counter.count(&text);
        log::debug!("{}: {:?}", path.display(), counts);
        Ok(counts)
    }
}

/// Run the report with the default extractor.
pub fn run(config_path: &Path, folder: &Path) -> Result<Report> {
    ReportAssembler::new().run(config_path, folder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    struct FixedText(HashMap<PathBuf, String>);

    impl TextExtractor for FixedText {
        fn extract(&self, path: &Path) -> Result<String> {
            self.0.get(path).cloned().ok_or_else(|| Error::Extraction {
                path: path.to_path_buf(),
                reason: "no fixture".to_string(),
            })
        }
    }

    #[test]
    fn test_build_counts_each_document() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("terms.json");
        std::fs::write(&config, r#"{"termos": ["cat", "dog"]}"#).unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir(&docs).unwrap();
        let p1 = docs.join("a.pdf");
        let p2 = docs.join("b.pdf");
        std::fs::write(&p1, b"").unwrap();
        std::fs::write(&p2, b"").unwrap();

        let texts = HashMap::from([
            (p1.clone(), "cat cat dog".to_string()),
            (p2.clone(), "dog".to_string()),
        ]);
        let (report, bytes) = ReportAssembler::with_extractor(FixedText(texts))
            .build(&config, &docs)
            .unwrap();

        assert_eq!(report.table.header(), ["Caminho", "cat", "dog"]);
        assert_eq!(report.table.body()[0], [p1.to_string_lossy().into_owned(), "2".into(), "1".into()]);
        assert_eq!(report.table.body()[1], [p2.to_string_lossy().into_owned(), "0".into(), "1".into()]);
        assert_eq!(report.totals["cat"], 2);
        assert_eq!(report.totals["dog"], 2);
        assert_eq!(report.documents, vec![p1, p2]);
        assert_eq!(report.output_path, dir.path().join("terms.pdf"));
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(!report.output_path.exists());
    }

    #[test]
    fn test_missing_config_fails_first() {
        let dir = tempdir().unwrap();
        let err = ReportAssembler::new()
            .build(&dir.path().join("missing.json"), Path::new("/nonexistent"))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }

    #[test]
    fn test_missing_folder_fails() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("terms.json");
        std::fs::write(&config, r#"{"termos": ["cat"]}"#).unwrap();
        let err = ReportAssembler::new()
            .build(&config, &dir.path().join("nope"))
            .unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }

    #[test]
    fn test_extraction_failure_aborts_without_writing() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("terms.json");
        std::fs::write(&config, r#"{"termos": ["cat"]}"#).unwrap();
        std::fs::write(dir.path().join("broken.pdf"), b"not a pdf").unwrap();

        let err = ReportAssembler::new().run(&config, dir.path()).unwrap_err();
        assert!(matches!(err, Error::Extraction { .. }));
        assert!(!dir.path().join("terms.pdf").exists());
    }
}
