//! Term Frequency Report
//!
//! Counts the terms listed in a JSON file across every PDF under a folder
//! and writes `<terms>.pdf` next to the JSON file.
//!
//! Usage:
//!   pdf-term-report terms.json path/to/folder
//!   RUST_LOG=debug pdf-term-report terms.json path/to/folder

use clap::Parser;
use env_logger::{Builder, Env};
use pdf_term_report::ReportAssembler;
use std::path::PathBuf;
use std::process::ExitCode;

/// Count search terms across a folder of PDFs and write a PDF report.
#[derive(Debug, Parser)]
#[command(name = "pdf-term-report", version, about)]
struct Cli {
    /// JSON file with a `termos` array of search terms
    terms: PathBuf,

    /// Folder searched recursively for PDF files
    folder: PathBuf,
}

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match ReportAssembler::new().run(&cli.terms, &cli.folder) {
        Ok(report) => {
            println!(
                "Report for {} documents written to {}",
                report.documents.len(),
                report.output_path.display()
            );
            ExitCode::SUCCESS
        },
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
