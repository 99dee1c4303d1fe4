//! PDF document writer.
//!
//! Assembles complete PDF documents with proper structure:
//! header, body, xref table, and trailer.

use super::content_stream::ContentStreamBuilder;
use super::object_serializer::ObjectSerializer;
use crate::error::Result;
use crate::object::{Dictionary, Object, ObjectRef};
use std::io::Write;

/// Standard Type1 fonts registered on every page. Resource names equal the
/// base font names, so content streams select them with `/Helvetica` etc.
pub const STANDARD_FONTS: [&str; 2] = ["Helvetica", "Helvetica-Bold"];

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.7")
    pub version: String,
    /// Document title
    pub title: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// Whether to compress streams
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            title: None,
            creator: Some(env!("CARGO_PKG_NAME").to_string()),
            compress: false,
        }
    }
}

impl PdfWriterConfig {
    /// Set document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable FlateDecode compression of content streams.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// A page being built.
pub struct PageBuilder<'a> {
    writer: &'a mut PdfWriter,
    page_index: usize,
}

impl<'a> PageBuilder<'a> {
    /// Add text to the page.
    pub fn add_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font_name: &str,
        font_size: f32,
    ) -> &mut Self {
        self.content()
            .begin_text()
            .set_font(font_name, font_size)
            .text(text, x, y);
        self
    }

    /// Direct access to the page's content stream.
    pub fn content(&mut self) -> &mut ContentStreamBuilder {
        &mut self.writer.pages[self.page_index].content_builder
    }

    /// Finish building this page and return to the writer.
    pub fn finish(self) -> &'a mut PdfWriter {
        self.writer.pages[self.page_index].content_builder.end_text();
        self.writer
    }
}

struct PageData {
    width: f32,
    height: f32,
    content_builder: ContentStreamBuilder,
}

/// PDF document writer.
///
/// Builds a complete PDF document with pages, fonts, and content.
pub struct PdfWriter {
    config: PdfWriterConfig,
    pages: Vec<PageData>,
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
        }
    }

    /// Add a page with the given dimensions in points.
    pub fn add_page(&mut self, width: f32, height: f32) -> PageBuilder<'_> {
        let page_index = self.pages.len();
        self.pages.push(PageData {
            width,
            height,
            content_builder: ContentStreamBuilder::new(),
        });
        PageBuilder {
            writer: self,
            page_index,
        }
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Build the complete PDF document.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        for page in &mut self.pages {
            page.content_builder.end_text();
        }

        let serializer = ObjectSerializer::compact();
        let mut next_id = 1u32;
        let mut alloc = || {
            let id = next_id;
            next_id += 1;
            ObjectRef::new(id, 0)
        };

        let catalog_ref = alloc();
        let pages_ref = alloc();
        let font_refs: Vec<(&str, ObjectRef)> =
            STANDARD_FONTS.iter().map(|name| (*name, alloc())).collect();
        let page_refs: Vec<(ObjectRef, ObjectRef)> =
            self.pages.iter().map(|_| (alloc(), alloc())).collect();
        let info_ref = alloc();

        let mut objects: Vec<(ObjectRef, Object)> = Vec::new();

        objects.push((
            catalog_ref,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Catalog")),
                ("Pages", ObjectSerializer::reference(pages_ref)),
            ]),
        ));
        objects.push((
            pages_ref,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Pages")),
                (
                    "Kids",
                    Object::Array(
                        page_refs
                            .iter()
                            .map(|(page_ref, _)| Object::Reference(*page_ref))
                            .collect(),
                    ),
                ),
                ("Count", ObjectSerializer::integer(self.pages.len() as i64)),
            ]),
        ));

        let mut font_resources = Dictionary::new();
        for (name, font_ref) in &font_refs {
            objects.push((
                *font_ref,
                ObjectSerializer::dict(vec![
                    ("Type", ObjectSerializer::name("Font")),
                    ("Subtype", ObjectSerializer::name("Type1")),
                    ("BaseFont", ObjectSerializer::name(name)),
                    ("Encoding", ObjectSerializer::name("WinAnsiEncoding")),
                ]),
            ));
            font_resources.insert(name.to_string(), Object::Reference(*font_ref));
        }

        for (page_data, (page_ref, content_ref)) in self.pages.iter().zip(&page_refs) {
            let raw_content = page_data.content_builder.build()?;

            let mut content_dict = Dictionary::new();
            let content_bytes = if self.config.compress {
                content_dict.insert("Filter".to_string(), ObjectSerializer::name("FlateDecode"));
                compress_data(&raw_content)?
            } else {
                raw_content
            };

            objects.push((
                *page_ref,
                ObjectSerializer::dict(vec![
                    ("Type", ObjectSerializer::name("Page")),
                    ("Parent", ObjectSerializer::reference(pages_ref)),
                    (
                        "MediaBox",
                        ObjectSerializer::rect(
                            0.0,
                            0.0,
                            page_data.width as f64,
                            page_data.height as f64,
                        ),
                    ),
                    ("Contents", ObjectSerializer::reference(*content_ref)),
                    (
                        "Resources",
                        ObjectSerializer::dict(vec![(
                            "Font",
                            Object::Dictionary(font_resources.clone()),
                        )]),
                    ),
                ]),
            ));
            objects.push((
                *content_ref,
                Object::Stream {
                    dict: content_dict,
                    data: content_bytes,
                },
            ));
        }

        let mut info_entries = Vec::new();
        if let Some(title) = &self.config.title {
            info_entries.push(("Title", ObjectSerializer::text_string(title)));
        }
        if let Some(creator) = &self.config.creator {
            info_entries.push(("Creator", ObjectSerializer::text_string(creator)));
        }
        objects.push((info_ref, ObjectSerializer::dict(info_entries)));

        objects.sort_by_key(|(obj_ref, _)| *obj_ref);

        let mut output = Vec::new();
        writeln!(output, "%PDF-{}", self.config.version)?;
        // Binary marker (recommended for binary content)
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        let mut xref_offsets = Vec::with_capacity(objects.len());
        for (obj_ref, obj) in &objects {
            xref_offsets.push(output.len());
            output.extend_from_slice(&serializer.serialize_indirect(obj_ref.id, obj_ref.gen, obj)?);
        }

        let xref_start = output.len();
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", objects.len() + 1)?;
        // Object 0 is always free
        writeln!(output, "0000000000 65535 f ")?;
        for offset in &xref_offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(objects.len() as i64 + 1)),
            ("Root", ObjectSerializer::reference(catalog_ref)),
            ("Info", ObjectSerializer::reference(info_ref)),
        ]);

        writeln!(output, "trailer")?;
        output.extend_from_slice(&serializer.serialize(&trailer)?);
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        write!(output, "%%EOF")?;

        Ok(output)
    }

    /// Save the PDF to a file.
    pub fn save(self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.finish()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
