//! Flowable page layout.
//!
//! Elements are stacked top-down inside a [`PageFrame`]. Each element is
//! drawn in its own coordinate space (origin at its bottom-left corner) and
//! placed on the page with a `cm` transform, so an element larger than the
//! frame is shrunk uniformly instead of clipped.

use super::content_stream::{ContentStreamBuilder, ContentStreamOp};
use super::pdf_writer::{PdfWriter, PdfWriterConfig};
use super::table_renderer::{FontMetrics, SimpleFontMetrics, Table, TableLayout};
use super::{mm, PAGE_A4_LANDSCAPE};
use crate::error::{Error, Result};

/// Something that can be placed on a page.
pub trait Flowable {
    /// Natural `(width, height)` in points.
    fn size(&self) -> (f32, f32);

    /// Draw in local coordinates, with the origin at the bottom-left corner.
    fn draw(&self, builder: &mut ContentStreamBuilder) -> Result<()>;
}

impl<T: Flowable + ?Sized> Flowable for Box<T> {
    fn size(&self) -> (f32, f32) {
        (**self).size()
    }

    fn draw(&self, builder: &mut ContentStreamBuilder) -> Result<()> {
        (**self).draw(builder)
    }
}

/// A finished vector drawing with a fixed bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
    operations: Vec<ContentStreamOp>,
}

impl Drawing {
    /// Create a drawing from its bounding box and operations.
    pub fn new(width: f32, height: f32, operations: Vec<ContentStreamOp>) -> Self {
        Self {
            width,
            height,
            operations,
        }
    }

    /// Operations making up the drawing.
    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }
}

impl Flowable for Drawing {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn draw(&self, builder: &mut ContentStreamBuilder) -> Result<()> {
        builder.ops(self.operations.iter().cloned());
        Ok(())
    }
}

/// A [`Table`] with its layout computed up front.
#[derive(Debug, Clone)]
pub struct TableFlowable<M = SimpleFontMetrics> {
    table: Table,
    layout: TableLayout,
    metrics: M,
}

impl TableFlowable<SimpleFontMetrics> {
    /// Lay out `table` with the default metrics.
    pub fn new(table: Table) -> Self {
        Self::with_metrics(table, SimpleFontMetrics::default())
    }
}

impl<M: FontMetrics> TableFlowable<M> {
    /// Lay out `table` with custom metrics.
    pub fn with_metrics(table: Table, metrics: M) -> Self {
        let layout = table.calculate_layout(&metrics);
        Self {
            table,
            layout,
            metrics,
        }
    }

    /// Computed layout.
    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }
}

impl<M: FontMetrics> Flowable for TableFlowable<M> {
    fn size(&self) -> (f32, f32) {
        (self.layout.total_width, self.layout.total_height)
    }

    fn draw(&self, builder: &mut ContentStreamBuilder) -> Result<()> {
        self.table
            .render(builder, 0.0, self.layout.total_height, &self.layout, &self.metrics)
    }
}

/// Page size and margins, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    /// Page width
    pub page_width: f32,
    /// Page height
    pub page_height: f32,
    /// Left margin
    pub margin_left: f32,
    /// Right margin
    pub margin_right: f32,
    /// Top margin
    pub margin_top: f32,
    /// Bottom margin
    pub margin_bottom: f32,
}

impl PageFrame {
    /// Page with uniform margins.
    pub fn new(page_width: f32, page_height: f32, margin: f32) -> Self {
        Self {
            page_width,
            page_height,
            margin_left: margin,
            margin_right: margin,
            margin_top: margin,
            margin_bottom: margin,
        }
    }

    /// Landscape A4 with 30mm left/top and 20mm right/bottom margins.
    pub fn landscape_a4() -> Self {
        Self {
            page_width: PAGE_A4_LANDSCAPE.0,
            page_height: PAGE_A4_LANDSCAPE.1,
            margin_left: mm(30.0),
            margin_right: mm(20.0),
            margin_top: mm(30.0),
            margin_bottom: mm(20.0),
        }
    }

    /// Usable width.
    pub fn width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Usable height.
    pub fn height(&self) -> f32 {
        self.page_height - self.margin_top - self.margin_bottom
    }

    /// Y of the frame's top edge.
    pub fn top(&self) -> f32 {
        self.page_height - self.margin_top
    }

    /// Y of the frame's bottom edge.
    pub fn bottom(&self) -> f32 {
        self.margin_bottom
    }
}

impl Default for PageFrame {
    fn default() -> Self {
        Self::landscape_a4()
    }
}

/// Where an element lands on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the element in the layout
    pub index: usize,
    /// Left edge on the page
    pub x: f32,
    /// Bottom edge on the page
    pub y: f32,
    /// Uniform scale factor, at most 1
    pub scale: f32,
}

/// Sequence of flowables laid out over as many pages as needed.
pub struct DocumentLayout {
    frame: PageFrame,
    spacing: f32,
    elements: Vec<Box<dyn Flowable>>,
}

impl DocumentLayout {
    /// Create an empty layout.
    pub fn new(frame: PageFrame) -> Self {
        Self {
            frame,
            spacing: 12.0,
            elements: Vec::new(),
        }
    }

    /// Vertical space between consecutive elements.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Append an element.
    pub fn add(&mut self, element: impl Flowable + 'static) -> &mut Self {
        self.elements.push(Box::new(element));
        self
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when nothing was added.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Compute placements, grouped by page. There is always at least one
    /// page; elements with an empty bounding box are skipped.
    pub fn paginate(&self) -> Result<Vec<Vec<Placement>>> {
        let frame = &self.frame;
        let (frame_w, frame_h) = (frame.width(), frame.height());
        if frame_w <= 0.0 || frame_h <= 0.0 {
            return Err(Error::Render(format!(
                "page frame has no usable area ({}x{})",
                frame_w, frame_h
            )));
        }

        let mut pages = vec![Vec::new()];
        let mut cursor = frame.top();

        for (index, element) in self.elements.iter().enumerate() {
            let (w, h) = element.size();
            if w <= 0.0 || h <= 0.0 {
                log::debug!("Skipping element {} with empty size {}x{}", index, w, h);
                continue;
            }

            let scale = 1f32.min(frame_w / w).min(frame_h / h);
            let (scaled_w, scaled_h) = (w * scale, h * scale);

            let page_has_content = pages.last().is_some_and(|p: &Vec<Placement>| !p.is_empty());
            if page_has_content {
                if cursor - self.spacing - scaled_h < frame.bottom() {
                    pages.push(Vec::new());
                    cursor = frame.top();
                } else {
                    cursor -= self.spacing;
                }
            }

            let placement = Placement {
                index,
                x: frame.margin_left + (frame_w - scaled_w) / 2.0,
                y: cursor - scaled_h,
                scale,
            };
            cursor = placement.y;
            if let Some(page) = pages.last_mut() {
                page.push(placement);
            }
        }

        Ok(pages)
    }

    /// Draw every element into `writer`, adding pages as needed. Returns
    /// the number of pages added.
    pub fn render_into(&self, writer: &mut PdfWriter) -> Result<usize> {
        let pages = self.paginate()?;
        for placements in &pages {
            let mut page = writer.add_page(self.frame.page_width, self.frame.page_height);
            let builder = page.content();
            for placement in placements {
                let s = placement.scale;
                builder.save_state().transform(s, 0.0, 0.0, s, placement.x, placement.y);
                self.elements[placement.index].draw(builder)?;
                builder.restore_state();
            }
            page.finish();
        }
        log::debug!("Laid out {} elements on {} pages", self.elements.len(), pages.len());
        Ok(pages.len())
    }

    /// Render the layout into a new document.
    pub fn build(&self, config: PdfWriterConfig) -> Result<Vec<u8>> {
        let mut writer = PdfWriter::with_config(config);
        self.render_into(&mut writer)?;
        writer.finish()
    }
}
