//! Pie chart of aggregate term counts.
//!
//! The chart is rendered into a [`Drawing`] that the page layout can place
//! and scale like any other flowable.

use crate::counting::CountMap;
use crate::writer::{ContentStreamBuilder, Drawing, FontMetrics, SimpleFontMetrics};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Wedge colors, cycled in label order.
pub const PALETTE: [(f32, f32, f32); 10] = [
    (0.122, 0.467, 0.706),
    (1.000, 0.498, 0.055),
    (0.173, 0.627, 0.173),
    (0.839, 0.153, 0.157),
    (0.580, 0.404, 0.741),
    (0.549, 0.337, 0.294),
    (0.890, 0.467, 0.761),
    (0.498, 0.498, 0.498),
    (0.737, 0.741, 0.133),
    (0.090, 0.745, 0.812),
];

const LABEL_FONT: &str = "Helvetica";
const LABEL_DISTANCE: f32 = 1.1;
const PERCENT_DISTANCE: f32 = 0.6;
const PADDING: f32 = 4.0;

/// Pie chart over a count mapping.
#[derive(Debug, Clone)]
pub struct PieChart {
    slices: Vec<(String, usize)>,
    radius: f32,
    font_size: f32,
}

/// Axis-aligned bounds accumulated while placing wedges and labels.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    fn square(half: f32) -> Self {
        Self {
            min_x: -half,
            min_y: -half,
            max_x: half,
            max_y: half,
        }
    }

    fn include(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.min_x = self.min_x.min(x0);
        self.min_y = self.min_y.min(y0);
        self.max_x = self.max_x.max(x1);
        self.max_y = self.max_y.max(y1);
    }
}

/// A label positioned relative to the chart center.
struct Label {
    text: String,
    x: f32,
    y: f32,
}

impl PieChart {
    /// Chart with one wedge per entry of `counts`, in mapping order.
    pub fn new(counts: &CountMap) -> Self {
        Self {
            slices: counts.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            radius: 150.0,
            font_size: 10.0,
        }
    }

    /// Set the pie radius in points.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.slices.iter().map(|(_, v)| v).sum()
    }

    /// Wedge angles as `(start, end)` radians, counter-clockwise from 90
    /// degrees. Empty when the total is zero.
    pub fn wedge_angles(&self) -> Vec<(f32, f32)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }

        let mut start = FRAC_PI_2;
        self.slices
            .iter()
            .map(|(_, value)| {
                let end = start + TAU * (*value as f32 / total as f32);
                let wedge = (start, end);
                start = end;
                wedge
            })
            .collect()
    }

    /// Render the chart.
    pub fn render(&self) -> Drawing {
        let metrics = SimpleFontMetrics::default();
        let r = self.radius;
        let fs = self.font_size;
        let total = self.total();
        let wedges = self.wedge_angles();

        let mut bounds = Bounds::square(r);
        let mut outer = Vec::with_capacity(wedges.len());
        let mut inner = Vec::with_capacity(wedges.len());

        for ((name, value), (start, end)) in self.slices.iter().zip(&wedges) {
            let mid = (start + end) / 2.0;
            let (sin, cos) = mid.sin_cos();

            let width = metrics.text_width(name, fs, false);
            let anchor_x = LABEL_DISTANCE * r * cos;
            let x = if cos >= 0.0 { anchor_x } else { anchor_x - width };
            let y = LABEL_DISTANCE * r * sin - fs * 0.35;
            bounds.include(x, y - fs * 0.25, x + width, y + fs);
            outer.push(Label {
                text: name.clone(),
                x,
                y,
            });

            let percent = format!("{:.2}%", 100.0 * *value as f64 / total as f64);
            let width = metrics.text_width(&percent, fs, false);
            inner.push(Label {
                x: PERCENT_DISTANCE * r * cos - width / 2.0,
                y: PERCENT_DISTANCE * r * sin - fs * 0.35,
                text: percent,
            });
        }

        // Shift so the bounding box starts at (PADDING, PADDING)
        let cx = PADDING - bounds.min_x;
        let cy = PADDING - bounds.min_y;

        let mut builder = ContentStreamBuilder::new();
        builder.set_line_width(0.5);

        if wedges.is_empty() {
            builder.set_stroke_color(0.0, 0.0, 0.0).circle(cx, cy, r).stroke();
        } else {
            builder.set_stroke_color(1.0, 1.0, 1.0);
            for (i, (start, end)) in wedges.iter().enumerate() {
                if end <= start {
                    continue;
                }
                let (red, green, blue) = PALETTE[i % PALETTE.len()];
                builder
                    .set_fill_color(red, green, blue)
                    .move_to(cx, cy)
                    .line_to(cx + r * start.cos(), cy + r * start.sin())
                    .arc(cx, cy, r, *start, *end)
                    .close_path()
                    .fill_stroke();
            }

            builder.set_fill_gray(0.0);
            for label in outer.iter().chain(&inner) {
                builder
                    .begin_text()
                    .set_font(LABEL_FONT, fs)
                    .text(&label.text, cx + label.x, cy + label.y);
            }
        }

        let width = bounds.max_x - bounds.min_x + 2.0 * PADDING;
        let height = bounds.max_y - bounds.min_y + 2.0 * PADDING;
        Drawing::new(width, height, builder.into_operations())
    }
}
