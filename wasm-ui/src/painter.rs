//! Canvas-backed rasterizer for the export pipeline.
//!
//! Implements the core [`Rasterizer`] capability by drawing the rendered
//! [`Document`] tree onto an offscreen canvas at 2x scale and reading the
//! pixels back. Two passes: a dry measuring pass establishes the total
//! height and the vertical span of each region, then the canvas is sized
//! and painted for real.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use smartsume::{Bitmap, Block, ContactKind, Document, ExportError, LayoutId, Rasterizer, RegionRole};

/// Device pixels per CSS pixel, matching the original 2x capture.
const SCALE: f64 = 2.0;
/// A4 width at 96 dpi, in CSS pixels.
const PAGE_WIDTH_PX: f64 = 794.0;
/// Page margin, in CSS pixels.
const MARGIN_PX: f64 = 40.0;

pub struct CanvasRasterizer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRasterizer {
    /// Create an offscreen canvas and its 2d context.
    pub fn new() -> Result<Self, ExportError> {
        let window = web_sys::window().ok_or_else(|| capture_err("no window"))?;
        let document = window.document().ok_or_else(|| capture_err("no document"))?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(js_capture)?
            .dyn_into()
            .map_err(|_| capture_err("canvas element cast failed"))?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(js_capture)?
            .ok_or_else(|| capture_err("2d context unavailable"))?
            .dyn_into()
            .map_err(|_| capture_err("2d context cast failed"))?;

        Ok(Self { canvas, ctx })
    }

    fn paint(
        &self,
        doc: &Document,
        dry: bool,
        spans: &mut Vec<(f64, f64)>,
    ) -> Result<f64, ExportError> {
        let width = PAGE_WIDTH_PX * SCALE;
        let margin = MARGIN_PX * SCALE;
        let content_w = width - margin * 2.0;

        self.ctx.set_text_baseline("top");
        self.ctx.set_text_align("left");

        if dry {
            spans.clear();
        }

        let mut y = 0.0;
        for (i, region) in doc.regions.iter().enumerate() {
            let bg = region_background(doc.layout, region.role);
            let pad = if bg.is_some() { 24.0 } else { 12.0 } * SCALE;
            let y0 = y;

            if !dry
                && let Some(color) = bg
                && let Some(&(start, end)) = spans.get(i)
            {
                self.ctx.set_fill_style_str(color);
                self.ctx.fill_rect(0.0, start, width, end - start);
            }

            y += pad;
            for block in &region.blocks {
                y = self.paint_block(block, doc.layout, region.role, margin, content_w, y, dry)?;
            }
            y += pad;

            if dry {
                spans.push((y0, y));
            }
        }

        Ok(y)
    }

    #[allow(clippy::too_many_arguments)]
    fn paint_block(
        &self,
        block: &Block,
        layout: LayoutId,
        role: RegionRole,
        x: f64,
        content_w: f64,
        mut y: f64,
        dry: bool,
    ) -> Result<f64, ExportError> {
        let on_color = region_background(layout, role).is_some();
        let primary = if on_color { "#ffffff" } else { "#111827" };
        let secondary = if on_color { "#e5e7eb" } else { "#4b5563" };
        let accent = if on_color {
            "#ffffff"
        } else if layout == LayoutId::Creative {
            "#6d28d9"
        } else {
            "#111827"
        };

        match block {
            Block::Name(name) => {
                y = self.text_lines(name, 28.0, true, primary, x, content_w, y, dry)?;
            }
            Block::Title(title) => {
                y = self.text_lines(title, 16.0, false, secondary, x, content_w, y, dry)?;
                y += 4.0 * SCALE;
            }
            Block::Monogram(initials) => {
                let r = 32.0 * SCALE;
                let cx = x + r;
                let cy = y + r;
                if !dry {
                    self.ctx.begin_path();
                    self.ctx
                        .arc(cx, cy, r, 0.0, std::f64::consts::TAU)
                        .map_err(js_capture)?;
                    self.ctx.set_fill_style_str("#ffffff");
                    self.ctx.fill();

                    self.ctx.set_font(&font(26.0, true));
                    self.ctx.set_fill_style_str("#6d28d9");
                    self.ctx.set_text_align("center");
                    self.ctx.set_text_baseline("middle");
                    self.ctx.fill_text(initials, cx, cy).map_err(js_capture)?;
                    self.ctx.set_text_align("left");
                    self.ctx.set_text_baseline("top");
                }
                y += r * 2.0 + 8.0 * SCALE;
            }
            Block::Contact(items) => {
                let line = items
                    .iter()
                    .map(|i| format!("{} {}", contact_glyph(i.kind), i.value))
                    .collect::<Vec<_>>()
                    .join("    ");
                if !line.is_empty() {
                    y = self.text_lines(&line, 11.0, false, secondary, x, content_w, y, dry)?;
                }
            }
            Block::Heading(heading) => {
                y += 10.0 * SCALE;
                y = self.text_lines(heading, 15.0, true, accent, x, content_w, y, dry)?;
                if !dry {
                    self.ctx
                        .set_fill_style_str(if on_color { "#ffffff55" } else { "#e5e7eb" });
                    self.ctx.fill_rect(x, y + 2.0, content_w, 1.0 * SCALE);
                }
                y += 8.0 * SCALE;
            }
            Block::Paragraph(text) => {
                y = self.text_lines(text, 12.0, false, secondary, x, content_w, y, dry)?;
                y += 4.0 * SCALE;
            }
            Block::Entry {
                heading,
                subheading,
                date,
                body,
                link,
            } => {
                y += 4.0 * SCALE;
                if !date.is_empty() && !dry {
                    self.ctx.set_font(&font(11.0, false));
                    self.ctx.set_fill_style_str(secondary);
                    self.ctx.set_text_align("right");
                    self.ctx
                        .fill_text(date, x + content_w, y)
                        .map_err(js_capture)?;
                    self.ctx.set_text_align("left");
                }
                y = self.text_lines(heading, 13.0, true, primary, x, content_w, y, dry)?;
                if !subheading.is_empty() {
                    y = self.text_lines(subheading, 12.0, false, accent, x, content_w, y, dry)?;
                }
                if !body.is_empty() {
                    y = self.text_lines(body, 11.0, false, secondary, x, content_w, y, dry)?;
                }
                if let Some(url) = link {
                    y = self.text_lines(url, 10.0, false, secondary, x, content_w, y, dry)?;
                }
                y += 4.0 * SCALE;
            }
            Block::Tags(tags) => {
                let line = tags.join("  •  ");
                y = self.text_lines(&line, 12.0, false, primary, x, content_w, y, dry)?;
            }
            Block::Items(items) => {
                for item in items {
                    let line = format!("•  {item}");
                    y = self.text_lines(&line, 12.0, false, primary, x, content_w, y, dry)?;
                }
            }
        }

        Ok(y)
    }

    /// Draw (or measure) a run of wrapped text; returns the new cursor.
    #[allow(clippy::too_many_arguments)]
    fn text_lines(
        &self,
        text: &str,
        size_px: f64,
        bold: bool,
        color: &str,
        x: f64,
        max_w: f64,
        mut y: f64,
        dry: bool,
    ) -> Result<f64, ExportError> {
        let size = size_px * SCALE;
        self.ctx.set_font(&font(size_px, bold));
        let line_h = size * 1.45;

        for line in wrap_text(&self.ctx, text, max_w) {
            if !dry {
                self.ctx.set_fill_style_str(color);
                self.ctx.fill_text(&line, x, y).map_err(js_capture)?;
            }
            y += line_h;
        }
        Ok(y)
    }
}

impl Rasterizer for CanvasRasterizer {
    fn rasterize(&self, document: &Document) -> Result<Bitmap, ExportError> {
        let width = (PAGE_WIDTH_PX * SCALE) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(16); // provisional; measuring needs only a live context

        let mut spans = Vec::new();
        let height = self.paint(document, true, &mut spans)?.ceil().max(1.0) as u32;

        // Resizing resets context state; the wet pass re-applies it.
        self.canvas.set_height(height);
        self.ctx.set_fill_style_str("#ffffff");
        self.ctx
            .fill_rect(0.0, 0.0, width as f64, height as f64);
        self.paint(document, false, &mut spans)?;

        let data = self
            .ctx
            .get_image_data(0.0, 0.0, width as f64, height as f64)
            .map_err(js_capture)?;
        Bitmap::new(width, height, data.data().0)
    }
}

/// Background fill for colored regions; `None` means the page background.
fn region_background(layout: LayoutId, role: RegionRole) -> Option<&'static str> {
    match (layout, role) {
        (LayoutId::Professional, RegionRole::Banner) => Some("#111827"),
        (LayoutId::Creative, RegionRole::Sidebar) => Some("#6d28d9"),
        _ => None,
    }
}

fn contact_glyph(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "✉",
        ContactKind::Phone => "✆",
        ContactKind::Location => "⌖",
    }
}

fn font(size_px: f64, bold: bool) -> String {
    let weight = if bold { "bold " } else { "" };
    format!(
        "{weight}{:.0}px 'Helvetica Neue', Arial, sans-serif",
        size_px * SCALE
    )
}

/// Greedy word wrap using canvas text metrics. If metrics are unavailable
/// the text stays on one line; the capture is still produced.
fn wrap_text(ctx: &CanvasRenderingContext2d, text: &str, max_w: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        let width = ctx
            .measure_text(&candidate)
            .map(|m| m.width())
            .unwrap_or(0.0);

        if width > max_w && !current.is_empty() {
            lines.push(current);
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn capture_err(msg: &str) -> ExportError {
    ExportError::Capture(msg.to_string())
}

fn js_capture(e: JsValue) -> ExportError {
    ExportError::Capture(format!("{e:?}"))
}
