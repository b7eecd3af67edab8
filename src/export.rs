//! Capture-then-serialize export pipeline.
//!
//! The currently rendered layout is rasterized into an RGBA bitmap by a
//! [`Rasterizer`] implementation supplied by the host (the web UI draws
//! the document tree onto a canvas; tests supply mocks). The bitmap is
//! then scaled so its width exactly fills an A4 page width and embedded
//! into a one-page PDF.
//!
//! Captures taller than one A4 page produce a single overlength page: the
//! page grows to the scaled image height instead of splitting the image
//! across pages, matching the on-screen single-scroll presentation.

use printpdf::image_crate::{DynamicImage, RgbImage};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};

use crate::error::ExportError;
use crate::layout::{LayoutId, render};
use crate::model::ResumeRecord;

/// A4 portrait, in millimeters.
pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;

const MM_PER_INCH: f64 = 25.4;

/// Deterministic download name for the exported document.
pub const EXPORT_FILE_NAME: &str = "smartsume-resume.pdf";

/// Fixed-resolution RGBA8 snapshot of a rendered layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Construct a bitmap, validating dimensions against the pixel buffer.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ExportError> {
        if width == 0 || height == 0 {
            return Err(ExportError::InvalidBitmap);
        }
        if pixels.len() != width as usize * height as usize * 4 {
            return Err(ExportError::InvalidBitmap);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

/// Capture capability: turn a rendered document tree into pixels.
pub trait Rasterizer {
    fn rasterize(&self, document: &crate::document::Document) -> Result<Bitmap, ExportError>;
}

/// Scaled placement of a capture on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFit {
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Uniform scale so the bitmap width exactly fills the page width.
///
/// Multiplication before division keeps exact ratios exact: a 1000x1500
/// capture on a 210 mm page fits to precisely 315 mm.
pub fn fit_to_page_width(width: u32, height: u32, page_width_mm: f64) -> PageFit {
    PageFit {
        width_mm: page_width_mm,
        height_mm: height as f64 * page_width_mm / width as f64,
    }
}

/// Page dimensions for a fitted capture: A4, grown vertically to a single
/// overlength page when the capture is taller than one page.
pub fn page_size_for(fit: &PageFit) -> (f64, f64) {
    (fit.width_mm, fit.height_mm.max(A4_HEIGHT_MM))
}

/// Run the full pipeline: render the record in the given layout, rasterize
/// it, fit the capture to the page, and serialize the PDF bytes.
pub fn export_pdf<R: Rasterizer>(
    record: &ResumeRecord,
    layout: LayoutId,
    rasterizer: &R,
) -> Result<Vec<u8>, ExportError> {
    let document = render(record, layout);
    let bitmap = rasterizer.rasterize(&document)?;
    let fit = fit_to_page_width(bitmap.width, bitmap.height, A4_WIDTH_MM);
    write_pdf(&bitmap, &fit)
}

/// Embed the capture into a one-page PDF at the fitted size, anchored to
/// the top-left corner of the page.
pub fn write_pdf(bitmap: &Bitmap, fit: &PageFit) -> Result<Vec<u8>, ExportError> {
    let (page_w, page_h) = page_size_for(fit);
    let (doc, page, layer) =
        PdfDocument::new("Resume", Mm(page_w as f32), Mm(page_h as f32), "capture");

    let rgb = rgba_to_rgb(&bitmap.pixels);
    let img = RgbImage::from_raw(bitmap.width, bitmap.height, rgb)
        .ok_or(ExportError::InvalidBitmap)?;
    let image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(img));

    // dpi such that the drawn width is exactly the page width.
    let dpi = bitmap.width as f64 * MM_PER_INCH / fit.width_mm;
    let transform = ImageTransform {
        translate_x: Some(Mm(0.0)),
        // PDF origin is bottom-left; pin the image to the top of the page.
        translate_y: Some(Mm((page_h - fit.height_mm) as f32)),
        dpi: Some(dpi as f32),
        ..Default::default()
    };
    image.add_to_layer(doc.get_page(page).get_layer(layer), transform);

    doc.save_to_bytes()
        .map_err(|e| ExportError::Serialize(e.to_string()))
}

/// Drop the alpha channel. Captures are drawn on an opaque background, so
/// alpha carries no information.
fn rgba_to_rgb(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Rasterizer returning a solid white bitmap of a fixed size and
    /// counting how often it is invoked.
    struct MockRasterizer {
        width: u32,
        height: u32,
        calls: Cell<usize>,
    }

    impl MockRasterizer {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                calls: Cell::new(0),
            }
        }
    }

    impl Rasterizer for MockRasterizer {
        fn rasterize(
            &self,
            _document: &crate::document::Document,
        ) -> Result<Bitmap, ExportError> {
            self.calls.set(self.calls.get() + 1);
            let pixels = vec![0xff; self.width as usize * self.height as usize * 4];
            Bitmap::new(self.width, self.height, pixels)
        }
    }

    struct FailingRasterizer;

    impl Rasterizer for FailingRasterizer {
        fn rasterize(
            &self,
            _document: &crate::document::Document,
        ) -> Result<Bitmap, ExportError> {
            Err(ExportError::Capture("pixel read blocked".to_string()))
        }
    }

    #[test]
    fn test_fit_to_page_width_exact() {
        let fit = fit_to_page_width(1000, 1500, 210.0);
        assert_eq!(fit.width_mm, 210.0);
        assert_eq!(fit.height_mm, 315.0);
    }

    #[test]
    fn test_overlength_capture_grows_single_page() {
        // 315 mm is taller than A4 (297 mm): one overlength page.
        let fit = fit_to_page_width(1000, 1500, 210.0);
        assert_eq!(page_size_for(&fit), (210.0, 315.0));

        // A short capture sits on a regular A4 page.
        let fit = fit_to_page_width(1000, 1000, 210.0);
        assert_eq!(page_size_for(&fit), (210.0, A4_HEIGHT_MM));
    }

    #[test]
    fn test_bitmap_validation() {
        assert!(matches!(
            Bitmap::new(0, 10, vec![]),
            Err(ExportError::InvalidBitmap)
        ));
        assert!(matches!(
            Bitmap::new(2, 2, vec![0; 15]),
            Err(ExportError::InvalidBitmap)
        ));
        assert!(Bitmap::new(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn test_export_invokes_rasterizer_once_and_serializes() {
        let record = ResumeRecord::example();
        let rasterizer = MockRasterizer::new(1000, 1500);

        let bytes = export_pdf(&record, LayoutId::Minimalist, &rasterizer).unwrap();

        assert_eq!(rasterizer.calls.get(), 1);
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_capture_failure_propagates() {
        let record = ResumeRecord::example();
        let result = export_pdf(&record, LayoutId::Creative, &FailingRasterizer);
        assert!(matches!(result, Err(ExportError::Capture(_))));
    }

    #[test]
    fn test_write_pdf_magic_bytes() {
        let bitmap = Bitmap::new(10, 15, vec![0xff; 10 * 15 * 4]).unwrap();
        let fit = fit_to_page_width(bitmap.width, bitmap.height, A4_WIDTH_MM);
        let bytes = write_pdf(&bitmap, &fit).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_rgba_to_rgb_drops_alpha() {
        let rgba = vec![1, 2, 3, 255, 4, 5, 6, 0];
        assert_eq!(rgba_to_rgb(&rgba), vec![1, 2, 3, 4, 5, 6]);
    }
}
