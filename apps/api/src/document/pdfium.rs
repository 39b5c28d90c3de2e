//! PDFium-backed `PageRenderer`.
//!
//! The upstream `Pdfium` handle is `!Send`, so every render binds its own.
//! `dlopen` of an already loaded library is a refcount bump.

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use pdfium_render::prelude::*;
use tracing::{debug, warn};

use super::{DocumentError, PageRenderer};

const PDFIUM_PATH_VAR: &str = "PDFIUM_DYNAMIC_LIB_PATH";

/// Longest side of the rendered page, in pixels.
const PIXEL_CEILING: u32 = 4096;
const PDF_POINTS_PER_INCH: f32 = 72.0;
const JPEG_QUALITY: u8 = 85;

pub struct PdfiumRenderer;

impl PdfiumRenderer {
    /// Binds once up front so a missing library is a startup error.
    pub fn new() -> Result<Self, DocumentError> {
        bind_pdfium()?;
        Ok(Self)
    }
}

impl PageRenderer for PdfiumRenderer {
    fn render_first_page(&self, pdf_bytes: &[u8], dpi: u32) -> Result<Vec<u8>, DocumentError> {
        let pdfium = bind_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(pdf_bytes, None)
            .map_err(map_load_error)?;

        let pages = document.pages();
        if pages.len() == 0 {
            return Err(DocumentError::NoPages);
        }
        let page = pages.get(0).map_err(|e| DocumentError::Rendering {
            page: 0,
            reason: e.to_string(),
        })?;

        let size = PixelSize::for_page(page.width().value, page.height().value, dpi);
        if size.capped {
            warn!(
                width = size.width,
                height = size.height,
                dpi,
                "Resume page exceeds {PIXEL_CEILING}px, rendering scaled down"
            );
        }

        let render_config = PdfRenderConfig::new()
            .set_target_width(size.width as i32)
            .set_maximum_height(size.height as i32);
        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| DocumentError::Rendering {
                page: 0,
                reason: e.to_string(),
            })?;

        let jpeg = to_jpeg(&bitmap.as_image())?;
        debug!(
            page_count = pages.len(),
            width = size.width,
            height = size.height,
            jpeg_size = jpeg.len(),
            "Rasterized first page"
        );
        Ok(jpeg)
    }
}

/// Tries `PDFIUM_DYNAMIC_LIB_PATH`, then the executable's directory, then the
/// system search path.
fn bind_pdfium() -> Result<Pdfium, DocumentError> {
    if let Ok(path) = std::env::var(PDFIUM_PATH_VAR) {
        return Pdfium::bind_to_library(&path)
            .map(Pdfium::new)
            .map_err(|e| DocumentError::Library(format!("{PDFIUM_PATH_VAR}={path}: {e}")));
    }

    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_string_lossy().into_owned()))
        .map(|dir| Pdfium::pdfium_platform_library_name_at_path(dir.as_str()));
    if let Some(bindings) = beside_exe.and_then(|lib| Pdfium::bind_to_library(&lib).ok()) {
        return Ok(Pdfium::new(bindings));
    }

    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|e| {
            DocumentError::Library(format!(
                "no PDFium library found (set {PDFIUM_PATH_VAR}): {e}"
            ))
        })
}

fn map_load_error(e: PdfiumError) -> DocumentError {
    match e {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            DocumentError::Encrypted
        }
        other => DocumentError::Rendering {
            page: 0,
            reason: format!("unreadable PDF: {other}"),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelSize {
    width: u32,
    height: u32,
    capped: bool,
}

impl PixelSize {
    /// Scales a page measured in points to pixels at `dpi`. Neither side drops
    /// below one pixel; if the longer side passes `PIXEL_CEILING` both are
    /// shrunk by the same factor.
    fn for_page(width_pt: f32, height_pt: f32, dpi: u32) -> Self {
        let scale = dpi as f32 / PDF_POINTS_PER_INCH;
        let width = (width_pt * scale).max(1.0);
        let height = (height_pt * scale).max(1.0);
        let longest = width.max(height);

        if longest <= PIXEL_CEILING as f32 {
            return Self {
                width: width as u32,
                height: height as u32,
                capped: false,
            };
        }

        let shrink = PIXEL_CEILING as f32 / longest;
        Self {
            width: ((width * shrink) as u32).clamp(1, PIXEL_CEILING),
            height: ((height * shrink) as u32).clamp(1, PIXEL_CEILING),
            capped: true,
        }
    }
}

fn to_jpeg(image: &DynamicImage) -> Result<Vec<u8>, DocumentError> {
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
        .encode_image(&image.to_rgb8())
        .map_err(|e| DocumentError::Encoding(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_letter_page_at_72_dpi_is_one_pixel_per_point() {
        let size = PixelSize::for_page(612.0, 792.0, 72);
        assert_eq!((size.width, size.height, size.capped), (612, 792, false));
    }

    #[test]
    fn test_a4_page_at_200_dpi() {
        let size = PixelSize::for_page(595.0, 842.0, 200);
        assert!((1600..1700).contains(&size.width), "got {}", size.width);
        assert!((2300..2400).contains(&size.height), "got {}", size.height);
        assert!(!size.capped);
    }

    #[test]
    fn test_oversized_page_is_capped_keeping_aspect() {
        let size = PixelSize::for_page(5000.0, 7000.0, 200);
        assert!(size.capped);
        assert!((PIXEL_CEILING - 1..=PIXEL_CEILING).contains(&size.height), "got {}", size.height);
        assert!((2800..3000).contains(&size.width), "got {}", size.width);
    }

    #[test]
    fn test_zero_sized_page_still_gets_a_pixel() {
        let size = PixelSize::for_page(0.0, 0.0, 72);
        assert_eq!((size.width, size.height), (1, 1));
    }

    #[test]
    fn test_transparent_bitmap_encodes_as_jpeg() {
        let rgba = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 0]));
        let jpeg = to_jpeg(&DynamicImage::ImageRgba8(rgba)).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_password_error_maps_to_encrypted() {
        let err = map_load_error(PdfiumError::PdfiumLibraryInternalError(
            PdfiumInternalError::PasswordError,
        ));
        assert!(matches!(err, DocumentError::Encrypted));
    }

    #[test]
    fn test_other_load_errors_map_to_rendering() {
        let err = map_load_error(PdfiumError::PdfiumLibraryInternalError(
            PdfiumInternalError::FormatError,
        ));
        match err {
            DocumentError::Rendering { page, reason } => {
                assert_eq!(page, 0);
                assert!(reason.starts_with("unreadable PDF"), "got {reason}");
            }
            other => panic!("expected Rendering, got {other:?}"),
        }
    }
}
