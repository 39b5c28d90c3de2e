//! Document handling: turns an uploaded resume into the single page image
//! the model sees.
//!
//! Only the first page is ever rendered. Rasterization itself is delegated to
//! a `PageRenderer` (PDFium in production); this module owns the checks that
//! run before it and the Base64 transport encoding that runs after it.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use thiserror::Error;

pub mod pdfium;

pub use self::pdfium::PdfiumRenderer;

pub const JPEG_MIME_TYPE: &str = "image/jpeg";

const PDF_SIGNATURE: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("The uploaded resume is empty")]
    Empty,

    #[error("The uploaded resume is not a PDF document")]
    NotPdf,

    #[error("The uploaded PDF has no pages")]
    NoPages,

    #[error("The uploaded PDF is password protected")]
    Encrypted,

    #[error("Failed to render page {page}: {reason}")]
    Rendering { page: usize, reason: String },

    #[error("Image encoding failed: {0}")]
    Encoding(String),

    #[error("PDF library unavailable: {0}")]
    Library(String),
}

/// Rasterizes the first page of a PDF held in memory.
///
/// Implementations are shared across requests and called from blocking
/// worker threads.
pub trait PageRenderer: Send + Sync {
    /// Parses the document once and returns page 0 as JPEG bytes, or
    /// `DocumentError::NoPages` for a document without pages.
    fn render_first_page(&self, pdf_bytes: &[u8], dpi: u32) -> Result<Vec<u8>, DocumentError>;
}

/// An image ready to be sent inline to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineImage {
    pub mime_type: String,
    /// Standard, padded Base64.
    pub data: String,
}

impl InlineImage {
    pub fn jpeg(bytes: &[u8]) -> Self {
        Self {
            mime_type: JPEG_MIME_TYPE.to_string(),
            data: STANDARD.encode(bytes),
        }
    }
}

/// Cheap signature check so obviously wrong uploads never reach PDFium.
/// Leading whitespace is tolerated, as some generators emit it.
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    bytes[start..].starts_with(PDF_SIGNATURE)
}

/// Renders page 0 of `pdf_bytes` and encodes it for transport.
pub fn first_page_image(
    renderer: &dyn PageRenderer,
    pdf_bytes: &[u8],
    dpi: u32,
) -> Result<InlineImage, DocumentError> {
    if pdf_bytes.is_empty() {
        return Err(DocumentError::Empty);
    }
    if !looks_like_pdf(pdf_bytes) {
        return Err(DocumentError::NotPdf);
    }

    let jpeg = renderer.render_first_page(pdf_bytes, dpi)?;

    tracing::debug!(
        pdf_size = pdf_bytes.len(),
        jpeg_size = jpeg.len(),
        dpi,
        "Rendered first resume page"
    );

    Ok(InlineImage::jpeg(&jpeg))
}

/// Test double returning a fixed payload, or `NoPages` when built with zero pages.
#[cfg(test)]
pub struct MockPageRenderer {
    pub page_count: usize,
    pub payload: Vec<u8>,
    pub calls: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl MockPageRenderer {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            payload: vec![0xFF, 0xD8, 0xFF, 0xD9],
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
impl PageRenderer for MockPageRenderer {
    fn render_first_page(&self, _pdf_bytes: &[u8], _dpi: u32) -> Result<Vec<u8>, DocumentError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if self.page_count == 0 {
            return Err(DocumentError::NoPages);
        }
        Ok(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    const MINIMAL_PDF: &[u8] = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n";

    #[test]
    fn test_looks_like_pdf_accepts_signature() {
        assert!(looks_like_pdf(MINIMAL_PDF));
        assert!(looks_like_pdf(b"\r\n  %PDF-1.7"));
    }

    #[test]
    fn test_looks_like_pdf_rejects_other_formats() {
        assert!(!looks_like_pdf(b"PK\x03\x04 word document"));
        assert!(!looks_like_pdf(b"%PD"));
        assert!(!looks_like_pdf(b""));
    }

    #[test]
    fn test_inline_image_is_padded_base64_jpeg() {
        let image = InlineImage::jpeg(&[0xFF, 0xD8, 0xFF, 0xD9]);
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, "/9j/2Q==");
    }

    #[test]
    fn test_first_page_image_renders_page_zero() {
        let renderer = MockPageRenderer::new(3);
        let image = first_page_image(&renderer, MINIMAL_PDF, 72).unwrap();
        assert_eq!(image, InlineImage::jpeg(&renderer.payload));
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_first_page_image_rejects_empty_upload() {
        let renderer = MockPageRenderer::new(1);
        let err = first_page_image(&renderer, b"", 72).unwrap_err();
        assert!(matches!(err, DocumentError::Empty));
    }

    #[test]
    fn test_first_page_image_rejects_non_pdf() {
        let renderer = MockPageRenderer::new(1);
        let err = first_page_image(&renderer, b"\x89PNG\r\n", 72).unwrap_err();
        assert!(matches!(err, DocumentError::NotPdf));
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_first_page_image_rejects_zero_page_document() {
        let renderer = MockPageRenderer::new(0);
        let err = first_page_image(&renderer, MINIMAL_PDF, 72).unwrap_err();
        assert!(matches!(err, DocumentError::NoPages));
    }
}
