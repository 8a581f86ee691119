//! Document text extraction for uploaded resumes (PDF, DOCX, plain text).
//!
//! The format is picked from the filename extension or declared content type.
//! When neither is conclusive the decoders are tried in order (PDF, then plain
//! text) and the first success wins.

use std::io::{Cursor, Read};
use std::panic::{self, AssertUnwindSafe};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::debug;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const MSWORD_MIME: &str = "application/msword";
const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("PDF decode failed: {0}")]
    Pdf(String),

    #[error("DOCX archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("DOCX XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("DOCX read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decoder crashed: {0}")]
    Crashed(String),

    #[error("no decoder accepted the document ({})", .0.join("; "))]
    Exhausted(Vec<String>),
}

/// How a single decode attempt interprets the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    Pdf,
    Docx,
    PlainText,
}

impl Decoder {
    pub fn decode(self, bytes: &[u8]) -> Result<String, DecodeError> {
        match self {
            Decoder::Pdf => pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| DecodeError::Pdf(e.to_string())),
            Decoder::Docx => decode_docx(bytes),
            Decoder::PlainText => Ok(decode_plain_text(bytes)),
        }
    }

    /// `decode`, with a panic inside the decoder reported as this attempt's
    /// failure. pdf-extract panics on some structurally valid PDFs.
    pub fn decode_guarded(self, bytes: &[u8]) -> Result<String, DecodeError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.decode(bytes))).unwrap_or_else(|payload| {
            Err(DecodeError::Crashed(format!(
                "{self:?} decoder panicked: {}",
                panic_message(payload.as_ref())
            )))
        })
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Declared format of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
    Unknown,
}

impl DocumentFormat {
    /// Extension wins over content type within each format check; formats are
    /// checked in PDF, DOCX, text order.
    pub fn detect(filename: Option<&str>, content_type: Option<&str>) -> Self {
        let filename = filename.unwrap_or_default().to_lowercase();
        let content_type = content_type.unwrap_or_default();

        if filename.ends_with(".pdf") || content_type == "application/pdf" {
            DocumentFormat::Pdf
        } else if filename.ends_with(".docx")
            || content_type == DOCX_MIME
            || content_type == MSWORD_MIME
        {
            DocumentFormat::Docx
        } else if filename.ends_with(".txt") || content_type.starts_with("text") {
            DocumentFormat::PlainText
        } else {
            DocumentFormat::Unknown
        }
    }

    /// Ordered decode attempts for this format.
    pub fn attempts(self) -> &'static [Decoder] {
        match self {
            DocumentFormat::Pdf => &[Decoder::Pdf],
            DocumentFormat::Docx => &[Decoder::Docx],
            DocumentFormat::PlainText => &[Decoder::PlainText],
            DocumentFormat::Unknown => &[Decoder::Pdf, Decoder::PlainText],
        }
    }
}

/// Runs the decode attempts in order, returning the first success.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, DecodeError> {
    let attempts = format.attempts();
    let mut failures = Vec::with_capacity(attempts.len());

    for decoder in attempts {
        match decoder.decode_guarded(bytes) {
            Ok(text) => {
                debug!(?decoder, chars = text.len(), "Document decoded");
                return Ok(text);
            }
            Err(e) => {
                debug!(?decoder, error = %e, "Decode attempt failed");
                failures.push(e);
            }
        }
    }

    // A single-attempt format reports its own error unchanged.
    if failures.len() == 1 {
        if let Some(only) = failures.pop() {
            return Err(only);
        }
    }
    Err(DecodeError::Exhausted(
        failures.iter().map(|e| e.to_string()).collect(),
    ))
}

/// Decodes on the blocking pool. PDF parsing is CPU-bound.
pub async fn extract_text_blocking(
    bytes: bytes::Bytes,
    format: DocumentFormat,
) -> Result<String, DecodeError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes, format))
        .await
        .map_err(|e| DecodeError::Crashed(e.to_string()))?
}

/// UTF-8 decode that drops invalid byte sequences.
fn decode_plain_text(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Paragraph text of a DOCX body, one line per non-empty paragraph.
fn decode_docx(bytes: &[u8]) -> Result<String, DecodeError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCX_BODY_PART)?.read_to_string(&mut xml)?;
    paragraphs_from_document_xml(&xml).map(|paras| paras.join("\n"))
}

fn paragraphs_from_document_xml(xml: &str) -> Result<Vec<String>, DecodeError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    if !current.is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    Ok(paragraphs)
}
