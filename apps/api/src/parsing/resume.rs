//! Resume parse pipeline: bytes → text → contact, sections and skills.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::parsing::contact::{extract_contact, ContactInfo};
use crate::parsing::extract::{extract_text_blocking, DocumentFormat};
use crate::parsing::sections::{find_sections, SectionMap};
use crate::parsing::skills::extract_skills;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub text: String,
    pub contact: ContactInfo,
    pub sections: SectionMap,
    pub skills: Vec<String>,
}

/// Runs the lexical extractors over already-decoded text.
pub fn parse_text(text: String, catalog: &Catalog) -> ParsedResume {
    let contact = extract_contact(&text);
    let sections = find_sections(&text, &catalog.headings);
    let skills = extract_skills(&sections);
    ParsedResume {
        text,
        contact,
        sections,
        skills,
    }
}

/// Decodes an uploaded document and parses it.
pub async fn parse_document(
    bytes: bytes::Bytes,
    filename: Option<&str>,
    content_type: Option<&str>,
    catalog: &Catalog,
) -> Result<ParsedResume, AppError> {
    let format = DocumentFormat::detect(filename, content_type);
    let size = bytes.len();
    let text = extract_text_blocking(bytes, format).await?;
    let parsed = parse_text(text, catalog);

    info!(
        ?format,
        bytes = size,
        sections = parsed.sections.len(),
        skills = parsed.skills.len(),
        "Resume parsed"
    );
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\njane.doe@example.com | +44 20 7946 0958\n\n\
        Summary\nFrontend engineer.\n\n\
        Skills\nHTML, CSS; JavaScript\n• React\n\n\
        Education\nBSc Computer Science\n";

    #[test]
    fn test_parse_text_fills_every_field() {
        let parsed = parse_text(RESUME.to_string(), &Catalog::default());
        assert_eq!(parsed.contact.email, "jane.doe@example.com");
        assert_eq!(parsed.contact.phone, "+44 20 7946 0958");
        let keys: Vec<_> = parsed.sections.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["summary", "skills", "education"]);
        assert_eq!(
            parsed.skills,
            vec!["Skills", "HTML", "CSS", "JavaScript", "React"]
        );
        assert_eq!(parsed.text, RESUME);
    }

    #[test]
    fn test_parse_text_without_structure() {
        let parsed = parse_text("hello world".to_string(), &Catalog::default());
        assert!(parsed.sections.is_empty());
        assert!(parsed.skills.is_empty());
        assert_eq!(parsed.contact, ContactInfo::default());
    }

    #[tokio::test]
    async fn test_parse_document_plain_text_upload() {
        let parsed = parse_document(
            bytes::Bytes::from_static(RESUME.as_bytes()),
            Some("resume.txt"),
            Some("text/plain"),
            &Catalog::default(),
        )
        .await
        .unwrap();
        assert_eq!(parsed.skills.len(), 5);
    }

    #[tokio::test]
    async fn test_parse_document_bad_pdf_is_processing_error() {
        let err = parse_document(
            bytes::Bytes::from_static(b"not a pdf"),
            Some("resume.pdf"),
            None,
            &Catalog::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Decode(_)), "got {err:?}");
    }
}
