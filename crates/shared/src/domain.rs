use serde::{Deserialize, Serialize};

use crate::error::UnsupportedFormat;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Whitelisted resume document formats accepted for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn media_type(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => PDF_MEDIA_TYPE,
            DocumentFormat::Docx => DOCX_MEDIA_TYPE,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }

    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type.to_ascii_lowercase().as_str() {
            PDF_MEDIA_TYPE => Some(DocumentFormat::Pdf),
            DOCX_MEDIA_TYPE => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentFormat::Docx)
        } else {
            None
        }
    }
}

/// A validated candidate document: the single file submitted for
/// analysis. Constructed only through [`DocumentCandidate::into_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub format: DocumentFormat,
    pub bytes: Vec<u8>,
}

/// An unvalidated user file pick. The declared media type, when one is
/// available, takes precedence over the filename extension.
#[derive(Debug, Clone)]
pub struct DocumentCandidate {
    pub filename: String,
    pub media_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DocumentCandidate {
    pub fn into_document(self) -> Result<Document, UnsupportedFormat> {
        let format = self
            .media_type
            .as_deref()
            .and_then(DocumentFormat::from_media_type)
            .or_else(|| DocumentFormat::from_filename(&self.filename));

        match format {
            Some(format) => Ok(Document {
                filename: self.filename,
                format,
                bytes: self.bytes,
            }),
            None => Err(UnsupportedFormat {
                filename: self.filename,
                media_type: self.media_type,
            }),
        }
    }
}
