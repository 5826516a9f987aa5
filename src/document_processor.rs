use std::fmt;
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::errors::ExtractionError;
use crate::text_utils::{normalize, NormalizedText};

// @module: Document text extraction and format handling

/// Extracted text shorter than this is insufficient for question
/// generation. Callers skip synthesis below the threshold instead of
/// running it on noise.
pub const MIN_GENERATION_CHARS: usize = 50;

// @const: Slide part names inside a PPTX package
static SLIDE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ppt/slides/slide(\d+)\.xml$").unwrap()
});

/// Declared format of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// PDF document
    Pdf,
    /// Word document (.docx or .doc)
    Docx,
    /// PowerPoint presentation (.pptx or .ppt)
    Pptx,
    /// Comma-separated values (roster files)
    Csv,
    /// Excel workbook (roster files)
    Excel,
    /// Anything else
    Unknown,
}

impl DocumentFormat {
    /// Detect the format from a file extension
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Self::Pdf,
            "docx" | "doc" => Self::Docx,
            "pptx" | "ppt" => Self::Pptx,
            "csv" => Self::Csv,
            "xlsx" | "xls" => Self::Excel,
            _ => Self::Unknown,
        }
    }

    /// Whether plain text can be extracted from this format.
    /// CSV and Excel files are rosters, not lecture material.
    pub fn is_text_extractable(&self) -> bool {
        matches!(self, Self::Pdf | Self::Docx | Self::Pptx)
    }

    // @returns: Lowercase format tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Pptx => "pptx",
            Self::Csv => "csv",
            Self::Excel => "excel",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, ExtractionError> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" | "doc" => Ok(Self::Docx),
            "pptx" | "ppt" => Ok(Self::Pptx),
            "csv" => Ok(Self::Csv),
            "excel" | "xlsx" | "xls" => Ok(Self::Excel),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ExtractionError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// A document with its text extracted and normalized
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Source filename
    pub source_file: PathBuf,

    /// Detected document format
    pub format: DocumentFormat,

    /// Normalized extracted text
    pub text: NormalizedText,
}

impl ExtractedDocument {
    /// Build a document from already-normalized text - used by tests and
    /// callers that start from a raw string
    pub fn from_text<P: AsRef<Path>>(source_file: P, format: DocumentFormat, raw: &str) -> Self {
        ExtractedDocument {
            source_file: source_file.as_ref().to_path_buf(),
            format,
            text: normalize(raw),
        }
    }

    /// Extract text from a document file, detecting the format from the
    /// extension
    pub fn extract_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractionError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_extension(path);
        let bytes = fs::read(path)
            .map_err(|e| ExtractionError::ReadError(format!("{}: {}", path.display(), e)))?;

        let mut doc = Self::extract_from_bytes(&bytes, format)?;
        doc.source_file = path.to_path_buf();
        Ok(doc)
    }

    /// Extract text from an in-memory document with a declared format
    pub fn extract_from_bytes(
        bytes: &[u8],
        format: DocumentFormat,
    ) -> Result<Self, ExtractionError> {
        let raw = match format {
            DocumentFormat::Pdf => extract_pdf_text(bytes)?,
            DocumentFormat::Docx | DocumentFormat::Pptx => extract_ooxml_text(bytes, format)?,
            other => {
                return Err(ExtractionError::UnsupportedFormat(other.to_string()));
            }
        };

        Ok(ExtractedDocument {
            source_file: PathBuf::new(),
            format,
            text: normalize(&raw),
        })
    }

    /// SHA-256 hex digest of the normalized text.
    ///
    /// This is the key an external text-to-audio converter caches under, so
    /// identical content never converts twice.
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Whether the extracted text is long enough to generate questions from
    pub fn has_sufficient_text(&self) -> bool {
        self.text.char_count() >= MIN_GENERATION_CHARS
    }
}

impl fmt::Display for ExtractedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Extracted Document")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Format: {}", self.format)?;
        writeln!(f, "Characters: {}", self.text.char_count())?;
        Ok(())
    }
}

/// Extract text from PDF bytes.
///
/// Two independent strategies: the pdf-extract content-stream renderer
/// first, then a lopdf page walk when the first yields nothing. The error
/// is raised only when both strategies fail or produce no text at all.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut last_failure = String::new();

    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) if !text.trim().is_empty() => return Ok(text),
        Ok(_) => last_failure = "pdf-extract produced no text".to_string(),
        Err(e) => {
            warn!("pdf-extract strategy failed: {}", e);
            last_failure = e.to_string();
        }
    }

    // Fallback: walk every page with lopdf
    match extract_pdf_text_lopdf(bytes) {
        Ok(text) if !text.trim().is_empty() => {
            debug!("PDF text recovered by the lopdf fallback");
            Ok(text)
        }
        Ok(_) => Err(ExtractionError::ExtractionFailed {
            format: DocumentFormat::Pdf,
            details: format!("both strategies produced no text ({})", last_failure),
        }),
        Err(e) => Err(ExtractionError::ExtractionFailed {
            format: DocumentFormat::Pdf,
            details: format!("pdf-extract: {}; lopdf: {}", last_failure, e),
        }),
    }
}

fn extract_pdf_text_lopdf(bytes: &[u8]) -> Result<String, lopdf::Error> {
    let doc = lopdf::Document::load_mem(bytes)?;
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    doc.extract_text(&pages)
}

/// Extract text from an OOXML package (DOCX or PPTX).
///
/// Both formats are zip archives of XML parts. Word documents keep their
/// text in `<w:t>` runs of `word/document.xml`; presentations keep theirs
/// in `<a:t>` runs spread over `ppt/slides/slideN.xml`, read in slide
/// order.
fn extract_ooxml_text(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractionError> {
    let failed = |details: String| ExtractionError::ExtractionFailed { format, details };

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| failed(format!("not a valid OOXML package: {}", e)))?;

    let part_names: Vec<String> = match format {
        DocumentFormat::Docx => vec!["word/document.xml".to_string()],
        DocumentFormat::Pptx => {
            let mut slides: Vec<(u32, String)> = archive
                .file_names()
                .filter_map(|name| {
                    SLIDE_NAME_REGEX.captures(name).map(|caps| {
                        let number = caps[1].parse().unwrap_or(u32::MAX);
                        (number, name.to_string())
                    })
                })
                .collect();
            slides.sort();
            slides.into_iter().map(|(_, name)| name).collect()
        }
        other => return Err(ExtractionError::UnsupportedFormat(other.to_string())),
    };

    if part_names.is_empty() {
        return Err(failed("package contains no text parts".to_string()));
    }

    let text_tag: &[u8] = match format {
        DocumentFormat::Docx => b"w:t",
        _ => b"a:t",
    };

    let mut text = String::new();
    for part_name in &part_names {
        let mut part = archive
            .by_name(part_name)
            .map_err(|e| failed(format!("missing part {}: {}", part_name, e)))?;
        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .map_err(|e| failed(format!("unreadable part {}: {}", part_name, e)))?;

        collect_text_runs(&xml, text_tag, &mut text)
            .map_err(|e| failed(format!("malformed XML in {}: {}", part_name, e)))?;
    }

    if text.trim().is_empty() {
        return Err(failed("package contains no text runs".to_string()));
    }

    Ok(text)
}

/// Append the contents of every `<tag>` text run in `xml` to `out`, one
/// line per run
fn collect_text_runs(
    xml: &str,
    tag: &[u8],
    out: &mut String,
) -> Result<(), quick_xml::Error> {
    use quick_xml::events::Event;

    let mut reader = quick_xml::Reader::from_str(xml);
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == tag => in_text_run = true,
            Event::End(e) if e.name().as_ref() == tag => {
                in_text_run = false;
                out.push('\n');
            }
            Event::Text(e) if in_text_run => {
                out.push_str(&e.unescape()?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(())
}
