//! Report synthesis for completed material analyses: one canonical
//! content model rendered into two parity-guaranteed formats, a flowing
//! markdown document and a paginated PDF. Rendering is a pure function
//! of the analysis snapshot; nothing is cached or shared between calls.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use matbook_core::Analysis;

mod layout;
mod markdown;
mod outline;
mod pdf;

/// Output mode selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Pdf,
}

impl ReportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Pdf => "pdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Pdf => "pdf",
        }
    }
}

/// A failed render is a single condition; a failed preview leaves the
/// download path intact and says so.
#[derive(Debug)]
pub enum ReportError {
    Generation(String),
    Preview(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Generation(detail) => {
                write!(f, "report generation failed: {detail}")
            }
            ReportError::Preview(detail) => {
                write!(f, "preview unavailable, download still possible: {detail}")
            }
        }
    }
}

impl std::error::Error for ReportError {}

/// Render the flowing-text report.
pub fn build_markdown(analysis: &Analysis) -> String {
    markdown::render_markdown(analysis)
}

/// Render the paginated report.
pub fn build_pdf(analysis: &Analysis) -> Result<Vec<u8>, ReportError> {
    pdf::render_pdf(analysis)
}

/// Download filename derived from the analysis timestamp. An
/// unparsable timestamp degrades to its sanitized raw form rather than
/// failing the download.
pub fn report_filename(analysis: &Analysis, format: ReportFormat) -> String {
    let stamp = match chrono::DateTime::parse_from_rfc3339(&analysis.created_at) {
        Ok(t) => t
            .with_timezone(&chrono::Utc)
            .format("%Y%m%d-%H%M%S")
            .to_string(),
        Err(_) => sanitize_stamp(&analysis.created_at),
    };
    format!("material-report-{stamp}.{}", format.extension())
}

fn sanitize_stamp(input: &str) -> String {
    let mut out = String::new();
    let mut last_dash = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        "undated".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Transient on-disk copy of the paginated report for in-UI preview.
/// The caller owns the lifetime: release it once no longer displayed.
#[derive(Debug)]
pub struct PreviewHandle {
    path: PathBuf,
}

impl PreviewHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn release(self) -> Result<(), ReportError> {
        fs::remove_file(&self.path)
            .map_err(|e| ReportError::Preview(format!("release {}: {e}", self.path.display())))
    }
}

/// Render the paginated report into a scratch file and hand back the
/// transient reference. Generation faults propagate as such; only the
/// scratch-file plumbing downgrades to a preview error.
pub fn write_preview(analysis: &Analysis) -> Result<PreviewHandle, ReportError> {
    let bytes = build_pdf(analysis)?;
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| ReportError::Preview(format!("clock error: {e}")))?
        .as_millis();
    let path = std::env::temp_dir().join(format!(
        "matbook-preview-{stamp}-{}.pdf",
        std::process::id()
    ));
    fs::write(&path, &bytes)
        .map_err(|e| ReportError::Preview(format!("write {}: {e}", path.display())))?;
    Ok(PreviewHandle { path })
}
