//! Library surface of the `matbook` binary: analysis loading, report
//! rendering to files, and snapshot summaries. Everything here is thin
//! plumbing over `matbook_report`; no rendering logic lives in the CLI.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use matbook_core::{group_materials, tier_counts, Analysis};
use matbook_report::{build_markdown, build_pdf, report_filename, ReportFormat};

#[derive(Debug)]
pub enum CliError {
    Io(String),
    Json(String),
    Report(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(detail) => write!(f, "io error: {detail}"),
            CliError::Json(detail) => write!(f, "json error: {detail}"),
            CliError::Report(detail) => write!(f, "{detail}"),
        }
    }
}

impl std::error::Error for CliError {}

pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Load an analysis snapshot from JSON, resolving image `path`
/// indirections relative to the snapshot file.
pub fn load_analysis(path: &Path) -> Result<Analysis, CliError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("read {}: {e}", path.display())))?;
    let mut analysis: Analysis = serde_json::from_str(&raw)
        .map_err(|e| CliError::Json(format!("parse {}: {e}", path.display())))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    for image in &mut analysis.images {
        if !image.data.is_empty() {
            continue;
        }
        if let Some(rel) = image.path.clone() {
            let resolved = if rel.is_absolute() { rel } else { base.join(rel) };
            image.data = fs::read(&resolved)
                .map_err(|e| CliError::Io(format!("read image {}: {e}", resolved.display())))?;
        }
    }
    Ok(analysis)
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderOutcome {
    pub path: PathBuf,
    pub format: String,
    pub bytes: usize,
    pub sha256: String,
}

/// Render the analysis in the requested format and write the artifact.
/// With no explicit output path the filename derives from the analysis
/// timestamp, in the current directory.
pub fn render_to_file(
    analysis: &Analysis,
    format: ReportFormat,
    out: Option<PathBuf>,
) -> Result<RenderOutcome, CliError> {
    let bytes = match format {
        ReportFormat::Markdown => build_markdown(analysis).into_bytes(),
        ReportFormat::Pdf => build_pdf(analysis).map_err(|e| CliError::Report(e.to_string()))?,
    };

    let path = out.unwrap_or_else(|| PathBuf::from(report_filename(analysis, format)));
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| CliError::Io(format!("mkdir {}: {e}", parent.display())))?;
        }
    }
    fs::write(&path, &bytes)
        .map_err(|e| CliError::Io(format!("write {}: {e}", path.display())))?;

    Ok(RenderOutcome {
        path,
        format: format.as_str().to_string(),
        sha256: sha256_hex(&bytes),
        bytes: bytes.len(),
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub created_at: String,
    pub materials: usize,
    pub divisions: usize,
    pub tier1: usize,
    pub tier2: usize,
    pub tier3: usize,
    pub images: usize,
    pub has_location: bool,
    pub has_brief: bool,
}

pub fn summarize(analysis: &Analysis) -> AnalysisSummary {
    let counts = tier_counts(&analysis.materials);
    AnalysisSummary {
        created_at: analysis.created_at.clone(),
        materials: analysis.materials.len(),
        divisions: group_materials(&analysis.materials).len(),
        tier1: counts.tier1,
        tier2: counts.tier2,
        tier3: counts.tier3,
        images: analysis.images.len(),
        has_location: analysis.location.is_some(),
        has_brief: analysis.brief.is_some(),
    }
}

pub fn render_summary_text(summary: &AnalysisSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("analysis created: {}\n", summary.created_at));
    out.push_str(&format!("materials:        {}\n", summary.materials));
    out.push_str(&format!("divisions:        {}\n", summary.divisions));
    out.push_str(&format!(
        "tiers:            {} readily available, {} custom, {} development\n",
        summary.tier1, summary.tier2, summary.tier3
    ));
    out.push_str(&format!("images:           {}\n", summary.images));
    out.push_str(&format!(
        "location:         {}\n",
        if summary.has_location { "set" } else { "none" }
    ));
    out.push_str(&format!(
        "brief:            {}\n",
        if summary.has_brief { "set" } else { "none" }
    ));
    out
}
