use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Feasibility classification of an identified material.
///
/// Serialized as the bare integer 1..=3 so analysis snapshots read the
/// same way the upstream pipeline emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tier {
    ReadilyAvailable,
    RequiresCustomization,
    CustomDevelopment,
}

impl Tier {
    pub const ALL: [Tier; 3] = [
        Tier::ReadilyAvailable,
        Tier::RequiresCustomization,
        Tier::CustomDevelopment,
    ];

    pub fn rank(self) -> u8 {
        match self {
            Tier::ReadilyAvailable => 1,
            Tier::RequiresCustomization => 2,
            Tier::CustomDevelopment => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::ReadilyAvailable => "Readily Available",
            Tier::RequiresCustomization => "Requires Customization",
            Tier::CustomDevelopment => "Custom Development",
        }
    }

    /// Heading form used by both renderers, e.g. `Tier 1 - Readily Available`.
    pub fn heading(self) -> String {
        format!("Tier {} - {}", self.rank(), self.label())
    }

    /// Summary form, e.g. `Tier 1 (Readily Available)`.
    pub fn summary_label(self) -> String {
        format!("Tier {} ({})", self.rank(), self.label())
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Tier::ReadilyAvailable),
            2 => Ok(Tier::RequiresCustomization),
            3 => Ok(Tier::CustomDevelopment),
            other => Err(format!("tier out of range: {other} (expected 1..=3)")),
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.rank()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.rank())
    }
}

/// A substitute product suggested for a material. Owned by its parent
/// [`Material`]; it has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialAlternative {
    pub name: String,
    pub description: String,
    pub tradeoffs: String,
}

/// One construction material identified by the upstream analysis.
///
/// `csi_number` is a two-digit division number as a string; unknown or
/// misspelled division names are carried through untouched and fall back
/// to generic taxonomy labels downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub properties: Vec<String>,
    pub tier: Tier,
    pub reasoning: String,
    pub csi_division: String,
    pub csi_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<MaterialAlternative>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_note: Option<String>,
}

/// Resolved project location. Opaque to the engine except for
/// `jurisdiction`, whose leading comma-separated token becomes the
/// region label embedded in supplier names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLocation {
    pub input: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_code: Option<String>,
}

impl ProjectLocation {
    /// Short region name for supplier synthesis: first comma-separated
    /// token of the jurisdiction, or `Local Area` when absent.
    pub fn region_label(&self) -> String {
        self.jurisdiction
            .as_deref()
            .and_then(|j| j.split(',').next())
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or("Local Area")
            .to_string()
    }
}

/// Free-text project brief with an optional model-extracted intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectBrief {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

/// Reference to one analyzed image. `data` carries the validated bytes;
/// `path` is an indirection the CLI resolves before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisImage {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// A completed analysis run. Constructed once by the upstream pipeline
/// and consumed read-only by the report engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub images: Vec<AnalysisImage>,
    pub materials: Vec<Material>,
    /// RFC 3339 creation timestamp, carried as data so rendering stays
    /// a pure function of the snapshot.
    pub created_at: String,
    #[serde(default)]
    pub include_sustainability: bool,
    #[serde(default)]
    pub include_alternatives: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ProjectLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<ProjectBrief>,
}

/// Synthesized consulting contact. Recomputed on every render; never
/// persisted or compared across calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Consultant {
    pub name: String,
    pub firm: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub disciplines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierRating {
    Local,
    National,
}

impl SupplierRating {
    pub fn as_str(self) -> &'static str {
        match self {
            SupplierRating::Local => "local",
            SupplierRating::National => "national",
        }
    }
}

/// Synthesized supplier contact. Same lifecycle as [`Consultant`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supplier {
    pub contact: String,
    pub company: String,
    pub location: String,
    pub material_types: Vec<String>,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub rating: SupplierRating,
    pub specialties: Vec<String>,
}
