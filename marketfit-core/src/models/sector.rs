use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ClassificationError;

/// Business sector used to scope retrieval and reporting.
///
/// A closed set plus the [`Sector::General`] fallback used when classification
/// fails or yields nothing usable. Parsing is case-insensitive; the canonical
/// spelling is what [`Sector::as_str`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sector {
    Fintech,
    Healthtech,
    Edtech,
    Ecommerce,
    Cleantech,
    Logistics,
    Saas,
    Cybersecurity,
    AiMl,
    Retail,
    Agritech,
    Mobility,
    Proptech,
    Govtech,
    Biotech,
    General,
}

impl Sector {
    /// All classifiable sectors, in canonical order. Excludes `General`.
    pub const CLASSIFIABLE: [Sector; 15] = [
        Sector::Fintech,
        Sector::Healthtech,
        Sector::Edtech,
        Sector::Ecommerce,
        Sector::Cleantech,
        Sector::Logistics,
        Sector::Saas,
        Sector::Cybersecurity,
        Sector::AiMl,
        Sector::Retail,
        Sector::Agritech,
        Sector::Mobility,
        Sector::Proptech,
        Sector::Govtech,
        Sector::Biotech,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fintech => "fintech",
            Self::Healthtech => "healthtech",
            Self::Edtech => "edtech",
            Self::Ecommerce => "ecommerce",
            Self::Cleantech => "cleantech",
            Self::Logistics => "logistics",
            Self::Saas => "SaaS",
            Self::Cybersecurity => "cybersecurity",
            Self::AiMl => "AI-ML",
            Self::Retail => "retail",
            Self::Agritech => "agritech",
            Self::Mobility => "mobility",
            Self::Proptech => "proptech",
            Self::Govtech => "govtech",
            Self::Biotech => "biotech",
            Self::General => "general",
        }
    }

    pub fn is_general(&self) -> bool {
        matches!(self, Self::General)
    }

    /// Whether a stored label refers to this sector, ignoring case.
    pub fn matches_label(&self, label: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(label.trim())
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if Sector::General.matches_label(trimmed) {
            return Ok(Sector::General);
        }
        Sector::CLASSIFIABLE
            .iter()
            .copied()
            .find(|sector| sector.matches_label(trimmed))
            .ok_or_else(|| ClassificationError::UnknownSector {
                label: trimmed.to_string(),
            })
    }
}

impl TryFrom<String> for Sector {
    type Error = ClassificationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Sector> for String {
    fn from(sector: Sector) -> Self {
        sector.as_str().to_string()
    }
}
