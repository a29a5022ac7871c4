//! Offline keyword classifier.
//!
//! Counts keyword hits per sector over the lower-cased description. Sectors
//! with at least one hit are ranked by hit count, ties in canonical sector
//! order. No hits means `[General]`.

use marketfit_core::errors::MarketfitResult;
use marketfit_core::traits::ISectorClassifier;
use marketfit_core::Sector;

pub struct KeywordSectorClassifier {
    table: Vec<(Sector, &'static [&'static str])>,
}

impl Default for KeywordSectorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordSectorClassifier {
    pub fn new() -> Self {
        Self {
            table: Sector::CLASSIFIABLE
                .iter()
                .map(|&sector| (sector, keywords(sector)))
                .collect(),
        }
    }

    /// Hit count per sector, in canonical order, zero counts omitted.
    pub fn hits(&self, text: &str) -> Vec<(Sector, usize)> {
        let haystack = format!(" {} ", normalize(text));
        self.table
            .iter()
            .map(|(sector, words)| {
                let count = words
                    .iter()
                    .filter(|word| haystack.contains(&format!(" {word}")))
                    .count();
                (*sector, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

/// Lowercase, with every non-alphanumeric run collapsed to one space.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyword stems per sector. A stem matches at the start of a word.
fn keywords(sector: Sector) -> &'static [&'static str] {
    match sector {
        Sector::Fintech => &[
            "fintech", "payment", "bank", "lending", "loan", "credit", "wallet", "remittance",
            "insurance", "insurtech", "microfinance", "mobile money",
        ],
        Sector::Healthtech => &[
            "health", "medical", "clinic", "hospital", "patient", "telemedicine", "pharma",
            "diagnos", "doctor",
        ],
        Sector::Edtech => &[
            "edtech", "education", "learning", "school", "student", "tutor", "course", "teacher",
        ],
        Sector::Ecommerce => &[
            "ecommerce", "e commerce", "marketplace", "online store", "online shop", "checkout",
            "shopping",
        ],
        Sector::Cleantech => &[
            "cleantech", "solar", "renewable", "energy", "carbon", "climate", "battery",
            "recycl", "emission",
        ],
        Sector::Logistics => &[
            "logistic", "delivery", "shipping", "freight", "warehouse", "courier",
            "supply chain", "last mile", "fleet",
        ],
        Sector::Saas => &["saas", "software", "subscription", "b2b", "platform", "dashboard"],
        Sector::Cybersecurity => &[
            "cyber", "security", "encryption", "fraud", "identity", "authentication", "threat",
        ],
        Sector::AiMl => &[
            "ai", "artificial intelligence", "machine learning", "ml", "deep learning",
            "neural", "computer vision", "llm", "predictive",
        ],
        Sector::Retail => &["retail", "store", "shop", "consumer", "grocery", "fashion", "merchant"],
        Sector::Agritech => &[
            "agri", "farm", "crop", "harvest", "livestock", "irrigation", "agronom",
        ],
        Sector::Mobility => &[
            "mobility", "ride", "transport", "vehicle", "scooter", "electric vehicle", "transit",
            "bike",
        ],
        Sector::Proptech => &[
            "proptech", "real estate", "property", "rental", "housing", "mortgage", "tenant",
        ],
        Sector::Govtech => &[
            "govtech", "government", "public sector", "civic", "citizen", "municipal", "e government",
        ],
        Sector::Biotech => &[
            "biotech", "genom", "biolog", "vaccine", "drug discovery", "protein", "molecular",
        ],
        Sector::General => &[],
    }
}

impl ISectorClassifier for KeywordSectorClassifier {
    fn classify(&self, text: &str, max_results: usize) -> MarketfitResult<Vec<Sector>> {
        let mut ranked = self.hits(text);
        // Stable sort keeps canonical order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        let sectors: Vec<Sector> = ranked
            .into_iter()
            .take(max_results.max(1))
            .map(|(sector, _)| sector)
            .collect();
        if sectors.is_empty() {
            return Ok(vec![Sector::General]);
        }
        Ok(sectors)
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
