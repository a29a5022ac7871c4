use serde::{Deserialize, Serialize};

/// Per-category result: the sub-score and how many of its fields had data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub score: f64,
    pub covered: usize,
    pub checked: usize,
}

/// Every intermediate value behind one composite score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub vector_similarity: f64,
    pub regulatory: CategoryBreakdown,
    pub macroeconomic: CategoryBreakdown,
    pub digital: CategoryBreakdown,
    pub trade: CategoryBreakdown,
    pub foreign_investment: CategoryBreakdown,
    /// Fraction of all checked fields that had data, in [0, 1].
    pub coverage: f64,
    /// Multiplier derived from `coverage`, in [coverage_floor, 1].
    pub coverage_adjust: f64,
    /// Weighted sum before the coverage multiplier.
    pub weighted_sum: f64,
    pub boost_applied: bool,
    /// Final rounded score.
    pub score: f64,
}

impl ScoreBreakdown {
    pub fn covered_fields(&self) -> usize {
        self.categories().iter().map(|c| c.covered).sum()
    }

    pub fn checked_fields(&self) -> usize {
        self.categories().iter().map(|c| c.checked).sum()
    }

    fn categories(&self) -> [CategoryBreakdown; 5] {
        [
            self.regulatory,
            self.macroeconomic,
            self.digital,
            self.trade,
            self.foreign_investment,
        ]
    }
}
