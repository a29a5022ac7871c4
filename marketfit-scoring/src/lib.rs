//! # marketfit-scoring
//!
//! Turns a flattened country profile plus a semantic similarity into one
//! composite fitness score.
//!
//! ```text
//! profile ─► accessor::latest ─► normalize ─► 5 category scorers ─┐
//! similarity ─────────────────────────────────────────────────────┴─► composite
//! ```

pub mod accessor;
pub mod categories;
pub mod composite;
pub mod normalize;

pub use categories::{CategoryScorer, FieldSpec, Normalization};
pub use composite::CompositeScorer;
