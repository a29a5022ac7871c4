//! # marketfit-shortlist
//!
//! Free-text business description in, ranked country shortlist out.
//!
//! ```text
//! text ─► classify ─► sectors ─┐
//!      └► embed ──► vector ────┴─► retrieve per sector ─► merge (first match)
//!                                   ─► fetch profile + composite score ─► rank ─► top N
//! ```
//!
//! Collaborators are injected as trait objects; the engine holds no state
//! between calls.

pub mod engine;
pub mod merge;
pub mod ranking;
pub mod retriever;
pub mod sectors;

pub use engine::ShortlistEngine;
pub use merge::{merge_candidates, MergedCandidate};
pub use ranking::rank_and_truncate;
pub use retriever::SemanticRetriever;
pub use sectors::detect_sectors;
