//! # marketfit-classifier
//!
//! Maps a free-text business description to up to three sectors.
//!
//! The primary path prompts an LLM with the closed sector list and parses
//! the reply strictly as a JSON array. An offline keyword classifier stands
//! in when no LLM is configured or the call fails.

pub mod factory;
pub mod fallback;
pub mod gemini;
pub mod keyword;
pub mod llm;
pub mod parse;
pub mod prompt;

pub use factory::create_classifier;
pub use fallback::FallbackClassifier;
pub use gemini::GeminiGenerator;
pub use keyword::KeywordSectorClassifier;
pub use llm::LlmSectorClassifier;
pub use parse::parse_sector_reply;
pub use prompt::build_prompt;
