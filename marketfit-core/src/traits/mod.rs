//! Collaborator contracts consumed by the shortlist engine.

mod classifier;
mod embedding;
mod profile_store;
mod text_generator;

pub use classifier::ISectorClassifier;
pub use embedding::IEmbeddingProvider;
pub use profile_store::IProfileStore;
pub use text_generator::ITextGenerator;
