//! One module per subcommand. Each writes its report to the given writer.

pub mod embed;
pub mod ingest;
pub mod sectors;
pub mod shortlist;

pub use embed::EmbedArgs;
pub use ingest::IngestArgs;
pub use shortlist::ShortlistArgs;
