// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_WEIGHT_VECTOR: f64 = 0.40;
pub const DEFAULT_WEIGHT_REGULATORY: f64 = 0.15;
pub const DEFAULT_WEIGHT_MACROECONOMIC: f64 = 0.08;
pub const DEFAULT_WEIGHT_DIGITAL: f64 = 0.17;
pub const DEFAULT_WEIGHT_TRADE: f64 = 0.08;
pub const DEFAULT_WEIGHT_FOREIGN_INVESTMENT: f64 = 0.12;
pub const DEFAULT_TRADE_CAP: f64 = 0.8;
pub const DEFAULT_COVERAGE_FLOOR: f64 = 0.5;
pub const DEFAULT_BOOST_ENABLED: bool = true;
pub const DEFAULT_BOOST_MIN_VECTOR: f64 = 0.8;
pub const DEFAULT_BOOST_MIN_DIGITAL: f64 = 0.6;
pub const DEFAULT_BOOST_MIN_FOREIGN_INVESTMENT: f64 = 1.1;
pub const DEFAULT_BOOST_AMOUNT: f64 = 0.01;

// --- Retrieval ---
pub const DEFAULT_RETRIEVAL_TOP_K: usize = 200;

// --- Shortlist ---
pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_CONCURRENT_RETRIEVAL: bool = false;

// --- Classifier ---
pub const DEFAULT_CLASSIFIER_PROVIDER: &str = "gemini";
pub const DEFAULT_CLASSIFIER_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_CLASSIFIER_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_MAX_SECTORS: usize = 3;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "api";
pub const DEFAULT_EMBEDDING_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai/embeddings";
pub const DEFAULT_EMBEDDING_MODEL: &str = "gemini-embedding-001";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 3072;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 1_000;
pub const DEFAULT_EMBED_BATCH_SIZE: usize = 10;

// --- HTTP ---
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "marketfit.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Retry ---
pub const DEFAULT_RETRY_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_RETRY_MAX_BACKOFF_MS: u64 = 30_000;
pub const DEFAULT_RETRY_MULTIPLIER: f64 = 2.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
