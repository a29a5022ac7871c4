use crate::errors::MarketfitResult;

/// Text completion backend used by prompt-driven classifiers.
pub trait ITextGenerator: Send + Sync {
    /// Generate a completion for `prompt`.
    fn generate(&self, prompt: &str) -> MarketfitResult<String>;

    fn name(&self) -> &str;
}
