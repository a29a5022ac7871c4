//! Prompt-driven sector classifier.

use marketfit_core::errors::MarketfitResult;
use marketfit_core::traits::{ISectorClassifier, ITextGenerator};
use marketfit_core::{RetryPolicy, Sector};
use tracing::debug;

use crate::parse::parse_sector_reply;
use crate::prompt::build_prompt;

/// Classifies by prompting a text generator. Generator calls go through the
/// retry policy; the reply is parsed strictly.
pub struct LlmSectorClassifier<G: ITextGenerator> {
    generator: G,
    retry: RetryPolicy,
}

impl<G: ITextGenerator> LlmSectorClassifier<G> {
    pub fn new(generator: G, retry: RetryPolicy) -> Self {
        Self { generator, retry }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G: ITextGenerator> ISectorClassifier for LlmSectorClassifier<G> {
    fn classify(&self, text: &str, max_results: usize) -> MarketfitResult<Vec<Sector>> {
        let prompt = build_prompt(text, max_results);
        let reply = self
            .retry
            .run("classify_sectors", |_| self.generator.generate(&prompt))?;
        debug!(generator = self.generator.name(), reply = %reply.trim(), "classifier reply");
        Ok(parse_sector_reply(&reply, max_results)?)
    }

    fn name(&self) -> &str {
        self.generator.name()
    }
}
