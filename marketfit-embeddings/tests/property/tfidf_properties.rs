//! Property tests for the hashed TF-IDF fallback.

use marketfit_core::traits::IEmbeddingProvider;
use marketfit_embeddings::TfIdfFallback;
use proptest::prelude::*;

proptest! {
    #[test]
    fn vectors_have_configured_width_and_unit_or_zero_norm(
        text in "[a-zA-Z ,.-]{0,120}",
        dims in 8usize..512,
    ) {
        let provider = TfIdfFallback::new(dims);
        let v = provider.embed(&text).unwrap();
        prop_assert_eq!(v.len(), dims);

        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!(norm <= f32::EPSILON || (norm - 1.0).abs() < 1e-4, "norm {}", norm);
    }

    #[test]
    fn embedding_is_deterministic(text in "[a-z ]{1,80}") {
        let provider = TfIdfFallback::new(128);
        prop_assert_eq!(provider.embed(&text).unwrap(), provider.embed(&text).unwrap());
    }
}
