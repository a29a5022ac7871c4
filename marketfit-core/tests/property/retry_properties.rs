//! Property tests for retry backoff and attempt budgets.

use std::cell::Cell;
use std::time::Duration;

use marketfit_core::errors::ClassificationError;
use marketfit_core::RetryPolicy;
use proptest::prelude::*;

proptest! {
    #[test]
    fn backoff_is_monotonic_and_capped(
        initial_ms in 0u64..2_000,
        max_ms in 0u64..60_000,
        multiplier in 1.0f64..4.0,
    ) {
        let policy = RetryPolicy::new(
            5,
            Duration::from_millis(initial_ms),
            Duration::from_millis(max_ms),
            multiplier,
        );
        let cap = Duration::from_millis(max_ms.max(initial_ms));
        let mut previous = Duration::ZERO;
        for retry in 1..10 {
            let delay = policy.backoff_for(retry);
            prop_assert!(delay >= previous);
            prop_assert!(delay <= cap);
            previous = delay;
        }
    }

    #[test]
    fn transient_failures_use_exactly_the_budget(attempts in 1u32..8) {
        let policy = RetryPolicy::immediate(attempts);
        let calls = Cell::new(0u32);
        let result: Result<(), _> = policy.run("always_fails", |_| {
            calls.set(calls.get() + 1);
            Err(ClassificationError::RequestFailed { reason: "down".into() }.into())
        });
        prop_assert!(result.is_err());
        prop_assert_eq!(calls.get(), attempts);
    }
}
