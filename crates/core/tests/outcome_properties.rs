//! Property-based tests for the `Outcome` combinator algebra using proptest.
//!
//! Properties verified:
//! - Inspection agrees with the variant tag
//! - Functor identity and composition for `map`
//! - Failures short-circuit every chaining combinator
//! - `pipe` agrees with `wrap` applied to the step's pair
//! - `tap` and `ensure` leave passing outcomes untouched

use std::cell::Cell;

use proptest::prelude::*;
use railway_core::{Error, Outcome};

fn arb_outcome() -> impl Strategy<Value = Outcome<i64>> {
    prop_oneof![
        any::<i64>().prop_map(Outcome::<i64>::success),
        "[a-z ]{1,20}".prop_map(|m| Outcome::<i64>::failure(Error::msg(m))),
    ]
}

proptest! {
    /// Property: `is_ok`, `val`, `err` and `to_pair` all agree with the tag.
    #[test]
    fn prop_inspection_matches_variant(outcome in arb_outcome()) {
        match &outcome {
            Outcome::Success(v) => {
                prop_assert!(outcome.is_ok());
                prop_assert_eq!(outcome.val(), *v);
                prop_assert_eq!(outcome.err(), None);
                prop_assert_eq!(outcome.to_pair(), (*v, None));
            }
            Outcome::Failure(e) => {
                prop_assert!(!outcome.is_ok());
                prop_assert_eq!(outcome.val(), 0);
                prop_assert_eq!(outcome.err(), Some(e));
                prop_assert_eq!(outcome.to_pair(), (0, Some(e.clone())));
            }
        }
    }

    /// Property: mapping the identity function changes nothing.
    #[test]
    fn prop_map_identity(outcome in arb_outcome()) {
        prop_assert_eq!(outcome.clone().map(|v| v), outcome);
    }

    /// Property: `map(f).map(g) == map(g . f)`.
    #[test]
    fn prop_map_composition(outcome in arb_outcome(), k in any::<i64>()) {
        let f = |v: i64| v.wrapping_add(k);
        let g = |v: i64| v.to_string();
        prop_assert_eq!(outcome.clone().map(f).map(g), outcome.map(|v| g(f(v))));
    }

    /// Property: no callback runs on a failure, and the error survives unchanged.
    #[test]
    fn prop_failure_short_circuits(message in "[a-z]{1,12}") {
        let error = Error::msg(message);
        let calls = Cell::new(0_u32);
        let bump = || calls.set(calls.get().saturating_add(1));

        let failed: Outcome<i64> = Outcome::failure(error.clone());
        let mapped = failed.clone().map(|v| { bump(); v });
        let piped = failed.clone().pipe(|v| { bump(); (v, None) });
        let chained = failed.clone().and_then(|v| { bump(); Outcome::success(v) });
        let ensured = failed.ensure(|_| { bump(); true }, Error::msg("other"));

        prop_assert_eq!(calls.get(), 0);
        for outcome in [mapped, piped, chained, ensured] {
            prop_assert_eq!(outcome, Outcome::Failure(error.clone()));
        }
    }

    /// Property: `pipe(f)` on a success equals `wrap` of the pair `f` returns.
    #[test]
    fn prop_pipe_matches_wrap(value in any::<i64>(), fails in any::<bool>()) {
        let step = |v: i64| {
            let error = fails.then(|| Error::msg("step failed"));
            (v.to_string(), error)
        };
        let (expected_value, expected_error) = step(value);
        prop_assert_eq!(
            Outcome::<i64>::success(value).pipe(step),
            Outcome::wrap(expected_value, expected_error)
        );
    }

    /// Property: `tap` returns its input and fires exactly one callback.
    #[test]
    fn prop_tap_fires_exactly_once(outcome in arb_outcome()) {
        let successes = Cell::new(0_u32);
        let failures = Cell::new(0_u32);
        let tapped = outcome.clone().tap(
            |_| successes.set(successes.get().saturating_add(1)),
            |_| failures.set(failures.get().saturating_add(1)),
        );
        prop_assert_eq!(&tapped, &outcome);
        prop_assert_eq!(successes.get().saturating_add(failures.get()), 1);
        prop_assert_eq!(successes.get() == 1, outcome.is_ok());
    }

    /// Property: `ensure` with an always-true predicate is the identity.
    #[test]
    fn prop_ensure_true_is_identity(outcome in arb_outcome()) {
        prop_assert_eq!(outcome.clone().ensure(|_| true, Error::msg("never")), outcome);
    }

    /// Property: after `fallback` every outcome is a success.
    #[test]
    fn prop_fallback_always_succeeds(outcome in arb_outcome(), fallback in any::<i64>()) {
        let expected = outcome.value().copied().unwrap_or(fallback);
        prop_assert_eq!(outcome.fallback(fallback), Outcome::Success(expected));
    }

    /// Property: converting through std `Result` loses nothing.
    #[test]
    fn prop_result_conversion_is_lossless(outcome in arb_outcome()) {
        let back: Outcome<i64> = outcome.clone().into_result().into();
        prop_assert_eq!(back, outcome);
    }
}
