//! Property-based tests for the Outcome algebra using proptest.
//!
//! Properties verified:
//! - Accessor invariants for both tracks
//! - Functor identity and failure pass-through for map
//! - Monad laws for flat_map (left identity, right identity, associativity)
//! - fold dispatches to exactly one handler
//! - Tap combinators are identities
//! - Native Result conversion round-trips

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::arithmetic_side_effects)]

use std::cell::Cell;

use proptest::prelude::*;
use railway_core::Outcome;

type Out = Outcome<i32, String>;

fn outcome_strategy() -> impl Strategy<Value = Out> {
    prop_oneof![
        any::<i32>().prop_map(Out::Success),
        "[a-z]{0,8}".prop_map(Out::Failure),
    ]
}

fn halve_even(x: i32) -> Out {
    if x % 2 == 0 {
        Outcome::Success(x / 2)
    } else {
        Outcome::Failure(format!("odd {x}"))
    }
}

fn reject_negative(x: i32) -> Out {
    if x < 0 {
        Outcome::Failure(format!("negative {x}"))
    } else {
        Outcome::Success(x.wrapping_add(1))
    }
}

// ==========================================================================
// PROPERTY: Accessor invariants
// ==========================================================================

proptest! {
    #[test]
    fn prop_success_accessors(v in any::<i32>()) {
        let out: Out = Outcome::Success(v);
        prop_assert!(out.is_success());
        prop_assert!(!out.is_failure());
        prop_assert_eq!(out.clone().value(), Some(v));
        prop_assert_eq!(out.error(), None);
    }

    #[test]
    fn prop_failure_accessors(e in ".*") {
        let out: Out = Outcome::Failure(e.clone());
        prop_assert!(out.is_failure());
        prop_assert!(!out.is_success());
        prop_assert_eq!(out.clone().error(), Some(e));
        prop_assert_eq!(out.value(), None);
    }
}

// ==========================================================================
// PROPERTY: Functor laws
// ==========================================================================

proptest! {
    #[test]
    fn prop_map_identity(out in outcome_strategy()) {
        prop_assert_eq!(out.clone().map(|x| x), out);
    }

    #[test]
    fn prop_map_leaves_failure_untouched(e in ".*") {
        let out: Out = Outcome::Failure(e.clone());
        let mapped = out.map(|x| x.to_string().len());
        prop_assert_eq!(mapped, Outcome::Failure(e));
    }

    #[test]
    fn prop_map_error_identity(out in outcome_strategy()) {
        prop_assert_eq!(out.clone().map_error(|e| e), out);
    }
}

// ==========================================================================
// PROPERTY: Monad laws
// ==========================================================================

proptest! {
    #[test]
    fn prop_left_identity(v in any::<i32>()) {
        prop_assert_eq!(Out::Success(v).flat_map(halve_even), halve_even(v));
    }

    #[test]
    fn prop_right_identity(out in outcome_strategy()) {
        prop_assert_eq!(out.clone().flat_map(Outcome::Success), out);
    }

    #[test]
    fn prop_associativity(out in outcome_strategy()) {
        let left = out.clone().flat_map(halve_even).flat_map(reject_negative);
        let right = out.flat_map(|x| halve_even(x).flat_map(reject_negative));
        prop_assert_eq!(left, right);
    }
}

// ==========================================================================
// PROPERTY: fold, unwrapping, taps
// ==========================================================================

proptest! {
    #[test]
    fn prop_fold_calls_exactly_one_handler(out in outcome_strategy()) {
        let success_calls = Cell::new(0_u8);
        let failure_calls = Cell::new(0_u8);
        let was_success = out.is_success();
        out.fold(
            |_| success_calls.set(success_calls.get().wrapping_add(1)),
            |_| failure_calls.set(failure_calls.get().wrapping_add(1)),
        );
        prop_assert_eq!(success_calls.get(), u8::from(was_success));
        prop_assert_eq!(failure_calls.get(), u8::from(!was_success));
    }

    #[test]
    fn prop_get_or_default(out in outcome_strategy(), d in any::<i32>()) {
        let expected = match &out {
            Outcome::Success(v) => *v,
            Outcome::Failure(_) => d,
        };
        prop_assert_eq!(out.get_or_default(d), expected);
    }

    #[test]
    fn prop_get_or_else_matches_fold(out in outcome_strategy()) {
        let handler = |e: String| i32::try_from(e.len()).unwrap_or(i32::MAX);
        prop_assert_eq!(out.clone().get_or_else(handler), out.fold(|v| v, handler));
    }

    #[test]
    fn prop_taps_are_identity(out in outcome_strategy()) {
        let success_seen = Cell::new(false);
        let failure_seen = Cell::new(false);
        let tapped = out
            .clone()
            .on_success(|_| success_seen.set(true))
            .on_failure(|_| failure_seen.set(true));
        prop_assert_eq!(success_seen.get(), out.is_success());
        prop_assert_eq!(failure_seen.get(), out.is_failure());
        prop_assert_eq!(tapped, out);
    }
}

// ==========================================================================
// PROPERTY: Native Result conversion
// ==========================================================================

proptest! {
    #[test]
    fn prop_result_round_trip(out in outcome_strategy()) {
        let native: Result<i32, String> = out.clone().into();
        prop_assert_eq!(native.clone().is_ok(), out.is_success());
        prop_assert_eq!(Outcome::from(native), out);
    }
}
