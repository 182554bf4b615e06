//! Property-based tests for sentinel-validator.

use sentinel_validator::prelude::*;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn less_idempotent(n in any::<i64>(), bound in any::<i64>()) {
        let v = less(bound);
        prop_assert_eq!(v.validate(&n), v.validate(&n));
    }

    #[test]
    fn composite_idempotent(n in any::<i32>()) {
        let v = greater(-10).and(less(10)).or(equal(100));
        prop_assert_eq!(v.validate(&n), v.validate(&n));
    }
}

// ============================================================================
// NEGATION: not(v) toggles the verdict
// ============================================================================

proptest! {
    #[test]
    fn not_toggles_verdict(n in any::<i32>(), bound in any::<i32>()) {
        let inner_ok = less(bound).validate(&n).is_ok();
        let negated_ok = not(less(bound)).validate(&n).is_ok();
        prop_assert_eq!(negated_ok, !inner_ok);
    }

    #[test]
    fn double_negation_restores_verdict(s in ".{0,12}") {
        let v = less("m".to_string());
        prop_assert_eq!(v.validate(&s).is_ok(), v.not().not().validate(&s).is_ok());
    }
}

// ============================================================================
// COMBINATOR LAWS: and == all, or == any
// ============================================================================

proptest! {
    #[test]
    fn and_passes_iff_all_pass(n in -50i64..50, a in -50i64..50, b in -50i64..50) {
        let a_ok = greater(a).validate(&n).is_ok();
        let b_ok = less(b).validate(&n).is_ok();
        let combined = and(greater(a), less(b)).validate(&n);

        prop_assert_eq!(combined.is_ok(), a_ok && b_ok);
        if let Err(e) = combined {
            let expected = usize::from(!a_ok) + usize::from(!b_ok);
            prop_assert_eq!(e.nested.len(), expected);
        }
    }

    #[test]
    fn or_passes_iff_any_pass(n in -50i64..50, a in -50i64..50, b in -50i64..50) {
        let a_ok = greater(a).validate(&n).is_ok();
        let b_ok = less(b).validate(&n).is_ok();
        let combined = or(greater(a), less(b)).validate(&n);

        prop_assert_eq!(combined.is_ok(), a_ok || b_ok);
        if let Err(e) = combined {
            prop_assert_eq!(e.nested.len(), 2);
        }
    }

    #[test]
    fn and_all_counts_rejections(n in -20i32..20, bounds in prop::collection::vec(-20i32..20, 2..8)) {
        let expected = bounds.iter().filter(|b| n >= **b).count();
        let combined = and_all(bounds.iter().copied().map(less).collect());

        match combined.validate(&n) {
            Ok(()) => prop_assert_eq!(expected, 0),
            Err(e) => prop_assert_eq!(e.nested.len(), expected),
        }
    }

    #[test]
    fn or_any_rejects_iff_all_reject(n in -20i32..20, values in prop::collection::vec(-20i32..20, 2..8)) {
        let any_equal = values.contains(&n);
        let combined = or_any(values.iter().copied().map(equal).collect());
        prop_assert_eq!(combined.validate(&n).is_ok(), any_equal);
    }
}

// ============================================================================
// COMPARISON: equality exclusivity and ordering trichotomy
// ============================================================================

proptest! {
    #[test]
    fn equal_and_not_equal_exclusive(a in any::<i64>(), b in any::<i64>()) {
        let eq = equal(b).validate(&a).is_ok();
        let ne = not_equal(b).validate(&a).is_ok();
        prop_assert!(eq != ne);
    }

    #[test]
    fn exactly_one_of_less_equal_greater(a in any::<i64>(), b in any::<i64>()) {
        let count = [
            less(b).validate(&a).is_ok(),
            equal(b).validate(&a).is_ok(),
            greater(b).validate(&a).is_ok(),
        ]
        .into_iter()
        .filter(|ok| *ok)
        .count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn text_trichotomy(a in "[a-c]{0,3}", b in "[a-c]{0,3}") {
        let count = [
            less(b.clone()).validate(&a).is_ok(),
            equal(b.clone()).validate(&a).is_ok(),
            greater(b).validate(&a).is_ok(),
        ]
        .into_iter()
        .filter(|ok| *ok)
        .count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn inclusive_bounds_match_operators(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(less_or_equal(b).validate(&a).is_ok(), a <= b);
        prop_assert_eq!(greater_or_equal(b).validate(&a).is_ok(), a >= b);
    }

    #[test]
    fn float_sign_matches_comparison(x in -1.0e6f64..1.0e6) {
        prop_assert_eq!(positive().validate(&x).is_ok(), x > 0.0);
        prop_assert_eq!(negative().validate(&x).is_ok(), x < 0.0);
    }
}
