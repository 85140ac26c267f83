//! Unit tests for the expansion core: axis normalization and Cartesian
//! tuple generation. These pin the enumeration order exactly, since
//! downstream request numbering depends on it being stable.

use reqsweep::axis::{normalize, AxisValue, Limits, RawAxis};
use reqsweep::errors::{RangeFault, SweepError};
use reqsweep::product::generate;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn explicit(values: &[&str]) -> RawAxis {
    RawAxis::Values(values.iter().map(|s| AxisValue::Str(s.to_string())).collect())
}

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn explicit_lists_pass_through_unchanged() {
        let axes = normalize(&[explicit(&["x", "y"])], &Limits::default()).unwrap();
        assert_eq!(axes, vec![strings(&["x", "y"])]);
    }

    #[test]
    fn range_expands_inclusive_of_stop() {
        let raw = [RawAxis::Range {
            start: 2,
            step: 2,
            stop: 8,
        }];
        let axes = normalize(&raw, &Limits::default()).unwrap();
        assert_eq!(axes, vec![strings(&["2", "4", "6", "8"])]);
    }

    #[test]
    fn degenerate_range_yields_start_alone() {
        let raw = [RawAxis::Range {
            start: 1,
            step: 1,
            stop: 1,
        }];
        let axes = normalize(&raw, &Limits::default()).unwrap();
        assert_eq!(axes, vec![strings(&["1"])]);
    }

    #[test]
    fn step_overshooting_stop_keeps_last_value_below_it() {
        let raw = [RawAxis::Range {
            start: 0,
            step: 4,
            stop: 10,
        }];
        let axes = normalize(&raw, &Limits::default()).unwrap();
        assert_eq!(axes, vec![strings(&["0", "4", "8"])]);
    }

    #[test]
    fn negative_bounds_render_with_sign() {
        let raw = [RawAxis::Range {
            start: -3,
            step: 3,
            stop: 3,
        }];
        let axes = normalize(&raw, &Limits::default()).unwrap();
        assert_eq!(axes, vec![strings(&["-3", "0", "3"])]);
    }

    #[test]
    fn non_string_element_is_rejected_without_coercion() {
        let raw = [RawAxis::Values(vec![
            AxisValue::Int(1),
            AxisValue::Str("b".to_string()),
        ])];
        let err = normalize(&raw, &Limits::default()).unwrap_err();
        match err {
            SweepError::InvalidValue { axis, position, .. } => {
                assert_eq!(axis, 0);
                assert_eq!(position, 0);
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn error_names_the_offending_axis() {
        let raw = [
            explicit(&["ok"]),
            RawAxis::Values(vec![AxisValue::Bool(true)]),
        ];
        let err = normalize(&raw, &Limits::default()).unwrap_err();
        assert!(matches!(err, SweepError::InvalidValue { axis: 1, .. }));
    }

    #[test]
    fn zero_or_negative_step_fails_fast() {
        for step in [0, -1] {
            let raw = [RawAxis::Range {
                start: 0,
                step,
                stop: 10,
            }];
            let err = normalize(&raw, &Limits::default()).unwrap_err();
            match err {
                SweepError::InvalidRange { fault, .. } => {
                    assert_eq!(fault, RangeFault::NonPositiveStep);
                }
                other => panic!("expected InvalidRange, got {other:?}"),
            }
        }
    }

    #[test]
    fn range_over_the_cap_is_rejected_with_bounds() {
        let raw = [RawAxis::Range {
            start: 0,
            step: 1,
            stop: 9,
        }];
        let limits = Limits { max_axis_len: 5 };
        let err = normalize(&raw, &limits).unwrap_err();
        match err {
            SweepError::InvalidRange {
                start, stop, fault, ..
            } => {
                assert_eq!((start, stop), (0, 9));
                assert_eq!(fault, RangeFault::CapExceeded { len: 10, cap: 5 });
            }
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn extreme_bounds_do_not_wrap() {
        let raw = [RawAxis::Range {
            start: i64::MIN,
            step: 1,
            stop: i64::MAX,
        }];
        // Must fail (overflow or cap), never wrap silently.
        assert!(normalize(&raw, &Limits::default()).is_err());
    }

    #[test]
    fn inverted_range_normalizes_to_an_empty_axis() {
        let raw = [RawAxis::Range {
            start: 5,
            step: 1,
            stop: 2,
        }];
        let axes = normalize(&raw, &Limits::default()).unwrap();
        assert_eq!(axes, vec![Vec::<String>::new()]);
    }
}

#[cfg(test)]
mod generate_tests {
    use super::*;

    #[test]
    fn empty_axis_set_returns_the_no_expansion_sentinel() {
        assert_eq!(generate(&[]).unwrap(), None);
    }

    #[test]
    fn single_one_value_axis_is_one_tuple_not_the_sentinel() {
        let tuples = generate(&[strings(&["a"])]).unwrap();
        assert_eq!(tuples, Some(vec![strings(&["a"])]));
    }

    #[test]
    fn zero_length_axis_fails_naming_its_index() {
        let axes = vec![strings(&["a", "b"]), Vec::new()];
        let err = generate(&axes).unwrap_err();
        assert!(matches!(err, SweepError::EmptyAxis { axis: 1 }));
    }

    #[test]
    fn cardinality_is_the_product_of_axis_lengths() {
        let axes = vec![
            strings(&["a", "b", "c"]),
            strings(&["0", "1"]),
            strings(&["x", "y", "z", "w"]),
        ];
        let tuples = generate(&axes).unwrap().unwrap();
        assert_eq!(tuples.len(), 3 * 2 * 4);
        assert!(tuples.iter().all(|t| t.len() == 3));
    }

    #[test]
    fn order_is_lexicographic_with_axis_zero_slowest() {
        let axes = vec![strings(&["x", "y"]), strings(&["0", "1", "2"])];
        let tuples = generate(&axes).unwrap().unwrap();
        let expected: Vec<Vec<String>> = [
            ["x", "0"],
            ["x", "1"],
            ["x", "2"],
            ["y", "0"],
            ["y", "1"],
            ["y", "2"],
        ]
        .iter()
        .map(|t| strings(t))
        .collect();
        assert_eq!(tuples, expected);
    }

    #[test]
    fn three_axes_odometer_order() {
        let axes = vec![
            strings(&["a", "b"]),
            strings(&["0", "1"]),
            strings(&["x", "y"]),
        ];
        let tuples = generate(&axes).unwrap().unwrap();
        let expected: Vec<Vec<String>> = [
            ["a", "0", "x"],
            ["a", "0", "y"],
            ["a", "1", "x"],
            ["a", "1", "y"],
            ["b", "0", "x"],
            ["b", "0", "y"],
            ["b", "1", "x"],
            ["b", "1", "y"],
        ]
        .iter()
        .map(|t| strings(t))
        .collect();
        assert_eq!(tuples, expected);
    }

    #[test]
    fn output_is_complete_and_duplicate_free() {
        use std::collections::HashSet;
        let axes = vec![strings(&["a", "b", "c"]), strings(&["1", "2"])];
        let tuples = generate(&axes).unwrap().unwrap();
        let distinct: HashSet<_> = tuples.iter().collect();
        assert_eq!(distinct.len(), tuples.len());
        for a in &axes[0] {
            for b in &axes[1] {
                assert!(tuples.contains(&vec![a.clone(), b.clone()]));
            }
        }
    }

    #[test]
    fn overflowing_product_is_rejected_before_allocation() {
        // 2^64 tuples cannot be counted in a usize, let alone allocated.
        let axes: Vec<Vec<String>> = (0..64).map(|_| strings(&["0", "1"])).collect();
        let err = generate(&axes).unwrap_err();
        match err {
            SweepError::ProductOverflow { lengths } => {
                assert_eq!(lengths.len(), 64);
                assert!(lengths.iter().all(|&len| len == 2));
            }
            other => panic!("expected ProductOverflow, got {other:?}"),
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let axes = vec![strings(&["p", "q"]), strings(&["1", "2", "3"])];
        assert_eq!(generate(&axes).unwrap(), generate(&axes).unwrap());
    }

    #[test]
    fn normalize_then_generate_combined_scenario() {
        let raw = [
            explicit(&["x", "y"]),
            RawAxis::Range {
                start: 0,
                step: 1,
                stop: 2,
            },
        ];
        let axes = normalize(&raw, &Limits::default()).unwrap();
        assert_eq!(axes, vec![strings(&["x", "y"]), strings(&["0", "1", "2"])]);
        let tuples = generate(&axes).unwrap().unwrap();
        assert_eq!(tuples.len(), 6);
        assert_eq!(tuples[0], strings(&["x", "0"]));
        assert_eq!(tuples[5], strings(&["y", "2"]));
    }
}
