//! Property-based tests for the broadcasting kernel

use proptest::prelude::*;
use ubique_core::{broadcast, map_axis, reduce_axis, Dim, Error, Value};

fn rows_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..6, 1usize..6).prop_flat_map(|(r, c)| {
        prop::collection::vec(prop::collection::vec(-1e6f64..1e6, c), r)
    })
}

proptest! {
    // Property: broadcasting a scalar matches the pointwise rule everywhere
    #[test]
    fn prop_scalar_broadcast_is_pointwise(rows in rows_strategy(), s in -1e6f64..1e6) {
        let m = Value::from_rows(rows.clone()).unwrap();
        let out = broadcast(&m, &Value::scalar(s), |a, b| a >= b).unwrap();
        let expected: Value<bool> = Value::from_rows(
            rows.iter().map(|r| r.iter().map(|&a| a >= s).collect::<Vec<bool>>()).collect(),
        ).unwrap();
        prop_assert_eq!(out, expected);
    }

    // Property: equal-shape pairing preserves the shape
    #[test]
    fn prop_equal_shape_pairing(rows in rows_strategy()) {
        let m = Value::from_rows(rows).unwrap();
        let out = broadcast(&m, &m, |a, b| a - b).unwrap();
        prop_assert_eq!(out.shape(), m.shape());
        prop_assert!(out.iter().all(|&d| d == 0.0));
    }

    // Property: any ragged input is rejected with a shape error
    #[test]
    fn prop_ragged_rows_rejected(
        first in prop::collection::vec(-10.0f64..10.0, 1..5),
        extra in 1usize..4,
    ) {
        let second = vec![0.0; first.len() + extra];
        let result = Value::from_rows(vec![first, second]);
        prop_assert!(matches!(result, Err(Error::Shape(_))));
    }

    // Property: reducing rows yields one entry per row, columns one per column
    #[test]
    fn prop_reduce_lane_counts(rows in rows_strategy()) {
        let m = Value::from_rows(rows).unwrap();
        let shape = m.shape();
        let by_rows = reduce_axis(&m, Dim::Rows, |l| l.iter().sum()).unwrap();
        let by_cols = reduce_axis(&m, Dim::Columns, |l| l.iter().sum()).unwrap();
        prop_assert_eq!(by_rows.shape().rows, shape.rows);
        prop_assert_eq!(by_rows.shape().cols, 1);
        prop_assert_eq!(by_cols.shape().cols, shape.cols);
        prop_assert_eq!(by_cols.shape().rows, 1);
    }

    // Property: identity lane map along columns is a transpose
    #[test]
    fn prop_identity_column_map_transposes(rows in rows_strategy()) {
        let m = Value::from_rows(rows).unwrap();
        let out = map_axis(&m, Dim::Columns, |l| l.to_vec()).unwrap();
        let expected = Value::Matrix(m.as_matrix().unwrap().transpose());
        prop_assert_eq!(out, expected);
    }
}
