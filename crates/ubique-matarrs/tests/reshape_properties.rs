//! Property tests for the structural helpers

use proptest::prelude::*;
use ubique_core::{Dim, Shape, Value};
use ubique_matarrs::{flatten, flipud, getcol, horzcat, linspace, setcol, sub2ind, transpose, vertcat};

fn matrix_strategy() -> impl Strategy<Value = Value<i64>> {
    (1usize..6, 1usize..6).prop_flat_map(|(r, c)| {
        prop::collection::vec(prop::collection::vec(-100i64..100, c), r)
            .prop_map(|rows| Value::from_rows(rows).unwrap())
    })
}

proptest! {
    #[test]
    fn prop_transpose_involution(m in matrix_strategy()) {
        prop_assert_eq!(transpose(&transpose(&m)), m);
    }

    #[test]
    fn prop_flipud_involution(m in matrix_strategy()) {
        prop_assert_eq!(flipud(&flipud(&m)), m);
    }

    // Column-wise flatten equals row-wise flatten of the transpose
    #[test]
    fn prop_flatten_columns_is_transposed_rows(m in matrix_strategy()) {
        prop_assert_eq!(flatten(&m, Dim::Columns), flatten(&transpose(&m), Dim::Rows));
    }

    #[test]
    fn prop_setcol_then_getcol(m in matrix_strategy(), fill in -5i64..5) {
        let shape = m.shape();
        let col = vec![fill; shape.rows];
        let n = shape.cols - 1;
        let updated = Value::Matrix(setcol(&col, &m, n).unwrap());
        prop_assert_eq!(getcol(&updated, n).unwrap(), col);
        if n > 0 {
            prop_assert_eq!(getcol(&updated, 0).unwrap(), getcol(&m, 0).unwrap());
        }
    }

    #[test]
    fn prop_concat_shapes(m in matrix_strategy()) {
        let s = m.shape();
        let h = horzcat(&[m.clone(), m.clone()]).unwrap();
        let v = vertcat(&[m.clone(), m]).unwrap();
        prop_assert_eq!(h.shape(), Shape::new(s.rows, 2 * s.cols));
        prop_assert_eq!(v.shape(), Shape::new(2 * s.rows, s.cols));
    }

    // Linear indices walk column-major and stay within the element count
    #[test]
    fn prop_sub2ind_column_major(rows in 1usize..8, cols in 1usize..8) {
        let size = Shape::new(rows, cols);
        let pairs: Vec<Vec<usize>> = (0..cols)
            .flat_map(|c| (0..rows).map(move |r| vec![r, c]))
            .collect();
        let out = sub2ind(size, &Value::from_rows(pairs).unwrap()).unwrap();
        let expected: Vec<usize> = (0..rows * cols).collect();
        if expected.len() == 1 {
            prop_assert_eq!(out, Value::scalar(0usize));
        } else {
            prop_assert_eq!(out, Value::vector(expected));
        }
    }

    #[test]
    fn prop_linspace_endpoints(a in -1e3f64..1e3, b in -1e3f64..1e3, n in 2usize..50) {
        let v = linspace(a, b, n);
        prop_assert_eq!(v.len(), n);
        prop_assert_eq!(v[0], a);
        prop_assert_eq!(v[n - 1], b);
    }
}
