use crate::matrix::{Matrix, MatrixError};
use crate::ops;

const EPS: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

// ─── Construction tests ─────────────────────────────────────────────────

#[test]
fn filled_sets_every_cell() {
    let m = Matrix::filled(3, 3, 1.5).unwrap();
    assert_eq!(m.rows(), 3);
    assert_eq!(m.cols(), 3);
    assert!(m.data().iter().all(|&x| x == 1.5));
}

#[test]
fn filled_rectangular() {
    let m = Matrix::filled(2, 5, -4.25).unwrap();
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 5);
    assert_eq!(m.data().len(), 10);
    assert!(m.data().iter().all(|&x| x == -4.25));
}

#[test]
fn filled_rejects_zero_rows() {
    let err = Matrix::filled(0, 3, 1.0).unwrap_err();
    assert_eq!(err, MatrixError::InvalidDimensions { rows: 0, cols: 3 });
}

#[test]
fn filled_rejects_zero_cols() {
    let err = Matrix::filled(3, 0, 1.0).unwrap_err();
    assert_eq!(err, MatrixError::InvalidDimensions { rows: 3, cols: 0 });
}

#[test]
fn filled_element_count_overflow_is_allocation_error() {
    let err = Matrix::filled(usize::MAX, usize::MAX, 1.0).unwrap_err();
    assert!(matches!(err, MatrixError::Allocation { .. }));
}

#[test]
fn zeros_all_zero() {
    let m = Matrix::zeros(4, 2).unwrap();
    assert!(m.data().iter().all(|&x| x == 0.0));
}

#[test]
fn from_vec_roundtrip() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert!(approx_eq(m.get(0, 0), 1.0));
    assert!(approx_eq(m.get(0, 2), 3.0));
    assert!(approx_eq(m.get(1, 0), 4.0));
    assert!(approx_eq(m.get(1, 2), 6.0));
}

#[test]
fn from_vec_length_mismatch() {
    let err = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DataLength {
            rows: 2,
            cols: 2,
            expected: 4,
            got: 3,
        }
    );
}

#[test]
fn size_bytes_counts_backing_buffer() {
    let m = Matrix::zeros(64, 64).unwrap();
    assert_eq!(m.size_bytes(), 64 * 64 * 8);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn get_out_of_bounds_panics() {
    let m = Matrix::zeros(2, 2).unwrap();
    let _ = m.get(2, 0);
}

// ─── Multiplication tests ───────────────────────────────────────────────

#[test]
fn matmul_output_dimensions() {
    let a = Matrix::filled(2, 3, 1.0).unwrap();
    let b = Matrix::filled(3, 4, 1.0).unwrap();
    let c = ops::matmul(&a, &b).unwrap();
    assert_eq!(c.rows(), 2);
    assert_eq!(c.cols(), 4);
}

#[test]
fn matmul_inner_dimension_mismatch() {
    let a = Matrix::filled(2, 3, 1.0).unwrap();
    let b = Matrix::filled(4, 5, 1.0).unwrap();
    let err = ops::matmul(&a, &b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            left_rows: 2,
            left_cols: 3,
            right_rows: 4,
            right_cols: 5,
        }
    );
}

#[test]
fn matmul_constant_fill_square() {
    // Shared dimension 3, fills 1.5 and 2.5: every cell is 1.5 * 2.5 * 3,
    // exact in f64.
    let a = Matrix::filled(3, 3, 1.5).unwrap();
    let b = Matrix::filled(3, 3, 2.5).unwrap();
    let c = ops::matmul(&a, &b).unwrap();
    assert!(c.data().iter().all(|&x| x == 11.25));
}

#[test]
fn matmul_constant_fill_rectangular() {
    // (2x5) * (5x3): every cell is 2.0 * 3.0 * 5 = 30, exact.
    let a = Matrix::filled(2, 5, 2.0).unwrap();
    let b = Matrix::filled(5, 3, 3.0).unwrap();
    let c = ops::matmul(&a, &b).unwrap();
    assert_eq!(c.rows(), 2);
    assert_eq!(c.cols(), 3);
    assert!(c.data().iter().all(|&x| x == 30.0));
}

#[test]
fn matmul_integer_values_exact() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
    let c = ops::matmul(&a, &b).unwrap();
    assert_eq!(c.data(), &[19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn matmul_identity_preserves_matrix() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let identity = Matrix::from_vec(
        3,
        3,
        vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    )
    .unwrap();
    let c = ops::matmul(&a, &identity).unwrap();
    assert_eq!(c.data(), a.data());
}

#[test]
fn matmul_fractional_values_within_tolerance() {
    // 0.1 and 0.2 are not exactly representable; compare with tolerance.
    let a = Matrix::filled(4, 4, 0.1).unwrap();
    let b = Matrix::filled(4, 4, 0.2).unwrap();
    let c = ops::matmul(&a, &b).unwrap();
    for &x in c.data() {
        assert!(approx_eq(x, 0.08), "expected ~0.08, got {}", x);
    }
}

#[test]
fn matmul_deterministic_for_fixed_order() {
    let a = Matrix::from_vec(3, 3, vec![0.3, 1.7, -2.2, 4.1, 0.05, 9.6, -7.3, 2.8, 1.1]).unwrap();
    let b = Matrix::from_vec(3, 3, vec![5.5, -0.4, 3.3, 2.2, 8.8, -1.1, 0.9, 6.6, 4.4]).unwrap();
    let c1 = ops::matmul(&a, &b).unwrap();
    let c2 = ops::matmul(&a, &b).unwrap();
    // Fixed i-j-k accumulation order makes repeat runs bitwise identical.
    assert_eq!(c1.data(), c2.data());
}
