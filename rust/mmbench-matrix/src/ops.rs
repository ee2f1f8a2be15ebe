use crate::matrix::{Matrix, MatrixError};

/// Naive matrix multiplication: `C[i][j] = Σ_k A[i][k] * B[k][j]`.
///
/// The triple loop runs in `i`, `j`, `k` order with scalar f64 accumulation,
/// so results are deterministic for this fixed order (though not bitwise
/// comparable to other summation orders). Deliberately no blocking, no
/// transposition of `b`, no SIMD, no parallelism: this is the O(n³)
/// baseline the harness exists to time.
///
/// Returns [`MatrixError::DimensionMismatch`] when `a.cols() != b.rows()`.
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            left_rows: a.rows(),
            left_cols: a.cols(),
            right_rows: b.rows(),
            right_cols: b.cols(),
        });
    }

    let n = a.rows();
    let p = a.cols();
    let m = b.cols();

    let mut c = Matrix::zeros(n, m)?;
    let a_data = a.data();
    let b_data = b.data();
    let c_data = c.data_mut();

    for i in 0..n {
        for j in 0..m {
            let mut sum = 0.0;
            for k in 0..p {
                sum += a_data[i * p + k] * b_data[k * m + j];
            }
            c_data[i * m + j] = sum;
        }
    }

    Ok(c)
}
