/// Error type for matrix construction and multiplication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Row or column count of zero.
    #[error("matrix dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    /// Inner dimensions differ, so the product is undefined.
    #[error(
        "cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}: \
         inner dimensions differ"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    /// Flat data length does not match the requested dimensions.
    #[error("data length {got} does not fill a {rows}x{cols} matrix ({expected} elements)")]
    DataLength {
        rows: usize,
        cols: usize,
        expected: usize,
        got: usize,
    },
    /// The backing buffer could not be allocated (element count overflow
    /// or heap exhaustion).
    #[error("failed to allocate backing storage for a {rows}x{cols} matrix")]
    Allocation { rows: usize, cols: usize },
}

/// A two-dimensional array of f64 values with dimensions fixed at creation.
///
/// Storage is a flat row-major (C-contiguous) buffer: element `(i, j)` lives
/// at `data[i * cols + j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Flat storage in row-major order.
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    // ── Constructors ────────────────────────────────────────────────────

    /// Create a `rows x cols` matrix with every cell set to `value`.
    ///
    /// Dimensions must be positive. Allocation is fallible: the element
    /// count is computed with `checked_mul` and the buffer is reserved with
    /// [`Vec::try_reserve_exact`], so heap exhaustion surfaces as
    /// [`MatrixError::Allocation`] instead of aborting the process.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, MatrixError> {
        let len = Self::checked_len(rows, cols)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::Allocation { rows, cols })?;
        data.resize(len, value);
        Ok(Matrix { data, rows, cols })
    }

    /// Create a `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::filled(rows, cols, 0.0)
    }

    /// Create a matrix from a flat row-major data vector.
    ///
    /// Returns `Err` if the data length doesn't match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        let len = Self::checked_len(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::DataLength {
                rows,
                cols,
                expected: len,
                got: data.len(),
            });
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Validate dimensions and compute the element count.
    fn checked_len(rows: usize, cols: usize) -> Result<usize, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        rows.checked_mul(cols)
            .ok_or(MatrixError::Allocation { rows, cols })
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// The flat row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable flat data, for filling the multiply output in-crate.
    /// Matrices are read-only outside this crate once constructed.
    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Heap footprint of the backing buffer in bytes.
    pub fn size_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<f64>()
    }
}
