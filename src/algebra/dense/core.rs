use crate::algebra::{
    Adjoint, DenseMatrix, DenseMatrixMut, DenseStorageMatrix, FloatT, Matrix, ShapedMatrix,
    VectorMath,
};

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        Self {
            size,
            data: vec![T::zero(); m * n],
            phantom: std::marker::PhantomData,
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    /// Takes ownership of column-major data
    ///
    /// # Panics
    /// Panics if `src.len() != m*n`.
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert_eq!(m * n, src.len());
        Self {
            size,
            data: src.to_vec(),
            phantom: std::marker::PhantomData,
        }
    }

    /// Matrix with entries `f(row, col)`
    pub fn from_fn(size: (usize, usize), mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut mat = Matrix::zeros(size);
        for c in 0..size.1 {
            for r in 0..size.0 {
                mat[(r, c)] = f(r, c);
            }
        }
        mat
    }

    /// Copies any dense matrix, including adjoint views, into
    /// a new heap allocated matrix
    pub fn from_dense<M: DenseMatrix<T>>(src: &M) -> Self {
        Matrix::from_fn(src.size(), |r, c| src[(r, c)])
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    pub fn col_slice(&self, col: usize) -> &[T] {
        let (m, n) = self.size;
        assert!(col < n);
        &self.data()[(col * m)..(col + 1) * m]
    }

    pub fn is_triu(&self) -> bool {
        // any nonzero below the diagonal?
        for c in 0..self.ncols() {
            for r in (c + 1)..self.nrows() {
                if self[(r, c)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    pub fn is_tril(&self) -> bool {
        for c in 0..self.ncols() {
            for r in 0..usize::min(c, self.nrows()) {
                if self[(r, c)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
    T: FloatT,
{
    pub fn col_slice_mut(&mut self, col: usize) -> &mut [T] {
        let (m, n) = self.size;
        assert!(col < n);
        &mut self.data_mut()[(col * m)..(col + 1) * m]
    }

    pub fn set_identity(&mut self) {
        assert!(self.is_square());
        self.data_mut().set(T::zero());
        for i in 0..self.ncols() {
            self[(i, i)] = T::one();
        }
    }

    pub fn fill(&mut self, c: T) -> &mut Self {
        self.data_mut().set(c);
        self
    }

    /// Copy entries of `src` into `self`.  `src` may be any dense
    /// matrix, including an adjoint view.
    ///
    /// # Panics
    /// Panics if the dimensions are not equal.
    pub fn copy_from<M: DenseMatrix<T>>(&mut self, src: &M) -> &mut Self {
        assert_eq!(self.size(), src.size());
        for c in 0..self.ncols() {
            for r in 0..self.nrows() {
                self[(r, c)] = src[(r, c)];
            }
        }
        self
    }

    /// Copy the lower triangle `src` into `self`.  Entries above the
    /// diagonal of `self` are not touched.
    pub(crate) fn copy_lower_from<M: DenseMatrix<T>>(&mut self, src: &M) {
        assert_eq!(self.size(), src.size());
        for c in 0..self.ncols() {
            for r in c..self.nrows() {
                self[(r, c)] = src[(r, c)];
            }
        }
    }

    /// Zero every entry strictly above the diagonal
    pub(crate) fn zero_upper(&mut self) {
        for c in 1..self.ncols() {
            for r in 0..usize::min(c, self.nrows()) {
                self[(r, c)] = T::zero();
            }
        }
    }

    /// Mirror the lower triangle into the upper triangle
    pub(crate) fn mirror_lower(&mut self) {
        assert!(self.is_square());
        for c in 1..self.ncols() {
            for r in 0..c {
                self[(r, c)] = self[(c, r)];
            }
        }
    }
}

/// Matrix from a row-major array literal, so that
/// `Matrix::from(&[[1., 2.], [3., 4.]])` reads as it prints.
impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Matrix<T> {
        Matrix::from_fn((M, N), |r, c| rows[r][c])
    }
}

impl<S, T> std::fmt::Display for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

fn display_matrix<M, T>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    M: DenseMatrix<T>,
    T: FloatT,
{
    writeln!(f)?;
    for i in 0..m.nrows() {
        write!(f, "[ ")?;
        for j in 0..m.ncols() {
            write!(f, " {:?}", m[(i, j)])?;
        }
        writeln!(f, "]")?;
    }
    writeln!(f)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let I = Matrix::<f64>::identity(3);
        assert_eq!(I.data(), &[1., 0., 0., 0., 1., 0., 0., 0., 1.]);

        let A = Matrix::from_fn((2, 3), |r, c| (10 * r + c) as f64);
        assert_eq!(A[(1, 2)], 12.0);
        assert_eq!(A.col_slice(1), &[1.0, 11.0]);

        let B = Matrix::new_from_slice((2, 2), &[1., 2., 3., 4.]);
        assert_eq!(B, Matrix::from(&[[1., 3.], [2., 4.]]));
    }

    #[test]
    fn test_copy_from_adjoint() {
        let A = Matrix::from(&[[1., 2., 3.], [4., 5., 6.]]);
        let mut B = Matrix::<f64>::zeros((3, 2));
        B.copy_from(&A.t());
        assert_eq!(B, Matrix::from(&[[1., 4.], [2., 5.], [3., 6.]]));
        assert_eq!(Matrix::from_dense(&A.t()), B);
    }

    #[test]
    fn test_triangles() {
        let mut A = Matrix::from(&[[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
        assert!(!A.is_tril());
        A.zero_upper();
        assert!(A.is_tril());
        assert_eq!(A, Matrix::from(&[[1., 0., 0.], [4., 5., 0.], [7., 8., 9.]]));

        A.mirror_lower();
        assert_eq!(A, Matrix::from(&[[1., 4., 7.], [4., 5., 8.], [7., 8., 9.]]));

        let mut U = Matrix::zeros((3, 3));
        U[(0, 2)] = 1.0;
        assert!(U.is_triu());
    }

    #[test]
    fn test_display() {
        let A = Matrix::from(&[[1., 2.]]);
        assert_eq!(format!("{}", A), "\n[  1.0 2.0]\n\n");
    }
}
