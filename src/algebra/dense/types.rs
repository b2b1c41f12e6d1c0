use crate::algebra::{Adjoint, ShapedMatrix};
use std::ops::{Index, IndexMut};

/// Column-major dense matrix over any contiguous storage `S`.
///
/// The same type serves owned heap matrices ([`Matrix`]) and inline
/// fixed size matrices ([`SquareMatrix<Const<N>,T>`](crate::algebra::SquareMatrix)).
#[derive(Debug, Clone, PartialEq)]
pub struct DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    /// dimensions
    pub size: (usize, usize),
    /// vector of data in column major format
    pub data: S,
    pub(crate) phantom: std::marker::PhantomData<T>,
}

/// Heap allocated dense matrix
pub type Matrix<T> = DenseStorageMatrix<Vec<T>, T>;

impl<S, T> ShapedMatrix for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn size(&self) -> (usize, usize) {
        self.size
    }
}

//NB: the concrete dense type is just called "Matrix".  The "DenseMatrix"
//trait is implemented on every storage variant and on Adjoint views so
//that readers can index any of them the same way.
/// Read access to a dense matrix through `(row, col)` indexing
pub trait DenseMatrix<T>: ShapedMatrix + Index<(usize, usize), Output = T> {
    fn index_linear(&self, idx: (usize, usize)) -> usize;
    fn data(&self) -> &[T];
}

/// Write access to a dense matrix
pub trait DenseMatrixMut<T>: DenseMatrix<T> + IndexMut<(usize, usize), Output = T> {
    fn data_mut(&mut self) -> &mut [T];
}

impl<S, T> DenseMatrix<T> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.nrows() * idx.1
    }
    fn data(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<S, T> DenseMatrixMut<T> for DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
{
    fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<S, T> Index<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

impl<S, T> IndexMut<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data_mut()[lidx]
    }
}

// ------------------------------------------------
// Adjoint views.  Read only, indices are swapped.

impl<S, T> DenseMatrix<T> for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
{
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        self.src.data()
    }
}

impl<S, T> Index<(usize, usize)> for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // [ 1.0  4.0  7.0 ]
    // [ 2.0  5.0  8.0 ]
    fn wide_matrix() -> Matrix<f64> {
        Matrix::from(&[[1.0, 4.0, 7.0], [2.0, 5.0, 8.0]])
    }

    #[test]
    fn test_matrix_indexing() {
        let A = wide_matrix();
        assert_eq!(A.size(), (2, 3));
        assert_eq!(A.data(), &[1.0, 2.0, 4.0, 5.0, 7.0, 8.0]);

        assert_eq!(A[(0, 0)], 1.0);
        assert_eq!(A[(1, 0)], 2.0);
        assert_eq!(A[(0, 2)], 7.0);
        assert_eq!(A[(1, 2)], 8.0);

        assert_eq!(A.index_linear((1, 1)), 3);
        assert_eq!(A.index_linear((0, 2)), 4);
    }

    #[test]
    fn test_adjoint_indexing() {
        let A = wide_matrix();
        let At = A.t();

        assert_eq!(At.size(), (3, 2));
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(At[(c, r)], A[(r, c)]);
            }
        }
        assert_eq!(At.index_linear((2, 1)), A.index_linear((1, 2)));
    }
}
