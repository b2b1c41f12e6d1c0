use crate::algebra::{DenseStorageMatrix, FloatT};
use std::fmt::Debug;

/// Dimension of a square factorization, either fixed at compile time
/// ([`Const`]) or supplied at construction ([`Dyn`]).
///
/// The dimension only selects a storage strategy: inline arrays for
/// `Const<N>` and heap vectors for `Dyn`.  Every algorithm in the crate
/// is written against slices of the storage and never branches on which
/// of the two was chosen.
pub trait Dimension: Copy + Debug + Send + Sync + 'static {
    /// Storage for an `N×N` column-major matrix
    type MatStorage<T: FloatT>: AsRef<[T]> + AsMut<[T]> + Clone + Debug + Send + Sync;
    /// Storage for a length `N` vector
    type VecStorage<T: FloatT>: AsRef<[T]> + AsMut<[T]> + Clone + Debug + Send + Sync;

    /// the dimension `N`
    fn value(&self) -> usize;

    fn zeros_storage<T: FloatT>(&self) -> Self::MatStorage<T>;

    fn zeros_vector<T: FloatT>(&self) -> Self::VecStorage<T>;

    /// An `N×N` matrix of zeros with storage chosen by `Self`
    fn zeros_matrix<T: FloatT>(&self) -> SquareMatrix<Self, T> {
        let n = self.value();
        DenseStorageMatrix {
            size: (n, n),
            data: self.zeros_storage(),
            phantom: std::marker::PhantomData,
        }
    }

    /// A length `N` vector initialized from a slice.
    ///
    /// # Panics
    /// Panics if `src.len() != N`.
    fn vector_from_slice<T: FloatT>(&self, src: &[T]) -> Self::VecStorage<T> {
        let mut v = self.zeros_vector();
        v.as_mut().copy_from_slice(src);
        v
    }
}

/// Square matrix with storage chosen by the dimension type `D`
pub type SquareMatrix<D, T> = DenseStorageMatrix<<D as Dimension>::MatStorage<T>, T>;

/// Vector with storage chosen by the dimension type `D`
pub type DimVector<D, T> = <D as Dimension>::VecStorage<T>;

// ---------------------------------------------------------
// compile time dimensions
// ---------------------------------------------------------

/// Dimension known at compile time.  Storage is inline, with
/// no heap allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

/// Inline `N×N` storage, column major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InlineStorage<T, const N: usize>(pub [[T; N]; N]);

impl<T, const N: usize> AsRef<[T]> for InlineStorage<T, N> {
    fn as_ref(&self) -> &[T] {
        self.0.as_flattened()
    }
}

impl<T, const N: usize> AsMut<[T]> for InlineStorage<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }
}

impl<const N: usize> Dimension for Const<N> {
    type MatStorage<T: FloatT> = InlineStorage<T, N>;
    type VecStorage<T: FloatT> = [T; N];

    #[inline]
    fn value(&self) -> usize {
        N
    }

    fn zeros_storage<T: FloatT>(&self) -> InlineStorage<T, N> {
        InlineStorage([[T::zero(); N]; N])
    }

    fn zeros_vector<T: FloatT>(&self) -> [T; N] {
        [T::zero(); N]
    }
}

// ---------------------------------------------------------
// run time dimensions
// ---------------------------------------------------------

/// Dimension supplied at run time.  Storage is heap allocated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dyn(pub usize);

impl Dimension for Dyn {
    type MatStorage<T: FloatT> = Vec<T>;
    type VecStorage<T: FloatT> = Vec<T>;

    #[inline]
    fn value(&self) -> usize {
        self.0
    }

    fn zeros_storage<T: FloatT>(&self) -> Vec<T> {
        vec![T::zero(); self.0 * self.0]
    }

    fn zeros_vector<T: FloatT>(&self) -> Vec<T> {
        vec![T::zero(); self.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{DenseMatrix, ShapedMatrix};

    #[test]
    fn test_const_storage_layout() {
        let mut A = Const::<3>.zeros_matrix::<f64>();
        assert_eq!(A.size(), (3, 3));
        assert_eq!(A.data().len(), 9);

        // column major: (1,2) lands in column 2
        A[(1, 2)] = 5.0;
        assert_eq!(A.data.0[2][1], 5.0);
        assert_eq!(A.data()[A.index_linear((1, 2))], 5.0);
    }

    #[test]
    fn test_dyn_storage() {
        let A = Dyn(4).zeros_matrix::<f32>();
        assert_eq!(A.size(), (4, 4));
        assert_eq!(A.data().len(), 16);

        let v = Dyn(2).vector_from_slice(&[1.0, 2.0]);
        assert_eq!(v, vec![1.0, 2.0]);
    }
}
