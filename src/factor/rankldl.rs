#![allow(non_snake_case)]
use super::kernels::*;
use super::*;

/// Rank revealing `A = L·D·Lᵀ` factorization with rank-one updates.
///
/// The factor matrix holds unit lower `L` below its diagonal and `D`
/// on the diagonal, with zeros above.  The reciprocals of `D` are cached
/// alongside it.
///
/// Factorization stops at the first pivot `<= pivot_tolerance`.  That
/// pivot, its reciprocal and every later row and column are left at
/// zero, and the number of accepted pivots is reported as the rank.
/// Solves, inverses and transforms on a truncated factorization treat
/// the rejected directions as having zero inverse weight.
#[derive(Debug, Clone)]
pub struct RankRevealingEngine<D, T>
where
    D: Dimension,
    T: FloatT,
{
    pub(super) dim: D,
    pub(super) L: SquareMatrix<D, T>,
    pub(super) invdiag: DimVector<D, T>,
    pub(super) rank: usize,
    pub(super) pivot_tolerance: T,
}

impl<D, T> RankRevealingEngine<D, T>
where
    D: Dimension,
    T: FloatT,
{
    /// an unfactored engine
    pub fn new(dim: D) -> Self {
        Self {
            dim,
            L: dim.zeros_matrix(),
            invdiag: dim.zeros_vector(),
            rank: 0,
            pivot_tolerance: T::zero(),
        }
    }

    /// Pivots `<= tol` are rejected.  The default is zero.
    ///
    /// # Panics
    /// Panics if `tol` is negative or not finite.
    pub fn with_pivot_tolerance(mut self, tol: T) -> Self {
        assert!(tol.is_finite() && tol >= T::zero());
        self.pivot_tolerance = tol;
        self
    }

    /// a new engine holding the factors of `A`
    pub fn with_matrix<M>(dim: D, A: &M) -> Result<Self, DenseFactorizationError>
    where
        M: DenseMatrix<T>,
    {
        let mut engine = Self::new(dim);
        engine.compute(A)?;
        Ok(engine)
    }

    pub fn compute<M>(&mut self, A: &M) -> Result<FactorStatus, DenseFactorizationError>
    where
        M: DenseMatrix<T>,
    {
        let n = self.dim.value();
        check_factor_input(A, n)?;

        let L = &mut self.L;
        let invdiag = self.invdiag.as_mut();
        L.fill(T::zero());
        invdiag.set(T::zero());

        let mut rank = n;

        for col in 0..n {
            let mut pivot = A[(col, col)];
            for k in 0..col {
                let l = L[(col, k)];
                pivot -= l * l * L[(k, k)];
            }

            // NaN pivots are rejected as well
            if !(pivot > self.pivot_tolerance) {
                rank = col;
                log::warn!(
                    target: "symfact",
                    "rank revealing LDL: pivot {} of {} is {}, truncating at rank {}",
                    col,
                    n,
                    pivot,
                    rank
                );
                break;
            }

            let inv_pivot = T::recip(pivot);
            L[(col, col)] = pivot;
            invdiag[col] = inv_pivot;

            for row in (col + 1)..n {
                let mut val = A[(row, col)];
                for k in 0..col {
                    val -= L[(row, k)] * L[(col, k)] * L[(k, k)];
                }
                L[(row, col)] = val * inv_pivot;
            }
        }

        self.rank = rank;
        log::debug!(
            target: "symfact",
            "rank revealing LDL: factored dimension {}, rank {}",
            n,
            rank
        );
        Ok(self.status())
    }

    /// number of accepted pivots
    pub fn get_rank(&self) -> usize {
        self.rank
    }

    /// unit lower `L` below the diagonal with `D` on the diagonal.
    /// The upper triangle is zero.
    pub fn get_L_D(&self) -> &SquareMatrix<D, T> {
        &self.L
    }

    /// cached reciprocals of `D`, zero for rejected pivots
    pub fn invdiag(&self) -> &[T] {
        self.invdiag.as_ref()
    }

    /// `Σ ln D`
    pub fn logdet(&self) -> T {
        let n = self.dim.value();
        (0..n).fold(T::zero(), |ld, i| ld + T::ln(self.L[(i, i)]))
    }

    /// Lower triangular `S = L·√D`, so that `S·Sᵀ = A`.
    ///
    /// Negative diagonal entries give `NaN`.  Check the rank first.
    pub fn get_sqrt(&self) -> SquareMatrix<D, T> {
        let n = self.dim.value();
        let mut S = self.dim.zeros_matrix();
        for i in 0..n {
            let root_d = T::sqrt(self.L[(i, i)]);
            S[(i, i)] = root_d;
            for j in (i + 1)..n {
                S[(j, i)] = self.L[(j, i)] * root_d;
            }
        }
        S
    }

    /// same as [`get_sqrt`](Self::get_sqrt)
    pub fn get_L(&self) -> SquareMatrix<D, T> {
        self.get_sqrt()
    }

    /// Upper triangular `X = S⁻ᵀ`, where `S` is [`get_sqrt`](Self::get_sqrt).
    /// Then `X·Xᵀ = A⁻¹`.
    pub fn get_inv_sqrt(&self) -> SquareMatrix<D, T> {
        let n = self.dim.value();
        let L = &self.L;
        let invdiag = self.invdiag.as_ref();
        let mut X = self.dim.zeros_matrix();

        for j in 0..n {
            // row j of L⁻¹ᵀ, unscaled
            for i in (j + 1)..n {
                let mut sum = L[(i, j)];
                for k in (j + 1)..i {
                    sum += L[(i, k)] * X[(j, k)];
                }
                X[(j, i)] = -sum;
            }
            X[(j, j)] = T::sqrt(invdiag[j]);
            for i in (j + 1)..n {
                X[(j, i)] *= T::sqrt(invdiag[i]);
            }
        }
        X
    }

    /// `vᵀ·A⁻¹·v`, without forming the inverse
    ///
    /// # Panics
    /// Panics if `v.len() != self.dim()`.
    pub fn mahalanobis(&self, v: &[T]) -> T {
        assert_eq!(v.len(), self.dim.value());
        let mut y = self.dim.vector_from_slice(v);
        let y = y.as_mut();
        forward_substitute_unit(&self.L, y);
        dot3(y, y, self.invdiag.as_ref())
    }

    /// `J·A⁻¹·Jᵀ` for a `m×n` matrix `J`, as a new `m×m` matrix
    ///
    /// # Panics
    /// Panics if `J` does not have `dim` columns.
    pub fn transform_inverse<MJ>(&self, J: &MJ) -> Matrix<T>
    where
        MJ: DenseMatrix<T>,
    {
        let m = J.nrows();
        let mut out = Matrix::<T>::zeros((m, m));
        self.transform_inverse_into::<Assign, _, _>(J, &mut out);
        out
    }

    /// Combines `J·A⁻¹·Jᵀ` into `out` entry by entry with the strategy
    /// `C`.  Use [`Accumulate`] to sum several contributions.
    ///
    /// # Panics
    /// Panics if `J` does not have `dim` columns or `out` is not `m×m`.
    pub fn transform_inverse_into<C, MJ, MT>(&self, J: &MJ, out: &mut MT)
    where
        C: Combine<T>,
        MJ: DenseMatrix<T>,
        MT: DenseMatrixMut<T>,
    {
        let n = self.dim.value();
        let m = J.nrows();
        assert_eq!(J.ncols(), n);
        assert_eq!(out.size(), (m, m));

        // columns of Y are L⁻¹·Jᵀ
        let mut Y = Matrix::<T>::zeros((n, m));
        for i in 0..m {
            let y = Y.col_slice_mut(i);
            for (k, yk) in y.iter_mut().enumerate() {
                *yk = J[(i, k)];
            }
            forward_substitute_unit(&self.L, y);
        }

        let invdiag = self.invdiag.as_ref();
        for i in 0..m {
            let yi = Y.col_slice(i);
            C::combine(&mut out[(i, i)], dot3(yi, yi, invdiag));
            for j in (i + 1)..m {
                let x = dot3(yi, Y.col_slice(j), invdiag);
                C::combine(&mut out[(i, j)], x);
                C::combine(&mut out[(j, i)], x);
            }
        }
    }

    /// `A⁻¹*v` as a new vector
    ///
    /// # Panics
    /// Panics if `v.len() != self.dim()`.
    pub fn inverse_times(&self, v: &[T]) -> DimVector<D, T> {
        assert_eq!(v.len(), self.dim.value());
        let mut x = self.dim.vector_from_slice(v);
        self.solve_in_place(x.as_mut());
        x
    }

    /// same as [`inverse_times`](Self::inverse_times)
    pub fn backsub(&self, v: &[T]) -> DimVector<D, T> {
        self.inverse_times(v)
    }

    /// `A⁻¹*B` for an `n×k` matrix `B`, solved column by column
    ///
    /// # Panics
    /// Panics if `B` does not have `dim` rows.
    pub fn inverse_times_matrix<MB>(&self, B: &MB) -> Matrix<T>
    where
        MB: DenseMatrix<T>,
    {
        let n = self.dim.value();
        assert_eq!(B.nrows(), n);
        let mut X = Matrix::from_dense(B);
        for c in 0..X.ncols() {
            self.solve_in_place(X.col_slice_mut(c));
        }
        X
    }

    /// Explicit `A⁻¹`, filling both triangles.  Prefer
    /// [`inverse_times`](Self::inverse_times) or
    /// [`transform_inverse`](Self::transform_inverse) where possible.
    pub fn get_inverse(&self) -> SquareMatrix<D, T> {
        let mut Inv = self.dim.zeros_matrix();
        self.inverse_into(&mut Inv);
        Inv
    }

    fn inverse_into<M: DenseMatrixMut<T>>(&self, Inv: &mut M) {
        let n = self.dim.value();
        let L = &self.L;
        let invdiag = self.invdiag.as_ref();
        let mut t = self.dim.zeros_vector::<T>();
        let t = t.as_mut();

        for col in 0..n {
            // t = L⁻¹ e_col below the diagonal
            for i in (col + 1)..n {
                let mut sum = L[(i, col)];
                for k in (col + 1)..i {
                    sum += L[(i, k)] * t[k];
                }
                t[i] = -sum;
            }

            // back substitute through D⁻¹Lᵀ
            for i in ((col + 1)..n).rev() {
                let mut val = invdiag[i] * t[i];
                for k in (i + 1)..n {
                    val -= L[(k, i)] * Inv[(col, k)];
                }
                Inv[(i, col)] = val;
                Inv[(col, i)] = val;
            }
            let mut val = invdiag[col];
            for k in (col + 1)..n {
                val -= L[(k, col)] * Inv[(col, k)];
            }
            Inv[(col, col)] = val;
        }
    }

    // forward substitution, D⁻¹ and back substitution, in place
    pub(super) fn solve_in_place(&self, x: &mut [T]) {
        forward_substitute_unit(&self.L, x);
        x.hadamard(self.invdiag.as_ref());
        back_substitute_unit_transpose(&self.L, x);
    }
}

impl<D, T> FactorSymmetric<T> for RankRevealingEngine<D, T>
where
    D: Dimension,
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.dim.value()
    }

    fn factor<M: DenseMatrix<T>>(&mut self, A: &M) -> Result<FactorStatus, DenseFactorizationError> {
        self.compute(A)
    }

    fn status(&self) -> FactorStatus {
        FactorStatus::new(self.dim.value(), self.rank)
    }

    fn solve(&self, b: &mut [T]) -> Result<(), DenseFactorizationError> {
        assert_eq!(b.len(), self.dim.value());
        self.solve_in_place(b);
        Ok(())
    }

    fn inverse<M: DenseMatrixMut<T>>(&self, X: &mut M) -> Result<(), DenseFactorizationError> {
        let n = self.dim.value();
        assert_eq!(X.size(), (n, n));
        self.inverse_into(X);
        Ok(())
    }

    /// product of `D`, not square rooted
    fn determinant(&self) -> T {
        let n = self.dim.value();
        (0..n).fold(T::one(), |det, i| det * self.L[(i, i)])
    }
}

/// Classical lower triangular factor `S` with `S·Sᵀ = A`, computed
/// directly from the lower triangle of `A`.
///
/// At the first non-positive pivot the remaining trailing block of `S`
/// is zeroed and the number of accepted pivots is returned.  Returns
/// `n` on success.
///
/// # Panics
/// Panics if `A` or `S` is not square, or if their sizes differ.
pub fn cholesky_sqrt<MA, MS, T>(A: &MA, S: &mut MS) -> usize
where
    MA: DenseMatrix<T>,
    MS: DenseMatrixMut<T>,
    T: FloatT,
{
    assert!(A.is_square());
    assert_eq!(A.size(), S.size());
    let n = A.nrows();

    for i in 0..n {
        let mut a = A[(i, i)];
        for k in 0..i {
            a -= S[(i, k)] * S[(i, k)];
        }
        if !(a > T::zero()) {
            for c in i..n {
                for r in i..n {
                    S[(r, c)] = T::zero();
                }
            }
            log::warn!(target: "symfact", "cholesky_sqrt: pivot {} of {} is {}", i, n, a);
            return i;
        }
        S[(i, i)] = T::sqrt(a);
        let inv_sii = T::recip(S[(i, i)]);
        for j in (i + 1)..n {
            S[(i, j)] = T::zero();
            let mut a = A[(j, i)];
            for k in 0..i {
                a -= S[(i, k)] * S[(j, k)];
            }
            S[(j, i)] = a * inv_sii;
        }
    }
    n
}

#[cfg(test)]
#[path = "rankldl_test.rs"]
mod test;
