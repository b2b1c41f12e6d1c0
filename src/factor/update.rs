#![allow(non_snake_case)]
use super::kernels::*;
use super::*;

impl<D, T> RankRevealingEngine<D, T>
where
    D: Dimension,
    T: FloatT,
{
    /// Rank-one update of the factors from `A` to `A + v·vᵀ`, in `O(n²)`.
    ///
    /// `D` stays positive wherever it was positive.  Zero diagonal entries
    /// left by a truncated factorization are outside the contract of the
    /// update.  The rank is recounted afterwards with the same test as
    /// [`compute`](Self::compute), i.e. as the number of leading entries of
    /// `D` above the pivot tolerance.
    ///
    /// # Panics
    /// Panics if `v.len() != self.dim()`.
    pub fn update(&mut self, v: &[T]) {
        let n = self.dim.value();
        assert_eq!(v.len(), n);
        if n == 0 {
            return;
        }

        let mut p = self.dim.vector_from_slice(v);
        let p = p.as_mut();
        forward_substitute_unit(&self.L, p);

        let L = &mut self.L;
        let invdiag = self.invdiag.as_mut();

        // diagonal and cache, carrying alpha down the sweep.
        // F[i] = alpha_i / d_i(new) scales the sub-diagonal corrections.
        let mut F = self.dim.zeros_vector::<T>();
        let F = F.as_mut();
        let mut alpha = T::one();
        for i in 0..(n - 1) {
            let d_old = L[(i, i)];
            L[(i, i)] += alpha * p[i] * p[i];
            invdiag[i] = T::recip(L[(i, i)]);
            F[i] = alpha * invdiag[i];
            alpha = d_old * F[i];
        }
        L[(n - 1, n - 1)] += alpha * p[n - 1] * p[n - 1];
        invdiag[n - 1] = T::recip(L[(n - 1, n - 1)]);

        // sub-diagonal entries
        for i in 1..n {
            let mut sigma = p[i];
            for j in (0..i).rev() {
                let old = L[(i, j)];
                L[(i, j)] = old + sigma * p[j] * F[j];
                sigma += old * p[j];
            }
        }

        self.rank = (0..n)
            .position(|i| !(self.L[(i, i)] > self.pivot_tolerance))
            .unwrap_or(n);

        log::trace!(target: "symfact", "rank one update: rank {}", self.rank);
    }

    /// Applies [`update`](Self::update) once for each column of `V`, in
    /// order, i.e. updates to `A + V·Vᵀ`.
    ///
    /// # Panics
    /// Panics if `V` does not have `dim` rows.
    pub fn update_matrix<M>(&mut self, V: &M)
    where
        M: DenseMatrix<T>,
    {
        let n = self.dim.value();
        assert_eq!(V.nrows(), n);

        let mut v = self.dim.zeros_vector::<T>();
        for c in 0..V.ncols() {
            let v = v.as_mut();
            for (r, vr) in v.iter_mut().enumerate() {
                *vr = V[(r, c)];
            }
            self.update(v);
        }
    }
}
