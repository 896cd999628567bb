
/// This module contains helper functions shared by the distance kernels and
/// the neighbor search.
pub mod helpers {
    use crate::Float;
    use ndarray::{ArrayBase, Data, Ix1};
    use std::cmp::Ordering;

    /// This is a helper method that sorts the indices of an array based on some
    /// `compare` closure. The sort is stable: indices of elements comparing
    /// equal keep their input order, which is the tie-break used by the
    /// neighbor search.
    /// Reference: `https://github.com/rust-ndarray/ndarray/issues/1145`
    pub fn argsort_by<S, F>(arr: &ArrayBase<S, Ix1>, mut compare: F) -> Vec<usize>
    where
        S: Data,
        F: FnMut(&S::Elem, &S::Elem) -> Ordering,
    {
        let mut indices: Vec<usize> = (0..arr.len()).collect();
        indices.sort_by(move |&i, &j| compare(&arr[i], &arr[j]));
        indices
    }

    /// Total order on distances where NaN compares greater than any number,
    /// so undefined distances end up last.
    pub fn compare_distances<F: Float>(a: &F, b: &F) -> Ordering {
        match a.partial_cmp(b) {
            Some(ordering) => ordering,
            None => a.is_nan().cmp(&b.is_nan()),
        }
    }

    /// Median of a set of values. The mean of the two middle values is
    /// returned for an even count, and NaN as soon as one value is NaN
    /// (`ndarray_stats` quantiles would skip NaN instead).
    pub fn median<F: Float, S: Data<Elem = F>>(values: &ArrayBase<S, Ix1>) -> F {
        if values.is_empty() || values.iter().any(|v| v.is_nan()) {
            return F::nan();
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(compare_distances::<F>);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / F::cast(2.)
        } else {
            sorted[mid]
        }
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::{Array2, ArrayView2};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rand_distr::{Distribution, Normal};

    pub fn assert_array2d_all_close<F>(x: ArrayView2<F>, y: ArrayView2<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.shape()[0], y.shape()[0]);
        assert_eq!(x.shape()[1], y.shape()[1]);
        for i in 0..x.shape()[0] {
            for j in 0..x.shape()[1] {
                if x[[i, j]].abs_diff_ne(&y[[i, j]], delta) {
                    panic!(
                        "x: {}, y: {} ; with precision level {}",
                        x[[i, j]],
                        y[[i, j]],
                        delta
                    );
                }
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Standard normal matrix of shape `(n_samples, n_features)`.
    pub fn generate_random_data(n_samples: usize, n_features: usize, seed: u64) -> Array2<f64> {
        let data_x = fill_random_vector(n_samples * n_features, seed);
        Array2::from_shape_vec((n_samples, n_features), data_x).unwrap()
    }

    /// User-item rating matrix with integer ratings in `1..=5`, where a
    /// `missing_rate` fraction of the entries is zeroed out.
    pub fn generate_ratings(
        n_users: usize,
        n_items: usize,
        missing_rate: f64,
        seed: u64,
    ) -> Array2<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        Array2::from_shape_fn((n_users, n_items), |_| {
            if r.gen_bool(missing_rate) {
                0.
            } else {
                r.gen_range(1..=5) as f64
            }
        })
    }
}
