extern crate ndarray;

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use ndarray_stats::DeviationExt;

use crate::estimators::error::{KnnError, Result};
use crate::Float;

#[cfg(test)]
mod tests;

/// Distance measure used to compare feature vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMeasure {
    /// L2 distance
    #[default]
    Euclidean,
    /// L1 distance
    Manhattan,
    /// One minus the cosine similarity
    Cosine,
}

impl DistanceMeasure {
    /// This method computes the matrix of distances between the rows of `X`
    /// (shape `(M, K)`) and the rows of `Y` (shape `(N, K)`) under the selected
    /// measure. The output has shape `(M, N)`.
    pub fn pairwise<F: Float>(&self, X: ArrayView2<F>, Y: ArrayView2<F>) -> Result<Array2<F>> {
        match self {
            DistanceMeasure::Euclidean => euclidean_distances(X, Y),
            DistanceMeasure::Manhattan => manhattan_distances(X, Y),
            DistanceMeasure::Cosine => cosine_distances(X, Y),
        }
    }
}

impl FromStr for DistanceMeasure {
    type Err = KnnError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "euclidean" => Ok(DistanceMeasure::Euclidean),
            "manhattan" => Ok(DistanceMeasure::Manhattan),
            "cosine" => Ok(DistanceMeasure::Cosine),
            _ => Err(KnnError::UnknownDistanceMeasure(s.to_string())),
        }
    }
}

impl fmt::Display for DistanceMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DistanceMeasure::Euclidean => "euclidean",
            DistanceMeasure::Manhattan => "manhattan",
            DistanceMeasure::Cosine => "cosine",
        };
        f.write_str(name)
    }
}

/// Both inputs must be non-empty and share their number of columns.
fn check_shapes<F>(X: &ArrayView2<F>, Y: &ArrayView2<F>) -> Result<()> {
    if X.ncols() != Y.ncols() {
        return Err(KnnError::ShapeMismatch {
            expected: Y.ncols(),
            found: X.ncols(),
        });
    }
    if X.is_empty() || Y.is_empty() {
        return Err(KnnError::EmptyInput);
    }
    Ok(())
}

/// Fills an `(M, N)` matrix by applying `distance` to every pair of rows.
fn pairwise_with<F, D>(X: ArrayView2<F>, Y: ArrayView2<F>, mut distance: D) -> Result<Array2<F>>
where
    F: Float,
    D: FnMut(ArrayView1<F>, ArrayView1<F>) -> Result<F>,
{
    check_shapes(&X, &Y)?;
    let mut dists = Array2::<F>::zeros((X.nrows(), Y.nrows()));
    for (i, xi) in X.rows().into_iter().enumerate() {
        for (j, yj) in Y.rows().into_iter().enumerate() {
            dists[[i, j]] = distance(xi.view(), yj)?;
        }
    }
    Ok(dists)
}

/// Computes the pairwise Euclidean distance between the rows of `X` and `Y`.
pub fn euclidean_distances<F: Float>(X: ArrayView2<F>, Y: ArrayView2<F>) -> Result<Array2<F>> {
    pairwise_with(X, Y, |x, y| Ok(x.sq_l2_dist(&y)?.sqrt()))
}

/// Computes the pairwise Manhattan distance between the rows of `X` and `Y`.
pub fn manhattan_distances<F: Float>(X: ArrayView2<F>, Y: ArrayView2<F>) -> Result<Array2<F>> {
    pairwise_with(X, Y, |x, y| Ok(x.l1_dist(&y)?))
}

/// Computes the pairwise cosine distance between the rows of `X` and `Y`.
///
/// A row with a null norm makes the denominator vanish: the corresponding
/// distances are NaN (or infinite) and are returned as such.
pub fn cosine_distances<F: Float>(X: ArrayView2<F>, Y: ArrayView2<F>) -> Result<Array2<F>> {
    check_shapes(&X, &Y)?;
    let norms_X = X.map_axis(Axis(1), |xi| xi.dot(&xi).sqrt());
    let norms_Y = Y.map_axis(Axis(1), |yj| yj.dot(&yj).sqrt());
    let norms = &norms_X.insert_axis(Axis(1)) * &norms_Y.insert_axis(Axis(0));
    let similarities = X.dot(&Y.t()) / norms;
    Ok(similarities.mapv(|s| F::one() - s))
}
