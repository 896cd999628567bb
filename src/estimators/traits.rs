use crate::datasets::{DatasetBase, DesignMatrix, Targets};
use ndarray::Array2;

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a dataset (a combination
/// of design matrix and targets). For a K-nearest-neighbor model, fitting binds
/// the dataset as the reference set searched at prediction time.
pub trait Fit<DM: DesignMatrix, T: Targets, E: std::error::Error> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<DM, T>) -> Result<Self::Object, E>;
}

/// Impute trait
///
/// Replaces the missing entries of a matrix in place and hands the matrix
/// back.
pub trait Impute<F, E: std::error::Error> {
    fn impute<'m>(&self, X: &'m mut Array2<F>) -> Result<&'m mut Array2<F>, E>;
}
