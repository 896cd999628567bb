extern crate ndarray;

use log::{debug, warn};
use ndarray::{Array2, Axis};

use crate::aggregators::Aggregator;
use crate::distances::DistanceMeasure;
use crate::estimators::error::{KnnError, Result};
use crate::estimators::hyperparams::{
    CollaborativeFilteringParams, CollaborativeFilteringValidParams,
};
use crate::estimators::knn::KNearestNeighbor;
use crate::estimators::param_guard::ParamGuard;
use crate::estimators::traits::Impute;
use crate::Float;


/// Collaborative-filtering imputer
///
/// Missing entries are filled one column at a time, in column order. The
/// model of a column is fitted on the matrix as updated by the previous
/// columns.
pub struct CollaborativeFiltering;

impl CollaborativeFiltering {
    /// This method instantiates collaborative-filtering hyperparameters with
    /// default values.
    pub fn params<F: Float>() -> CollaborativeFilteringParams<F> {
        CollaborativeFilteringParams::new()
    }
}

/// This function replaces every zero of `input` by the label predicted by a
/// K-nearest-neighbor model, fitted for each column on the rows where that
/// column is non-zero. The matrix is modified in place and returned.
pub fn collaborative_filtering<F: Float>(
    input: &mut Array2<F>,
    n_neighbors: usize,
    distance_measure: DistanceMeasure,
    aggregator: Aggregator,
) -> Result<&mut Array2<F>> {
    CollaborativeFiltering::params::<F>()
        .n_neighbors(n_neighbors)
        .distance_measure(distance_measure)
        .aggregator(aggregator)
        .check()?
        .impute(input)
}

impl<F: Float> Impute<F, KnnError> for CollaborativeFilteringValidParams<F> {
    fn impute<'m>(&self, X: &'m mut Array2<F>) -> Result<&'m mut Array2<F>> {
        let (n_samples, n_features) = X.dim();
        if n_features < 2 {
            return Err(KnnError::NotEnoughFeatures(n_features));
        }

        for j in 0..n_features {
            let (missing, observed): (Vec<usize>, Vec<usize>) =
                (0..n_samples).partition(|&i| X[[i, j]] == self.missing_value());
            if missing.is_empty() {
                continue;
            }
            if observed.is_empty() {
                warn!("column {}: no observed entries, leaving it as is", j);
                continue;
            }
            debug!(
                "column {}: imputing {} entries from {} observed rows",
                j,
                missing.len(),
                observed.len()
            );

            let others: Vec<usize> = (0..n_features).filter(|&k| k != j).collect();
            let features = X.select(Axis(1), &others);
            let train_features = features.select(Axis(0), &observed);
            let train_targets = X.column(j).select(Axis(0), &observed);
            let query = features.select(Axis(0), &missing);

            let mut knn = KNearestNeighbor::new(self.knn().clone());
            knn.fit(train_features.view(), &train_targets)?;
            let labels = knn.predict(&query, false)?;

            for (&i, &label) in missing.iter().zip(labels.column(0)) {
                X[[i, j]] = label;
            }
        }

        Ok(X)
    }
}
