extern crate ndarray;

use log::trace;
use ndarray::{Array2, ArrayBase, ArrayView2, Axis, Data, Ix2};

use super::error::{KnnError, Result};
use super::hyperparams::{KNearestNeighborParams, KNearestNeighborValidParams};
use super::param_guard::ParamGuard;
use super::traits::Fit;
use crate::aggregators::Aggregator;
use crate::datasets::{DatasetBase, DesignMatrix, Targets};
use crate::distances::DistanceMeasure;
use crate::helpers::helpers::{argsort_by, compare_distances};
use crate::Float;

/// The K-nearest-neighbor estimator
///
/// At prediction time, the label of a query point is obtained by aggregating
/// the labels of the closest points of the reference set bound by `fit`.
/// The reference features and targets are borrowed, never copied.
#[derive(Debug, Clone)]
pub struct KNearestNeighbor<'a, F> {
    params: KNearestNeighborValidParams,
    reference: Option<DatasetBase<ArrayView2<'a, F>, ArrayView2<'a, F>>>,
}

impl<'a, F: Float> KNearestNeighbor<'a, F> {
    /// This method instantiates an unfitted estimator from a verified set of
    /// hyperparameters.
    pub fn new(params: KNearestNeighborValidParams) -> Self {
        KNearestNeighbor {
            params,
            reference: None,
        }
    }

    /// This method checks the hyperparameters and instantiates an unfitted
    /// estimator.
    pub fn try_new(
        n_neighbors: usize,
        distance_measure: DistanceMeasure,
        aggregator: Aggregator,
    ) -> Result<Self> {
        let params = KNearestNeighborParams::new()
            .n_neighbors(n_neighbors)
            .distance_measure(distance_measure)
            .aggregator(aggregator)
            .check()?;
        Ok(Self::new(params))
    }

    /// This method is a getter for the hyperparameters.
    pub fn hyperparams(&self) -> &KNearestNeighborValidParams {
        &self.params
    }

    pub fn is_fitted(&self) -> bool {
        self.reference.is_some()
    }

    /// This method binds the reference features, of shape
    /// `(n_samples, n_features)`, and targets, of shape
    /// `(n_samples, n_dimensions)` or `(n_samples,)`. A 1-D target is bound
    /// as a single dimension. Any previously bound reference set is dropped.
    pub fn fit<T: Targets<Elem = F>>(
        &mut self,
        features: ArrayView2<'a, F>,
        targets: &'a T,
    ) -> Result<&mut Self> {
        let dataset = DatasetBase::new(features, targets.as_multi_dimensions());
        dataset.check_alignment()?;
        self.reference = Some(dataset);
        Ok(self)
    }

    /// This method predicts one label per row of `features`.
    ///
    /// The reference rows are ranked by increasing distance to the query row,
    /// equal distances keeping the reference order. The labels of the first
    /// `n_neighbors` ranked rows are aggregated dimension by dimension. With
    /// `ignore_first`, the closest reference row is skipped and the window is
    /// shifted by one, which discards the self-match when the query points
    /// belong to the reference set.
    pub fn predict<S: Data<Elem = F>>(
        &self,
        features: &ArrayBase<S, Ix2>,
        ignore_first: bool,
    ) -> Result<Array2<F>> {
        let reference = self.reference.as_ref().ok_or(KnnError::NotFitted)?;
        let reference_features = reference.design_matrix();
        let targets = reference.targets();

        if features.n_features() != reference_features.n_features() {
            return Err(KnnError::ShapeMismatch {
                expected: reference_features.n_features(),
                found: features.n_features(),
            });
        }

        let n_reference = DesignMatrix::n_samples(reference_features);
        let start = usize::from(ignore_first);
        let end = (start + self.params.n_neighbors()).min(n_reference);
        if start >= end {
            return Err(KnnError::NotEnoughSamples {
                needed: start + 1,
                found: n_reference,
            });
        }

        trace!(
            "predicting {} points from {} reference points ({}, {}, neighbors {}..{})",
            DesignMatrix::n_samples(features),
            n_reference,
            self.params.distance_measure(),
            self.params.aggregator(),
            start,
            end
        );

        let distances = self
            .params
            .distance_measure()
            .pairwise(features.view(), reference_features.view())?;

        let mut labels = Array2::<F>::zeros((DesignMatrix::n_samples(features), targets.ncols()));
        for (row, mut label) in distances.rows().into_iter().zip(labels.rows_mut()) {
            let ranking = argsort_by(&row, compare_distances::<F>);
            let neighbors = targets.select(Axis(0), &ranking[start..end]);
            label.assign(&self.params.aggregator().aggregate(neighbors.view())?);
        }
        Ok(labels)
    }
}

/// This implements the fitting procedure of the estimator API: the checked
/// hyperparameters and a borrowed dataset yield a fitted [`KNearestNeighbor`].
impl<'a, F: Float, T: Targets<Elem = F>> Fit<ArrayView2<'a, F>, &'a T, KnnError>
    for KNearestNeighborValidParams
{
    type Object = KNearestNeighbor<'a, F>;

    fn fit(&self, dataset: &DatasetBase<ArrayView2<'a, F>, &'a T>) -> Result<Self::Object> {
        let mut model = KNearestNeighbor::new(self.clone());
        model.fit(dataset.design_matrix.clone(), dataset.targets)?;
        Ok(model)
    }
}
