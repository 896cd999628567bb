use super::error::{KnnError, Result};
use super::param_guard::ParamGuard;
use crate::aggregators::Aggregator;
use crate::distances::DistanceMeasure;
use crate::Float;

/// A verified hyperparameter set ready for the fitting of a K-nearest-neighbor
/// model
#[derive(Debug, Clone, PartialEq)]
pub struct KNearestNeighborValidParams {
    n_neighbors: usize,
    distance_measure: DistanceMeasure,
    aggregator: Aggregator,
}

impl KNearestNeighborValidParams {
    pub fn n_neighbors(&self) -> usize {
        self.n_neighbors
    }

    pub fn distance_measure(&self) -> DistanceMeasure {
        self.distance_measure
    }

    pub fn aggregator(&self) -> Aggregator {
        self.aggregator
    }
}

/// A hyper-parameter set during construction
///
/// The label of a query point is the aggregation of the labels of its
/// `n_neighbors` closest reference points, closeness being measured with
/// `distance_measure`.
#[derive(Debug, Clone, PartialEq)]
pub struct KNearestNeighborParams(KNearestNeighborValidParams);

impl Default for KNearestNeighborParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a K-nearest-neighbor model
impl KNearestNeighborParams {
    /// Create default K-nearest-neighbor hyper parameters
    pub fn new() -> KNearestNeighborParams {
        Self(KNearestNeighborValidParams {
            n_neighbors: 5,
            distance_measure: DistanceMeasure::Euclidean,
            aggregator: Aggregator::Mode,
        })
    }

    /// Set the number of neighbors whose labels are aggregated.
    ///
    /// Defaults to `5` if not set.
    pub fn n_neighbors(mut self, n_neighbors: usize) -> Self {
        self.0.n_neighbors = n_neighbors;
        self
    }

    /// Set the measure used to compare feature vectors.
    ///
    /// Defaults to [`DistanceMeasure::Euclidean`] if not set.
    pub fn distance_measure(mut self, distance_measure: DistanceMeasure) -> Self {
        self.0.distance_measure = distance_measure;
        self
    }

    /// Set how the labels of the neighbors are reduced to a single label.
    ///
    /// Defaults to [`Aggregator::Mode`] if not set.
    pub fn aggregator(mut self, aggregator: Aggregator) -> Self {
        self.0.aggregator = aggregator;
        self
    }
}

impl ParamGuard for KNearestNeighborParams {
    type Checked = KNearestNeighborValidParams;
    type Error = KnnError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.n_neighbors == 0 {
            Err(KnnError::InvalidNeighbors(self.0.n_neighbors))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyperparameter set ready for collaborative-filtering imputation
#[derive(Debug, Clone, PartialEq)]
pub struct CollaborativeFilteringValidParams<F> {
    knn: KNearestNeighborValidParams,
    missing_value: F,
}

impl<F: Float> CollaborativeFilteringValidParams<F> {
    /// Hyperparameters of the model fitted for every imputed column.
    pub fn knn(&self) -> &KNearestNeighborValidParams {
        &self.knn
    }

    pub fn missing_value(&self) -> F {
        self.missing_value
    }
}

/// A hyper-parameter set during construction
///
/// Column by column, the entries equal to `missing_value` are predicted by a
/// K-nearest-neighbor model fitted on the rows where the column is observed,
/// the other columns being the features.
#[derive(Debug, Clone, PartialEq)]
pub struct CollaborativeFilteringParams<F>(CollaborativeFilteringValidParams<F>);

impl<F: Float> Default for CollaborativeFilteringParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure a collaborative-filtering imputer
impl<F: Float> CollaborativeFilteringParams<F> {
    /// Create default collaborative-filtering hyper parameters
    pub fn new() -> CollaborativeFilteringParams<F> {
        Self(CollaborativeFilteringValidParams {
            knn: KNearestNeighborParams::new().0,
            missing_value: F::zero(),
        })
    }

    /// Set the number of neighbors used to predict a missing entry.
    ///
    /// Defaults to `5` if not set.
    pub fn n_neighbors(mut self, n_neighbors: usize) -> Self {
        self.0.knn.n_neighbors = n_neighbors;
        self
    }

    /// Defaults to [`DistanceMeasure::Euclidean`] if not set.
    pub fn distance_measure(mut self, distance_measure: DistanceMeasure) -> Self {
        self.0.knn.distance_measure = distance_measure;
        self
    }

    /// Defaults to [`Aggregator::Mode`] if not set.
    pub fn aggregator(mut self, aggregator: Aggregator) -> Self {
        self.0.knn.aggregator = aggregator;
        self
    }

    /// Set the value marking an entry as missing.
    ///
    /// Defaults to `0` if not set.
    pub fn missing_value(mut self, missing_value: F) -> Self {
        self.0.missing_value = missing_value;
        self
    }
}

impl<F: Float> ParamGuard for CollaborativeFilteringParams<F> {
    type Checked = CollaborativeFilteringValidParams<F>;
    type Error = KnnError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.knn.n_neighbors == 0 {
            Err(KnnError::InvalidNeighbors(self.0.knn.n_neighbors))
        } else if self.0.missing_value.is_nan() {
            Err(KnnError::InvalidMissingValue(
                self.0.missing_value.to_f32().unwrap_or(f32::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
