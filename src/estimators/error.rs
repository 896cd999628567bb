use ndarray_stats::errors::MultiInputError;
use thiserror::Error;

/// Simplified `Result` using [`KnnError`](crate::KnnError) as error type
pub type Result<T> = std::result::Result<T, KnnError>;

/// Error variants from hyperparameter construction, distance computation,
/// model fitting, prediction and imputation
#[derive(Debug, Clone, Error)]
pub enum KnnError {
    #[error("invalid number of neighbors {0}")]
    InvalidNeighbors(usize),
    #[error("invalid missing value marker {0}")]
    InvalidMissingValue(f32),
    #[error("unknown distance measure {0:?}, expected one of euclidean, manhattan, cosine")]
    UnknownDistanceMeasure(String),
    #[error("unknown aggregator {0:?}, expected one of mode, mean, median")]
    UnknownAggregator(String),
    /// `predict` was called before `fit`
    #[error("the model has not been fitted")]
    NotFitted,
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error("empty input")]
    EmptyInput,
    /// The neighbor window selected from the reference set is empty
    #[error("not enough reference samples: need {needed}, got {found}")]
    NotEnoughSamples { needed: usize, found: usize },
    /// Imputation needs at least one feature column besides the imputed one
    #[error("not enough features to impute from: {0}")]
    NotEnoughFeatures(usize),
    /// The mode aggregator could not cast a neighbor label to an integer
    #[error("label {0} cannot be cast to an integer")]
    InvalidModeTarget(f64),
    #[error(transparent)]
    Deviation(#[from] MultiInputError),
}
