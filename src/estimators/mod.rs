
pub mod error;
pub mod hyperparams;
pub mod knn;
pub mod param_guard;
pub mod traits;
