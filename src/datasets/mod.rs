extern crate ndarray;

use ndarray::ArrayView2;

#[cfg(test)]
mod tests;

mod impl_datasets;
mod impl_design_matrix;
mod impl_targets;

/// A reference dataset: a design matrix of features and row-aligned targets.
#[derive(Debug, Clone)]
pub struct DatasetBase<DM, T>
where
    DM: DesignMatrix,
{
    pub design_matrix: DM,
    pub targets: T,
}

pub trait DesignMatrix: Sized {
    fn n_samples(&self) -> usize;
    fn n_features(&self) -> usize;
}

/// Targets can be multidimensional. A 1-D target is viewed as a single
/// column matrix.
pub trait Targets: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn n_dimensions(&self) -> usize;
    fn as_multi_dimensions(&self) -> ArrayView2<Self::Elem>;
}
