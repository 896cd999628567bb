extern crate ndarray;

use ndarray::{array, Array1};

use crate::datasets::*;
use crate::KnnError;

#[test]
fn test_single_dimension_targets() {
    let y = Array1::from_vec(vec![1., 2., 3.]);
    assert_eq!(y.n_samples(), 3);
    assert_eq!(y.n_dimensions(), 1);
    assert_eq!(y.as_multi_dimensions(), array![[1.], [2.], [3.]]);
}

#[test]
fn test_dataset_from_tuple() {
    let x = array![[1., 2.], [3., 4.], [5., 6.]];
    let y = array![[0., 1.], [1., 0.], [1., 1.]];
    let dataset = DatasetBase::from((x.view(), y.view()));
    assert_eq!(dataset.n_samples(), 3);
    assert_eq!(dataset.n_features(), 2);
    assert_eq!(dataset.targets().n_dimensions(), 2);
    assert!(dataset.check_alignment().is_ok());
}

#[test]
fn test_misaligned_dataset() {
    let x = array![[1., 2.], [3., 4.], [5., 6.]];
    let y = array![1., 0.];
    let dataset = DatasetBase::new(x, y);
    match dataset.check_alignment() {
        Err(KnnError::ShapeMismatch { expected, found }) => {
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        _ => panic!("Should return a shape error but didn't"),
    }
}
