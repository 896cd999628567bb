extern crate ndarray;

use ndarray::{array, Array2};

use crate::distances::*;
use crate::helpers::test_helpers::{assert_array2d_all_close, generate_random_data};

#[test]
fn test_euclidean_distances() {
    let X = array![[0., 0.], [1., 1.]];
    let Y = array![[3., 4.], [1., 1.], [0., 1.]];
    let dists = euclidean_distances(X.view(), Y.view()).unwrap();
    let res = array![
        [5., 2f64.sqrt(), 1.],
        [13f64.sqrt(), 0., 1.]
    ];
    assert_array2d_all_close(dists.view(), res.view(), 1e-12);
}

#[test]
fn test_manhattan_distances() {
    let X = array![[0., 0.], [1., -1.]];
    let Y = array![[3., 4.], [1., 1.]];
    let dists = manhattan_distances(X.view(), Y.view()).unwrap();
    let res = array![[7., 2.], [7., 2.]];
    assert_eq!(dists, res);
}

#[test]
fn test_cosine_distances() {
    let X = array![[1., 0.], [1., 1.]];
    let Y = array![[0., 2.], [3., 0.], [-1., -1.]];
    let dists = cosine_distances(X.view(), Y.view()).unwrap();
    let res = array![[1., 0., 1. + 0.5f64.sqrt()], [1. - 0.5f64.sqrt(), 1. - 0.5f64.sqrt(), 2.]];
    assert_array2d_all_close(dists.view(), res.view(), 1e-12);
}

#[test]
fn test_cosine_null_norm_is_nan() {
    let X = array![[0f64, 0.]];
    let Y = array![[1., 2.], [0., 0.]];
    let dists = cosine_distances(X.view(), Y.view()).unwrap();
    assert!(dists.iter().all(|d| d.is_nan()));
}

#[test]
fn test_symmetry() {
    let X = generate_random_data(7, 4, 42);
    let Y = generate_random_data(5, 4, 43);
    for measure in [
        DistanceMeasure::Euclidean,
        DistanceMeasure::Manhattan,
        DistanceMeasure::Cosine,
    ] {
        let d_xy = measure.pairwise(X.view(), Y.view()).unwrap();
        let d_yx = measure.pairwise(Y.view(), X.view()).unwrap();
        assert_eq!(d_xy.dim(), (7, 5));
        assert_array2d_all_close(d_xy.view(), d_yx.t(), 1e-12);
    }
}

#[test]
fn test_null_self_distance() {
    let X = generate_random_data(6, 3, 0);
    for measure in [DistanceMeasure::Euclidean, DistanceMeasure::Manhattan] {
        let dists = measure.pairwise(X.view(), X.view()).unwrap();
        for i in 0..6 {
            assert_eq!(dists[[i, i]], 0.);
        }
    }
}

#[test]
fn test_single_feature_euclidean_is_absolute_difference() {
    let X = array![[1.5f64], [-2.]];
    let Y = array![[4.], [-3.25], [1.5]];
    let dists = euclidean_distances(X.view(), Y.view()).unwrap();
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(dists[[i, j]], (X[[i, 0]] - Y[[j, 0]]).abs());
        }
    }
}

#[test]
fn test_f32_distances() {
    let X = array![[0f32, 3.]];
    let Y = array![[4f32, 0.]];
    let dists = euclidean_distances(X.view(), Y.view()).unwrap();
    assert_eq!(dists, array![[5f32]]);
}

#[test]
fn test_shape_mismatch() {
    let X = Array2::<f64>::zeros((2, 3));
    let Y = Array2::<f64>::zeros((2, 2));
    match manhattan_distances(X.view(), Y.view()) {
        Err(KnnError::ShapeMismatch { expected, found }) => {
            assert_eq!(expected, 2);
            assert_eq!(found, 3);
        }
        _ => panic!("Should return a shape error but didn't"),
    }
}

#[test]
fn test_empty_input() {
    let X = Array2::<f64>::zeros((0, 2));
    let Y = Array2::<f64>::zeros((2, 2));
    assert!(matches!(
        euclidean_distances(X.view(), Y.view()),
        Err(KnnError::EmptyInput)
    ));
    let X = Array2::<f64>::zeros((2, 0));
    let Y = Array2::<f64>::zeros((2, 0));
    assert!(matches!(
        cosine_distances(X.view(), Y.view()),
        Err(KnnError::EmptyInput)
    ));
}

#[test]
fn test_parse_distance_measure() {
    assert_eq!(
        "euclidean".parse::<DistanceMeasure>().unwrap(),
        DistanceMeasure::Euclidean
    );
    assert_eq!(
        "manhattan".parse::<DistanceMeasure>().unwrap(),
        DistanceMeasure::Manhattan
    );
    assert_eq!("cosine".parse::<DistanceMeasure>().unwrap(), DistanceMeasure::Cosine);
    assert_eq!(DistanceMeasure::Cosine.to_string(), "cosine");
    match "chebyshev".parse::<DistanceMeasure>() {
        Err(KnnError::UnknownDistanceMeasure(name)) => assert_eq!(name, "chebyshev"),
        _ => panic!("Should return an error but didn't"),
    }
}

#[test]
fn test_default_distance_measure() {
    assert_eq!(DistanceMeasure::default(), DistanceMeasure::Euclidean);
}
