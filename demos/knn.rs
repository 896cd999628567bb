extern crate knnimpute;

use knnimpute::{
    datasets::DatasetBase,
    estimators::{hyperparams::KNearestNeighborParams, knn::KNearestNeighbor, traits::Fit},
    helpers::test_helpers::assert_array2d_all_close,
    Aggregator, DistanceMeasure,
};
use ndarray::array;

fn main() {
    let x = array![[0., 0.], [1., 0.], [0., 1.], [10., 10.], [11., 10.]];
    let y = array![[1., 2., 3.], [2., 3., 4.], [3., 4., 5.], [7., 7., 7.], [9., 9., 9.]];
    let query = array![[0.2, 0.2], [10.5, 10.]];

    // Stateful API
    let mut model = KNearestNeighbor::try_new(3, DistanceMeasure::Euclidean, Aggregator::Mean)
        .unwrap();
    model.fit(x.view(), &y).unwrap();
    let labels = model.predict(&query, false).unwrap();
    println!("#### Mean of the 3 nearest labels:\n{}", labels);

    // Estimator API
    let dataset = DatasetBase::from((x.view(), &y));
    let estimator = KNearestNeighborParams::new()
        .n_neighbors(3)
        .aggregator(Aggregator::Mean)
        .fit(&dataset)
        .unwrap();

    assert_array2d_all_close(
        labels.view(),
        estimator.predict(&query, false).unwrap().view(),
        1e-12,
    );

    // Every reference point is its own nearest neighbor unless skipped
    let own = model.predict(&x, false).unwrap();
    let others = model.predict(&x, true).unwrap();
    println!("#### Including the self-match:\n{}", own);
    println!("#### Skipping the self-match:\n{}", others);
}
