extern crate knnimpute;

use knnimpute::{
    collaborative_filtering, helpers::test_helpers::generate_ratings, Aggregator,
    DistanceMeasure,
};

fn main() {
    env_logger::init();

    let ratings = generate_ratings(12, 5, 0.25, 42);
    println!("#### Ratings with missing entries:\n{}", ratings);

    for aggregator in [Aggregator::Mode, Aggregator::Mean, Aggregator::Median] {
        let mut imputed = ratings.clone();
        collaborative_filtering(&mut imputed, 3, DistanceMeasure::Euclidean, aggregator).unwrap();
        println!("#### Imputed with {}:\n{}", aggregator, imputed);
    }
}
