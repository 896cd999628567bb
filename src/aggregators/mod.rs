extern crate ndarray;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use crate::estimators::error::{KnnError, Result};
use crate::helpers::helpers::median;
use crate::Float;


/// Reduces the labels of the nearest neighbors to a single label. The
/// reduction is applied to each output dimension independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregator {
    /// Most frequent integer label, smallest label on ties
    #[default]
    Mode,
    Mean,
    Median,
}


impl Aggregator {
    /// This method aggregates a `(n_neighbors, n_dimensions)` matrix of
    /// labels column by column into a label of length `n_dimensions`.
    pub fn aggregate<F: Float>(&self, labels: ArrayView2<F>) -> Result<Array1<F>> {
        if labels.nrows() == 0 {
            return Err(KnnError::EmptyInput);
        }
        match self {
            Aggregator::Mean => labels.mean_axis(Axis(0)).ok_or(KnnError::EmptyInput),
            Aggregator::Median => Ok(labels.map_axis(Axis(0), |column| median(&column))),
            Aggregator::Mode => labels
                .columns()
                .into_iter()
                .map(mode::<F>)
                .collect::<Result<Vec<F>>>()
                .map(Array1::from_vec),
        }
    }
}

/// Labels are truncated toward zero before counting.
fn mode<F: Float>(column: ArrayView1<F>) -> Result<F> {
    let mut counts = BTreeMap::<i64, usize>::new();
    for value in column.iter() {
        let key = value
            .to_i64()
            .ok_or_else(|| KnnError::InvalidModeTarget(value.to_f64().unwrap_or(f64::NAN)))?;
        *counts.entry(key).or_insert(0) += 1;
    }

    // Keys are visited in increasing order, only a strictly larger count
    // replaces the current best.
    let mut best: Option<(i64, usize)> = None;
    for (&key, &count) in counts.iter() {
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((key, count)),
        }
    }

    let (key, _) = best.ok_or(KnnError::EmptyInput)?;
    F::from_i64(key).ok_or(KnnError::InvalidModeTarget(key as f64))
}

impl FromStr for Aggregator {
    type Err = KnnError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mode" => Ok(Aggregator::Mode),
            "mean" => Ok(Aggregator::Mean),
            "median" => Ok(Aggregator::Median),
            _ => Err(KnnError::UnknownAggregator(s.to_string())),
        }
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Aggregator::Mode => "mode",
            Aggregator::Mean => "mean",
            Aggregator::Median => "median",
        };
        f.write_str(name)
    }
}
