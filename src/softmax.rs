//! Row-wise softmax over a matrix of scores, one row per example.
//!
//! Every row is shifted by its maximum before exponentiating. Softmax is invariant under adding a
//! constant to all the scores of a row, so the shift doesn't change the result, but it keeps
//! `exp` from overflowing when scores are large.

use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Returns the maximum of each row of `scores`.
///
/// Rows with no columns yield `f64::NEG_INFINITY`.
pub fn row_max(scores: ArrayView2<f64>) -> Array1<f64> {
    scores.map_axis(Axis(1), |row| {
        row.fold(f64::NEG_INFINITY, |max, &s| max.max(s))
    })
}

/// Computes the log-probabilities of each row of `scores`.
///
/// # Arguments
/// * `scores` - The unnormalized class scores, of shape `(examples, classes)`.
///
/// # Returns
/// A matrix of the same shape where each entry is `s - max - ln(sum(exp(row - max)))`.
pub fn log_softmax_rows(scores: ArrayView2<f64>) -> Array2<f64> {
    let max = row_max(scores).insert_axis(Axis(1));
    let mut shifted = &scores - &max;

    let log_sum = shifted
        .mapv(f64::exp)
        .sum_axis(Axis(1))
        .mapv_into(f64::ln)
        .insert_axis(Axis(1));

    shifted -= &log_sum;
    shifted
}

/// Computes the probabilities of each row of `scores`, every row sums up to one.
pub fn softmax_rows(scores: ArrayView2<f64>) -> Array2<f64> {
    log_softmax_rows(scores).mapv_into(f64::exp)
}
