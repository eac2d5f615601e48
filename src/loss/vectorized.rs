use log::{debug, trace};
use ndarray::{Array2, ArrayView1, ArrayView2, Zip, linalg};

use super::{SoftmaxLoss, regularization::regularize, validate::validate};
use crate::{error::Result, softmax::log_softmax_rows};

/// Softmax loss computed with whole matrix operations.
///
/// Scores come from a single matrix product, the per example reductions are row-wise and the
/// gradient is another single product, `x^T (p - y) / n`, where `y` is the one-hot label matrix.
#[derive(Debug, Default, Clone, Copy)]
pub struct Vectorized;

impl Vectorized {
    /// Returns a new `Vectorized`.
    pub fn new() -> Self {
        Self
    }
}

impl SoftmaxLoss for Vectorized {
    fn loss_and_grad(
        &self,
        w: ArrayView2<f64>,
        x: ArrayView2<f64>,
        y: &[usize],
        reg: f64,
    ) -> Result<(f64, Array2<f64>)> {
        validate(w, x, y, reg)?;

        let n = x.nrows() as f64;
        trace!(
            examples = x.nrows(), features = x.ncols(), classes = w.ncols();
            "evaluating vectorized softmax loss"
        );

        let mut scores = Array2::<f64>::zeros((x.nrows(), w.ncols()));
        linalg::general_mat_mul(1.0, &x, &w, 0.0, &mut scores);

        let log_probs = log_softmax_rows(scores.view());
        let truth = one_hot(y, w.ncols());

        // Off-label entries are `-inf` when a row's spread overflows, pick the label by index.
        let mut loss = -Zip::from(log_probs.rows())
            .and(ArrayView1::from(y))
            .fold(0.0, |acc, row, &label| acc + row[label])
            / n;

        let mut d_scores = log_probs.mapv_into(f64::exp);
        d_scores -= &truth;

        let mut dw = Array2::<f64>::zeros(w.raw_dim());
        linalg::general_mat_mul(1.0 / n, &x.t(), &d_scores, 0.0, &mut dw);
        regularize(&mut loss, &mut dw, w, reg);

        debug!(loss = loss, reg = reg; "vectorized softmax loss computed");
        Ok((loss, dw))
    }
}

/// Computes the softmax loss and its gradient with matrix operations, see [`Vectorized`].
pub fn softmax_loss_vectorized(
    w: ArrayView2<f64>,
    x: ArrayView2<f64>,
    y: &[usize],
    reg: f64,
) -> Result<(f64, Array2<f64>)> {
    Vectorized.loss_and_grad(w, x, y, reg)
}

/// Builds the `(labels, classes)` matrix with a one in each example's true class.
fn one_hot(y: &[usize], classes: usize) -> Array2<f64> {
    Array2::from_shape_fn((y.len(), classes), |(i, j)| if y[i] == j { 1.0 } else { 0.0 })
}
