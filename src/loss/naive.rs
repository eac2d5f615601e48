use log::{debug, trace};
use ndarray::{Array2, ArrayView2};

use super::{SoftmaxLoss, regularization::regularize, validate::validate};
use crate::error::Result;

/// Softmax loss computed with explicit loops over the examples and, for each one, over the
/// classes.
///
/// Slow, but easy to audit. It's the reference the vectorized version is checked against.
#[derive(Debug, Default, Clone, Copy)]
pub struct Naive;

impl Naive {
    /// Returns a new `Naive`.
    pub fn new() -> Self {
        Self
    }
}

impl SoftmaxLoss for Naive {
    fn loss_and_grad(
        &self,
        w: ArrayView2<f64>,
        x: ArrayView2<f64>,
        y: &[usize],
        reg: f64,
    ) -> Result<(f64, Array2<f64>)> {
        validate(w, x, y, reg)?;

        let (examples, classes) = (x.nrows(), w.ncols());
        trace!(
            examples = examples, features = x.ncols(), classes = classes;
            "evaluating naive softmax loss"
        );

        let mut loss = 0.0;
        let mut dw = Array2::<f64>::zeros(w.raw_dim());

        for (xi, &label) in x.rows().into_iter().zip(y) {
            let mut scores = xi.dot(&w);
            let max = scores.fold(f64::NEG_INFINITY, |max, &s| max.max(s));
            scores -= max;

            let sum_exp: f64 = scores.iter().map(|s| s.exp()).sum();
            loss += sum_exp.ln() - scores[label];

            for j in 0..classes {
                let p = scores[j].exp() / sum_exp;
                let coef = if j == label { p - 1.0 } else { p };
                dw.column_mut(j).zip_mut_with(&xi, |d, &x| *d += coef * x);
            }
        }

        loss /= examples as f64;
        dw /= examples as f64;
        regularize(&mut loss, &mut dw, w, reg);

        debug!(loss = loss, reg = reg; "naive softmax loss computed");
        Ok((loss, dw))
    }
}

/// Computes the softmax loss and its gradient with explicit loops, see [`Naive`].
pub fn softmax_loss_naive(
    w: ArrayView2<f64>,
    x: ArrayView2<f64>,
    y: &[usize],
    reg: f64,
) -> Result<(f64, Array2<f64>)> {
    Naive.loss_and_grad(w, x, y, reg)
}
