use ndarray::{Array2, ArrayView2};

use crate::error::Result;

/// A softmax cross-entropy loss over a linear model with L2 regularization.
pub trait SoftmaxLoss {
    /// Computes the loss and its gradient with respect to the weights.
    ///
    /// # Arguments
    /// * `w` - The weights, of shape `(features, classes)`.
    /// * `x` - The batch of examples, of shape `(examples, features)`.
    /// * `y` - The label of each example, in `0..classes`.
    /// * `reg` - The regularization strength.
    ///
    /// # Returns
    /// The averaged loss and a freshly allocated gradient with the shape of `w`, or an error if
    /// the inputs don't fit together.
    fn loss_and_grad(
        &self,
        w: ArrayView2<f64>,
        x: ArrayView2<f64>,
        y: &[usize],
        reg: f64,
    ) -> Result<(f64, Array2<f64>)>;
}
