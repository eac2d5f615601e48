mod naive;
mod regularization;
mod softmax_loss;
mod validate;
mod vectorized;

pub use naive::{Naive, softmax_loss_naive};
pub use regularization::{l2_penalty, regularize};
pub use softmax_loss::SoftmaxLoss;
pub use vectorized::{Vectorized, softmax_loss_vectorized};
