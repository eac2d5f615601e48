//! Softmax cross-entropy loss of a linear classifier and its gradient with respect to the
//! weights, computed either with explicit loops ([`Naive`]) or with matrix operations
//! ([`Vectorized`]).

pub mod error;
pub mod gradient_check;
pub mod init;
pub mod loss;
pub mod softmax;

pub use error::{LossErr, Result};
pub use loss::{Naive, SoftmaxLoss, Vectorized, softmax_loss_naive, softmax_loss_vectorized};
