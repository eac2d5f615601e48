use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, LossErr>;

/// The crate's error type.
///
/// Every variant describes an invalid input, evaluation is a pure function so the same input
/// always yields the same error.
#[derive(Debug, Clone, PartialEq)]
pub enum LossErr {
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    LabelOutOfRange {
        index: usize,
        label: usize,
        classes: usize,
    },
    EmptyBatch,
    InvalidRegularization(f64),
}

impl Display for LossErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            LossErr::LabelOutOfRange {
                index,
                label,
                classes,
            } => write!(
                f,
                "Label {label} of example {index} is out of range, there are {classes} classes"
            ),
            LossErr::EmptyBatch => write!(f, "The batch has no examples, the loss is undefined"),
            LossErr::InvalidRegularization(reg) => write!(
                f,
                "The regularization strength must be finite and non-negative, got {reg}"
            ),
        }
    }
}

impl Error for LossErr {}
