use ndarray::ArrayView2;

use crate::error::{LossErr, Result};

/// Checks that the evaluator's inputs fit together before anything is computed.
///
/// # Errors
/// * `SizeMismatch` if `w` has not as many rows as `x` has columns or if `y` has not as many
///   labels as `x` has rows.
/// * `EmptyBatch` if `x` has no rows.
/// * `InvalidRegularization` if `reg` is negative or not finite.
/// * `LabelOutOfRange` for the first label that isn't a column of `w`.
pub(crate) fn validate(
    w: ArrayView2<f64>,
    x: ArrayView2<f64>,
    y: &[usize],
    reg: f64,
) -> Result<()> {
    if w.nrows() != x.ncols() {
        return Err(LossErr::SizeMismatch {
            a: "weights rows",
            b: "data columns",
            got: x.ncols(),
            expected: w.nrows(),
        });
    }

    if y.len() != x.nrows() {
        return Err(LossErr::SizeMismatch {
            a: "labels",
            b: "data rows",
            got: y.len(),
            expected: x.nrows(),
        });
    }

    if x.nrows() == 0 {
        return Err(LossErr::EmptyBatch);
    }

    if !reg.is_finite() || reg < 0.0 {
        return Err(LossErr::InvalidRegularization(reg));
    }

    let classes = w.ncols();
    if let Some((index, &label)) = y.iter().enumerate().find(|&(_, &label)| label >= classes) {
        return Err(LossErr::LabelOutOfRange {
            index,
            label,
            classes,
        });
    }

    Ok(())
}
