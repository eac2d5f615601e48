//! Finite difference check of an analytic gradient.

use log::{debug, warn};
use ndarray::ArrayView2;
use rand::Rng;

use crate::error::{LossErr, Result};

/// Relative error past which a probe gets logged as suspicious.
const SUSPICIOUS_REL_ERROR: f64 = 1e-5;

/// How many entries to probe and how far to step on each side of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    pub num_checks: usize,
    pub step: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        Self {
            num_checks: 10,
            step: 1e-5,
        }
    }
}

/// The outcome of probing a single weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheck {
    pub index: (usize, usize),
    pub numerical: f64,
    pub analytic: f64,
    pub rel_error: f64,
}

/// Returns `|a - b| / (|a| + |b|)`, or zero if both are zero.
pub fn relative_error(a: f64, b: f64) -> f64 {
    let denom = a.abs() + b.abs();
    if denom == 0.0 {
        return 0.0;
    }

    (a - b).abs() / denom
}

/// Compares an analytic gradient against centered differences of `f` at randomly picked entries.
///
/// The weights are copied once, each probe moves a single entry of the copy by `step` on each
/// side and restores it afterwards, `w` itself is never touched. The first error returned by `f`
/// stops the check.
///
/// # Arguments
/// * `f` - Evaluates the loss at the given weights.
/// * `w` - The point at which the gradient was computed.
/// * `analytic` - The gradient to check, with the shape of `w`.
/// * `config` - The amount of probes and the step size.
/// * `rng` - Picks the probed entries.
///
/// # Returns
/// One `GradCheck` per probe, or the first error returned by `f`.
pub fn grad_check_sparse<F, R>(
    mut f: F,
    w: ArrayView2<f64>,
    analytic: ArrayView2<f64>,
    config: &GradCheckConfig,
    rng: &mut R,
) -> Result<Vec<GradCheck>>
where
    F: FnMut(ArrayView2<f64>) -> Result<f64>,
    R: Rng,
{
    if w.dim() != analytic.dim() {
        let (got, expected) = if w.nrows() != analytic.nrows() {
            (analytic.nrows(), w.nrows())
        } else {
            (analytic.ncols(), w.ncols())
        };

        return Err(LossErr::SizeMismatch {
            a: "weights",
            b: "analytic gradient",
            got,
            expected,
        });
    }

    if w.is_empty() {
        return Ok(Vec::new());
    }

    let (rows, cols) = w.dim();
    let h = config.step;
    let mut w = w.to_owned();
    let mut checks = Vec::with_capacity(config.num_checks);

    for _ in 0..config.num_checks {
        let index = (rng.random_range(0..rows), rng.random_range(0..cols));
        let old = w[index];

        w[index] = old + h;
        let fxph = f(w.view())?;
        w[index] = old - h;
        let fxmh = f(w.view())?;
        w[index] = old;

        let numerical = (fxph - fxmh) / (2.0 * h);
        let expected = analytic[index];
        let rel_error = relative_error(numerical, expected);

        debug!(
            row = index.0, col = index.1, rel_error = rel_error;
            "numerical: {numerical}, analytic: {expected}"
        );
        if rel_error > SUSPICIOUS_REL_ERROR {
            warn!("gradient probe at {index:?} is off by a relative error of {rel_error}");
        }

        checks.push(GradCheck {
            index,
            numerical,
            analytic: expected,
            rel_error,
        });
    }

    Ok(checks)
}
