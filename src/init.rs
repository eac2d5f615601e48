use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::StandardNormal;

/// Draws a `(features, classes)` weight matrix with entries from `scale * N(0, 1)`.
///
/// A small `scale` (e.g. `1e-3`) makes every class start out almost equally likely, so the
/// first loss evaluated is close to `ln(classes)`.
///
/// # Arguments
/// * `dim` - The shape of the weights, `(features, classes)`.
/// * `scale` - The standard deviation of the entries.
/// * `rng` - The source of randomness.
pub fn random_weights<R: Rng>(dim: (usize, usize), scale: f64, rng: &mut R) -> Array2<f64> {
    Array2::<f64>::random_using(dim, StandardNormal, rng).mapv_into(|w| w * scale)
}
