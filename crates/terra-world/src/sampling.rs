//! Uniform sampling over order-insensitive bounds.

use rand::rngs::StdRng;
use rand::Rng;

/// Draw uniformly between the two endpoints of `bounds`.
///
/// The endpoints may be given in either order; configured ranges in the wild
/// ship reversed pairs (a floor range of `[-0.5, -0.55]`), so both orderings
/// sample the same interval. Equal endpoints return the endpoint.
pub fn uniform_between(rng: &mut StdRng, bounds: [f64; 2]) -> f64 {
    let lo = bounds[0].min(bounds[1]);
    let hi = bounds[0].max(bounds[1]);
    if lo == hi {
        lo
    } else {
        rng.gen_range(lo..hi)
    }
}
