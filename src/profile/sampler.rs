//! Sampling helpers over the static vocabularies.

use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Uniform single pick. An empty table yields an empty string.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Draw between `min` and `max` distinct items, clamped to the pool size.
///
/// The returned order is random, so callers may treat the first entries as
/// the "top" picks.
pub fn sample_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[&'static str],
    min: usize,
    max: usize,
) -> Vec<String> {
    let wanted = rng.gen_range(min..=max).min(pool.len());
    index::sample(rng, pool.len(), wanted)
        .into_iter()
        .map(|i| pool[i].to_string())
        .collect()
}

/// Two-stage optional draw: a Bernoulli gate, then a uniform pick over
/// `choices`, where `None` entries act as "no value" placeholders.
pub fn gated<R, T>(rng: &mut R, probability: f64, choices: &[Option<T>]) -> Option<T>
where
    R: Rng + ?Sized,
    T: Copy,
{
    if rng.gen_bool(probability) {
        choices.choose(rng).copied().flatten()
    } else {
        None
    }
}
