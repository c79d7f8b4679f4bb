//! Sampling primitives.
//!
//! Every primitive draws from an explicit generator handed in by the caller, so
//! independent experiments (or threads) simply own independent generators.

use ndarray::Array1;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::action_space::ActionSpace;
use crate::error::SamplingError;
use crate::utils;

/// A reproducible generator for the given seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A value in `[0, 1)`.
#[inline(always)]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}

/// A value in `[min, max)`.
#[inline(always)]
pub fn uniform_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * uniform(rng)
}

/// `true` with probability `proba`. The probability is not clamped.
#[inline(always)]
pub fn toss<R: Rng + ?Sized>(rng: &mut R, proba: f64) -> bool {
    uniform(rng) < proba
}

/// Picks one action uniformly.
pub fn select<R, A>(rng: &mut R, actions: &A) -> Result<A::Action, SamplingError>
where
    R: Rng + ?Sized,
    A: ActionSpace + ?Sized,
{
    let size = actions.size();
    if size == 0 {
        return Err(SamplingError::EmptySequence);
    }
    let index = ((uniform(rng) * size as f64) as usize).min(size - 1);
    Ok(actions.action(index))
}

/// Picks one action with probability proportional to `weight(action)`.
///
/// Weights must be finite and non negative with a strictly positive sum. The
/// draw `u` in `[0, total)` selects the first action whose cumulative weight
/// exceeds `u`, so zero weighted actions are never returned.
pub fn density<R, A, F>(rng: &mut R, weight: F, actions: &A) -> Result<A::Action, SamplingError>
where
    R: Rng + ?Sized,
    A: ActionSpace + ?Sized,
    F: Fn(&A::Action) -> f64,
{
    let weights: Vec<f64> = actions.actions().map(|a| weight(&a)).collect();
    let cumulative = cumulate(&weights)?;
    let total = cumulative[cumulative.len() - 1];
    let u = uniform_range(rng, 0.0, total);
    Ok(actions.action(bucket(&cumulative, u)))
}

/// Softmax sampling: [`density`] with weights `exp(value(a) / temperature)`.
///
/// The largest value is subtracted before exponentiation. This leaves the
/// distribution unchanged and keeps low temperatures from overflowing.
/// Infinite values take the limit: `+inf` actions share all the mass, and
/// when every value is `-inf` the draw is uniform. NaN values are rejected.
pub fn softmax<R, A, F>(
    rng: &mut R,
    value: F,
    temperature: f64,
    actions: &A,
) -> Result<A::Action, SamplingError>
where
    R: Rng + ?Sized,
    A: ActionSpace + ?Sized,
    F: Fn(&A::Action) -> f64,
{
    let values: Vec<f64> = actions.actions().map(|a| value(&a)).collect();
    let weights = softmax_weights(&values, temperature)?;
    let cumulative = cumulate(&weights)?;
    let total = cumulative[cumulative.len() - 1];
    let u = uniform_range(rng, 0.0, total);
    Ok(actions.action(bucket(&cumulative, u)))
}

/// The normalized softmax distribution of `values` at `temperature`.
pub fn softmax_probabilities(values: &[f64], temperature: f64) -> Result<Array1<f64>, SamplingError> {
    let weights = softmax_weights(values, temperature)?;
    let cumulative = cumulate(&weights)?;
    let total = cumulative[cumulative.len() - 1];
    Ok(weights.into_iter().map(|w| w / total).collect())
}

fn softmax_weights(values: &[f64], temperature: f64) -> Result<Vec<f64>, SamplingError> {
    if !(temperature.is_finite() && temperature > 0.0) {
        return Err(SamplingError::InvalidTemperature(temperature));
    }
    let max = utils::max(|v: &&f64| **v, values.iter()).ok_or(SamplingError::EmptySequence)?;
    if max.is_infinite() {
        return Ok(values
            .iter()
            .map(|&v| match v {
                v if v.is_nan() => v,
                v if v == max => 1.0,
                _ => 0.0,
            })
            .collect());
    }
    Ok(values.iter().map(|v| ((v - max) / temperature).exp()).collect())
}

/// Running sums of `weights`, validated for inverse-CDF sampling.
fn cumulate(weights: &[f64]) -> Result<Vec<f64>, SamplingError> {
    if weights.is_empty() {
        return Err(SamplingError::EmptySequence);
    }
    let mut cumulative = Vec::with_capacity(weights.len());
    let mut sum = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() {
            return Err(SamplingError::NonFiniteWeight { index, weight });
        }
        if weight < 0.0 {
            return Err(SamplingError::NegativeWeight { index, weight });
        }
        sum += weight;
        cumulative.push(sum);
    }
    if !(sum.is_finite() && sum > 0.0) {
        return Err(SamplingError::NonPositiveTotal(sum));
    }
    Ok(cumulative)
}

/// Index of the first cumulative weight strictly above `u`.
///
/// A draw that rounds up to the total falls in the last bucket with a
/// positive weight, never past the end.
fn bucket(cumulative: &[f64], u: f64) -> usize {
    match cumulative.iter().position(|&c| u < c) {
        Some(index) => index,
        None => {
            let total = cumulative[cumulative.len() - 1];
            tracing::trace!(u, total, "density draw reached the total weight");
            cumulative
                .iter()
                .position(|&c| c >= total)
                .unwrap_or(cumulative.len() - 1)
        }
    }
}
