use std::fmt::Debug;

use ndarray::Array1;
use rand::{rngs::StdRng, Rng};

use crate::{action_space::ActionSpace, error::PolicyError, random};

use super::{check_actions, check_temperature, Policy};

/// Draws actions with probability proportional to `exp(q(state, action) / temperature)`.
///
/// High temperatures flatten the distribution towards uniform, low ones
/// concentrate it on the greedy action.
#[derive(Clone)]
pub struct SoftMax<Q, A, R = StdRng> {
    q: Q,
    actions: A,
    temperature: f64,
    rng: R,
}

impl<Q, A: ActionSpace> SoftMax<Q, A, StdRng> {
    pub fn with_seed(q: Q, temperature: f64, actions: A, seed: u64) -> Result<Self, PolicyError> {
        Self::new(q, temperature, actions, random::seeded(seed))
    }
}

impl<Q, A: ActionSpace, R> SoftMax<Q, A, R> {
    pub fn new(q: Q, temperature: f64, actions: A, rng: R) -> Result<Self, PolicyError> {
        check_actions(&actions)?;
        let temperature = check_temperature(temperature)?;
        tracing::debug!(actions = actions.size(), temperature, "softmax policy");
        Ok(Self {
            q,
            actions,
            temperature,
            rng,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn set_temperature(&mut self, temperature: f64) -> Result<(), PolicyError> {
        self.temperature = check_temperature(temperature)?;
        tracing::debug!(temperature, "temperature updated");
        Ok(())
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }
}

impl<Q, A: ActionSpace, R> Debug for SoftMax<Q, A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoftMax")
            .field("actions", &self.actions.size())
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl<S, Q, A, R> Policy<S> for SoftMax<Q, A, R>
where
    Q: Fn(&S, &A::Action) -> f64,
    A: ActionSpace,
    R: Rng,
{
    type Action = A::Action;

    fn select(&mut self, state: &S) -> Result<A::Action, PolicyError> {
        let q = &self.q;
        let action = random::softmax(
            &mut self.rng,
            |action: &A::Action| q(state, action),
            self.temperature,
            &self.actions,
        )?;
        Ok(action)
    }

    fn probabilities(&self, state: &S) -> Result<Array1<f64>, PolicyError> {
        let values: Vec<f64> = self
            .actions
            .actions()
            .map(|action| (self.q)(state, &action))
            .collect();
        Ok(random::softmax_probabilities(&values, self.temperature)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action_space::Enumeration;

    #[test]
    fn temperature_must_be_positive() {
        let q = |_s: &(), a: &usize| *a as f64;
        for t in [0.0, -2.0, f64::INFINITY] {
            let result = SoftMax::with_seed(q, t, Enumeration::<usize>::of(2), 0);
            assert!(matches!(result, Err(PolicyError::InvalidTemperature(_))));
        }
        let mut policy = SoftMax::with_seed(q, 1.0, Enumeration::<usize>::of(2), 0).unwrap();
        assert!(policy.set_temperature(0.0).is_err());
        policy.set_temperature(0.25).unwrap();
        assert_eq!(policy.temperature(), 0.25);
    }

    #[test]
    fn probabilities_follow_boltzmann_weights() {
        let q = |s: &f64, a: &usize| s * *a as f64;
        let policy = SoftMax::with_seed(q, 2.0, Enumeration::<usize>::of(3), 0).unwrap();
        let probs = policy.probabilities(&1.0).unwrap();
        let w: Vec<f64> = (0..3).map(|a| (a as f64 / 2.0).exp()).collect();
        let z: f64 = w.iter().sum();
        for (p, wi) in probs.iter().zip(&w) {
            assert!((p - wi / z).abs() < 1e-12);
        }
    }

    #[test]
    fn near_zero_temperature_acts_greedily() {
        let values = [0.1, 0.3, 0.2];
        let q = move |_s: &(), a: &usize| values[*a];
        let mut policy = SoftMax::with_seed(q, 1e-9, Enumeration::<usize>::of(3), 4).unwrap();
        for _ in 0..500 {
            assert_eq!(policy.select(&()), Ok(1));
        }
    }
}
