use std::fmt::Debug;

use ndarray::Array1;
use rand::{rngs::StdRng, Rng};

use crate::{action_space::ActionSpace, error::PolicyError, random};

use super::{check_actions, check_epsilon, greedy_index, Policy};

/// Explores a uniformly drawn action with probability `epsilon`, otherwise
/// exploits like [`Greedy`](super::Greedy).
#[derive(Clone)]
pub struct EpsilonGreedy<Q, A, R = StdRng> {
    q: Q,
    actions: A,
    epsilon: f64,
    rng: R,
}

impl<Q, A: ActionSpace> EpsilonGreedy<Q, A, StdRng> {
    pub fn with_seed(q: Q, epsilon: f64, actions: A, seed: u64) -> Result<Self, PolicyError> {
        Self::new(q, epsilon, actions, random::seeded(seed))
    }
}

impl<Q, A: ActionSpace, R> EpsilonGreedy<Q, A, R> {
    pub fn new(q: Q, epsilon: f64, actions: A, rng: R) -> Result<Self, PolicyError> {
        check_actions(&actions)?;
        let epsilon = check_epsilon(epsilon)?;
        tracing::debug!(actions = actions.size(), epsilon, "epsilon-greedy policy");
        Ok(Self {
            q,
            actions,
            epsilon,
            rng,
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<(), PolicyError> {
        self.epsilon = check_epsilon(epsilon)?;
        tracing::debug!(epsilon, "epsilon updated");
        Ok(())
    }

    /// Replaces epsilon by `decay(epsilon)`, never going below `final_epsilon`.
    pub fn decay_epsilon<F>(&mut self, decay: F, final_epsilon: f64) -> Result<(), PolicyError>
    where
        F: Fn(f64) -> f64,
    {
        let new_epsilon = decay(self.epsilon);
        self.set_epsilon(if final_epsilon > new_epsilon {
            final_epsilon
        } else {
            new_epsilon
        })
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }
}

impl<Q, A: ActionSpace, R> Debug for EpsilonGreedy<Q, A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EpsilonGreedy")
            .field("actions", &self.actions.size())
            .field("epsilon", &self.epsilon)
            .finish()
    }
}

impl<S, Q, A, R> Policy<S> for EpsilonGreedy<Q, A, R>
where
    Q: Fn(&S, &A::Action) -> f64,
    A: ActionSpace,
    R: Rng,
{
    type Action = A::Action;

    fn select(&mut self, state: &S) -> Result<A::Action, PolicyError> {
        if random::toss(&mut self.rng, self.epsilon) {
            tracing::trace!(epsilon = self.epsilon, "exploring");
            return Ok(random::select(&mut self.rng, &self.actions)?);
        }
        let index = greedy_index(&self.q, state, &self.actions)?;
        Ok(self.actions.action(index))
    }

    fn probabilities(&self, state: &S) -> Result<Array1<f64>, PolicyError> {
        let size = self.actions.size();
        let mut probs = Array1::from_elem(size, self.epsilon / size as f64);
        probs[greedy_index(&self.q, state, &self.actions)?] += 1.0 - self.epsilon;
        Ok(probs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action_space::Enumeration;

    #[test]
    fn epsilon_must_be_a_probability() {
        let q = |_s: &(), a: &usize| *a as f64;
        for eps in [-0.1, 1.5, f64::NAN] {
            let result = EpsilonGreedy::with_seed(q, eps, Enumeration::<usize>::of(3), 0);
            assert!(matches!(result, Err(PolicyError::InvalidEpsilon(_))));
        }
        let mut policy = EpsilonGreedy::with_seed(q, 0.5, Enumeration::<usize>::of(3), 0).unwrap();
        assert!(policy.set_epsilon(2.0).is_err());
        assert_eq!(policy.epsilon(), 0.5);
    }

    #[test]
    fn decay_stops_at_final_epsilon() {
        let q = |_s: &(), a: &usize| *a as f64;
        let mut policy = EpsilonGreedy::with_seed(q, 1.0, Enumeration::<usize>::of(3), 0).unwrap();
        policy.decay_epsilon(|e| e - 0.4, 0.1).unwrap();
        assert!((policy.epsilon() - 0.6).abs() < 1e-12);
        policy.decay_epsilon(|e| e - 0.4, 0.1).unwrap();
        assert!((policy.epsilon() - 0.2).abs() < 1e-12);
        policy.decay_epsilon(|e| e - 0.4, 0.1).unwrap();
        assert_eq!(policy.epsilon(), 0.1);
    }

    #[test]
    fn probabilities_mix_exploration_and_greedy_mass() {
        let q = |_s: &(), a: &usize| -((*a as f64) - 2.0).abs();
        let policy = EpsilonGreedy::with_seed(q, 0.2, Enumeration::<usize>::of(4), 0).unwrap();
        let probs = policy.probabilities(&()).unwrap();
        assert!((probs.sum() - 1.0).abs() < 1e-12);
        assert!((probs[2] - (0.05 + 0.8)).abs() < 1e-12);
        assert!((probs[0] - 0.05).abs() < 1e-12);
    }
}
