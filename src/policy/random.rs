use std::fmt::Debug;

use ndarray::Array1;
use rand::{rngs::StdRng, Rng};

use crate::{action_space::ActionSpace, error::PolicyError, random::{self, select}};

use super::{check_actions, Policy};

/// Picks a uniformly drawn action whatever the state.
#[derive(Clone)]
pub struct Random<A, R = StdRng> {
    actions: A,
    rng: R,
}

impl<A: ActionSpace> Random<A, StdRng> {
    pub fn with_seed(actions: A, seed: u64) -> Result<Self, PolicyError> {
        Self::new(actions, random::seeded(seed))
    }
}

impl<A: ActionSpace, R> Random<A, R> {
    pub fn new(actions: A, rng: R) -> Result<Self, PolicyError> {
        check_actions(&actions)?;
        tracing::debug!(actions = actions.size(), "random policy");
        Ok(Self { actions, rng })
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }
}

impl<A: ActionSpace, R> Debug for Random<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Random")
            .field("actions", &self.actions.size())
            .finish()
    }
}

impl<S, A, R> Policy<S> for Random<A, R>
where
    A: ActionSpace,
    R: Rng,
{
    type Action = A::Action;

    fn select(&mut self, _state: &S) -> Result<A::Action, PolicyError> {
        Ok(select(&mut self.rng, &self.actions)?)
    }

    fn probabilities(&self, _state: &S) -> Result<Array1<f64>, PolicyError> {
        let size = self.actions.size();
        Ok(Array1::from_elem(size, 1.0 / size as f64))
    }
}
