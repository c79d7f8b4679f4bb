use std::fmt::Debug;

use ndarray::Array1;

use crate::{action_space::ActionSpace, error::PolicyError};

use super::{check_actions, greedy_index, Policy};

/// Always picks the action with the highest `q(state, action)`.
///
/// Among equally valued actions the first one in the action space wins.
#[derive(Clone)]
pub struct Greedy<Q, A> {
    q: Q,
    actions: A,
}

impl<Q, A: ActionSpace> Greedy<Q, A> {
    pub fn new(q: Q, actions: A) -> Result<Self, PolicyError> {
        check_actions(&actions)?;
        tracing::debug!(actions = actions.size(), "greedy policy");
        Ok(Self { q, actions })
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    /// The greedy action for `state` and its value.
    pub fn best<S>(&self, state: &S) -> Result<(A::Action, f64), PolicyError>
    where
        Q: Fn(&S, &A::Action) -> f64,
    {
        let index = greedy_index(&self.q, state, &self.actions)?;
        let action = self.actions.action(index);
        let value = (self.q)(state, &action);
        Ok((action, value))
    }
}

impl<Q, A: ActionSpace> Debug for Greedy<Q, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Greedy")
            .field("actions", &self.actions.size())
            .finish()
    }
}

impl<S, Q, A> Policy<S> for Greedy<Q, A>
where
    Q: Fn(&S, &A::Action) -> f64,
    A: ActionSpace,
{
    type Action = A::Action;

    fn select(&mut self, state: &S) -> Result<A::Action, PolicyError> {
        let index = greedy_index(&self.q, state, &self.actions)?;
        Ok(self.actions.action(index))
    }

    fn probabilities(&self, state: &S) -> Result<Array1<f64>, PolicyError> {
        let mut probs = Array1::zeros(self.actions.size());
        probs[greedy_index(&self.q, state, &self.actions)?] = 1.0;
        Ok(probs)
    }
}
