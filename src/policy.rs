mod epsilon_greedy;
mod greedy;
mod random;
mod softmax;

use std::fmt::Debug;

use ndarray::Array1;
use rand::Rng;

use crate::{action_space::ActionSpace, error::PolicyError, utils};

pub use epsilon_greedy::EpsilonGreedy;
pub use greedy::Greedy;
pub use random::Random;
pub use softmax::SoftMax;

/// A decision rule mapping a state to an action.
///
/// Policies keep no trajectory history. Stochastic ones own the generator
/// they draw from, so `select` needs `&mut self`.
pub trait Policy<S> {
    type Action;

    fn select(&mut self, state: &S) -> Result<Self::Action, PolicyError>;

    /// Probability of selecting each action, in action space order.
    fn probabilities(&self, state: &S) -> Result<Array1<f64>, PolicyError>;
}

/// One of the four policies, picked at runtime.
#[derive(Clone)]
pub enum PolicyKind<Q, A, R> {
    Greedy(Greedy<Q, A>),
    EpsilonGreedy(EpsilonGreedy<Q, A, R>),
    SoftMax(SoftMax<Q, A, R>),
    Random(Random<A, R>),
}

impl<S, Q, A, R> Policy<S> for PolicyKind<Q, A, R>
where
    Q: Fn(&S, &A::Action) -> f64,
    A: ActionSpace,
    R: Rng,
{
    type Action = A::Action;

    fn select(&mut self, state: &S) -> Result<A::Action, PolicyError> {
        match self {
            PolicyKind::Greedy(policy) => policy.select(state),
            PolicyKind::EpsilonGreedy(policy) => policy.select(state),
            PolicyKind::SoftMax(policy) => policy.select(state),
            PolicyKind::Random(policy) => Policy::<S>::select(policy, state),
        }
    }

    fn probabilities(&self, state: &S) -> Result<Array1<f64>, PolicyError> {
        match self {
            PolicyKind::Greedy(policy) => policy.probabilities(state),
            PolicyKind::EpsilonGreedy(policy) => policy.probabilities(state),
            PolicyKind::SoftMax(policy) => policy.probabilities(state),
            PolicyKind::Random(policy) => Policy::<S>::probabilities(policy, state),
        }
    }
}

impl<Q, A: ActionSpace, R> Debug for PolicyKind<Q, A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyKind::Greedy(policy) => policy.fmt(f),
            PolicyKind::EpsilonGreedy(policy) => policy.fmt(f),
            PolicyKind::SoftMax(policy) => policy.fmt(f),
            PolicyKind::Random(policy) => policy.fmt(f),
        }
    }
}

impl<Q, A, R> From<Greedy<Q, A>> for PolicyKind<Q, A, R> {
    fn from(policy: Greedy<Q, A>) -> Self {
        PolicyKind::Greedy(policy)
    }
}

impl<Q, A, R> From<EpsilonGreedy<Q, A, R>> for PolicyKind<Q, A, R> {
    fn from(policy: EpsilonGreedy<Q, A, R>) -> Self {
        PolicyKind::EpsilonGreedy(policy)
    }
}

impl<Q, A, R> From<SoftMax<Q, A, R>> for PolicyKind<Q, A, R> {
    fn from(policy: SoftMax<Q, A, R>) -> Self {
        PolicyKind::SoftMax(policy)
    }
}

impl<Q, A, R> From<Random<A, R>> for PolicyKind<Q, A, R> {
    fn from(policy: Random<A, R>) -> Self {
        PolicyKind::Random(policy)
    }
}

fn check_actions<A: ActionSpace>(actions: &A) -> Result<(), PolicyError> {
    if actions.is_empty() {
        return Err(PolicyError::EmptyActionSpace);
    }
    Ok(())
}

fn check_epsilon(epsilon: f64) -> Result<f64, PolicyError> {
    if (0.0..=1.0).contains(&epsilon) {
        Ok(epsilon)
    } else {
        Err(PolicyError::InvalidEpsilon(epsilon))
    }
}

fn check_temperature(temperature: f64) -> Result<f64, PolicyError> {
    if temperature.is_finite() && temperature > 0.0 {
        Ok(temperature)
    } else {
        Err(PolicyError::InvalidTemperature(temperature))
    }
}

/// Position of the first action maximizing `q(state, .)`.
fn greedy_index<S, Q, A>(q: &Q, state: &S, actions: &A) -> Result<usize, PolicyError>
where
    Q: Fn(&S, &A::Action) -> f64,
    A: ActionSpace,
{
    utils::argmax(
        |(_, action): &(usize, A::Action)| q(state, action),
        actions.actions().enumerate(),
    )
    .map(|((index, _), _)| index)
    .ok_or(PolicyError::EmptyActionSpace)
}
