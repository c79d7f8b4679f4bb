//! Presents parameterized action-value functions `q(theta, s, a)` as value
//! functions `v(theta, (s, a))`, so estimators written for state values can
//! learn action values by treating the pair as the state.
//!
//! The parameter vector is always borrowed: an adapted function is valid only
//! while the vector it reads outlives it.

use ndarray::Array1;

/// A state and an action seen as a single composite state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateAction<S, A> {
    pub state: S,
    pub action: A,
}

pub fn pair<S, A>(state: S, action: A) -> StateAction<S, A> {
    StateAction { state, action }
}

/// Rewrites `q(theta, s, a)` as `v(theta, (s, a))`.
pub fn value_of_action_value<S, A, Q>(q: &Q) -> impl Fn(&Array1<f64>, &StateAction<S, A>) -> f64 + '_
where
    Q: Fn(&Array1<f64>, &S, &A) -> f64,
{
    move |theta, sa| q(theta, &sa.state, &sa.action)
}

/// Rewrites `grad_q(theta, grad, s, a)` as `grad_v(theta, grad, (s, a))`.
pub fn gradient_of_action_gradient<S, A, G>(
    grad_q: &G,
) -> impl Fn(&Array1<f64>, &mut Array1<f64>, &StateAction<S, A>) + '_
where
    G: Fn(&Array1<f64>, &mut Array1<f64>, &S, &A),
{
    move |theta, grad, sa| grad_q(theta, grad, &sa.state, &sa.action)
}

/// Fixes the parameters of `q`, giving the plain action-value function that
/// policies consume.
pub fn with_parameters<'a, S, A, Q>(q: &'a Q, theta: &'a Array1<f64>) -> impl Fn(&S, &A) -> f64 + 'a
where
    Q: Fn(&Array1<f64>, &S, &A) -> f64,
{
    move |state, action| q(theta, state, action)
}

/// A linear action-value function `q(theta, s, a) = theta . phi(s, a)`.
#[derive(Debug, Clone)]
pub struct LinearActionValue<F> {
    phi: F,
    dimension: usize,
}

impl<F> LinearActionValue<F> {
    /// `phi` writes the feature vector of `(s, a)` into a buffer of `dimension` entries.
    pub fn new(phi: F, dimension: usize) -> Self {
        Self { phi, dimension }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn features<S, A>(&self, state: &S, action: &A) -> Array1<f64>
    where
        F: Fn(&mut Array1<f64>, &S, &A),
    {
        let mut features = Array1::zeros(self.dimension);
        (self.phi)(&mut features, state, action);
        features
    }

    pub fn value<S, A>(&self, theta: &Array1<f64>, state: &S, action: &A) -> f64
    where
        F: Fn(&mut Array1<f64>, &S, &A),
    {
        theta.dot(&self.features(state, action))
    }

    /// The gradient with respect to `theta`, which is `phi(s, a)`.
    pub fn gradient<S, A>(&self, _theta: &Array1<f64>, grad: &mut Array1<f64>, state: &S, action: &A)
    where
        F: Fn(&mut Array1<f64>, &S, &A),
    {
        grad.fill(0.0);
        (self.phi)(grad, state, action);
    }
}
