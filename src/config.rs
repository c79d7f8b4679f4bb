use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::{
    action_space::ActionSpace,
    error::PolicyError,
    policy::{EpsilonGreedy, Greedy, PolicyKind, Random, SoftMax},
    random,
};

/// Which policy to run and with which tuning scalar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyConfig {
    Greedy,
    EpsilonGreedy { epsilon: f64 },
    SoftMax { temperature: f64 },
    Random,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig::Greedy
    }
}

/// Seed and policy of one experiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub policy: PolicyConfig,
}

fn default_seed() -> u64 {
    42
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            policy: PolicyConfig::default(),
        }
    }
}

impl ExperimentConfig {
    pub fn rng(&self) -> StdRng {
        random::seeded(self.seed)
    }

    /// Builds the configured policy over `actions`, drawing from a generator
    /// seeded with `seed`.
    pub fn build<Q, A>(&self, q: Q, actions: A) -> Result<PolicyKind<Q, A, StdRng>, PolicyError>
    where
        A: ActionSpace,
    {
        tracing::debug!(seed = self.seed, policy = ?self.policy, "building policy");
        Ok(match self.policy {
            PolicyConfig::Greedy => Greedy::new(q, actions)?.into(),
            PolicyConfig::EpsilonGreedy { epsilon } => {
                EpsilonGreedy::new(q, epsilon, actions, self.rng())?.into()
            }
            PolicyConfig::SoftMax { temperature } => {
                SoftMax::new(q, temperature, actions, self.rng())?.into()
            }
            PolicyConfig::Random => Random::new(actions, self.rng())?.into(),
        })
    }
}
