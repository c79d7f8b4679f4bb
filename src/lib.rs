pub mod action_space;
pub mod config;
pub mod policy;
pub mod random;
pub mod state_action;
pub mod utils;

mod error;

pub use action_space::{ActionSpace, Enumeration, Enumerator};
pub use config::{ExperimentConfig, PolicyConfig};
pub use error::{EnumerationError, PolicyError, SamplingError};
pub use policy::{EpsilonGreedy, Greedy, Policy, PolicyKind, Random, SoftMax};
