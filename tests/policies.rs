use fxhash::FxHashMap;
use rl_policies::action_space::{BoundedAction, DiscreteAction};
use rl_policies::{
    random, Enumeration, EpsilonGreedy, Greedy, Policy, PolicyError, Random, SoftMax,
};

const DRAWS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Move {
    Left,
    Down,
    Right,
    Up,
}

impl DiscreteAction for Move {
    fn from_index(index: usize) -> Self {
        match index {
            0 => Move::Left,
            1 => Move::Down,
            2 => Move::Right,
            _ => Move::Up,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl BoundedAction for Move {
    const COUNT: usize = 4;
}

/// A small grid-like action-value function: prefers moving right on even
/// states and up on odd ones, with a tie between left and down on state 3.
fn q(state: &u32, action: &Move) -> f64 {
    match (state % 2, action) {
        (_, Move::Left) | (_, Move::Down) if *state == 3 => 5.0,
        (0, Move::Right) => 1.0,
        (1, Move::Up) => 1.0,
        _ => 0.0,
    }
}

fn frequencies<K: std::hash::Hash + Eq>(samples: impl Iterator<Item = K>) -> FxHashMap<K, f64> {
    let mut counts: FxHashMap<K, usize> = FxHashMap::default();
    let mut total = 0usize;
    for k in samples {
        *counts.entry(k).or_insert(0) += 1;
        total += 1;
    }
    counts
        .into_iter()
        .map(|(k, c)| (k, c as f64 / total as f64))
        .collect()
}

#[test]
fn greedy_over_negated_actions_returns_zero() -> Result<(), PolicyError> {
    let mut policy = Greedy::new(|_s: &u32, a: &i64| -(*a as f64), vec![0i64, 1, 2, 3])?;
    for s in 0..50 {
        assert_eq!(policy.select(&s)?, 0);
    }
    Ok(())
}

#[test]
fn greedy_breaks_ties_by_action_order() -> Result<(), PolicyError> {
    let mut policy = Greedy::new(q, Enumeration::<Move>::all())?;
    assert_eq!(policy.select(&3)?, Move::Left);
    assert_eq!(policy.select(&0)?, Move::Right);
    assert_eq!(policy.select(&1)?, Move::Up);
    Ok(())
}

#[test]
fn zero_epsilon_matches_greedy() -> Result<(), PolicyError> {
    let mut greedy = Greedy::new(q, Enumeration::<Move>::all())?;
    let mut eps = EpsilonGreedy::with_seed(q, 0.0, Enumeration::<Move>::all(), 12)?;
    for s in 0..200 {
        assert_eq!(greedy.select(&s)?, eps.select(&s)?);
        assert_eq!(greedy.probabilities(&s)?, eps.probabilities(&s)?);
    }
    Ok(())
}

#[test]
fn full_epsilon_behaves_like_random() -> Result<(), PolicyError> {
    let mut eps = EpsilonGreedy::with_seed(q, 1.0, Enumeration::<Move>::all(), 3)?;
    let mut rand = Random::with_seed(Enumeration::<Move>::all(), 4)?;
    let explored = frequencies((0..DRAWS).map(|_| eps.select(&0).unwrap()));
    let uniform = frequencies((0..DRAWS).map(|_| rand.select(&0u32).unwrap()));
    for m in Enumeration::<Move>::all() {
        assert!((explored[&m] - 0.25).abs() < 0.01, "{explored:?}");
        assert!((uniform[&m] - 0.25).abs() < 0.01, "{uniform:?}");
    }
    Ok(())
}

#[test]
fn epsilon_greedy_frequencies_match_probabilities() -> Result<(), PolicyError> {
    let mut eps = EpsilonGreedy::with_seed(q, 0.3, Enumeration::<Move>::all(), 8)?;
    let probs = eps.probabilities(&0)?;
    let freq = frequencies((0..DRAWS).map(|_| eps.select(&0).unwrap()));
    for m in Enumeration::<Move>::all() {
        assert!((freq[&m] - probs[m.index()]).abs() < 0.01);
    }
    Ok(())
}

#[test]
fn softmax_temperature_limits() -> Result<(), PolicyError> {
    let mut hot = SoftMax::with_seed(q, 1e9, Enumeration::<Move>::all(), 21)?;
    let freq = frequencies((0..DRAWS).map(|_| hot.select(&0).unwrap()));
    for m in Enumeration::<Move>::all() {
        assert!((freq[&m] - 0.25).abs() < 0.01);
    }

    let mut cold = SoftMax::with_seed(q, 1e-4, Enumeration::<Move>::all(), 22)?;
    let mut greedy = Greedy::new(q, Enumeration::<Move>::all())?;
    for s in [0u32, 1, 2, 4] {
        for _ in 0..100 {
            assert_eq!(cold.select(&s)?, greedy.select(&s)?);
        }
    }
    Ok(())
}

#[test]
fn softmax_frequencies_match_probabilities() -> Result<(), PolicyError> {
    let mut policy = SoftMax::with_seed(q, 0.5, Enumeration::<Move>::all(), 5)?;
    let probs = policy.probabilities(&2)?;
    assert!((probs.sum() - 1.0).abs() < 1e-12);
    let freq = frequencies((0..DRAWS).map(|_| policy.select(&2).unwrap()));
    for m in Enumeration::<Move>::all() {
        assert!((freq[&m] - probs[m.index()]).abs() < 0.01);
    }
    Ok(())
}

#[test]
fn same_seed_replays_the_same_actions() -> Result<(), PolicyError> {
    let run = |seed: u64| -> Result<Vec<Move>, PolicyError> {
        let mut policy = EpsilonGreedy::new(q, 0.5, Enumeration::<Move>::all(), random::seeded(seed))?;
        (0..64u32).map(|s| policy.select(&s)).collect()
    };
    assert_eq!(run(99)?, run(99)?);
    Ok(())
}

#[test]
fn policies_are_passed_by_value() -> Result<(), PolicyError> {
    fn drive<P: Policy<u32, Action = Move>>(mut policy: P, steps: u32) -> Result<Vec<Move>, PolicyError> {
        (0..steps).map(|s| policy.select(&s)).collect()
    }
    let greedy = Greedy::new(q, Enumeration::<Move>::all())?;
    let actions = drive(greedy.clone(), 4)?;
    assert_eq!(actions, vec![Move::Right, Move::Up, Move::Right, Move::Left]);
    assert_eq!(drive(greedy, 4)?, actions);
    Ok(())
}
