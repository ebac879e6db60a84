//! Ordered independent chance checks.
//!
//! Each branch is tested with its own Bernoulli draw, in order, and only
//! if every earlier branch failed. The first success wins; if none fire,
//! the fallback is taken. This is not a categorical distribution: a later
//! branch's effective probability shrinks by every check before it.

use rand::rngs::StdRng;
use rand::Rng;

/// A single outcome guarded by an independent chance check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch<K> {
    /// Probability of this check passing, in `0.0..=1.0`.
    pub chance: f64,
    pub kind: K,
}

impl<K> Branch<K> {
    pub const fn new(chance: f64, kind: K) -> Self {
        Self { chance, kind }
    }
}

/// Evaluate `branches` in order and return the first that fires, or
/// `fallback` if none do.
pub fn roll_ordered<K: Copy>(rng: &mut StdRng, branches: &[Branch<K>], fallback: K) -> K {
    branches
        .iter()
        .find(|branch| rng.gen_bool(branch.chance))
        .map(|branch| branch.kind)
        .unwrap_or(fallback)
}

/// Effective probability of each branch under ordered evaluation.
///
/// The returned vector has one entry per branch, followed by the residual
/// probability of the fallback.
pub fn branch_probabilities<K>(branches: &[Branch<K>]) -> Vec<f64> {
    let mut remaining = 1.0;
    let mut probabilities = Vec::with_capacity(branches.len() + 1);
    for branch in branches {
        probabilities.push(remaining * branch.chance);
        remaining *= 1.0 - branch.chance;
    }
    probabilities.push(remaining);
    probabilities
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Coin {
        First,
        Second,
        Neither,
    }

    #[test]
    fn certain_branch_always_wins() {
        let mut rng = StdRng::seed_from_u64(1);
        let branches = [Branch::new(1.0, Coin::First), Branch::new(1.0, Coin::Second)];
        for _ in 0..100 {
            assert_eq!(roll_ordered(&mut rng, &branches, Coin::Neither), Coin::First);
        }
    }

    #[test]
    fn impossible_branches_fall_through() {
        let mut rng = StdRng::seed_from_u64(2);
        let branches = [Branch::new(0.0, Coin::First), Branch::new(0.0, Coin::Second)];
        for _ in 0..100 {
            assert_eq!(roll_ordered(&mut rng, &branches, Coin::Neither), Coin::Neither);
        }
    }

    #[test]
    fn later_branches_are_conditioned_on_earlier_failures() {
        let branches = [Branch::new(0.5, Coin::First), Branch::new(0.5, Coin::Second)];
        let probabilities = branch_probabilities(&branches);
        assert_eq!(probabilities, vec![0.5, 0.25, 0.25]);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let branches = [
            Branch::new(0.10, Coin::First),
            Branch::new(0.05, Coin::Second),
            Branch::new(0.02, Coin::First),
            Branch::new(0.01, Coin::Second),
        ];
        let total: f64 = branch_probabilities(&branches).iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_chain_is_all_fallback() {
        let mut rng = StdRng::seed_from_u64(3);
        let branches: [Branch<Coin>; 0] = [];
        assert_eq!(roll_ordered(&mut rng, &branches, Coin::Neither), Coin::Neither);
        assert_eq!(branch_probabilities(&branches), vec![1.0]);
    }
}
