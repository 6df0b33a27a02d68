//! # Assignment Policy
//!
//! Chooses which delivery agent gets an order. Selection is uniform over the candidate pool;
//! ratings only decide eligibility, never weight the draw.
//!
//! The random source is always passed in. [`AssignmentPolicy`] owns a [`StdRng`] so the order
//! actor can carry it in its context, and a fixed seed makes every pick reproducible.

use crate::model::DeliveryAgent;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Agents whose rating is at least `threshold`, in directory order.
pub fn by_minimum_rating(agents: &[DeliveryAgent], threshold: f64) -> Vec<DeliveryAgent> {
    agents
        .iter()
        .filter(|agent| agent.rated_at_least(threshold))
        .cloned()
        .collect()
}

/// One agent drawn uniformly from `agents`, or `None` when the pool is empty.
pub fn random_eligible<R: Rng + ?Sized>(agents: &[DeliveryAgent], rng: &mut R) -> Option<DeliveryAgent> {
    agents.choose(rng).cloned()
}

/// Owns the random source used for agent selection.
#[derive(Debug, Clone)]
pub struct AssignmentPolicy {
    rng: StdRng,
}

impl AssignmentPolicy {
    /// Reproducible policy: the same seed yields the same sequence of picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when a seed is given, otherwise entropy-backed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    pub fn pick(&mut self, agents: &[DeliveryAgent]) -> Option<DeliveryAgent> {
        random_eligible(agents, &mut self.rng)
    }
}
