use serde::{Deserialize, Serialize};

use crate::ranking::string_hash;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementConfig {
    pub base: u64,
    pub step: u64,
    pub noise_modulus: u32,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            base: 10_000,
            step: 800,
            noise_modulus: 2_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngagementScorer {
    config: EngagementConfig,
}

impl EngagementScorer {
    pub fn new(config: EngagementConfig) -> Self {
        Self { config }
    }

    /// Position-based score plus a hash-derived noise term. Neighbouring
    /// positions may overlap; the sequence is not strictly descending.
    pub fn score(&self, name: &str, seed: u64, index: usize) -> u64 {
        self.base_for(index) + self.noise(name, seed, index)
    }

    pub fn base_for(&self, index: usize) -> u64 {
        self.config
            .base
            .saturating_sub(self.config.step.saturating_mul(index as u64))
    }

    fn noise(&self, name: &str, seed: u64, index: usize) -> u64 {
        if self.config.noise_modulus == 0 {
            return 0;
        }
        let hash = string_hash(&format!("{}{}{}", name, seed, index));
        u64::from(hash % self.config.noise_modulus)
    }
}
