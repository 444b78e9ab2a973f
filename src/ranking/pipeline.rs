use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CandidateItem, CANDIDATES_PER_LIST};
use crate::ranking::{string_hash, EngagementScorer};
use crate::ResultItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            limit: CANDIDATES_PER_LIST,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub item: CandidateItem,
    pub order_key: u32,
    pub engagement: u64,
}

impl RankedCandidate {
    pub fn new(item: CandidateItem, seed: u64) -> Self {
        Self {
            item,
            order_key: string_hash(&format!("{}{}", item.name, seed)),
            engagement: 0,
        }
    }
}

impl From<RankedCandidate> for ResultItem {
    fn from(candidate: RankedCandidate) -> Self {
        ResultItem {
            name: candidate.item.name.to_string(),
            example: candidate.item.example.map(str::to_string),
            engagement: candidate.engagement,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankingPipeline {
    scorer: EngagementScorer,
    limit: usize,
}

impl RankingPipeline {
    pub fn new(scorer: EngagementScorer, limit: usize) -> Self {
        Self { scorer, limit }
    }

    pub fn score(&self, candidates: &mut Vec<RankedCandidate>, seed: u64) {
        // stable: equal keys keep catalogue order
        candidates.sort_by_key(|candidate| candidate.order_key);
        candidates.truncate(self.limit);

        for (index, candidate) in candidates.iter_mut().enumerate() {
            candidate.engagement = self.scorer.score(candidate.item.name, seed, index);
        }
    }

    pub fn rank(&self, items: &[CandidateItem], seed: u64) -> Vec<ResultItem> {
        let mut candidates: Vec<RankedCandidate> = items
            .iter()
            .map(|item| RankedCandidate::new(*item, seed))
            .collect();
        self.score(&mut candidates, seed);

        debug!(
            seed,
            ranked = candidates.len(),
            top = candidates.first().map(|c| c.item.name).unwrap_or_default(),
            "ranked candidate list"
        );

        candidates.into_iter().map(ResultItem::from).collect()
    }
}
