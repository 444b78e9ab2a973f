pub mod engagement;
pub mod hash;
pub mod pipeline;

pub use engagement::{EngagementConfig, EngagementScorer};
pub use hash::{handle_seed, string_hash};
pub use pipeline::{RankedCandidate, RankingConfig, RankingPipeline};
