use viral_audit::catalog::{self, CandidateItem};
use viral_audit::ranking::{
    handle_seed, string_hash, EngagementConfig, EngagementScorer, RankedCandidate,
    RankingPipeline,
};
use viral_audit::{Category, Platform};

fn default_pipeline() -> RankingPipeline {
    RankingPipeline::new(EngagementScorer::new(EngagementConfig::default()), 10)
}

#[test]
fn engagement_base_steps_down_by_position() {
    let scorer = EngagementScorer::new(EngagementConfig::default());
    let bases: Vec<u64> = (0..10).map(|index| scorer.base_for(index)).collect();

    assert_eq!(bases[0], 10_000);
    assert_eq!(bases[1], 9_200);
    assert_eq!(bases[9], 2_800);
}

#[test]
fn engagement_adds_hash_noise() {
    let scorer = EngagementScorer::new(EngagementConfig::default());
    let expected = 10_000 + u64::from(string_hash("Tutorial2940") % 2_000);

    assert_eq!(scorer.score("Tutorial", 294, 0), expected);
    assert_eq!(scorer.score("Tutorial", 294, 0), 10_897);
}

#[test]
fn engagement_base_saturates_instead_of_going_negative() {
    let scorer = EngagementScorer::new(EngagementConfig {
        base: 1_000,
        step: 800,
        noise_modulus: 0,
    });

    assert_eq!(scorer.score("x", 0, 1), 200);
    assert_eq!(scorer.score("x", 0, 5), 0);
}

#[test]
fn candidates_are_keyed_by_name_and_seed() {
    let item = CandidateItem::new("Tutorial", "Building a Twitter clone with React");
    let candidate = RankedCandidate::new(item, 294);

    assert_eq!(candidate.order_key, string_hash("Tutorial294"));
    assert_eq!(candidate.engagement, 0);
}

#[test]
fn pipeline_orders_by_ascending_hash() {
    let seed = handle_seed("abc");
    let list = catalog::candidates(Platform::Twitter, Category::Trends);

    let mut candidates: Vec<RankedCandidate> = list
        .iter()
        .map(|item| RankedCandidate::new(*item, seed))
        .collect();
    default_pipeline().score(&mut candidates, seed);

    assert!(candidates
        .windows(2)
        .all(|pair| pair[0].order_key <= pair[1].order_key));
    assert_eq!(candidates[0].item.name, "Tutorial");
}

#[test]
fn pipeline_keeps_catalogue_order_on_ties() {
    let items = [
        CandidateItem::new("Same", "first"),
        CandidateItem::new("Same", "second"),
        CandidateItem::new("Same", "third"),
    ];

    let ranked = default_pipeline().rank(&items, 7);
    let examples: Vec<_> = ranked.iter().filter_map(|item| item.example.as_deref()).collect();

    assert_eq!(examples, vec!["first", "second", "third"]);
}

#[test]
fn pipeline_truncates_to_limit() {
    let pipeline = RankingPipeline::new(EngagementScorer::new(EngagementConfig::default()), 3);
    let list = catalog::candidates(Platform::Instagram, Category::Formats);

    let ranked = pipeline.rank(list, handle_seed("x"));
    let full = default_pipeline().rank(list, handle_seed("x"));

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[..], full[..3]);
}

#[test]
fn pipeline_without_noise_is_strictly_descending() {
    let pipeline = RankingPipeline::new(
        EngagementScorer::new(EngagementConfig {
            noise_modulus: 0,
            ..EngagementConfig::default()
        }),
        10,
    );

    let ranked = pipeline.rank(catalog::candidates(Platform::YouTube, Category::Trends), 42);
    let engagement: Vec<u64> = ranked.iter().map(|item| item.engagement).collect();

    assert_eq!(
        engagement,
        vec![10_000, 9_200, 8_400, 7_600, 6_800, 6_000, 5_200, 4_400, 3_600, 2_800]
    );
}

#[test]
fn pipeline_handles_empty_input() {
    assert!(default_pipeline().rank(&[], 294).is_empty());
}
