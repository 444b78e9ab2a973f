pub mod audit;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ranking;
pub mod telemetry;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AuditConfig;
use crate::ranking::handle_seed;

pub use crate::audit::{
    analyze_competitor, audit_competitor, performance_percent, AuditReport, AuditRequest,
    CategoryReport, ReportRow,
};
pub use crate::error::AuditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    TikTok,
    Instagram,
    YouTube,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::TikTok,
        Platform::Instagram,
        Platform::YouTube,
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "twitter" => Some(Platform::Twitter),
            "tiktok" => Some(Platform::TikTok),
            "instagram" => Some(Platform::Instagram),
            "youtube" => Some(Platform::YouTube),
            _ => None,
        }
    }

    /// Unrecognised identifiers use the Twitter tables.
    pub fn from_str_or_default(value: &str) -> Self {
        Self::from_str(value).unwrap_or(Platform::Twitter)
    }

    pub fn id(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::TikTok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::YouTube => "youtube",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter/X",
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::YouTube => "YouTube",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Trends,
    Hashtags,
    Formats,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Trends, Category::Hashtags, Category::Formats];

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "trends" => Some(Category::Trends),
            "hashtags" => Some(Category::Hashtags),
            "formats" => Some(Category::Formats),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Result<Self, AuditError> {
        Self::from_str(value.trim()).ok_or_else(|| AuditError::InvalidCategory(value.to_string()))
    }

    pub fn id(self) -> &'static str {
        match self {
            Category::Trends => "trends",
            Category::Hashtags => "hashtags",
            Category::Formats => "formats",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Trends => "Top Performing Trends",
            Category::Hashtags => "Most Effective Hashtags",
            Category::Formats => "Top Content Formats",
        }
    }

    pub fn column_title(self) -> &'static str {
        match self {
            Category::Trends => "Trend",
            Category::Hashtags => "Hashtag",
            Category::Formats => "Content Format",
        }
    }

    pub fn has_examples(self) -> bool {
        !matches!(self, Category::Hashtags)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub engagement: u64,
}

/// Ranked mock analytics for a handle with the default engagement model.
/// Unknown platforms fall back to Twitter.
pub fn generate(handle: &str, platform: &str, category: Category) -> Vec<ResultItem> {
    generate_with_config(
        handle,
        Platform::from_str_or_default(platform),
        category,
        &AuditConfig::default(),
    )
}

pub fn generate_with_config(
    handle: &str,
    platform: Platform,
    category: Category,
    config: &AuditConfig,
) -> Vec<ResultItem> {
    let seed = handle_seed(handle);
    debug!(
        platform = platform.id(),
        category = category.id(),
        seed,
        "generating mock analytics"
    );
    config
        .pipeline()
        .rank(catalog::candidates(platform, category), seed)
}

pub fn format_number(value: u64) -> String {
    let mut chars: Vec<char> = value.to_string().chars().collect();
    let mut result = String::new();
    let mut count = 0usize;

    while let Some(ch) = chars.pop() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}

pub fn format_percent(value: u32) -> String {
    format!("{}%", value)
}
