use serde::Serialize;
use tracing::{debug, info};

use crate::config::AuditConfig;
use crate::error::AuditError;
use crate::{generate_with_config, Category, Platform, ResultItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    pub handle: String,
    pub platform: Platform,
}

impl AuditRequest {
    /// Trims the handle and strips one leading `@`. An empty handle is
    /// rejected; an unknown platform falls back to Twitter.
    pub fn new(handle: &str, platform: &str) -> Result<Self, AuditError> {
        let trimmed = handle.trim();
        let handle = trimmed.strip_prefix('@').unwrap_or(trimmed);
        if handle.is_empty() {
            return Err(AuditError::MissingHandle);
        }
        Ok(Self {
            handle: handle.to_string(),
            platform: Platform::from_str_or_default(platform.trim()),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub rank: usize,
    #[serde(flatten)]
    pub item: ResultItem,
    pub performance: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    pub title: String,
    pub column_title: String,
    pub max_engagement: u64,
    pub rows: Vec<ReportRow>,
}

impl CategoryReport {
    pub fn new(category: Category, items: Vec<ResultItem>) -> Self {
        let max_engagement = items.iter().map(|item| item.engagement).max().unwrap_or(0);
        let rows = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| ReportRow {
                rank: index + 1,
                performance: performance_percent(item.engagement, max_engagement),
                item,
            })
            .collect();

        Self {
            category,
            title: category.title().to_string(),
            column_title: category.column_title().to_string(),
            max_engagement,
            rows,
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &ResultItem> {
        self.rows.iter().map(|row| &row.item)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub handle: String,
    pub platform: Platform,
    pub platform_name: String,
    pub categories: Vec<CategoryReport>,
}

impl AuditReport {
    pub fn category(&self, category: Category) -> Option<&CategoryReport> {
        self.categories
            .iter()
            .find(|report| report.category == category)
    }
}

/// Engagement as a rounded percentage of the best result in the set.
pub fn performance_percent(engagement: u64, max_engagement: u64) -> u32 {
    if max_engagement == 0 {
        return 0;
    }
    (engagement as f64 / max_engagement as f64 * 100.0).round() as u32
}

/// Waits out the configured simulated latency, then ranks one category.
/// Dropping the returned future cancels the wait.
pub async fn analyze_competitor(
    request: &AuditRequest,
    category: Category,
    config: &AuditConfig,
) -> Vec<ResultItem> {
    let delay = config.latency.delay();
    if !delay.is_zero() {
        debug!(delay_ms = config.latency.simulated_ms, "simulating analysis latency");
        tokio::time::sleep(delay).await;
    }
    generate_with_config(&request.handle, request.platform, category, config)
}

pub async fn audit_competitor(
    request: &AuditRequest,
    categories: &[Category],
    config: &AuditConfig,
) -> AuditReport {
    let all = Category::ALL;
    let categories: &[Category] = if categories.is_empty() {
        &all
    } else {
        categories
    };

    let mut reports = Vec::with_capacity(categories.len());
    for category in categories {
        let items = analyze_competitor(request, *category, config).await;
        reports.push(CategoryReport::new(*category, items));
    }

    info!(
        handle = %request.handle,
        platform = request.platform.id(),
        categories = reports.len(),
        "competitor audit complete"
    );

    AuditReport {
        handle: request.handle.clone(),
        platform: request.platform,
        platform_name: request.platform.label().to_string(),
        categories: reports,
    }
}
