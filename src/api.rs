use serde::{Deserialize, Serialize};
use viral_audit::{AuditError, AuditReport, AuditRequest, Category, CategoryReport, Platform};

#[derive(Debug, Default, Deserialize)]
pub struct ApiAuditRequest {
    pub handle: Option<String>,
    pub platform: Option<String>,
    pub categories: Option<Vec<String>>,
    pub request_id: Option<String>,
}

impl ApiAuditRequest {
    pub fn to_request(&self) -> Result<AuditRequest, AuditError> {
        AuditRequest::new(
            self.handle.as_deref().unwrap_or_default(),
            self.platform.as_deref().unwrap_or(Platform::Twitter.id()),
        )
    }

    pub fn categories(&self) -> Result<Vec<Category>, AuditError> {
        self.categories
            .iter()
            .flatten()
            .map(|value| Category::parse(value))
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct ApiAuditResponse {
    pub request_id: String,
    #[serde(flatten)]
    pub report: AuditReport,
}

#[derive(Debug, Serialize)]
pub struct ApiCategoryResponse {
    pub request_id: String,
    pub handle: String,
    pub platform: Platform,
    pub platform_name: String,
    #[serde(flatten)]
    pub report: CategoryReport,
}

impl ApiCategoryResponse {
    pub fn new(request_id: String, request: &AuditRequest, report: CategoryReport) -> Self {
        Self {
            request_id,
            handle: request.handle.clone(),
            platform: request.platform,
            platform_name: request.platform.label().to_string(),
            report,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiPlatform {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiCatalogResponse {
    pub platforms: Vec<ApiPlatform>,
    pub categories: Vec<&'static str>,
}

impl ApiCatalogResponse {
    pub fn build() -> Self {
        Self {
            platforms: Platform::ALL
                .iter()
                .map(|platform| ApiPlatform {
                    id: platform.id(),
                    name: platform.label(),
                })
                .collect(),
            categories: Category::ALL.iter().map(|category| category.id()).collect(),
        }
    }
}
