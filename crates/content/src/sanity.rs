use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use shared::domain::{AboutInfo, BlogPost, PersonalInfo, Skill, Work};
use tracing::debug;
use url::Url;

use crate::{queries, ContentError, ContentStore, Result};

const DEFAULT_API_VERSION: &str = "2024-01-01";

#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
}

impl SanityConfig {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            use_cdn: true,
        }
    }

    pub fn query_endpoint(&self) -> Result<Url> {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        let version = self.api_version.trim_start_matches('v');
        let raw = format!(
            "https://{}.{host}.sanity.io/v{version}/data/query/{}",
            self.project_id, self.dataset
        );
        Ok(Url::parse(&raw)?)
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Clone)]
pub struct SanityClient {
    http: Client,
    endpoint: Url,
}

impl SanityClient {
    pub fn new(config: &SanityConfig) -> Result<Self> {
        Ok(Self::from_endpoint(config.query_endpoint()?))
    }

    pub fn from_endpoint(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn fetch<T: DeserializeOwned>(&self, query: &str, params: &[(&str, &str)]) -> Result<T> {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            for (name, value) in params {
                let encoded = serde_json::to_string(value)?;
                pairs.append_pair(&format!("${name}"), &encoded);
            }
        }

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        debug!(bytes = body.len(), "content query answered");
        let envelope: QueryResponse<T> = serde_json::from_slice(&body)?;
        Ok(envelope.result)
    }
}

#[async_trait]
impl ContentStore for SanityClient {
    async fn works(&self) -> Result<Vec<Work>> {
        self.fetch::<Option<Vec<Work>>>(queries::WORKS, &[])
            .await
            .map(Option::unwrap_or_default)
    }

    async fn work(&self, slug: &str) -> Result<Option<Work>> {
        self.fetch(queries::WORK_BY_SLUG, &[("slug", slug)]).await
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>> {
        self.fetch::<Option<Vec<BlogPost>>>(queries::POSTS, &[])
            .await
            .map(Option::unwrap_or_default)
    }

    async fn blog_post(&self, slug: &str) -> Result<Option<BlogPost>> {
        self.fetch(queries::POST_BY_SLUG, &[("slug", slug)]).await
    }

    async fn personal_info(&self) -> Result<Option<PersonalInfo>> {
        self.fetch(queries::PERSONAL_INFO, &[]).await
    }

    async fn about(&self) -> Result<Option<AboutInfo>> {
        self.fetch(queries::ABOUT, &[]).await
    }

    async fn skills(&self) -> Result<Vec<Skill>> {
        self.fetch::<Option<Vec<Skill>>>(queries::SKILLS, &[])
            .await
            .map(Option::unwrap_or_default)
    }
}

#[cfg(test)]
#[path = "tests/sanity_tests.rs"]
mod tests;
