use std::path::PathBuf;

use async_trait::async_trait;
use shared::domain::{AboutInfo, BlogPost, PersonalInfo, Skill, Work};
use thiserror::Error;

mod fixture;
pub mod image;
pub mod queries;
mod sanity;

pub use fixture::{ContentSnapshot, FixtureStore};
pub use image::{Fit, ImageRequest, ImageUrlBuilder};
pub use sanity::{SanityClient, SanityConfig};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("content store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid content payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to read content fixture '{}': {source}", path.display())]
    Fixture {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid content store url: {0}")]
    Url(#[from] url::ParseError),
    #[error("content store unavailable: {0}")]
    Unavailable(String),
    #[error("invalid image reference '{0}'")]
    InvalidImageReference(String),
}

pub type Result<T> = std::result::Result<T, ContentError>;

/// List operations return summary projections ordered newest first; detail
/// operations return `None` when no document has the requested slug.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn works(&self) -> Result<Vec<Work>>;
    async fn work(&self, slug: &str) -> Result<Option<Work>>;
    async fn blog_posts(&self) -> Result<Vec<BlogPost>>;
    async fn blog_post(&self, slug: &str) -> Result<Option<BlogPost>>;
    async fn personal_info(&self) -> Result<Option<PersonalInfo>>;
    async fn about(&self) -> Result<Option<AboutInfo>>;
    async fn skills(&self) -> Result<Vec<Skill>>;
}

pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T> {
        Err(ContentError::Unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl ContentStore for UnavailableStore {
    async fn works(&self) -> Result<Vec<Work>> {
        self.fail()
    }

    async fn work(&self, _slug: &str) -> Result<Option<Work>> {
        self.fail()
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>> {
        self.fail()
    }

    async fn blog_post(&self, _slug: &str) -> Result<Option<BlogPost>> {
        self.fail()
    }

    async fn personal_info(&self) -> Result<Option<PersonalInfo>> {
        self.fail()
    }

    async fn about(&self) -> Result<Option<AboutInfo>> {
        self.fail()
    }

    async fn skills(&self) -> Result<Vec<Skill>> {
        self.fail()
    }
}
