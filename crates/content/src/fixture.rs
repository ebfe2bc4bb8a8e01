use std::{cmp::Reverse, fs, path::Path};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::domain::{AboutInfo, BlogPost, PersonalInfo, Skill, Work};

use crate::{ContentError, ContentStore, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    #[serde(default)]
    pub works: Vec<Work>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default)]
    pub about: Option<AboutInfo>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

pub struct FixtureStore {
    snapshot: ContentSnapshot,
}

impl FixtureStore {
    pub fn new(snapshot: ContentSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Fixture {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: ContentSnapshot = serde_json::from_str(&raw)?;
        Ok(Self::new(snapshot))
    }
}

fn work_summary(work: &Work) -> Work {
    Work {
        body: None,
        gallery: None,
        live_url: None,
        github_url: None,
        ..work.clone()
    }
}

fn post_summary(post: &BlogPost) -> BlogPost {
    BlogPost {
        body: None,
        ..post.clone()
    }
}

#[async_trait]
impl ContentStore for FixtureStore {
    async fn works(&self) -> Result<Vec<Work>> {
        let mut works: Vec<Work> = self.snapshot.works.iter().map(work_summary).collect();
        works.sort_by(|a, b| b.year.cmp(&a.year));
        Ok(works)
    }

    async fn work(&self, slug: &str) -> Result<Option<Work>> {
        Ok(self
            .snapshot
            .works
            .iter()
            .find(|work| work.slug.current == slug)
            .cloned())
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>> {
        let mut posts: Vec<BlogPost> = self.snapshot.posts.iter().map(post_summary).collect();
        // Undated posts sort after dated ones.
        posts.sort_by_key(|post| (post.date.is_none(), Reverse(post.date.clone())));
        Ok(posts)
    }

    async fn blog_post(&self, slug: &str) -> Result<Option<BlogPost>> {
        Ok(self
            .snapshot
            .posts
            .iter()
            .find(|post| post.slug.current == slug)
            .cloned())
    }

    async fn personal_info(&self) -> Result<Option<PersonalInfo>> {
        Ok(self.snapshot.personal_info.clone())
    }

    async fn about(&self) -> Result<Option<AboutInfo>> {
        Ok(self.snapshot.about.clone())
    }

    async fn skills(&self) -> Result<Vec<Skill>> {
        let mut skills = self.snapshot.skills.clone();
        skills.sort_by(|a, b| a.row.cmp(&b.row).then_with(|| a.name.cmp(&b.name)));
        Ok(skills)
    }
}

#[cfg(test)]
#[path = "tests/fixture_tests.rs"]
mod tests;
