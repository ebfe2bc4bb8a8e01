use std::{sync::Arc, time::Duration};

use anyhow::Context;
use content::{ContentStore, FixtureStore, ImageUrlBuilder, SanityClient, SanityConfig, UnavailableStore};
use site_api::SiteContext;
use tracing::{info, warn};

use crate::{cache::PageCache, config::Settings, render::Pages};

pub(crate) struct AppState {
    pub(crate) site: SiteContext,
    pub(crate) pages: Pages,
    pub(crate) cache: PageCache,
}

impl AppState {
    pub(crate) fn new(site: SiteContext, revalidate: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            site,
            pages: Pages::new().context("failed to compile page templates")?,
            cache: PageCache::new(revalidate),
        })
    }

    pub(crate) fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Self::new(
            site_context(settings)?,
            Duration::from_secs(settings.revalidate_seconds),
        )
    }
}

pub(crate) fn site_context(settings: &Settings) -> anyhow::Result<SiteContext> {
    let images = settings
        .sanity_project_id
        .as_ref()
        .map(|project| ImageUrlBuilder::new(project.clone(), settings.sanity_dataset.clone()));

    let store: Arc<dyn ContentStore> = if let Some(path) = &settings.content_fixture {
        let store = FixtureStore::load(path)
            .with_context(|| format!("failed to load content fixture '{}'", path.display()))?;
        info!(path = %path.display(), "serving content from fixture");
        Arc::new(store)
    } else if let Some(project) = &settings.sanity_project_id {
        let config = SanityConfig {
            api_version: settings.sanity_api_version.clone(),
            use_cdn: settings.sanity_use_cdn,
            ..SanityConfig::new(project.clone(), settings.sanity_dataset.clone())
        };
        let client = SanityClient::new(&config).context("invalid content store settings")?;
        info!(endpoint = %client.endpoint(), "serving content from hosted store");
        Arc::new(client)
    } else {
        warn!("no content source configured, pages will show placeholder content");
        Arc::new(UnavailableStore::new("no content source configured"))
    };

    Ok(SiteContext::new(store, images))
}
