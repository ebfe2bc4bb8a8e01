use std::{
    io::Write,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    body::{self, Body},
    http::{header, Request, StatusCode},
};
use content::{ContentSnapshot, ContentStore, FixtureStore, UnavailableStore};
use shared::domain::{AboutInfo, BlogPost, PersonalInfo, Skill, Work};
use site_api::SiteContext;
use tower::ServiceExt;

use super::*;
use crate::config::Settings;

fn snapshot() -> ContentSnapshot {
    serde_json::from_value(serde_json::json!({
        "works": [{
            "_id": "w1",
            "title": "Atlas",
            "slug": { "current": "atlas" },
            "category": "Web",
            "year": "2024",
            "tags": ["Rust"]
        }],
        "posts": [{
            "_id": "p1",
            "title": "Shipping a portfolio",
            "slug": { "current": "shipping" },
            "date": "2024-03-04"
        }],
        "personalInfo": { "_id": "info", "name": "Sahar", "tagline": "Builder of things" }
    }))
    .expect("snapshot")
}

struct CountingStore {
    inner: FixtureStore,
    works_calls: AtomicUsize,
    info_calls: AtomicUsize,
}

#[async_trait]
impl ContentStore for CountingStore {
    async fn works(&self) -> content::Result<Vec<Work>> {
        self.works_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.works().await
    }

    async fn work(&self, slug: &str) -> content::Result<Option<Work>> {
        self.inner.work(slug).await
    }

    async fn blog_posts(&self) -> content::Result<Vec<BlogPost>> {
        self.inner.blog_posts().await
    }

    async fn blog_post(&self, slug: &str) -> content::Result<Option<BlogPost>> {
        self.inner.blog_post(slug).await
    }

    async fn personal_info(&self) -> content::Result<Option<PersonalInfo>> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.personal_info().await
    }

    async fn about(&self) -> content::Result<Option<AboutInfo>> {
        self.inner.about().await
    }

    async fn skills(&self) -> content::Result<Vec<Skill>> {
        self.inner.skills().await
    }
}

fn counting_app(ttl: Duration) -> (Router, Arc<CountingStore>) {
    let store = Arc::new(CountingStore {
        inner: FixtureStore::new(snapshot()),
        works_calls: AtomicUsize::new(0),
        info_calls: AtomicUsize::new(0),
    });
    let state = AppState::new(SiteContext::new(store.clone(), None), ttl).expect("state");
    (build_router(Arc::new(state)), store)
}

fn test_app() -> Router {
    counting_app(Duration::from_secs(60)).0
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8(body.to_vec()).expect("utf8"))
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, body) = get(test_app(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn home_renders_store_content() {
    let (status, body) = get(test_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("SAHAR."));
    assert!(body.contains("Builder"));
    assert!(body.contains("Atlas"));
    assert!(body.contains("Shipping a portfolio"));
    assert!(body.contains("Mar 4, 2024"));
}

#[tokio::test]
async fn every_page_route_renders() {
    let app = test_app();
    for uri in ["/about", "/works", "/works/atlas", "/blog", "/blog/shipping", "/skills", "/contact"] {
        let (status, _) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn unknown_work_slug_is_a_404_page() {
    let (status, body) = get(test_app(), "/works/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Work Not Found — Portfolio"));
}

#[tokio::test]
async fn unknown_post_slug_is_a_404_page() {
    let (status, body) = get(test_app(), "/blog/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Post Not Found — Portfolio"));
}

#[tokio::test]
async fn unknown_path_is_a_404_page() {
    let (status, body) = get(test_app(), "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found — Portfolio"));
}

#[tokio::test]
async fn trailing_slash_redirects_permanently() {
    for (from, to) in [
        ("/about/", "/about"),
        ("/blog/?page=2", "/blog?page=2"),
        ("/works/atlas/", "/works/atlas"),
    ] {
        let request = Request::get(from).body(Body::empty()).expect("request");
        let response = test_app().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT, "{from}");
        assert_eq!(
            response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some(to)
        );
    }
}

#[tokio::test]
async fn malformed_blog_page_falls_back_to_first_page() {
    let (status, body) = get(test_app(), "/blog?page=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("All Articles (1)"));
}

#[tokio::test]
async fn pages_are_cached_until_revalidation() {
    let (app, store) = counting_app(Duration::from_secs(60));
    get(app.clone(), "/works").await;
    get(app.clone(), "/works").await;
    assert_eq!(store.works_calls.load(Ordering::SeqCst), 1);

    let (app, store) = counting_app(Duration::ZERO);
    get(app.clone(), "/works").await;
    get(app.clone(), "/works").await;
    assert_eq!(store.works_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unavailable_store_still_renders_placeholders() {
    let state = AppState::new(
        SiteContext::new(Arc::new(UnavailableStore::new("offline")), None),
        Duration::ZERO,
    )
    .expect("state");
    let (status, body) = get(build_router(Arc::new(state)), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("PORTFOLIO."));
    assert!(body.contains("E-Commerce Platform"));
    assert!(body.contains("hello@example.com"));
}

#[tokio::test]
async fn fixture_setting_selects_fixture_store() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(serde_json::to_string(&snapshot()).expect("json").as_bytes())
        .expect("write");
    let settings = Settings {
        content_fixture: Some(file.path().to_path_buf()),
        ..Settings::default()
    };
    let site = app_state::site_context(&settings).expect("site");
    let works = site.store.works().await.expect("works");
    assert_eq!(works[0].title, "Atlas");
    assert!(site.images.is_none());

    let missing = Settings {
        content_fixture: Some("/nonexistent/content.json".into()),
        ..Settings::default()
    };
    assert!(app_state::site_context(&missing).is_err());
}

#[tokio::test]
async fn no_content_source_uses_unavailable_store() {
    let site = app_state::site_context(&Settings::default()).expect("site");
    assert!(site.store.works().await.is_err());
}

#[tokio::test]
async fn unrelated_query_strings_share_one_cache_entry() {
    let (app, store) = counting_app(Duration::from_secs(60));
    for uri in ["/works", "/works?utm=1", "/works?utm=2&ref=feed"] {
        let (status, _) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
    assert_eq!(store.works_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blog_pages_are_cached_per_page_number() {
    let (app, store) = counting_app(Duration::from_secs(60));
    let before = store.info_calls.load(Ordering::SeqCst);
    get(app.clone(), "/blog").await;
    get(app.clone(), "/blog?utm=x").await;
    get(app.clone(), "/blog?page=1").await;
    get(app.clone(), "/blog?page=1&utm=x").await;
    assert_eq!(store.info_calls.load(Ordering::SeqCst) - before, 2);
}

#[tokio::test]
async fn home_and_contact_fetch_personal_info_once() {
    let (app, store) = counting_app(Duration::ZERO);
    let (_, body) = get(app.clone(), "/").await;
    assert!(body.contains("SAHAR."));
    assert_eq!(store.info_calls.load(Ordering::SeqCst), 1);

    let (_, body) = get(app.clone(), "/contact").await;
    assert!(body.contains("SAHAR."));
    assert_eq!(store.info_calls.load(Ordering::SeqCst), 2);
}
