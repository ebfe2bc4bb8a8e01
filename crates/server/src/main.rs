use std::{future::Future, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use shared::path::{is_normalized, normalize_path};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

mod app_state;
mod cache;
mod config;
mod render;

use app_state::AppState;
use cache::CachedPage;
use config::load_settings;
use render::{NotFoundPage, PageError};

#[derive(Debug, Deserialize)]
struct BlogQuery {
    page: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let state = AppState::from_settings(&settings)?;
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.bind_addr))?;
    info!(%addr, revalidate_seconds = settings.revalidate_seconds, "site listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/works", get(works))
        .route("/works/:slug", get(work))
        .route("/blog", get(blog))
        .route("/blog/:slug", get(post))
        .route("/skills", get(skills))
        .route("/contact", get(contact))
        .route("/healthz", get(healthz))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn serve<F>(state: &AppState, key: String, render: F) -> Response
where
    F: Future<Output = Result<CachedPage, PageError>>,
{
    if let Some(page) = state.cache.get(&key).await {
        debug!(%key, "page cache hit");
        return page.into_response();
    }
    match render.await {
        Ok(page) => {
            state.cache.insert(key, page.clone()).await;
            page.into_response()
        }
        Err(err) => err.into_response(),
    }
}

async fn home(State(state): State<Arc<AppState>>) -> Response {
    serve(&state, "/".into(), async {
        let (chrome, page) = site_api::home(&state.site).await;
        state.pages.ok("home.html", &chrome, &page)
    })
    .await
}

async fn about(State(state): State<Arc<AppState>>) -> Response {
    serve(&state, "/about".into(), async {
        let (chrome, page) = tokio::join!(
            site_api::chrome(&state.site),
            site_api::about(&state.site)
        );
        state.pages.ok("about.html", &chrome, &page)
    })
    .await
}

async fn works(State(state): State<Arc<AppState>>) -> Response {
    serve(&state, "/works".into(), async {
        let (chrome, page) = tokio::join!(
            site_api::chrome(&state.site),
            site_api::works(&state.site)
        );
        state.pages.ok("works.html", &chrome, &page)
    })
    .await
}

async fn work(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    serve(&state, format!("/works/{slug}"), async {
        let (chrome, page) = tokio::join!(
            site_api::chrome(&state.site),
            site_api::work_detail(&state.site, &slug)
        );
        match page {
            Ok(page) => state.pages.ok("work.html", &chrome, &page),
            Err(err) => {
                debug!(%slug, error = %err, "work lookup missed");
                state.pages.not_found(&chrome, NotFoundPage::work())
            }
        }
    })
    .await
}

async fn blog(State(state): State<Arc<AppState>>, Query(query): Query<BlogQuery>) -> Response {
    let page_number = query.page.and_then(|raw| raw.trim().parse::<u32>().ok());
    let key = match page_number {
        Some(number) => format!("/blog?page={number}"),
        None => "/blog".to_string(),
    };
    serve(&state, key, async {
        let (chrome, page) = tokio::join!(
            site_api::chrome(&state.site),
            site_api::blog_index(&state.site, page_number)
        );
        state.pages.ok("blog.html", &chrome, &page)
    })
    .await
}

async fn post(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    serve(&state, format!("/blog/{slug}"), async {
        let (chrome, page) = tokio::join!(
            site_api::chrome(&state.site),
            site_api::blog_post(&state.site, &slug)
        );
        match page {
            Ok(page) => state.pages.ok("post.html", &chrome, &page),
            Err(err) => {
                debug!(%slug, error = %err, "post lookup missed");
                state.pages.not_found(&chrome, NotFoundPage::post())
            }
        }
    })
    .await
}

async fn skills(State(state): State<Arc<AppState>>) -> Response {
    serve(&state, "/skills".into(), async {
        let (chrome, page) = tokio::join!(
            site_api::chrome(&state.site),
            site_api::skills(&state.site)
        );
        state.pages.ok("skills.html", &chrome, &page)
    })
    .await
}

async fn contact(State(state): State<Arc<AppState>>) -> Response {
    serve(&state, "/contact".into(), async {
        let (chrome, page) = site_api::contact(&state.site).await;
        state.pages.ok("contact.html", &chrome, &page)
    })
    .await
}

async fn fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let path = uri.path();
    if !is_normalized(path) {
        let mut target = format!("/{}", normalize_path(path).trim_start_matches('/'));
        if let Some(query) = uri.query() {
            target.push('?');
            target.push_str(query);
        }
        return Redirect::permanent(&target).into_response();
    }

    let chrome = site_api::chrome(&state.site).await;
    match state.pages.not_found(&chrome, NotFoundPage::page()) {
        Ok(page) => page.into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
