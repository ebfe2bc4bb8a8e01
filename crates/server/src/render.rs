use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::{context, Environment};
use serde::Serialize;
use site_api::{
    views::{Chrome, Metadata},
    PAGE_NOT_FOUND_TITLE, POST_NOT_FOUND_TITLE, WORK_NOT_FOUND_TITLE,
};
use thiserror::Error;
use tracing::error;
use transition::{ContentPose, Coverage, TransitionTiming, PAGE_EASE};

use crate::cache::CachedPage;

const TEMPLATES: [(&str, &str); 11] = [
    ("layout.html", include_str!("../templates/layout.html")),
    ("macros.html", include_str!("../templates/macros.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("works.html", include_str!("../templates/works.html")),
    ("work.html", include_str!("../templates/work.html")),
    ("blog.html", include_str!("../templates/blog.html")),
    ("post.html", include_str!("../templates/post.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("skills.html", include_str!("../templates/skills.html")),
    ("contact.html", include_str!("../templates/contact.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

#[derive(Debug, Error)]
pub(crate) enum PageError {
    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self, "failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

impl IntoResponse for CachedPage {
    fn into_response(self) -> Response {
        (self.status, Html(self.html)).into_response()
    }
}

#[derive(Debug, Clone, Serialize)]
struct OverlayView {
    clip_path: String,
    covered_clip_path: String,
    revealed_clip_path: String,
    content_transform: String,
    ease: &'static str,
    cover_ms: u64,
    reveal_ms: u64,
}

impl OverlayView {
    fn idle(timing: &TransitionTiming) -> Self {
        Self {
            clip_path: Coverage::NONE.covering_inset(),
            covered_clip_path: Coverage::FULL.covering_inset(),
            revealed_clip_path: Coverage::NONE.revealing_inset(),
            content_transform: ContentPose::REST.css_transform(),
            ease: PAGE_EASE,
            cover_ms: timing.cover.as_millis() as u64,
            reveal_ms: timing.reveal.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct NotFoundPage {
    meta: Metadata,
    heading: &'static str,
    back_href: &'static str,
    back_label: &'static str,
}

impl NotFoundPage {
    fn new(title: &str, heading: &'static str, back_href: &'static str, back_label: &'static str) -> Self {
        Self {
            meta: Metadata::new(title, "The page you are looking for does not exist."),
            heading,
            back_href,
            back_label,
        }
    }

    pub(crate) fn work() -> Self {
        Self::new(WORK_NOT_FOUND_TITLE, "Work not found", "/works", "All Works")
    }

    pub(crate) fn post() -> Self {
        Self::new(POST_NOT_FOUND_TITLE, "Post not found", "/blog", "All Articles")
    }

    pub(crate) fn page() -> Self {
        Self::new(PAGE_NOT_FOUND_TITLE, "Page not found", "/", "Back Home")
    }
}

pub(crate) struct Pages {
    env: Environment<'static>,
    overlay: OverlayView,
}

impl Pages {
    pub(crate) fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self {
            env,
            overlay: OverlayView::idle(&TransitionTiming::default()),
        })
    }

    pub(crate) fn render<P: Serialize>(
        &self,
        template: &str,
        status: StatusCode,
        chrome: &Chrome,
        page: &P,
    ) -> Result<CachedPage, PageError> {
        let html = self.env.get_template(template)?.render(context! {
            chrome => chrome,
            page => page,
            overlay => &self.overlay,
        })?;
        Ok(CachedPage { status, html })
    }

    pub(crate) fn ok<P: Serialize>(
        &self,
        template: &str,
        chrome: &Chrome,
        page: &P,
    ) -> Result<CachedPage, PageError> {
        self.render(template, StatusCode::OK, chrome, page)
    }

    pub(crate) fn not_found(&self, chrome: &Chrome, page: NotFoundPage) -> Result<CachedPage, PageError> {
        self.render("not_found.html", StatusCode::NOT_FOUND, chrome, &page)
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
