use std::sync::Arc;

use chrono::{Datelike, Utc};
use content::{ContentError, ContentStore, Fit, ImageUrlBuilder};
use shared::{
    domain::{AboutInfo, BlogPost, ImageRef, PersonalInfo, Skill, SkillRow, Work},
    error::ApiError,
};
use tracing::warn;
use transition::TransitionLink;

pub mod fallback;
pub mod format;
pub mod text;
pub mod views;

use views::*;

pub const POSTS_PER_PAGE: usize = 9;
pub const HOME_POST_COUNT: usize = 3;
pub const HOME_TAG_COUNT: usize = 2;

pub const WORK_NOT_FOUND_TITLE: &str = "Work Not Found — Portfolio";
pub const POST_NOT_FOUND_TITLE: &str = "Post Not Found — Portfolio";
pub const PAGE_NOT_FOUND_TITLE: &str = "Page Not Found — Portfolio";

const NAV: [(&str, &str); 5] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Works", "/works"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: Option<u32>,
    pub fit: Option<Fit>,
}

impl ImageSize {
    pub const WORK_THUMBNAIL: Self = Self::cropped(640, 448);
    pub const WORK_HERO: Self = Self::cropped(1800, 900);
    pub const WORK_BODY: Self = Self::wide(1400);
    pub const WORK_GALLERY: Self = Self::wide(1200);
    pub const POST_CARD: Self = Self::wide(600);
    pub const POST_COVER: Self = Self::wide(1600);
    pub const POST_BODY: Self = Self::wide(1200);
    pub const PORTRAIT: Self = Self {
        width: 800,
        height: Some(1000),
        fit: None,
    };

    const fn wide(width: u32) -> Self {
        Self {
            width,
            height: None,
            fit: None,
        }
    }

    const fn cropped(width: u32, height: u32) -> Self {
        Self {
            width,
            height: Some(height),
            fit: Some(Fit::Crop),
        }
    }
}

#[derive(Clone)]
pub struct SiteContext {
    pub store: Arc<dyn ContentStore>,
    pub images: Option<ImageUrlBuilder>,
}

impl SiteContext {
    pub fn new(store: Arc<dyn ContentStore>, images: Option<ImageUrlBuilder>) -> Self {
        Self { store, images }
    }

    pub fn image_src(&self, image: &ImageRef, size: ImageSize) -> Option<String> {
        let asset_url = || {
            image
                .asset
                .as_ref()
                .and_then(|asset| asset.url.clone())
                .filter(|url| !url.is_empty())
        };
        let (Some(images), Some(reference)) = (&self.images, image.reference()) else {
            return asset_url();
        };
        let mut request = images.image(reference).width(size.width);
        if let Some(height) = size.height {
            request = request.height(height);
        }
        if let Some(fit) = size.fit {
            request = request.fit(fit);
        }
        match request.url() {
            Ok(url) => Some(url),
            Err(err) => {
                warn!(%reference, error = %err, "unusable image reference");
                asset_url()
            }
        }
    }

    fn image_view(&self, image: &ImageRef, size: ImageSize, alt: &str) -> Option<ImageView> {
        self.image_src(image, size).map(|src| ImageView {
            src,
            alt: alt_text(image, || alt.to_string()),
        })
    }
}

fn alt_text(image: &ImageRef, fallback: impl FnOnce() -> String) -> String {
    image
        .alt
        .clone()
        .filter(|alt| !alt.is_empty())
        .unwrap_or_else(fallback)
}

fn degrade<T>(page: &'static str, what: &'static str, result: Result<T, ContentError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(page, what, error = %err, "content fetch failed, using fallback");
            None
        }
    }
}

fn degrade_list<T>(
    page: &'static str,
    what: &'static str,
    result: Result<Vec<T>, ContentError>,
) -> Vec<T> {
    degrade(page, what, result).unwrap_or_default()
}

fn degrade_doc<T>(
    page: &'static str,
    what: &'static str,
    result: Result<Option<T>, ContentError>,
) -> Option<T> {
    degrade(page, what, result).flatten()
}

pub async fn chrome(ctx: &SiteContext) -> Chrome {
    let info = degrade_doc("layout", "personal_info", ctx.store.personal_info().await);
    chrome_for(info.as_ref())
}

pub fn chrome_for(info: Option<&PersonalInfo>) -> Chrome {
    let site_name = info
        .and_then(|info| info.name.as_deref())
        .filter(|name| !name.is_empty())
        .map(|name| format!("{}.", name.to_uppercase()))
        .unwrap_or_else(|| fallback::SITE_NAME.to_string());
    let nav = NAV
        .iter()
        .enumerate()
        .map(|(index, (title, href))| NavLink {
            label: format::ordinal_label(index),
            title: (*title).to_string(),
            href: (*href).to_string(),
            transition: TransitionLink::new(*href).intercepts(),
        })
        .collect();
    Chrome { site_name, nav }
}

pub async fn home(ctx: &SiteContext) -> (Chrome, HomePage) {
    let (info, skills, works, posts) = futures::join!(
        ctx.store.personal_info(),
        ctx.store.skills(),
        ctx.store.works(),
        ctx.store.blog_posts(),
    );
    let info = degrade_doc("home", "personal_info", info);
    let skills = degrade_list("home", "skills", skills);
    let works = degrade_list("home", "works", works);
    let posts = degrade_list("home", "posts", posts);

    let tagline = info
        .as_ref()
        .and_then(|i| i.tagline.clone())
        .unwrap_or_else(|| fallback::TAGLINE.to_string());
    let (tagline_first, tagline_rest) = format::split_first_word(&tagline);
    let bio = info
        .as_ref()
        .and_then(|i| i.bio.clone())
        .unwrap_or_else(|| fallback::BIO.to_string());

    let page = HomePage {
        meta: Metadata::new(
            "Portfolio — Creative Developer",
            fallback::BIO,
        ),
        hero: Hero {
            tagline_first,
            tagline_rest,
            bio,
        },
        skills: skill_rows(&skills),
        works: work_cards(ctx, works),
        posts: posts
            .iter()
            .take(HOME_POST_COUNT)
            .map(|post| post_card(ctx, post))
            .collect(),
        contact: contact_for(info.as_ref()),
    };
    (chrome_for(info.as_ref()), page)
}

pub async fn works(ctx: &SiteContext) -> WorksPage {
    let works = degrade_list("works", "works", ctx.store.works().await);
    WorksPage {
        meta: Metadata::new(
            "Works — Portfolio",
            "Selected works and projects showcasing web development, design, and full-stack capabilities.",
        ),
        works: work_cards(ctx, works),
    }
}

fn work_cards(ctx: &SiteContext, works: Vec<Work>) -> Vec<WorkCard> {
    let works = if works.is_empty() {
        fallback::works()
    } else {
        works
    };
    works
        .iter()
        .enumerate()
        .map(|(index, work)| WorkCard {
            label: format::ordinal_label(index),
            title: work.title.clone(),
            href: format!("/works/{}", work.slug.current),
            category: work.category.clone(),
            year: work.year.clone(),
            tags: work
                .tags
                .iter()
                .flatten()
                .take(HOME_TAG_COUNT)
                .cloned()
                .collect(),
            thumbnail: work
                .image
                .as_ref()
                .and_then(|image| ctx.image_view(image, ImageSize::WORK_THUMBNAIL, &work.title)),
        })
        .collect()
}

pub async fn work_detail(ctx: &SiteContext, slug: &str) -> Result<WorkDetailPage, ApiError> {
    let work = degrade_doc("work", "work", ctx.store.work(slug).await)
        .ok_or_else(|| ApiError::not_found(WORK_NOT_FOUND_TITLE))?;

    let description = work.description.clone().filter(|d| !d.is_empty());
    let meta = Metadata::new(
        format!("{} — Portfolio", work.title),
        description
            .clone()
            .unwrap_or_else(|| format!("{} — {} project", work.title, work.category)),
    );
    let body = work
        .body
        .as_deref()
        .map(|blocks| text::render_body(blocks, |image| ctx.image_src(image, ImageSize::WORK_BODY)))
        .unwrap_or_default();
    let gallery_images = work.gallery.as_deref().unwrap_or_default();
    let odd = gallery_images.len() % 2 != 0;
    let gallery = gallery_images
        .iter()
        .enumerate()
        .filter_map(|(index, image)| {
            let src = ctx.image_src(image, ImageSize::WORK_GALLERY)?;
            let alt = alt_text(image, || format!("{} screenshot {}", work.title, index + 1));
            Some(GalleryImage {
                src,
                alt,
                wide: index == 0 && odd,
            })
        })
        .collect();

    Ok(WorkDetailPage {
        meta,
        hero: work
            .image
            .as_ref()
            .and_then(|image| ctx.image_view(image, ImageSize::WORK_HERO, &work.title)),
        tags: work.tags.clone().unwrap_or_default(),
        description,
        body,
        gallery,
        live_url: work.live_url.clone().filter(|u| !u.is_empty()),
        github_url: work.github_url.clone().filter(|u| !u.is_empty()),
        title: work.title,
        category: work.category,
        year: work.year,
    })
}

pub async fn blog_index(ctx: &SiteContext, page: Option<u32>) -> BlogIndexPage {
    let posts = degrade_list("blog", "posts", ctx.store.blog_posts().await);
    let total = posts.len().div_ceil(POSTS_PER_PAGE).max(1) as u32;
    let current = page.unwrap_or(1).clamp(1, total);
    let start = (current as usize - 1) * POSTS_PER_PAGE;

    BlogIndexPage {
        meta: Metadata::new(
            "Blog — Portfolio",
            "Thoughts on web development, design, animation, and the craft of building for the web.",
        ),
        total_posts: posts.len(),
        posts: posts
            .iter()
            .skip(start)
            .take(POSTS_PER_PAGE)
            .map(|post| post_card(ctx, post))
            .collect(),
        pagination: Pagination {
            current,
            total,
            previous: (current > 1).then(|| current - 1),
            next: (current < total).then(|| current + 1),
            pages: (1..=total).collect(),
        },
    }
}

fn post_card(ctx: &SiteContext, post: &BlogPost) -> PostCard {
    PostCard {
        title: post.title.clone(),
        href: format!("/blog/{}", post.slug.current),
        date: format::short_date(post.published_at()),
        excerpt: post.excerpt.clone().filter(|e| !e.is_empty()),
        cover: post
            .cover_image
            .as_ref()
            .and_then(|image| ctx.image_view(image, ImageSize::POST_CARD, &post.title)),
    }
}

pub async fn blog_post(ctx: &SiteContext, slug: &str) -> Result<BlogPostPage, ApiError> {
    let post = degrade_doc("post", "post", ctx.store.blog_post(slug).await)
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND_TITLE))?;

    let excerpt = post.excerpt.clone().filter(|e| !e.is_empty());
    let body = post
        .body
        .as_deref()
        .map(|blocks| text::render_body(blocks, |image| ctx.image_src(image, ImageSize::POST_BODY)))
        .unwrap_or_default();

    Ok(BlogPostPage {
        meta: Metadata::new(
            format!("{} — Portfolio Blog", post.title),
            excerpt
                .clone()
                .unwrap_or_else(|| format!("{} — blog post", post.title)),
        ),
        title_lines: format::split_title(&post.title),
        date: format::long_date(post.published_at()),
        cover: post
            .cover_image
            .as_ref()
            .and_then(|image| ctx.image_view(image, ImageSize::POST_COVER, &post.title)),
        excerpt,
        body,
    })
}

pub async fn about(ctx: &SiteContext) -> AboutPage {
    let about = degrade_doc("about", "about", ctx.store.about().await);
    about_page(ctx, about.as_ref())
}

fn about_page(ctx: &SiteContext, about: Option<&AboutInfo>) -> AboutPage {
    let non_empty = |value: Option<&String>| value.filter(|v| !v.is_empty()).cloned();
    let title = non_empty(about.and_then(|a| a.title.as_ref()));
    let paragraphs = match non_empty(about.and_then(|a| a.description.as_ref())) {
        Some(description) => description.split('\n').map(str::to_string).collect(),
        None => fallback::ABOUT_PARAGRAPHS
            .iter()
            .map(|p| (*p).to_string())
            .collect(),
    };
    let image = about
        .and_then(|a| a.image.as_ref())
        .and_then(|image| {
            ctx.image_view(image, ImageSize::PORTRAIT, title.as_deref().unwrap_or("Profile"))
        });

    AboutPage {
        meta: Metadata::new("About — Portfolio", "Learn more about me."),
        subtitle: non_empty(about.and_then(|a| a.subtitle.as_ref()))
            .unwrap_or_else(|| fallback::ABOUT_SUBTITLE.to_string()),
        title: title.unwrap_or_else(|| fallback::ABOUT_TITLE.to_string()),
        paragraphs,
        image,
        resume_url: about.and_then(AboutInfo::resume_url).map(str::to_string),
    }
}

pub async fn skills(ctx: &SiteContext) -> SkillsPage {
    let skills = degrade_list("skills", "skills", ctx.store.skills().await);
    SkillsPage {
        meta: Metadata::new(
            "Skills — Portfolio",
            "My technical skills and areas of expertise in web development and design.",
        ),
        skills: skill_rows(&skills),
    }
}

pub fn skill_rows(skills: &[Skill]) -> SkillRows {
    let row = |which: SkillRow, fallback: &[&str]| {
        let mut names: Vec<String> = skills
            .iter()
            .filter(|skill| skill.row == which)
            .map(|skill| skill.name.clone())
            .collect();
        if names.is_empty() {
            names = fallback.iter().map(|name| (*name).to_string()).collect();
        }
        names.extend_from_within(..);
        names
    };
    SkillRows {
        top: row(SkillRow::TOP, &fallback::SKILLS_TOP),
        bottom: row(SkillRow::BOTTOM, &fallback::SKILLS_BOTTOM),
    }
}

pub async fn contact(ctx: &SiteContext) -> (Chrome, ContactPage) {
    let info = degrade_doc("contact", "personal_info", ctx.store.personal_info().await);
    let page = ContactPage {
        meta: Metadata::new(
            "Contact — Portfolio",
            "Get in touch — let's create something together.",
        ),
        contact: contact_for(info.as_ref()),
    };
    (chrome_for(info.as_ref()), page)
}

pub fn contact_for(info: Option<&PersonalInfo>) -> Contact {
    let field = |pick: fn(&PersonalInfo) -> Option<&String>, fallback: &str| {
        info.and_then(pick)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };
    Contact {
        email: field(|i| i.email.as_ref(), fallback::EMAIL),
        github: field(|i| i.github.as_ref(), fallback::GITHUB),
        twitter: field(|i| i.twitter.as_ref(), fallback::TWITTER),
        linkedin: field(|i| i.linkedin.as_ref(), fallback::LINKEDIN),
        year: Utc::now().year(),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
