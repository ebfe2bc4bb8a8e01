use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
}

impl Metadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub title: String,
    pub href: String,
    pub transition: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chrome {
    pub site_name: String,
    pub nav: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpanView {
    pub text: String,
    pub strong: bool,
    pub em: bool,
    pub code: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyNode {
    Text {
        tag: &'static str,
        spans: Vec<SpanView>,
    },
    Image {
        src: String,
        alt: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub tagline_first: String,
    pub tagline_rest: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRows {
    pub top: Vec<String>,
    pub bottom: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkCard {
    pub label: String,
    pub title: String,
    pub href: String,
    pub category: String,
    pub year: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ImageView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    pub title: String,
    pub href: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<ImageView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub twitter: String,
    pub linkedin: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub meta: Metadata,
    pub hero: Hero,
    pub skills: SkillRows,
    pub works: Vec<WorkCard>,
    pub posts: Vec<PostCard>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorksPage {
    pub meta: Metadata,
    pub works: Vec<WorkCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub wide: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkDetailPage {
    pub meta: Metadata,
    pub title: String,
    pub category: String,
    pub year: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<ImageView>,
    pub body: Vec<BodyNode>,
    pub gallery: Vec<GalleryImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current: u32,
    pub total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<u32>,
    pub pages: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogIndexPage {
    pub meta: Metadata,
    pub total_posts: usize,
    pub posts: Vec<PostCard>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPostPage {
    pub meta: Metadata,
    pub title_lines: [String; 2],
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<ImageView>,
    pub body: Vec<BodyNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutPage {
    pub meta: Metadata,
    pub title: String,
    pub subtitle: String,
    pub paragraphs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillsPage {
    pub meta: Metadata,
    pub skills: SkillRows,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPage {
    pub meta: Metadata,
    pub contact: Contact,
}
