use site_api::{chrome_for, views::BodyNode, views::SpanView};

use super::*;

#[derive(Serialize)]
struct TestPage {
    meta: Metadata,
    title: String,
    subtitle: String,
    paragraphs: Vec<String>,
}

#[test]
fn every_template_compiles() {
    let pages = Pages::new().expect("templates");
    for (name, _) in TEMPLATES {
        assert!(pages.env.get_template(name).is_ok(), "{name}");
    }
}

#[test]
fn layout_renders_idle_overlay_and_nav() {
    let pages = Pages::new().expect("templates");
    let page = pages
        .not_found(&chrome_for(None), NotFoundPage::page())
        .expect("render");
    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert!(page.html.contains("<title>Page Not Found — Portfolio</title>"));
    assert!(page.html.contains("clip-path: inset(100% 0% 0% 0%)"));
    assert!(page.html.contains(r#"data-covered-clip="inset(0% 0% 0% 0%)""#));
    assert!(page.html.contains(r#"data-revealed-clip="inset(0% 0% 100% 0%)""#));
    assert!(page.html.contains("data-cover-ms=\"600\""));
    assert!(page.html.contains("PORTFOLIO."));
    assert_eq!(page.html.matches(" data-transition>").count(), 6);
}

#[test]
fn content_is_escaped() {
    let pages = Pages::new().expect("templates");
    let page = TestPage {
        meta: Metadata::new("About — Portfolio", "x"),
        title: "<script>alert(1)</script>".into(),
        subtitle: "A & B".into(),
        paragraphs: vec![],
    };
    let rendered = pages
        .ok("about.html", &chrome_for(None), &page)
        .expect("render");
    assert!(!rendered.html.contains("<script>"));
    assert!(rendered.html.contains("&lt;script&gt;"));
    assert!(rendered.html.contains("A &amp; B"));
}

#[derive(Serialize)]
struct BodyPage {
    meta: Metadata,
    title_lines: [String; 2],
    date: String,
    body: Vec<BodyNode>,
}

#[test]
fn rich_text_renders_marks_and_links() {
    let pages = Pages::new().expect("templates");
    let page = BodyPage {
        meta: Metadata::new("Post — Portfolio Blog", "x"),
        title_lines: ["Hello".into(), String::new()],
        date: "March 4, 2024".into(),
        body: vec![BodyNode::Text {
            tag: "h2",
            spans: vec![SpanView {
                text: "Read more".into(),
                strong: true,
                href: Some("https://example.com".into()),
                ..SpanView::default()
            }],
        }],
    };
    let rendered = pages
        .ok("post.html", &chrome_for(None), &page)
        .expect("render");
    assert!(rendered.html.contains("<h2><a href="));
    assert!(rendered.html.contains("<strong>Read more</strong></a></h2>"));
}
