pub const WORKS: &str = r#"*[_type == "work"] | order(year desc) {
    _id, title, slug, category, year, tags, description, image
}"#;

pub const WORK_BY_SLUG: &str = r#"*[_type == "work" && slug.current == $slug][0] {
    _id, title, slug, category, year, tags, description, image,
    body[] {
        ...,
        _type == "image" => { ..., asset-> }
    },
    gallery[] { ..., asset-> },
    liveUrl, githubUrl
}"#;

pub const POSTS: &str = r#"*[_type == "post"] | order(date desc) {
    _id, title, slug, date, excerpt, coverImage
}"#;

pub const POST_BY_SLUG: &str = r#"*[_type == "post" && slug.current == $slug][0] {
    _id, title, slug, date, excerpt, body, coverImage
}"#;

pub const PERSONAL_INFO: &str = r#"*[_type == "personalInfo"][0] {
    _id, name, tagline, bio, email, github, twitter, linkedin
}"#;

pub const ABOUT: &str = r#"*[_type == "about"][0] {
    _id, title, subtitle, description, image,
    resume {
        asset->{
            url
        }
    }
}"#;

pub const SKILLS: &str = r#"*[_type == "skill"] | order(row asc, name asc) {
    _id, name, row
}"#;
