use super::*;

fn builder() -> ImageUrlBuilder {
    ImageUrlBuilder::new("abc123", "production")
}

#[test]
fn bare_reference_maps_to_cdn_path() {
    let url = builder()
        .image("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg")
        .url()
        .expect("url");
    assert_eq!(
        url,
        "https://cdn.sanity.io/images/abc123/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg"
    );
}

#[test]
fn sizing_is_appended_as_query_parameters() {
    let url = builder()
        .image("image-abc-1800x900-png")
        .width(640)
        .height(448)
        .fit(Fit::Crop)
        .url()
        .expect("url");
    assert!(url.ends_with("/abc-1800x900.png?w=640&h=448&fit=crop"), "{url}");
}

#[test]
fn malformed_references_are_rejected() {
    for reference in [
        "",
        "file-abc-pdf",
        "image-abc-png",
        "image-abc-12xNaN-png",
        "image--100x100-png",
    ] {
        let err = builder().image(reference).url().expect_err(reference);
        assert!(matches!(err, ContentError::InvalidImageReference(_)));
    }
}

#[test]
fn fit_parses_case_insensitively() {
    assert_eq!("FillMax".parse::<Fit>(), Ok(Fit::FillMax));
    assert!("stretch".parse::<Fit>().is_err());
}
