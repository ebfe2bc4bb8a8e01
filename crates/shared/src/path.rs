pub fn normalize_path(href: &str) -> String {
    let without_query = href.split('?').next().unwrap_or_default();
    let trimmed = without_query.strip_suffix('/').unwrap_or(without_query);
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn path_matches(delivered: &str, pending: &str) -> bool {
    delivered == pending || delivered.strip_suffix('/') == Some(pending)
}

pub fn is_normalized(path: &str) -> bool {
    !path.contains('?') && normalize_path(path) == path
}

#[cfg(test)]
#[path = "tests/path_tests.rs"]
mod tests;
