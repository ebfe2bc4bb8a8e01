use chrono::{DateTime, Utc};

pub fn short_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

pub fn long_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

pub fn split_first_word(text: &str) -> (String, String) {
    let mut words = text.split(' ');
    let first = words.next().unwrap_or_default().to_string();
    let rest = words.collect::<Vec<_>>().join(" ");
    (first, rest)
}

pub fn split_title(title: &str) -> [String; 2] {
    let words: Vec<&str> = title.split(' ').collect();
    let mid = words.len().div_ceil(2);
    [words[..mid].join(" "), words[mid..].join(" ")]
}

pub fn ordinal_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
