//! Prompt topic classification for demo image pools.
//!
//! When the service runs against the stub backend, the demo image is
//! picked from a topic-specific pool. Groups are tested in a fixed order
//! (nature, city, people, product) against the lowercased prompt; the
//! first matching group wins, falling back to [`PromptTopic::Art`].

use std::sync::LazyLock;

use regex::Regex;

/// Topic groups recognised by the demo classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTopic {
    Nature,
    City,
    People,
    Product,
    Art,
}

impl PromptTopic {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptTopic::Nature => "nature",
            PromptTopic::City => "city",
            PromptTopic::People => "people",
            PromptTopic::Product => "product",
            PromptTopic::Art => "art",
        }
    }
}

static NATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(forest|tree|mountain|nature|landscape|river|ocean)").expect("valid regex")
});

static CITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(city|street|urban|architecture|building|skyscraper)").expect("valid regex")
});

static PEOPLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(person|portrait|people|model|face)").expect("valid regex"));

static PRODUCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(product|phone|watch|shoe|bag|object)").expect("valid regex"));

/// Classify a prompt into a [`PromptTopic`].
///
/// Case-insensitive (the text is lowercased before matching), first
/// matching group wins.
pub fn classify_topic(text: &str) -> PromptTopic {
    let lower = text.to_lowercase();
    if NATURE_RE.is_match(&lower) {
        PromptTopic::Nature
    } else if CITY_RE.is_match(&lower) {
        PromptTopic::City
    } else if PEOPLE_RE.is_match(&lower) {
        PromptTopic::People
    } else if PRODUCT_RE.is_match(&lower) {
        PromptTopic::Product
    } else {
        PromptTopic::Art
    }
}
