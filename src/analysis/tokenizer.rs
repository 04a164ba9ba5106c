use std::sync::LazyLock;
use regex::Regex;

/// Letters, digits, underscore and hyphen. Narrower than `\w`, which also
/// takes combining marks and connector punctuation.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}_-]+").expect("word pattern is valid")
});

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;

    fn name(&self) -> &str;
}

/// Lowercasing word tokenizer. Keeps duplicates and source order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTokenizer;

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text)
    }

    fn name(&self) -> &str {
        "standard"
    }
}

pub fn tokenize(content: &str) -> Vec<String> {
    let lowered = content.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
