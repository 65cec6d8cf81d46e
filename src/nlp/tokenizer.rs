//! Word normalization and tokenization
//!
//! Text is lowercased and every character outside `a..=z` acts as a
//! separator. Digits, punctuation, apostrophes and non-ASCII letters never
//! end up inside a token.

/// Splits raw text into normalized lowercase alphabetic words
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum token length to keep
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Tokenize text into words, in order of appearance, duplicates kept
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut tokens = Vec::new();
        let mut current = String::new();

        for c in lowered.chars() {
            if c.is_ascii_lowercase() {
                current.push(c);
            } else if !current.is_empty() {
                self.push_token(&mut tokens, std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            self.push_token(&mut tokens, current);
        }

        tokens
    }

    fn push_token(&self, tokens: &mut Vec<String>, token: String) {
        // Tokens are pure ASCII, so byte length equals char count.
        if token.len() >= self.min_token_length {
            tokens.push(token);
        }
    }
}

/// Normalize a single word the same way the tokenizer does.
///
/// Graph lookups only lowercase, so a query such as `"It's"` does not match
/// anything; callers that want the token form should tokenize first.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}

/// Tokenize with the default tokenizer
pub fn clean_words(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokens = clean_words("Hello world. This is a test.");
        assert_eq!(tokens, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn test_non_letters_are_separators() {
        let tokens = clean_words("it's 42nd-street,new_york!!");
        assert_eq!(tokens, vec!["it", "s", "nd", "street", "new", "york"]);
    }

    #[test]
    fn test_non_ascii_letters_split_words() {
        // Lowercasing happens first, then anything outside a-z separates.
        let tokens = clean_words("Café naïve ÀB");
        assert_eq!(tokens, vec!["caf", "na", "ve", "b"]);
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let tokens = clean_words("The the THE cat");
        assert_eq!(tokens, vec!["the", "the", "the", "cat"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(clean_words("").is_empty());
        assert!(clean_words("  123 ... \n\t").is_empty());
    }

    #[test]
    fn test_whitespace_runs() {
        let tokens = clean_words("  alpha\n\n\tbeta   gamma  ");
        assert_eq!(tokens, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_min_length() {
        let tokenizer = Tokenizer::new().with_min_length(3);
        assert_eq!(tokenizer.tokenize("a an the cats"), vec!["the", "cats"]);
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("Scientist"), "scientist");
    }
}
