use std::collections::HashSet;

/// English stopwords, compiled in as a closed set.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she",
    "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
    "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of",
    "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "s", "t", "can", "will", "just", "don", "should", "now",
];

/// Classical text normalization: strip punctuation, tokenize, drop stopwords.
///
/// This is a standalone utility. The scoring path works on raw text (the
/// lexicon handles its own tokenization), so nothing here feeds the scorer.
pub struct TextPreprocessor {
    stop_words: HashSet<&'static str>,
}

impl TextPreprocessor {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Lowercased tokens with ASCII punctuation removed and stopwords
    /// excluded. Pure and deterministic.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let no_punctuation: String = text
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();

        no_punctuation
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .filter(|word| !self.stop_words.contains(word.as_str()))
            .collect()
    }
}

impl Default for TextPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        let preprocessor = TextPreprocessor::new();
        let tokens = preprocessor.tokenize("CRH's profits soared; investors cheered!");
        assert_eq!(tokens, vec!["crhs", "profits", "soared", "investors", "cheered"]);
    }

    #[test]
    fn drops_stopwords() {
        let preprocessor = TextPreprocessor::new();
        let tokens = preprocessor.tokenize("The company is in the news again");
        assert_eq!(tokens, vec!["company", "news"]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        let preprocessor = TextPreprocessor::new();
        assert!(preprocessor.tokenize("").is_empty());
        assert!(preprocessor.tokenize("  !!!  ").is_empty());
    }

    #[test]
    fn is_deterministic() {
        let preprocessor = TextPreprocessor::new();
        let text = "Strong demand lifts quarterly revenue";
        assert_eq!(preprocessor.tokenize(text), preprocessor.tokenize(text));
    }
}
