use regex::Regex;

/// Turns raw text into lowercase alphabetic tokens.
///
/// Every maximal run of characters outside `[a-z]` (after lower-casing) acts as a
/// single separator, so digits, punctuation, whitespace and non-ASCII letters
/// all split words. The compiled pattern belongs to the normalizer value.
#[derive(Debug, Clone)]
pub struct Normalizer {
    separators: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            separators: Regex::new("[^a-z]+").expect("separator pattern is valid"),
        }
    }

    /// Splits `text` into tokens matching `[a-z]+`, in input order.
    ///
    /// # Example
    /// ```
    /// use classify::Normalizer;
    ///
    /// let normalizer = Normalizer::new();
    /// assert_eq!(normalizer.normalize("Prost BEER 100ml!"), vec!["prost", "beer", "ml"]);
    /// assert!(normalizer.normalize("  42 -- ").is_empty());
    /// ```
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let spaced = self.separators.replace_all(&lowered, " ");
        spaced
            .trim_matches(' ')
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("Hoodie Sweater JAKET"),
            vec!["hoodie", "sweater", "jaket"]
        );
    }

    #[test]
    fn test_separator_runs_collapse() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("...beer,,, (330ml) -- cold!!"),
            vec!["beer", "ml", "cold"]
        );
    }

    #[test]
    fn test_no_letters_yields_nothing() {
        let normalizer = Normalizer::new();
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("   \t\n ").is_empty());
        assert!(normalizer.normalize("100 / 200 - 3.5%").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_separate_words() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("café crème"), vec!["caf", "cr", "me"]);
    }

    #[test]
    fn test_tokens_are_lowercase_alpha() {
        let normalizer = Normalizer::new();
        let inputs = [
            "Bintang Pilsener 620ML Botol",
            "KAOS_POLOS-hitam/putih #1",
            "a b c 1 2 3",
            "\u{1F37A} beer \u{1F37A}",
        ];
        for input in inputs {
            for token in normalizer.normalize(input) {
                assert!(!token.is_empty());
                assert!(token.chars().all(|c| c.is_ascii_lowercase()), "bad token {:?}", token);
            }
        }
    }

    #[test]
    fn test_instances_are_independent() {
        let a = Normalizer::new();
        let b = a.clone();
        assert_eq!(a.normalize("Same Input"), b.normalize("Same Input"));
    }
}
