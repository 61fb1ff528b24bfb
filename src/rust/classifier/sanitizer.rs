use super::library::{Canonical, Library};
use super::normalizer::Normalizer;

/// Raw text to token list, shared by training and inference.
///
/// A client owns exactly one sanitizer, so the documents it learns from and the
/// queries it scores are tokenized under the same library state.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    normalizer: Normalizer,
    library: Library,
}

impl Sanitizer {
    pub fn new(library: Library) -> Self {
        Self {
            normalizer: Normalizer::new(),
            library,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Sanitizes every text and concatenates the surviving tokens into one sequence.
    ///
    /// # Example
    /// ```
    /// use classify::{Library, Sanitizer};
    ///
    /// let sanitizer = Sanitizer::new(Library::from_pairs([("prost", "-"), ("bir", "beer")]));
    /// assert_eq!(
    ///     sanitizer.sanitize(&["Prost bir 100ml", "a cold one"]),
    ///     vec!["beer", "ml", "cold", "one"]
    /// );
    /// ```
    pub fn sanitize<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        let mut tokens = Vec::new();
        for text in texts {
            self.push_tokens(text.as_ref(), &mut tokens);
        }
        tokens
    }

    pub fn sanitize_one(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        self.push_tokens(text, &mut tokens);
        tokens
    }

    fn push_tokens(&self, text: &str, out: &mut Vec<String>) {
        for raw in self.normalizer.normalize(text) {
            if let Canonical::Token(token) = self.library.canonicalize(&raw) {
                out.push(token);
            }
        }
    }
}
