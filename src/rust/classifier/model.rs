use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use ndarray::Array1;

use super::bayes::NaiveBayesTfIdf;
use super::error::ClassifyError;
use super::utils::argmax;

/// Tag marking a positive training example.
pub const TAG_POSITIVE: &str = "1";
/// Tag marking a negative training example.
pub const TAG_NEGATIVE: &str = "-1";

/// One of the two classes. The discriminant is the class's fixed score index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Positive = 0,
    Negative = 1,
}

impl Label {
    /// Parses a training tag. Anything other than `"1"` or `"-1"` is unknown.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            TAG_POSITIVE => Some(Self::Positive),
            TAG_NEGATIVE => Some(Self::Negative),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Positive => TAG_POSITIVE,
            Self::Negative => TAG_NEGATIVE,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// A training text with its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledExample {
    pub text: String,
    pub label: Label,
}

impl LabeledExample {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    /// Builds examples from `(text, tag)` pairs.
    ///
    /// A text that appears more than once keeps only its last tag, and texts whose
    /// final tag is unknown are dropped. First-seen order is preserved.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Vec<Self> {
        let mut order: Vec<String> = Vec::new();
        let mut tags: HashMap<String, String> = HashMap::new();
        for (text, tag) in pairs {
            if !tags.contains_key(&text) {
                order.push(text.clone());
            }
            tags.insert(text, tag);
        }
        order
            .into_iter()
            .filter_map(|text| {
                let label = Label::from_tag(&tags[&text])?;
                Some(Self { text, label })
            })
            .collect()
    }
}

/// Per-class scores of one document, indexed by [`Label::index`].
#[derive(Debug, Clone, PartialEq)]
pub struct Scores {
    pub per_class: Array1<f64>,
    pub winner: usize,
}

impl Scores {
    pub fn new(per_class: Array1<f64>) -> Self {
        let winner = argmax(&per_class);
        Self { per_class, winner }
    }

    pub fn winning_label(&self) -> Label {
        if self.winner == Label::Positive.index() {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    pub fn winning_score(&self) -> f64 {
        self.per_class[self.winner]
    }
}

/// A binary statistical model fit on tokenized documents.
///
/// Implementations must finish any reweighting inside `fit`; a fitted model is
/// only read afterwards, so it has to be shareable across threads.
pub trait TextModel: fmt::Debug + Send + Sync {
    /// Learns from the positive and negative documents, then reweights term frequencies.
    fn fit(&mut self, positive_docs: &[Vec<String>], negative_docs: &[Vec<String>]);

    /// Scores a token sequence against both classes.
    fn score_document(&self, tokens: &[String]) -> Scores;

    /// Number of distinct tokens seen during fit, across classes.
    fn vocabulary_size(&self) -> usize;
}

/// Registered classification methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    NaiveBayesTfIdf,
}

lazy_static! {
    static ref METHODS: HashMap<&'static str, Method> = {
        let mut methods = HashMap::new();
        methods.insert("naive-bayes-tfidf", Method::NaiveBayesTfIdf);
        // Older clients name the same backend without the weighting suffix.
        methods.insert("naive-bayes", Method::NaiveBayesTfIdf);
        methods
    };
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NaiveBayesTfIdf => "naive-bayes-tfidf",
        }
    }

    /// Looks a method up by name.
    pub fn from_name(name: &str) -> Result<Self, ClassifyError> {
        METHODS
            .get(name)
            .copied()
            .ok_or_else(|| ClassifyError::UnsupportedMethod(name.to_string()))
    }

    /// All accepted method names, aliases included, sorted.
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<_> = METHODS.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Creates an unfitted model for this method.
    pub fn create_model(&self) -> Box<dyn TextModel> {
        match self {
            Self::NaiveBayesTfIdf => Box::new(NaiveBayesTfIdf::new()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_label_tags() {
        assert_eq!(Label::from_tag("1"), Some(Label::Positive));
        assert_eq!(Label::from_tag("-1"), Some(Label::Negative));
        assert_eq!(Label::from_tag("0"), None);
        assert_eq!(Label::from_tag(" 1"), None);
        assert_eq!(Label::from_tag(""), None);
        assert_eq!(Label::Negative.tag(), "-1");
    }

    #[test]
    fn test_examples_from_pairs() {
        let pairs = vec![
            ("bir bintang".to_string(), "1".to_string()),
            ("kaos polos".to_string(), "-1".to_string()),
            ("bir bintang".to_string(), "-1".to_string()),
            ("unlabeled".to_string(), "maybe".to_string()),
            ("kaos polos".to_string(), "0".to_string()),
        ];
        let examples = LabeledExample::from_pairs(pairs);
        assert_eq!(examples, vec![LabeledExample::new("bir bintang", Label::Negative)]);
    }

    #[test]
    fn test_method_registry() {
        assert_eq!(Method::from_name("naive-bayes-tfidf").unwrap(), Method::NaiveBayesTfIdf);
        assert_eq!("naive-bayes".parse::<Method>().unwrap(), Method::NaiveBayesTfIdf);
        assert!(matches!(
            Method::from_name("svm"),
            Err(ClassifyError::UnsupportedMethod(name)) if name == "svm"
        ));
        assert_eq!(Method::names(), vec!["naive-bayes", "naive-bayes-tfidf"]);
        assert_eq!(Method::NaiveBayesTfIdf.to_string(), "naive-bayes-tfidf");
    }

    #[test]
    fn test_scores_winner() {
        let scores = Scores::new(array![0.25, 0.75]);
        assert_eq!(scores.winner, 1);
        assert_eq!(scores.winning_label(), Label::Negative);
        assert_eq!(scores.winning_score(), 0.75);
    }
}
