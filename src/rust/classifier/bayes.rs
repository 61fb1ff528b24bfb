//! Multinomial naive Bayes with TF-IDF reweighted term frequencies.
//!
//! Each class keeps raw term counts while documents are learned, along with the
//! term frequency of every word in every document. Once all documents are in,
//! the counts are replaced by summed `ln(1 + tf) * ln(1 + docs / class_total)`
//! weights. Scoring multiplies the class prior by the weight-based probability
//! of each query token, with unseen tokens given a tiny constant probability.

use std::collections::{HashMap, HashSet};

use ndarray::Array1;

use super::model::{Label, Scores, TextModel};
use super::utils::normalize_log_scores;

/// Probability assigned to a token the class never saw.
const UNSEEN_TOKEN_PROB: f64 = 1e-11;

const NUM_CLASSES: usize = 2;

#[derive(Debug, Clone, Default)]
struct ClassData {
    /// Raw counts until reweighting, TF-IDF weights afterwards.
    freqs: HashMap<String, f64>,
    /// Term frequency of each word in each learned document.
    tf_samples: HashMap<String, Vec<f64>>,
    total: usize,
}

impl ClassData {
    fn learn(&mut self, document: &[String]) {
        if document.is_empty() {
            return;
        }
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for word in document {
            *counts.entry(word.as_str()).or_default() += 1;
        }
        let len = document.len() as f64;
        for (word, count) in counts {
            self.tf_samples
                .entry(word.to_string())
                .or_default()
                .push(count as f64 / len);
            *self.freqs.entry(word.to_string()).or_default() += count as f64;
        }
        self.total += document.len();
    }

    fn reweight(&mut self, learned: usize) {
        if self.total == 0 {
            return;
        }
        let idf = (1.0 + learned as f64 / self.total as f64).ln();
        for (word, samples) in &self.tf_samples {
            let weight: f64 = samples.iter().map(|tf| (1.0 + tf).ln() * idf).sum();
            self.freqs.insert(word.clone(), weight);
        }
    }

    fn word_prob(&self, word: &str) -> f64 {
        match self.freqs.get(word) {
            Some(&weight) if self.total > 0 => weight / self.total as f64,
            _ => UNSEEN_TOKEN_PROB,
        }
    }
}

/// Naive Bayes classifier over two classes with TF-IDF weighting.
#[derive(Debug, Clone, Default)]
pub struct NaiveBayesTfIdf {
    classes: [ClassData; NUM_CLASSES],
    learned: usize,
}

impl NaiveBayesTfIdf {
    pub fn new() -> Self {
        Self::default()
    }

    fn learn(&mut self, document: &[String], label: Label) {
        self.classes[label.index()].learn(document);
        self.learned += 1;
    }

    fn log_priors(&self) -> Array1<f64> {
        let sum: usize = self.classes.iter().map(|c| c.total).sum();
        if sum == 0 {
            return Array1::from_elem(NUM_CLASSES, (1.0 / NUM_CLASSES as f64).ln());
        }
        Array1::from_iter(
            self.classes
                .iter()
                .map(|c| (c.total as f64 / sum as f64).ln()),
        )
    }
}

impl TextModel for NaiveBayesTfIdf {
    fn fit(&mut self, positive_docs: &[Vec<String>], negative_docs: &[Vec<String>]) {
        for doc in positive_docs {
            self.learn(doc, Label::Positive);
        }
        for doc in negative_docs {
            self.learn(doc, Label::Negative);
        }
        let learned = self.learned;
        for class in self.classes.iter_mut() {
            class.reweight(learned);
        }
    }

    fn score_document(&self, tokens: &[String]) -> Scores {
        let mut log_scores = self.log_priors();
        if self.classes.iter().all(|c| c.total == 0) {
            return Scores::new(normalize_log_scores(&log_scores));
        }
        for (i, class) in self.classes.iter().enumerate() {
            log_scores[i] += tokens.iter().map(|t| class.word_prob(t).ln()).sum::<f64>();
        }
        Scores::new(normalize_log_scores(&log_scores))
    }

    fn vocabulary_size(&self) -> usize {
        self.classes
            .iter()
            .flat_map(|c| c.freqs.keys())
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn fitted() -> NaiveBayesTfIdf {
        let mut model = NaiveBayesTfIdf::new();
        model.fit(
            &[doc(&["beer", "ml"])],
            &[doc(&["jaket", "hoodie", "sweater"])],
        );
        model
    }

    #[test]
    fn test_reweighting_replaces_counts() {
        let model = fitted();
        // tf 0.5 in a two-token class, two documents learned in total
        let expected = 1.5f64.ln() * 2.0f64.ln();
        let weight = model.classes[0].freqs["beer"];
        assert!((weight - expected).abs() < 1e-12, "got {}", weight);
    }

    #[test]
    fn test_scores_known_vocabulary() {
        let model = fitted();
        let scores = model.score_document(&doc(&["beer"]));
        assert_eq!(scores.winning_label(), Label::Positive);
        assert!(scores.winning_score() > 0.99);
        assert!((scores.per_class.sum() - 1.0).abs() < 1e-9);

        let scores = model.score_document(&doc(&["hoodie", "sweater"]));
        assert_eq!(scores.winning_label(), Label::Negative);
    }

    #[test]
    fn test_unseen_tokens_fall_back_to_priors() {
        let model = fitted();
        let scores = model.score_document(&doc(&["laptop"]));
        // negative holds three of five tokens
        assert_eq!(scores.winning_label(), Label::Negative);
        assert!((scores.per_class[1] - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_long_documents_do_not_underflow() {
        let model = fitted();
        let tokens: Vec<String> = std::iter::repeat("beer".to_string()).take(2_000).collect();
        let scores = model.score_document(&tokens);
        assert_eq!(scores.winning_label(), Label::Positive);
        assert!(scores.winning_score().is_finite());
    }

    #[test]
    fn test_empty_fit_defaults_to_first_class() {
        let mut model = NaiveBayesTfIdf::new();
        model.fit(&[], &[]);
        let scores = model.score_document(&doc(&["anything"]));
        assert_eq!(scores.winner, 0);
        assert_eq!(scores.winning_score(), 0.5);
        assert_eq!(model.vocabulary_size(), 0);
    }

    #[test]
    fn test_vocabulary_spans_classes() {
        let mut model = NaiveBayesTfIdf::new();
        model.fit(&[doc(&["beer", "wine"])], &[doc(&["wine", "shirt"])]);
        assert_eq!(model.vocabulary_size(), 3);
    }
}
