use ndarray::Array1;

/// Turns per-class log scores into posteriors summing to 1.
///
/// Falls back to a uniform distribution when no class has finite mass.
pub(crate) fn normalize_log_scores(log_scores: &Array1<f64>) -> Array1<f64> {
    let n = log_scores.len();
    let max = log_scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return Array1::from_elem(n, 1.0 / n as f64);
    }
    let exp = log_scores.mapv(|s| (s - max).exp());
    let sum = exp.sum();
    exp / sum
}

/// Index of the first maximum. Ties resolve to the lowest index.
pub(crate) fn argmax(scores: &Array1<f64>) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate() {
        if score > scores[best] {
            best = i;
        }
    }
    best
}
