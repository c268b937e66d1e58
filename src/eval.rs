//! Offline evaluation metrics for extraction and narrative quality.
//!
//! Not part of the live request path. Extraction quality is measured with
//! set precision/recall/F1; narrative quality with n-gram overlap and a
//! simplified unigram-precision BLEU.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Precision/recall/F1 over entity sets, rounded to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractionScores {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// N-gram overlap scores, rounded to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NgramScores {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Narrative quality bundle: 2-gram recall/F1 plus unigram BLEU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NarrativeScores {
    pub ngram2_recall: f64,
    pub ngram2_f1: f64,
    pub unigram_bleu: f64,
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Set precision/recall/F1 with the empty-set conventions: both empty is a
/// perfect score, exactly one empty is zero.
pub fn precision_recall_f1(pred: &HashSet<String>, gold: &HashSet<String>) -> ExtractionScores {
    if pred.is_empty() && gold.is_empty() {
        return ExtractionScores {
            precision: 1.0,
            recall: 1.0,
            f1: 1.0,
        };
    }
    if pred.is_empty() || gold.is_empty() {
        return ExtractionScores {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
        };
    }

    let tp = pred.intersection(gold).count() as f64;
    let p = tp / pred.len() as f64;
    let r = tp / gold.len() as f64;
    let f1 = if p + r > 0.0 { 2.0 * p * r / (p + r) } else { 0.0 };
    ExtractionScores {
        precision: round4(p),
        recall: round4(r),
        f1: round4(f1),
    }
}

/// Evaluate predicted entities against a gold list.
pub fn evaluate_extraction(pred: &[String], gold: &[String]) -> ExtractionScores {
    let pred_set: HashSet<String> = pred.iter().cloned().collect();
    let gold_set: HashSet<String> = gold.iter().cloned().collect();
    precision_recall_f1(&pred_set, &gold_set)
}

fn ngrams(tokens: &[String], n: usize) -> HashSet<Vec<String>> {
    if tokens.len() < n {
        return HashSet::new();
    }
    tokens.windows(n).map(|w| w.to_vec()).collect()
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// N-gram overlap between reference and hypothesis (default use is n = 2).
/// An empty reference n-gram set yields all zeros.
pub fn ngram_overlap(reference: &str, hypothesis: &str, n: usize) -> NgramScores {
    let ref_ng = ngrams(&tokenize(reference), n);
    let hyp_ng = ngrams(&tokenize(hypothesis), n);

    if ref_ng.is_empty() {
        return NgramScores {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
        };
    }

    let overlap = ref_ng.intersection(&hyp_ng).count() as f64;
    let precision = if hyp_ng.is_empty() {
        0.0
    } else {
        overlap / hyp_ng.len() as f64
    };
    let recall = overlap / ref_ng.len() as f64;
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    NgramScores {
        precision: round4(precision),
        recall: round4(recall),
        f1: round4(f1),
    }
}

/// Simplified BLEU: unigram precision of the hypothesis against reference
/// words. Empty hypothesis scores 0.0.
pub fn unigram_bleu(reference: &str, hypothesis: &str) -> f64 {
    let ref_words = tokenize(reference);
    let hyp_words = tokenize(hypothesis);
    if hyp_words.is_empty() {
        return 0.0;
    }
    let matches = hyp_words.iter().filter(|w| ref_words.contains(w)).count();
    round4(matches as f64 / hyp_words.len() as f64)
}

/// Narrative quality: 2-gram recall/F1 and unigram BLEU.
pub fn evaluate_narrative(reference: &str, hypothesis: &str) -> NarrativeScores {
    let ng = ngram_overlap(reference, hypothesis, 2);
    NarrativeScores {
        ngram2_recall: ng.recall,
        ngram2_f1: ng.f1,
        unigram_bleu: unigram_bleu(reference, hypothesis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn two_thirds_overlap() {
        let scores = precision_recall_f1(&set(&["a", "b", "c"]), &set(&["b", "c", "d"]));
        assert_eq!(scores.precision, 0.6667);
        assert_eq!(scores.recall, 0.6667);
        assert_eq!(scores.f1, 0.6667);
    }

    #[test]
    fn empty_set_conventions() {
        let perfect = precision_recall_f1(&set(&[]), &set(&[]));
        assert_eq!(perfect.precision, 1.0);
        assert_eq!(perfect.f1, 1.0);

        let miss = precision_recall_f1(&set(&["a"]), &set(&[]));
        assert_eq!(miss.precision, 0.0);
        assert_eq!(miss.f1, 0.0);

        let blind = precision_recall_f1(&set(&[]), &set(&["a"]));
        assert_eq!(blind.recall, 0.0);
    }

    #[test]
    fn evaluate_extraction_dedups_via_sets() {
        let pred = vec!["a".to_string(), "a".to_string(), "b".to_string()];
        let gold = vec!["a".to_string(), "b".to_string()];
        let scores = evaluate_extraction(&pred, &gold);
        assert_eq!(scores.f1, 1.0);
    }

    #[test]
    fn bigram_overlap_partial() {
        let scores = ngram_overlap("the quick brown fox", "the quick fox", 2);
        // reference bigrams: {the quick, quick brown, brown fox};
        // hypothesis bigrams: {the quick, quick fox}; overlap = 1
        assert_eq!(scores.recall, 0.3333);
        assert_eq!(scores.precision, 0.5);
        assert!(scores.f1 > 0.0);
    }

    #[test]
    fn empty_reference_scores_zero() {
        let scores = ngram_overlap("", "some hypothesis text", 2);
        assert_eq!(scores.precision, 0.0);
        assert_eq!(scores.recall, 0.0);
        assert_eq!(scores.f1, 0.0);
    }

    #[test]
    fn unigram_bleu_match_rate() {
        assert_eq!(unigram_bleu("the quick brown fox", "the quick"), 1.0);
        assert_eq!(unigram_bleu("the quick brown fox", "the slow"), 0.5);
        assert_eq!(unigram_bleu("reference", ""), 0.0);
        assert_eq!(unigram_bleu("Case MATTERS not", "case matters"), 1.0);
    }

    #[test]
    fn narrative_bundle() {
        let scores = evaluate_narrative("the quick brown fox", "the quick fox");
        assert!(scores.ngram2_recall > 0.0);
        assert!(scores.unigram_bleu > 0.0);
        assert!(scores.unigram_bleu <= 1.0);
    }
}
