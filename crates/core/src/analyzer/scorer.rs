//! Deterministic phrase-list scoring.

use super::phrases::{BIAS_INDICATORS, CREDIBLE_DOMAIN_HINTS, CREDIBLE_PHRASES, SUSPICIOUS_PHRASES};
use super::types::{AnalysisDetails, AnalysisReport};

const BASE_CREDIBILITY: f64 = 0.5;
const CREDIBLE_WEIGHT: f64 = 0.15;
const CREDIBLE_CAP: f64 = 0.4;
const SUSPICIOUS_WEIGHT: f64 = 0.1;
const SUSPICIOUS_CAP: f64 = 0.3;
const URL_BONUS: f64 = 0.1;
const BIAS_WEIGHT: f64 = 0.05;
const BIAS_CAP: f64 = 0.8;
const BIAS_PENALTY_FACTOR: f64 = 0.2;

const SUMMARY: &str = "Basic pattern-based analysis completed.";

/// Score `text` (with optional `headline` and `url` context) for credibility.
///
/// Pure and infallible: any string input, including empty text, produces a
/// report. Matching is case-insensitive substring presence over the
/// concatenation of headline and text; each listed phrase counts at most once
/// regardless of how often it occurs. Overlapping phrases count independently.
pub fn analyze(text: &str, headline: &str, url: &str) -> AnalysisReport {
    let full_text = format!("{} {}", headline, text).to_lowercase();

    let mut credibility = BASE_CREDIBILITY;

    let credible_matches = count_present(&full_text, CREDIBLE_PHRASES);
    credibility += (credible_matches as f64 * CREDIBLE_WEIGHT).min(CREDIBLE_CAP);

    let suspicious_matches = count_present(&full_text, SUSPICIOUS_PHRASES);
    credibility -= (suspicious_matches as f64 * SUSPICIOUS_WEIGHT).min(SUSPICIOUS_CAP);

    // Plain substring check, not a domain-suffix parse: "organic.com" earns
    // the bonus because it contains "org". Kept as-is for parity with the
    // scoring behavior existing clients see.
    if !url.is_empty() && CREDIBLE_DOMAIN_HINTS.iter().any(|hint| url.contains(hint)) {
        credibility += URL_BONUS;
    }

    let bias_matches = count_present(&full_text, BIAS_INDICATORS);
    let bias_score = (bias_matches as f64 * BIAS_WEIGHT).min(BIAS_CAP);

    credibility -= bias_score * BIAS_PENALTY_FACTOR;
    credibility = credibility.clamp(0.0, 1.0);

    // Confidence grows with input length only; the original, non-lowercased
    // text is measured in characters.
    let confidence = (0.5 + text.chars().count() as f64 / 2000.0).min(0.9);

    AnalysisReport {
        credibility_score: round2(credibility),
        analysis: AnalysisDetails {
            bias_score: round2(bias_score),
            confidence: round2(confidence),
            summary: SUMMARY.to_string(),
            recommendations: vec![
                "Verify with reliable sources".to_string(),
                "Consider fact-check websites".to_string(),
            ],
            credible_indicators: credible_matches,
            suspicious_indicators: suspicious_matches,
        },
    }
}

/// Count how many phrases are present at least once in `haystack`.
fn count_present(haystack: &str, phrases: &[&str]) -> usize {
    phrases.iter().filter(|p| haystack.contains(*p)).count()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
