//! Static phrase lists backing the heuristic scorer.
//!
//! Loaded once at compile time and shared read-only across all requests.

/// Phrases that typically accompany low-quality or sensationalist claims.
pub(super) const SUSPICIOUS_PHRASES: &[&str] = &[
    "scientists say",
    "experts claim",
    "studies show",
    "research proves",
    "breaking news",
    "shocking discovery",
    "they don't want you to know",
    "mainstream media won't tell you",
    "secret",
    "conspiracy",
    "miracle cure",
    "instant results",
    "guaranteed",
    "100% effective",
];

/// Phrases that typically accompany sourced, verifiable claims.
pub(super) const CREDIBLE_PHRASES: &[&str] = &[
    "peer-reviewed",
    "published in",
    "university study",
    "clinical trial",
    "scientific journal",
    "according to data",
    "research indicates",
    "evidence suggests",
    "meta-analysis",
    "systematic review",
];

/// Absolutist language that correlates with biased framing.
pub(super) const BIAS_INDICATORS: &[&str] = &[
    "always",
    "never",
    "all",
    "none",
    "every",
    "completely",
    "totally",
    "absolutely",
    "definitely",
    "obviously",
    "clearly",
    "undoubtedly",
    "certainly",
];

/// URL fragments treated as a weak credibility signal.
pub(super) const CREDIBLE_DOMAIN_HINTS: &[&str] = &["edu", "gov", "org"];
