use serde::{Deserialize, Serialize};

/// Result of a heuristic credibility analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Overall credibility in [0.0, 1.0], higher is more credible.
    pub credibility_score: f64,
    pub analysis: AnalysisDetails,
}

/// Detailed breakdown of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    /// Density of absolutist language, in [0.0, 0.8].
    pub bias_score: f64,
    /// How much input length supports the score, in [0.5, 0.9].
    pub confidence: f64,
    pub summary: String,
    pub recommendations: Vec<String>,
    /// Number of distinct credible phrases found.
    pub credible_indicators: usize,
    /// Number of distinct suspicious phrases found.
    pub suspicious_indicators: usize,
}

/// Analysis strategy selected by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Local phrase-list heuristics, no network calls.
    Basic,
    /// Delegate to the OpenAI chat completions API.
    OpenAi,
    /// Delegate to the Gemini generateContent API.
    Gemini,
}

impl AnalysisMode {
    /// Parse a wire-format mode string. Unknown strings return `None` so
    /// callers handle the unrecognized case explicitly.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Self::Basic),
            "openai" => Some(Self::OpenAi),
            "gemini" => Some(Self::Gemini),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }

    /// All modes accepted on the wire.
    pub fn all() -> &'static [&'static str] {
        &["basic", "openai", "gemini"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_known() {
        assert_eq!(AnalysisMode::parse("basic"), Some(AnalysisMode::Basic));
        assert_eq!(AnalysisMode::parse("openai"), Some(AnalysisMode::OpenAi));
        assert_eq!(AnalysisMode::parse("gemini"), Some(AnalysisMode::Gemini));
    }

    #[test]
    fn test_mode_parse_unknown() {
        assert_eq!(AnalysisMode::parse("deepthought"), None);
        assert_eq!(AnalysisMode::parse(""), None);
        // Parsing is case-sensitive, matching the original dispatch.
        assert_eq!(AnalysisMode::parse("Basic"), None);
    }

    #[test]
    fn test_mode_roundtrip() {
        for s in AnalysisMode::all() {
            assert_eq!(AnalysisMode::parse(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn test_report_serializes_to_wire_shape() {
        let report = AnalysisReport {
            credibility_score: 0.6,
            analysis: AnalysisDetails {
                bias_score: 0.1,
                confidence: 0.5,
                summary: "s".to_string(),
                recommendations: vec!["r".to_string()],
                credible_indicators: 1,
                suspicious_indicators: 2,
            },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["credibility_score"], 0.6);
        assert_eq!(json["analysis"]["bias_score"], 0.1);
        assert_eq!(json["analysis"]["suspicious_indicators"], 2);
    }
}
