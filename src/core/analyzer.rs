use crate::core::metrics::{self, Heaviness, WeightCounts, DEFAULT_PADA_PARTS};
use crate::core::pingala::{
    pingala_count, pingala_curve, serialize_decimal, serialize_decimal_seq,
};
use crate::core::segmenter::{is_verse_whitespace, SyllableSegmenter};
use crate::core::transitions::TransitionMatrix;
use crate::core::types::{Segmentation, Weight};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// How many padas the weight sequence is split into.
    pub pada_parts: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            pada_parts: DEFAULT_PADA_PARTS,
        }
    }
}

/// Everything derived from one verse. Built fresh per call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerseAnalysis {
    pub segmentation: Segmentation,
    pub counts: WeightCounts,
    pub ratio: f64,
    pub heaviness: Heaviness,
    pub entropy: f64,
    pub transitions: TransitionMatrix,
    pub padas: Vec<Vec<Weight>>,
    pub pada_counts: Vec<WeightCounts>,
    #[serde(serialize_with = "serialize_decimal")]
    pub pingala_count: BigUint,
    #[serde(serialize_with = "serialize_decimal_seq")]
    pub pingala_curve: Vec<BigUint>,
}

impl VerseAnalysis {
    pub fn syllables(&self) -> &[String] {
        self.segmentation.syllables()
    }

    pub fn weights(&self) -> &[Weight] {
        self.segmentation.weights()
    }

    /// Total matras of the verse, laghu counting one and guru two.
    pub fn matra_total(&self) -> u32 {
        self.weights().iter().map(|w| w.matras()).sum()
    }
}

// The analyzer is composed of the segmenter and the pure metric functions.
pub struct ProsodyAnalyzer {
    segmenter: SyllableSegmenter,
    config: AnalyzerConfig,
}

impl ProsodyAnalyzer {
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            segmenter: SyllableSegmenter::new(),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes `verse` unless it is empty or whitespace only.
    pub fn analyze_input(&self, verse: &str) -> Option<VerseAnalysis> {
        if verse.chars().all(is_verse_whitespace) {
            return None;
        }
        Some(self.analyze(verse))
    }

    /// Runs the full pipeline. Total for any input, including empty text.
    pub fn analyze(&self, verse: &str) -> VerseAnalysis {
        // 1. Split into syllables and weights
        let segmentation = self.segmenter.segment(verse);
        let weights = segmentation.weights();

        // 2. Distribution metrics
        let counts = metrics::counts(weights);
        let ratio = counts.ratio();
        let heaviness = metrics::heaviness(ratio);
        let entropy = metrics::entropy(weights);

        // 3. Sequential and positional structure
        let transitions = TransitionMatrix::from_weights(weights);
        let split = metrics::pada_split(weights, self.config.pada_parts);
        let pada_counts = metrics::pada_counts(&split);
        let padas = split.into_iter().map(<[Weight]>::to_vec).collect();

        // 4. Pingala count for the verse length and the curve up to it
        let n = weights.len();
        let pingala_count = pingala_count(i64::try_from(n).unwrap_or(i64::MAX));
        let pingala_curve = pingala_curve(n);

        tracing::debug!(
            syllables = n,
            laghu = counts.laghu,
            guru = counts.guru,
            entropy,
            "verse analyzed"
        );

        VerseAnalysis {
            segmentation,
            counts,
            ratio,
            heaviness,
            entropy,
            transitions,
            padas,
            pada_counts,
            pingala_count,
            pingala_curve,
        }
    }
}

impl Default for ProsodyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
