// File: src/core/segmenter.rs
use crate::core::types::{Segmentation, Weight};

/// Splits Devanagari text into syllables, each closed by a vowel.
///
/// Only the closing vowel decides the weight. Conjuncts, anusvara and visarga
/// are absorbed into the syllable but never promote it.
pub struct SyllableSegmenter;

impl SyllableSegmenter {
    pub fn new() -> Self {
        Self
    }

    pub fn segment(&self, verse: &str) -> Segmentation {
        let mut result = Segmentation::new();
        let mut current = String::new();

        for c in verse.chars() {
            if is_verse_whitespace(c) {
                continue;
            }

            current.push(c);

            if let Some(weight) = self.vowel_weight(c) {
                result.push(std::mem::take(&mut current), weight);
            }
        }

        if !current.is_empty() {
            tracing::trace!(discarded = %current, "trailing buffer has no vowel");
        }

        result
    }

    /// Weight of a syllable closed by `c`, or `None` if `c` does not close one.
    fn vowel_weight(&self, c: char) -> Option<Weight> {
        match c {
            // Short independent vowels and matras
            'अ' | 'इ' | 'उ' | 'ऋ' => Some(Weight::Laghu),
            'ि' | 'ु' | 'ृ' => Some(Weight::Laghu),
            // Long independent vowels and matras
            'आ' | 'ई' | 'ऊ' | 'ए' | 'ऐ' | 'ओ' | 'औ' => Some(Weight::Guru),
            'ा' | 'ी' | 'ू' | 'े' | 'ै' | 'ो' | 'ौ' => Some(Weight::Guru),
            _ => None,
        }
    }
}

impl Default for SyllableSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Unicode whitespace plus the information separators U+001C..=U+001F,
/// which verse text treats as spacing too.
pub fn is_verse_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Segments `verse` with the default segmenter.
pub fn segment(verse: &str) -> Segmentation {
    SyllableSegmenter::new().segment(verse)
}
