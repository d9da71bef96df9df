// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// The metrical weight of a single syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weight {
    /// Light syllable, one mātrā.
    #[serde(rename = "L")]
    Laghu,
    /// Heavy syllable, two mātrā.
    #[serde(rename = "G")]
    Guru,
}

impl Weight {
    /// Both symbols, in table order (L first).
    pub const ALL: [Weight; 2] = [Weight::Laghu, Weight::Guru];

    /// Row/column position of this symbol in 2x2 tables.
    pub fn index(self) -> usize {
        match self {
            Weight::Laghu => 0,
            Weight::Guru => 1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Weight::Laghu => 'L',
            Weight::Guru => 'G',
        }
    }

    /// Units of metrical duration: laghu counts one, guru counts two.
    pub fn matras(self) -> u32 {
        match self {
            Weight::Laghu => 1,
            Weight::Guru => 2,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The ordered syllables of a verse and their weights.
/// Both vectors are only ever pushed together, so they always have equal length.
/// Serialize only: there is no way to build one from unchecked parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Segmentation {
    syllables: Vec<String>,
    weights: Vec<Weight>,
}

impl Segmentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, syllable: String, weight: Weight) {
        self.syllables.push(syllable);
        self.weights.push(weight);
    }

    pub fn syllables(&self) -> &[String] {
        &self.syllables
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates `(syllable, weight)` pairs in verse order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.syllables
            .iter()
            .map(String::as_str)
            .zip(self.weights.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Weight>) {
        (self.syllables, self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_serialize_as_single_letters() {
        let json = serde_json::to_string(&[Weight::Laghu, Weight::Guru]).unwrap();
        assert_eq!(json, r#"["L","G"]"#);
    }

    #[test]
    fn push_keeps_parallel_lists_aligned() {
        let mut seg = Segmentation::new();
        seg.push("कु".to_string(), Weight::Laghu);
        seg.push("मा".to_string(), Weight::Guru);
        assert_eq!(seg.syllables().len(), seg.weights().len());
        let pairs: Vec<_> = seg.iter().collect();
        assert_eq!(pairs, vec![("कु", Weight::Laghu), ("मा", Weight::Guru)]);
    }
}
