// File: src/core/metrics.rs
use crate::core::types::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of padas a verse is split into for positional analysis.
pub const DEFAULT_PADA_PARTS: usize = 4;

/// Ratio above which a verse is heavy.
const HEAVY_ABOVE: f64 = 0.5;
/// Lowest ratio that still counts as balanced.
const BALANCED_FROM: f64 = 0.4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightCounts {
    pub laghu: usize,
    pub guru: usize,
}

impl WeightCounts {
    pub fn from_weights(weights: &[Weight]) -> Self {
        let guru = weights.iter().filter(|&&w| w == Weight::Guru).count();
        Self {
            laghu: weights.len() - guru,
            guru,
        }
    }

    pub fn total(&self) -> usize {
        self.laghu + self.guru
    }

    /// Share of guru syllables, 0 for an empty verse.
    pub fn ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.guru as f64 / total as f64,
        }
    }
}

pub fn counts(weights: &[Weight]) -> WeightCounts {
    WeightCounts::from_weights(weights)
}

/// Overall weight label of a verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heaviness {
    Heavy,
    Balanced,
    Light,
}

impl fmt::Display for Heaviness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Heaviness::Heavy => "Heavy",
            Heaviness::Balanced => "Balanced",
            Heaviness::Light => "Light",
        };
        f.write_str(label)
    }
}

/// `Heavy` above 0.5, `Balanced` on [0.4, 0.5], `Light` below 0.4.
pub fn heaviness(ratio: f64) -> Heaviness {
    if ratio > HEAVY_ABOVE {
        Heaviness::Heavy
    } else if ratio >= BALANCED_FROM {
        Heaviness::Balanced
    } else {
        Heaviness::Light
    }
}

/// Shannon entropy in bits of the L/G distribution, rounded to 3 decimals.
pub fn entropy(weights: &[Weight]) -> f64 {
    let total = weights.len();
    if total == 0 {
        return 0.0;
    }

    let counts = WeightCounts::from_weights(weights);
    let mut entropy = 0.0;
    for count in [counts.laghu, counts.guru] {
        if count == 0 {
            continue;
        }
        let p = count as f64 / total as f64;
        entropy -= p * p.log2();
    }
    round_to(entropy, 3)
}

/// Splits `weights` into `parts` consecutive slices of `max(1, len / parts)`
/// elements each. Slices past the end are empty and any remainder after
/// `parts * size` elements belongs to no pada.
pub fn pada_split(weights: &[Weight], parts: usize) -> Vec<&[Weight]> {
    if parts == 0 {
        return Vec::new();
    }
    let size = (weights.len() / parts).max(1);
    (0..parts)
        .map(|i| {
            let start = (i * size).min(weights.len());
            let end = ((i + 1) * size).min(weights.len());
            &weights[start..end]
        })
        .collect()
}

/// L/G counts for each pada.
pub fn pada_counts(padas: &[&[Weight]]) -> Vec<WeightCounts> {
    padas.iter().map(|p| WeightCounts::from_weights(p)).collect()
}

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use Weight::{Guru as G, Laghu as L};

    #[test]
    fn counts_and_ratio() {
        let c = counts(&[L, G, G, L, G]);
        assert_eq!(c, WeightCounts { laghu: 2, guru: 3 });
        assert_eq!(c.total(), 5);
        assert!((c.ratio() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn ratio_of_empty_is_zero() {
        assert_eq!(counts(&[]).ratio(), 0.0);
    }

    #[test]
    fn heaviness_boundaries() {
        assert_eq!(heaviness(0.51), Heaviness::Heavy);
        assert_eq!(heaviness(0.5), Heaviness::Balanced);
        assert_eq!(heaviness(0.4), Heaviness::Balanced);
        assert_eq!(heaviness(0.399), Heaviness::Light);
        assert_eq!(heaviness(0.0), Heaviness::Light);
        assert_eq!(heaviness(1.0), Heaviness::Heavy);
        assert_eq!(Heaviness::Balanced.to_string(), "Balanced");
    }

    #[test]
    fn heaviness_uses_the_unrounded_ratio() {
        // 99 / 250 = 0.396 is Light even though it displays as 0.40.
        let mut weights = vec![G; 99];
        weights.extend(vec![L; 151]);
        let c = counts(&weights);
        assert!((c.ratio() - 0.396).abs() < 1e-12);
        assert_eq!(heaviness(c.ratio()), Heaviness::Light);
        assert_eq!(format!("{:.2}", c.ratio()), "0.40");
    }

    #[test]
    fn entropy_values() {
        assert_eq!(entropy(&[]), 0.0);
        assert_eq!(entropy(&[L, L, L]), 0.0);
        assert_eq!(entropy(&[G]), 0.0);
        assert_eq!(entropy(&[L, G]), 1.0);
        assert_eq!(entropy(&[L, L, G]), 0.918);
        assert_eq!(entropy(&[L, G, G, G]), 0.811);
    }

    #[test]
    fn entropy_stays_within_unit_interval() {
        let mut seq = Vec::new();
        for i in 0..40 {
            seq.push(if i % 3 == 0 { G } else { L });
            let e = entropy(&seq);
            assert!((0.0..=1.0).contains(&e), "entropy {e} out of range");
        }
    }

    #[test]
    fn pada_split_of_two_pads_with_empties() {
        let weights = [L, L];
        let padas = pada_split(&weights, DEFAULT_PADA_PARTS);
        let lens: Vec<_> = padas.iter().map(|p| p.len()).collect();
        assert_eq!(lens, vec![1, 1, 0, 0]);
    }

    #[test]
    fn pada_split_drops_remainder() {
        let weights = [L, G, L, G, L, G, L, G, L, G];
        let padas = pada_split(&weights, 4);
        let lens: Vec<_> = padas.iter().map(|p| p.len()).collect();
        assert_eq!(lens, vec![2, 2, 2, 2]);
        assert_eq!(padas[3], &[L, G]);
    }

    #[test]
    fn pada_split_other_arities() {
        let weights = [G, G, L, L, G, L];
        let thirds = pada_split(&weights, 3);
        assert_eq!(thirds, vec![&weights[0..2], &weights[2..4], &weights[4..6]]);
        assert_eq!(pada_split(&weights, 1), vec![&weights[..]]);
        assert!(pada_split(&weights, 0).is_empty());

        let empty: &[Weight] = &[];
        let padas = pada_split(empty, 4);
        assert_eq!(padas.len(), 4);
        assert!(padas.iter().all(|p| p.is_empty()));
    }

    #[test]
    fn pada_counts_per_part() {
        let weights = [L, G, G, G, L, L, G, L];
        let padas = pada_split(&weights, 4);
        let per_pada = pada_counts(&padas);
        assert_eq!(per_pada[0], WeightCounts { laghu: 1, guru: 1 });
        assert_eq!(per_pada[1], WeightCounts { laghu: 0, guru: 2 });
        assert_eq!(per_pada[2], WeightCounts { laghu: 2, guru: 0 });
        assert_eq!(per_pada[3], WeightCounts { laghu: 1, guru: 1 });
    }
}
