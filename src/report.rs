// File: src/report.rs
//! Plain-text rendering of a [`VerseAnalysis`]: the L/G sequence, summary
//! metrics and tabular forms of the count, transition, pada and Pingala charts.
use crate::core::analyzer::VerseAnalysis;
use crate::core::types::Weight;
use std::fmt::Write;

/// Longest bar drawn in the pada and count charts.
const BAR_WIDTH: usize = 30;

/// A titled block of report text.
pub struct Section {
    pub title: &'static str,
    pub body: String,
}

/// The L/G symbols separated by single spaces.
pub fn lg_sequence(weights: &[Weight]) -> String {
    weights
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn sections(analysis: &VerseAnalysis) -> Vec<Section> {
    vec![
        Section {
            title: "LG Sequence",
            body: lg_sequence(analysis.weights()),
        },
        Section {
            title: "Summary Metrics",
            body: summary(analysis),
        },
        Section {
            title: "Laghu vs Guru Count",
            body: count_bars(analysis),
        },
        Section {
            title: "Laghu-Guru Transitions",
            body: transition_table(analysis),
        },
        Section {
            title: "Pada-wise Laghu-Guru Distribution",
            body: pada_table(analysis),
        },
        Section {
            title: "Pingala Recursive Count",
            body: pingala_table(analysis),
        },
    ]
}

/// All sections joined into one block of text.
pub fn render(analysis: &VerseAnalysis) -> String {
    let mut out = String::new();
    for section in sections(analysis) {
        let _ = writeln!(out, "{}", section.title);
        let _ = writeln!(out, "{}", section.body);
        out.push('\n');
    }
    out
}

fn summary(analysis: &VerseAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Laghu (L): {}", analysis.counts.laghu);
    let _ = writeln!(out, "Guru (G): {}", analysis.counts.guru);
    let _ = writeln!(out, "Guru/Laghu Ratio: {:.2}", analysis.ratio);
    let _ = writeln!(out, "Meter Heaviness: {}", analysis.heaviness);
    let _ = writeln!(out, "Shannon Entropy: {}", analysis.entropy);
    let _ = writeln!(out, "Total Matras: {}", analysis.matra_total());
    let _ = write!(
        out,
        "Pingala Count (n={}): {}",
        analysis.weights().len(),
        analysis.pingala_count
    );
    out
}

fn count_bars(analysis: &VerseAnalysis) -> String {
    let max = analysis.counts.laghu.max(analysis.counts.guru);
    format!(
        "Laghu (L) {:>4} {}\nGuru (G)  {:>4} {}",
        analysis.counts.laghu,
        bar(analysis.counts.laghu, max),
        analysis.counts.guru,
        bar(analysis.counts.guru, max),
    )
}

/// Rows are the current syllable, columns the next one.
fn transition_table(analysis: &VerseAnalysis) -> String {
    let mut out = String::from("        next L  next G");
    for prev in Weight::ALL {
        let _ = write!(
            out,
            "\ncur {}  {:>6}  {:>6}",
            prev,
            analysis.transitions.get(prev, Weight::Laghu),
            analysis.transitions.get(prev, Weight::Guru),
        );
    }
    out
}

fn pada_table(analysis: &VerseAnalysis) -> String {
    let max = analysis
        .pada_counts
        .iter()
        .map(|c| c.laghu.max(c.guru))
        .max()
        .unwrap_or(0);
    let mut lines = Vec::with_capacity(analysis.pada_counts.len());
    for (i, c) in analysis.pada_counts.iter().enumerate() {
        lines.push(format!(
            "Pada {}  L {:>3} {:<width$}  G {:>3} {}",
            i + 1,
            c.laghu,
            bar(c.laghu, max),
            c.guru,
            bar(c.guru, max),
            width = BAR_WIDTH,
        ));
    }
    lines.join("\n")
}

fn pingala_table(analysis: &VerseAnalysis) -> String {
    if analysis.pingala_curve.is_empty() {
        return "(no syllables)".to_string();
    }
    analysis
        .pingala_curve
        .iter()
        .enumerate()
        .map(|(i, c)| format!("n={:<4} {}", i + 1, c))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bar(value: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "#".repeat(value * BAR_WIDTH / max)
}
