use chandas_core::core::metrics::{entropy, pada_split};
use chandas_core::core::pingala::pingala_count;
use chandas_core::core::segmenter::segment;
use chandas_core::core::transitions::transitions;
use chandas_core::export::save_csv;
use chandas_core::{ProsodyAnalyzer, Weight};

const GITA_OPENING: &str = "धर्मक्षेत्रे कुरुक्षेत्रे समवेता युयुत्सवः ।
मामकाः पाण्डवाश्चैव किमकुर्वत सञ्जय ॥";

const SAMPLES: &[&str] = &[
    GITA_OPENING,
    "",
    "क",
    "आ",
    "कुकु",
    "रामो राजमणिः सदा विजयते",
    "abc 123 ॥ ।",
    "ऋषिः",
    "ककककक  ि",
];

#[test]
fn invariants_hold_for_sample_verses() {
    let analyzer = ProsodyAnalyzer::new();
    for verse in SAMPLES {
        let a = analyzer.analyze(verse);
        let n = a.weights().len();
        assert_eq!(a.syllables().len(), n, "{verse}");
        assert_eq!(a.counts.laghu + a.counts.guru, n, "{verse}");
        assert_eq!(a.transitions.total() as usize, n.saturating_sub(1), "{verse}");
        assert!((0.0..=1.0).contains(&a.entropy), "{verse}");

        let homogeneous = a.counts.laghu == 0 || a.counts.guru == 0;
        assert_eq!(a.entropy == 0.0, homogeneous, "{verse}");

        let size = (n / 4).max(1);
        let covered: usize = a.padas.iter().map(Vec::len).sum();
        assert_eq!(covered, n.min(4 * size), "{verse}");
        assert_eq!(a.pingala_curve.len(), n);
        assert_eq!(a.pingala_count, pingala_count(n as i64));
    }
}

#[test]
fn syllables_concatenate_back_to_the_verse_prefix() {
    let seg = segment(GITA_OPENING);
    let joined: String = seg.syllables().concat();
    let stripped: String = GITA_OPENING.chars().filter(|c| !c.is_whitespace()).collect();
    assert!(stripped.starts_with(&joined));
}

#[test]
fn gita_opening_weights() {
    use Weight::{Guru as G, Laghu as L};
    let seg = segment("धर्मक्षेत्रे कुरुक्षेत्रे");
    assert_eq!(seg.syllables(), ["धर्मक्षे", "त्रे", "कु", "रु", "क्षे", "त्रे"]);
    assert_eq!(seg.weights(), [G, G, L, L, G, G]);

    let m = transitions(seg.weights());
    assert_eq!(m.get(G, G), 2);
    assert_eq!(m.get(G, L), 1);
    assert_eq!(m.get(L, L), 1);
    assert_eq!(m.get(L, G), 1);
    assert_eq!(entropy(seg.weights()), 0.918);
    assert_eq!(pada_split(seg.weights(), 4).iter().map(|p| p.len()).sum::<usize>(), 4);
}

#[test]
fn save_csv_writes_file_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("verse_analysis.csv");
    let analysis = ProsodyAnalyzer::new().analyze("कुकु");

    save_csv(&analysis.segmentation, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "Index,Syllable,L/G\r\n1,कु,L\r\n2,कु,L\r\n");

    // A second save replaces the first.
    let analysis = ProsodyAnalyzer::new().analyze("आ");
    save_csv(&analysis.segmentation, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 2);
}

#[test]
fn analysis_serializes_to_json() {
    let analysis = ProsodyAnalyzer::new().analyze("रामकु");
    let value = serde_json::to_value(&analysis).unwrap();
    assert_eq!(value["segmentation"]["syllables"], serde_json::json!(["रा", "मकु"]));
    assert_eq!(value["segmentation"]["weights"], serde_json::json!(["G", "L"]));
    assert_eq!(value["counts"], serde_json::json!({"laghu": 1, "guru": 1}));
    assert_eq!(value["heaviness"], "Balanced");
    assert_eq!(value["transitions"]["counts"], serde_json::json!([[0, 0], [1, 0]]));
    assert_eq!(value["padas"], serde_json::json!([["G"], ["L"], [], []]));
    assert_eq!(value["pingala_curve"], serde_json::json!(["1", "2"]));
}
