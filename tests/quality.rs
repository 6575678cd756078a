//! Properties of the Phred quality table and its forward/inverse conversions.
//! Probabilities are sampled with a seeded RNG so failures are reproducible.

use iupac_phred::{
    PHRED_FLOOR_SCORE, PHRED_LOG_PROBS, PHRED_MAX, QualityEncoding, log_probability_to_phred,
    probability_to_phred, quality_log_probability, quality_probability,
};
use rand::{Rng, SeedableRng};

const MAX: i32 = PHRED_MAX as i32;

fn sample_probabilities(n: usize) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let lo = quality_log_probability(MAX);
    (0..n)
        .map(|_| rng.random_range(lo..0.0_f64).exp())
        .collect()
}

#[test]
fn table_is_non_increasing() {
    for s in 0..MAX {
        assert!(
            quality_log_probability(s) >= quality_log_probability(s + 1),
            "Q{s}"
        );
    }
    assert!(PHRED_LOG_PROBS.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn table_matches_phred_definition() {
    for s in 0..=MAX {
        let expected = 10f64.powf(-f64::from(s) / 10.0);
        assert!((quality_probability(s) - expected).abs() <= expected * 1e-12, "Q{s}");
    }
}

#[test]
fn probability_is_exp_of_log_probability() {
    for s in 0..=MAX {
        assert_eq!(quality_probability(s), quality_log_probability(s).exp());
    }
}

#[test]
fn out_of_range_scores_saturate() {
    assert_eq!(quality_log_probability(-3), quality_log_probability(0));
    assert_eq!(quality_log_probability(MAX + 50), quality_log_probability(MAX));
    assert_eq!(quality_probability(i32::MAX), quality_probability(MAX));
}

#[test]
fn round_trip_below_max_is_exact() {
    for s in 0..MAX {
        assert_eq!(i32::from(probability_to_phred(quality_probability(s))), s);
    }
    // The best score sits on the floor and is reported as the floor score.
    assert_eq!(probability_to_phred(quality_probability(MAX)), PHRED_FLOOR_SCORE);
    assert_eq!(log_probability_to_phred(quality_log_probability(MAX)), PHRED_FLOOR_SCORE);
}

#[test]
fn floor_returns_one() {
    let best = quality_probability(MAX);
    for p in [best, best * 0.5, 1e-300, 0.0] {
        assert_eq!(probability_to_phred(p), 1, "p = {p:e}");
    }
}

#[test]
fn result_brackets_the_exact_score() {
    for p in sample_probabilities(10_000) {
        let q = probability_to_phred(p);
        if q == PHRED_FLOOR_SCORE && p <= quality_probability(MAX) {
            continue;
        }
        let exact = -10.0 * p.log10();
        assert!(
            (f64::from(q) - exact).abs() <= 1.0 + 1e-9,
            "p = {p:e}: got Q{q}, exact {exact}"
        );
    }
}

/// Inexact probabilities, the score the search settles on, and the score that
/// rounding `-10·log10(p)` to nearest would give instead.
const SEARCH_SETTLES_ON: [(f64, u8, u8); 7] = [
    (0.89, 0, 1), // Q0.51
    (0.871, 0, 1), // Q0.60
    (0.295, 6, 5), // Q5.30
    (0.1445, 9, 8), // Q8.40
    (0.0186, 18, 17), // Q17.30
    (0.00457, 24, 23), // Q23.40
    (9.12e-5, 41, 40), // Q40.40
];

#[test]
fn inexact_probabilities_follow_search_not_rounding() {
    for (p, searched, nearest) in SEARCH_SETTLES_ON {
        assert_eq!((-10.0 * p.log10()).round() as u8, nearest, "p = {p:e}");
        assert_eq!(probability_to_phred(p), searched, "p = {p:e}");
        assert_eq!(log_probability_to_phred(p.ln()), searched, "ln p = {}", p.ln());
    }
}

#[test]
fn higher_confidence_never_lowers_the_score() {
    let mut ps = sample_probabilities(10_000);
    ps.sort_by(f64::total_cmp);
    let scores: Vec<u8> = ps.iter().map(|&p| probability_to_phred(p)).collect();
    assert!(
        scores.windows(2).all(|w| w[0] >= w[1]),
        "scores must not increase as the error probability grows"
    );
}

#[test]
fn log_and_linear_searches_agree_on_table_entries() {
    for s in 0..=MAX {
        assert_eq!(
            probability_to_phred(quality_probability(s)),
            log_probability_to_phred(quality_log_probability(s))
        );
    }
}

#[test]
fn quality_characters_convert_through_encoding() {
    let enc = QualityEncoding::Phred33;
    assert_eq!(enc.probability(b'+'), quality_probability(10));
    assert_eq!(enc.log_probability(b'5'), quality_log_probability(20));
    assert_eq!(enc.encode_probability(quality_probability(30)), b'?');
    assert_eq!(
        QualityEncoding::Phred64.encode_probability(quality_probability(10)),
        b'J'
    );
}

#[test]
fn detect_quality_encoding() {
    assert_eq!(QualityEncoding::detect(b"IIIIHHGG#"), Some(QualityEncoding::Phred33));
    assert_eq!(QualityEncoding::detect(b"hhhhggfB"), Some(QualityEncoding::Phred64));
    // Every byte fits both offsets.
    assert_eq!(QualityEncoding::detect(b"@ABCJ"), None);
    // High-accuracy Phred+33 reads stay within the Phred+33 range.
    assert_eq!(QualityEncoding::detect(b"KLMNOOOK"), None);
    assert_eq!(QualityEncoding::detect(b"KLMNOP"), Some(QualityEncoding::Phred64));
    assert_eq!(QualityEncoding::detect(b""), None);
    assert_eq!(QualityEncoding::detect(b"II\nII"), None);
}
