//! Phred quality scores and the error probabilities they stand for.
//!
//! Scores index the compile-time table [`PHRED_LOG_PROBS`], which holds the natural
//! log of `10^(-q/10)` for `q` in `0..=PHRED_MAX`. Every conversion here is total:
//! out-of-range scores saturate and unrepresentable probabilities resolve to a
//! boundary score, so a single noisy value never aborts the caller.

use crate::{
    CodecError, Result,
    constants::{PHRED_LOG_PROBS, PHRED_MAX, PHRED33_OFFSET, PHRED64_OFFSET},
};

// Highest character a Phred+33 string can carry within the table range.
const PHRED33_MAX_CHAR: u8 = PHRED33_OFFSET + PHRED_MAX as u8;

/// Score reported for probabilities at or beyond the best entry of the table.
pub const PHRED_FLOOR_SCORE: u8 = 1;

/// Saturates a raw score into `0..=PHRED_MAX`.
#[inline(always)]
pub const fn phred_clamp(q: i32) -> usize {
    if q < 0 {
        0
    } else if q as usize > PHRED_MAX {
        PHRED_MAX
    } else {
        q as usize
    }
}

/// Error probability implied by a Phred score, `exp(PHRED_LOG_PROBS[clamp(q)])`.
///
/// ```
/// use iupac_phred::quality_probability;
///
/// assert!((quality_probability(20) - 0.01).abs() < 1e-12);
/// // Out-of-range scores saturate.
/// assert_eq!(quality_probability(-5), 1.0);
/// ```
#[inline]
#[must_use]
pub fn quality_probability(q: i32) -> f64 {
    quality_log_probability(q).exp()
}

/// Natural-log error probability of a Phred score, read straight from the table.
///
/// Prefer this over [`quality_probability`] when per-base probabilities are combined
/// as sums of logs.
#[inline]
#[must_use]
pub const fn quality_log_probability(q: i32) -> f64 {
    PHRED_LOG_PROBS[phred_clamp(q)]
}

/// Recovers a Phred score from an error probability.
///
/// Binary search over `0..=PHRED_MAX`:
/// - `p` at or below the table's smallest probability (or NaN) reports
///   [`PHRED_FLOOR_SCORE`] rather than a table index.
/// - A table entry exactly equal to `p` is returned as soon as it is probed.
/// - Otherwise the range narrows until it cannot shrink further and the lower bound
///   is returned, so the result is one of the two scores bracketing `p`.
///
/// Smaller error probabilities never yield lower scores.
///
/// ```
/// use iupac_phred::{probability_to_phred, quality_probability};
///
/// assert_eq!(probability_to_phred(quality_probability(30)), 30);
/// assert_eq!(probability_to_phred(0.0), 1);
/// ```
#[must_use]
pub fn probability_to_phred(p: f64) -> u8 {
    search_phred(p, quality_probability_at)
}

/// Log-space counterpart of [`probability_to_phred`]: `ln_p` is compared with the
/// entries of [`PHRED_LOG_PROBS`] directly.
#[must_use]
pub fn log_probability_to_phred(ln_p: f64) -> u8 {
    search_phred(ln_p, |q| PHRED_LOG_PROBS[q])
}

#[inline(always)]
fn quality_probability_at(q: usize) -> f64 {
    PHRED_LOG_PROBS[q].exp()
}

// `value_at` must be strictly decreasing over 0..=PHRED_MAX.
#[allow(clippy::float_cmp)]
fn search_phred(p: f64, value_at: impl Fn(usize) -> f64) -> u8 {
    if p.is_nan() || p <= value_at(PHRED_MAX) {
        return PHRED_FLOOR_SCORE;
    }

    let mut lower = 0;
    let mut upper = PHRED_MAX;
    while lower < upper {
        let mid = lower + (upper - lower) / 2;
        let v = value_at(mid);
        if v == p {
            return mid as u8;
        }
        if mid == lower {
            return lower as u8;
        }
        if v < p {
            // `mid` is already more confident than `p`.
            upper = mid;
        } else {
            lower = mid + 1;
        }
    }
    lower as u8
}

/// ASCII offset used to print quality scores in FASTQ records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QualityEncoding {
    /// Sanger and Illumina 1.8+: `'!'` is Q0.
    #[default]
    Phred33,
    /// Illumina 1.3–1.7: `'@'` is Q0.
    Phred64,
}

impl QualityEncoding {
    /// The ASCII value of Q0.
    pub const fn offset(self) -> u8 {
        match self {
            Self::Phred33 => PHRED33_OFFSET,
            Self::Phred64 => PHRED64_OFFSET,
        }
    }

    /// Raw score of a quality character. May be negative or above `PHRED_MAX`;
    /// the probability conversions saturate it.
    #[inline(always)]
    pub const fn decode(self, byte: u8) -> i32 {
        byte as i32 - self.offset() as i32
    }

    /// Strict decode of a quality character.
    ///
    /// # Errors
    ///
    /// * `CodecError::QualityOutOfRange` – if the score falls outside `0..=PHRED_MAX`.
    pub fn try_decode(self, byte: u8) -> Result<u8> {
        let score = self.decode(byte);
        u8::try_from(score)
            .ok()
            .filter(|&q| usize::from(q) <= PHRED_MAX)
            .ok_or(CodecError::QualityOutOfRange { byte, score })
    }

    /// Quality character for `score`, saturated at `PHRED_MAX`.
    #[inline(always)]
    pub const fn encode(self, score: u8) -> u8 {
        let q = if score as usize > PHRED_MAX {
            PHRED_MAX as u8
        } else {
            score
        };
        q + self.offset()
    }

    /// Error probability of a quality character.
    #[inline]
    pub fn probability(self, byte: u8) -> f64 {
        quality_probability(self.decode(byte))
    }

    /// Natural-log error probability of a quality character.
    #[inline]
    pub const fn log_probability(self, byte: u8) -> f64 {
        quality_log_probability(self.decode(byte))
    }

    /// Quality character reporting the error probability `p`.
    pub fn encode_probability(self, p: f64) -> u8 {
        self.encode(probability_to_phred(p))
    }

    /// Guesses the offset of a sample of quality characters.
    ///
    /// Returns `None` when the sample is empty, holds bytes below `'!'`, or fits both
    /// offsets (every byte in `'@'..='O'`, which covers high-accuracy Phred+33 data).
    pub fn detect(sample: &[u8]) -> Option<Self> {
        let Some((min, max)) = sample
            .iter()
            .fold(None, |acc: Option<(u8, u8)>, &b| match acc {
                None => Some((b, b)),
                Some((lo, hi)) => Some((lo.min(b), hi.max(b))),
            })
        else {
            log::debug!("empty quality sample; encoding undetermined");
            return None;
        };

        let guess = if min < PHRED33_OFFSET {
            None
        } else if min < PHRED64_OFFSET {
            Some(Self::Phred33)
        } else if max > PHRED33_MAX_CHAR {
            Some(Self::Phred64)
        } else {
            None
        };

        log::debug!(
            "quality sample of {} bytes spans {:?}..={:?}; encoding {:?}",
            sample.len(),
            char::from(min),
            char::from(max),
            guess
        );
        guess
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_saturates_both_ends() {
        assert_eq!(phred_clamp(-1), 0);
        assert_eq!(phred_clamp(i32::MIN), 0);
        assert_eq!(phred_clamp(17), 17);
        assert_eq!(phred_clamp(PHRED_MAX as i32 + 1), PHRED_MAX);
        assert_eq!(phred_clamp(i32::MAX), PHRED_MAX);
    }

    #[test]
    fn floor_covers_table_minimum_and_nan() {
        let best = quality_probability(PHRED_MAX as i32);
        assert_eq!(probability_to_phred(best), PHRED_FLOOR_SCORE);
        assert_eq!(probability_to_phred(best / 2.0), PHRED_FLOOR_SCORE);
        assert_eq!(probability_to_phred(0.0), PHRED_FLOOR_SCORE);
        assert_eq!(probability_to_phred(-1.0), PHRED_FLOOR_SCORE);
        assert_eq!(probability_to_phred(f64::NAN), PHRED_FLOOR_SCORE);
        assert_eq!(log_probability_to_phred(f64::NEG_INFINITY), PHRED_FLOOR_SCORE);
    }

    #[test]
    fn search_brackets_inexact_probabilities() {
        // 0.015 lies between Q18 (0.0158) and Q19 (0.0126).
        assert_eq!(probability_to_phred(0.015), 18);
        // 0.017 lies between Q17 (0.0200) and Q18 (0.0158); the search lands on Q18.
        assert_eq!(probability_to_phred(0.017), 18);
        // Certain error or worse resolves to Q0.
        assert_eq!(probability_to_phred(1.0), 0);
        assert_eq!(probability_to_phred(2.0), 0);
    }

    #[test]
    fn log_search_hits_exact_entries() {
        for q in 0..PHRED_MAX as i32 {
            assert_eq!(
                i32::from(log_probability_to_phred(quality_log_probability(q))),
                q
            );
        }
    }

    #[test]
    fn encoding_round_trip() -> Result<()> {
        assert_eq!(QualityEncoding::default(), QualityEncoding::Phred33);
        assert_eq!(QualityEncoding::Phred33.try_decode(b'I')?, 40);
        assert_eq!(QualityEncoding::Phred64.try_decode(b'h')?, 40);
        assert_eq!(QualityEncoding::Phred33.encode(40), b'I');
        assert_eq!(QualityEncoding::Phred64.encode(200), b'@' + PHRED_MAX as u8);
        Ok(())
    }

    #[test]
    fn strict_decode_rejects_out_of_range() {
        assert_eq!(
            QualityEncoding::Phred64.try_decode(b'5'),
            Err(CodecError::QualityOutOfRange { byte: b'5', score: -11 })
        );
        assert!(QualityEncoding::Phred33.try_decode(b'~').is_err());
        // The lenient path saturates instead.
        assert_eq!(QualityEncoding::Phred64.probability(b'5'), 1.0);
    }
}
