mod constants;
mod nucleotide;
mod quality;
mod util;

pub use constants::*;
pub use nucleotide::Nucleotide;
pub use quality::{
    PHRED_FLOOR_SCORE, QualityEncoding, log_probability_to_phred, phred_clamp,
    probability_to_phred, quality_log_probability, quality_probability,
};
pub use util::*;

/// Common `Result` type for all library operations, using `CodecError` for errors.
pub type Result<T, E = CodecError> = core::result::Result<T, E>;

/// Error variants for the strict (validating) constructors.
///
/// The lenient conversions (`nt_from_ascii`, `quality_probability`,
/// `probability_to_phred`, …) never fail; they saturate or fall back to the
/// sentinel instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Thrown when a raw nucleotide mask has bits set outside `{A, C, G, T}`.
    #[error("nucleotide mask {0:#04x} has bits outside the low nibble")]
    InvalidNucleotideBits(u8),

    /// Thrown when a character is not an IUPAC nucleotide letter.
    #[error("{0:?} is not an IUPAC nucleotide code")]
    UnknownIupacCode(char),

    /// Thrown when a quality character decodes to a score outside `0..=PHRED_MAX`.
    #[error("quality character {byte:#04x} decodes to score {score}, outside 0..={max}", max = PHRED_MAX)]
    QualityOutOfRange { byte: u8, score: i32 },
}
