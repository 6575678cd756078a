// Global constants and lookup tables used throughout the codec.

use std::f64::consts::LN_10;

use crate::nucleotide::Nucleotide;

/// Highest Phred score held by the quality table. Scores above it saturate.
pub const PHRED_MAX: usize = 46;

/// ASCII offset of Sanger / Illumina 1.8+ quality strings (`'!'` is Q0).
pub const PHRED33_OFFSET: u8 = b'!';

/// ASCII offset of Illumina 1.3–1.7 quality strings (`'@'` is Q0).
pub const PHRED64_OFFSET: u8 = b'@';

// Number of slots addressable by the low 5 bits of an ASCII byte.
const ASCII_SLOTS: usize = 32;

// Slot of an ASCII letter in the IUPAC tables. Upper and lower case share a slot.
const fn slot(c: u8) -> usize {
    (c & 0x1F) as usize
}

/// Forward-strand IUPAC table indexed by `c & 0x1F`.
///
/// `U` reads as `T` and `X` as `N`. Every slot without a letter holds the sentinel.
pub const IUPAC_FORWARD: [Nucleotide; ASCII_SLOTS] = {
    let mut t = [Nucleotide::Z; ASCII_SLOTS];

    t[slot(b'A')] = Nucleotide::A;
    t[slot(b'B')] = Nucleotide::B; // C | G | T
    t[slot(b'C')] = Nucleotide::C;
    t[slot(b'D')] = Nucleotide::D; // A | G | T
    t[slot(b'G')] = Nucleotide::G;
    t[slot(b'H')] = Nucleotide::H; // A | C | T
    t[slot(b'K')] = Nucleotide::K; // G | T
    t[slot(b'M')] = Nucleotide::M; // A | C
    t[slot(b'N')] = Nucleotide::N;
    t[slot(b'R')] = Nucleotide::R; // A | G
    t[slot(b'S')] = Nucleotide::S; // C | G
    t[slot(b'T')] = Nucleotide::T;
    t[slot(b'U')] = Nucleotide::T;
    t[slot(b'V')] = Nucleotide::V; // A | C | G
    t[slot(b'W')] = Nucleotide::W; // A | T
    t[slot(b'X')] = Nucleotide::N;
    t[slot(b'Y')] = Nucleotide::Y; // C | T

    t
};

/// Reverse-complement IUPAC table indexed by `c & 0x1F`.
///
/// Each entry is the Watson–Crick complement of the matching [`IUPAC_FORWARD`] entry,
/// so a base read for the opposite strand needs no separate complement step.
pub const IUPAC_REVERSE: [Nucleotide; ASCII_SLOTS] = {
    let mut t = [Nucleotide::Z; ASCII_SLOTS];

    t[slot(b'A')] = Nucleotide::T;
    t[slot(b'B')] = Nucleotide::V; // G | C | A
    t[slot(b'C')] = Nucleotide::G;
    t[slot(b'D')] = Nucleotide::H; // T | C | A
    t[slot(b'G')] = Nucleotide::C;
    t[slot(b'H')] = Nucleotide::D; // T | G | A
    t[slot(b'K')] = Nucleotide::M; // C | A
    t[slot(b'M')] = Nucleotide::K; // T | G
    t[slot(b'N')] = Nucleotide::N;
    t[slot(b'R')] = Nucleotide::Y; // T | C
    t[slot(b'S')] = Nucleotide::S; // G | C
    t[slot(b'T')] = Nucleotide::A;
    t[slot(b'U')] = Nucleotide::A;
    t[slot(b'V')] = Nucleotide::B; // T | G | C
    t[slot(b'W')] = Nucleotide::W; // T | A
    t[slot(b'X')] = Nucleotide::N;
    t[slot(b'Y')] = Nucleotide::R; // G | A

    t
};

/// Watson–Crick complement of every 4-bit base set: `A ↔ T`, `C ↔ G`,
/// applied member by member to the ambiguity codes.
pub const COMPLEMENT_NT: [Nucleotide; 16] = [
    Nucleotide::Z, // Z ↔ Z
    Nucleotide::T, // A → T
    Nucleotide::G, // C → G
    Nucleotide::K, // M → K
    Nucleotide::C, // G → C
    Nucleotide::Y, // R → Y
    Nucleotide::S, // S ↔ S
    Nucleotide::B, // V → B
    Nucleotide::A, // T → A
    Nucleotide::W, // W ↔ W
    Nucleotide::R, // Y → R
    Nucleotide::D, // H → D
    Nucleotide::M, // K → M
    Nucleotide::H, // D → H
    Nucleotide::V, // B → V
    Nucleotide::N, // N ↔ N
];

/// Canonical IUPAC letter of every 4-bit value. The sentinel prints as `N`.
pub const NT_SYMBOLS: [u8; 16] = *b"NACMGRSVTWYHKDBN";

/// Natural-log error probability of every Phred score in `0..=PHRED_MAX`:
/// `ln(10^(-q/10)) = -q·ln(10)/10`.
///
/// Strictly decreasing in `q`.
pub const PHRED_LOG_PROBS: [f64; PHRED_MAX + 1] = {
    let mut t = [0.0; PHRED_MAX + 1];
    let mut q = 0;
    while q <= PHRED_MAX {
        t[q] = -(q as f64) * LN_10 / 10.0;
        q += 1;
    }
    t
};
