use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::{
    CodecError, Result,
    constants::{COMPLEMENT_NT, IUPAC_FORWARD, IUPAC_REVERSE, NT_SYMBOLS},
};

/// A set of candidate bases at one sequence position, packed as a 4-bit mask.
///
/// Bit 0 is `A`, bit 1 `C`, bit 2 `G` and bit 3 `T`. Every one of the 16 possible
/// values is meaningful: zero is the sentinel [`Nucleotide::Z`] ("no valid base") and
/// the remaining 15 are the IUPAC ambiguity codes. No bit above bit 3 is ever set.
///
/// ```
/// use iupac_phred::Nucleotide;
///
/// let r = Nucleotide::from_ascii(b'r');
/// assert_eq!(r, Nucleotide::A | Nucleotide::G);
/// assert_eq!(r.complement(), Nucleotide::Y);
/// assert_eq!(r.to_string(), "R");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Nucleotide(u8);

impl Nucleotide {
    /// Sentinel: no base could be determined.
    pub const Z: Self = Self(0b0000);
    pub const A: Self = Self(0b0001);
    pub const C: Self = Self(0b0010);
    /// A or C (amino).
    pub const M: Self = Self(0b0011);
    pub const G: Self = Self(0b0100);
    /// A or G (purine).
    pub const R: Self = Self(0b0101);
    /// C or G (strong).
    pub const S: Self = Self(0b0110);
    /// Not T.
    pub const V: Self = Self(0b0111);
    pub const T: Self = Self(0b1000);
    /// A or T (weak).
    pub const W: Self = Self(0b1001);
    /// C or T (pyrimidine).
    pub const Y: Self = Self(0b1010);
    /// Not G.
    pub const H: Self = Self(0b1011);
    /// G or T (keto).
    pub const K: Self = Self(0b1100);
    /// Not C.
    pub const D: Self = Self(0b1101);
    /// Not A.
    pub const B: Self = Self(0b1110);
    /// Any base.
    pub const N: Self = Self(0b1111);

    const MASK: u8 = 0x0F;

    /// Builds a nucleotide from a raw bitmask, rejecting any bit outside `{A, C, G, T}`.
    ///
    /// # Errors
    ///
    /// * `CodecError::InvalidNucleotideBits` – if `bits > 15`.
    pub fn new(bits: u8) -> Result<Self> {
        if bits & !Self::MASK != 0 {
            return Err(CodecError::InvalidNucleotideBits(bits));
        }
        Ok(Self(bits))
    }

    /// Builds a nucleotide from the low 4 bits of `bits`, discarding the rest.
    #[inline(always)]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// Raw 4-bit mask.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `true` for the sentinel value.
    #[inline(always)]
    pub const fn is_sentinel(self) -> bool {
        self.0 == 0
    }

    /// `true` when the set holds more than one base.
    #[inline(always)]
    pub const fn is_ambiguous(self) -> bool {
        self.0.count_ones() > 1
    }

    /// Number of canonical bases in the set (0‒4).
    #[inline(always)]
    pub const fn base_count(self) -> u32 {
        self.0.count_ones()
    }

    /// `true` when every base of `other` is also in `self`.
    ///
    /// The sentinel is contained in every value.
    #[inline(always)]
    pub const fn contains(self, other: Self) -> bool {
        other.0 & !self.0 == 0
    }

    /// `true` when the two sets share at least one base, i.e. the two calls may
    /// denote the same nucleotide.
    #[inline(always)]
    pub const fn overlaps(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Watson–Crick complement (`A ↔ T`, `C ↔ G`, applied to every member of the set).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        COMPLEMENT_NT[self.0 as usize]
    }

    /// Canonical uppercase IUPAC letter. The sentinel is rendered as `N`.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        NT_SYMBOLS[self.0 as usize]
    }

    /// Lenient forward-strand lookup using only the low 5 bits of `c`.
    ///
    /// Never fails: bytes that are not IUPAC letters yield [`Nucleotide::Z`].
    #[inline(always)]
    pub const fn from_ascii(c: u8) -> Self {
        IUPAC_FORWARD[(c & 0x1F) as usize]
    }

    /// Lenient lookup returning the complement of the base named by `c`.
    #[inline(always)]
    pub const fn from_ascii_complement(c: u8) -> Self {
        IUPAC_REVERSE[(c & 0x1F) as usize]
    }

    /// Strict parse of a single IUPAC letter in either case.
    ///
    /// Unlike [`Nucleotide::from_ascii`], bytes whose low 5 bits merely alias a
    /// letter (`'!'`, `'@'`, `'['`, …) and letters with no IUPAC meaning are rejected.
    ///
    /// # Errors
    ///
    /// * `CodecError::UnknownIupacCode` – if `c` is not one of
    ///   `A B C D G H K M N R S T U V W X Y` (or their lowercase forms).
    pub fn from_iupac(c: u8) -> Result<Self> {
        match c.to_ascii_uppercase() {
            b'A' | b'B' | b'C' | b'D' | b'G' | b'H' | b'K' | b'M' | b'N' | b'R' | b'S'
            | b'T' | b'U' | b'V' | b'W' | b'X' | b'Y' => Ok(Self::from_ascii(c)),
            _ => Err(CodecError::UnknownIupacCode(char::from(c))),
        }
    }

    /// Iterates over the canonical single bases in the set, in `A, C, G, T` order.
    pub fn bases(self) -> impl Iterator<Item = Nucleotide> {
        [Self::A, Self::C, Self::G, Self::T]
            .into_iter()
            .filter(move |&b| self.overlaps(b))
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = CodecError;

    fn try_from(c: u8) -> Result<Self> {
        Self::from_iupac(c)
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = CodecError;

    fn try_from(c: char) -> Result<Self> {
        u8::try_from(c)
            .map_err(|_| CodecError::UnknownIupacCode(c))
            .and_then(Self::from_iupac)
    }
}

impl From<Nucleotide> for u8 {
    fn from(nt: Nucleotide) -> u8 {
        nt.0
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(self.to_ascii()))
    }
}

/// Set union.
impl BitOr for Nucleotide {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Set intersection.
impl BitAnd for Nucleotide {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Set complement within `{A, C, G, T}`, so `!A == B` and `!R == Y`.
/// This is not the Watson–Crick complement; see [`Nucleotide::complement`].
impl Not for Nucleotide {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & Self::MASK)
    }
}
