use crate::nucleotide::Nucleotide;

/// Encodes an ASCII nucleotide letter into its 4-bit IUPAC mask.
///
/// Only the low 5 bits of `c` index the `IUPAC_FORWARD` table, so upper and lower
/// case map to the same value without any branch.
///
/// # Arguments
///
/// * `c` – An ASCII byte from a sequence record.
///
/// # Returns
///
/// * The base set named by `c`, or the sentinel `Nucleotide::Z` for bytes that
///   are not IUPAC letters.
#[inline(always)]
pub const fn nt_from_ascii(c: u8) -> Nucleotide {
    Nucleotide::from_ascii(c)
}

/// Encodes an ASCII nucleotide letter as the base it pairs with.
///
/// Equivalent to `nt_complement(nt_from_ascii(c).bits())` through a single lookup in
/// `IUPAC_REVERSE`. Used when a read is interpreted on the opposite strand.
#[inline(always)]
pub const fn nt_from_ascii_complement(c: u8) -> Nucleotide {
    Nucleotide::from_ascii_complement(c)
}

/// Returns the Watson–Crick complement of a raw 4-bit mask.
///
/// Bits above the low nibble are ignored, so malformed input still resolves to a
/// valid value.
#[inline(always)]
pub const fn nt_complement(nt: u8) -> Nucleotide {
    Nucleotide::from_bits_truncate(nt).complement()
}

/// Decodes a raw 4-bit mask into its canonical uppercase IUPAC letter.
///
/// # Returns
///
/// * The letter for masks `1..=15`.
/// * `b'N'` for the sentinel `0` and for any value above `15`.
#[inline(always)]
pub const fn nt_to_ascii(nt: u8) -> u8 {
    if nt > 15 {
        return b'N';
    }
    Nucleotide::from_bits_truncate(nt).to_ascii()
}
