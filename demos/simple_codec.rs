use iupac_phred::{Nucleotide, Result, nt_from_ascii, nt_from_ascii_complement, nt_to_ascii};

fn main() -> Result<()> {
    // ---------------------------------------------------- //
    // 1. Input read (mixed case, with ambiguity codes)
    // ---------------------------------------------------- //
    let read = "ACGTrykmSWbdhvNx";

    println!("# IUPAC codec example");
    println!("read : {read}");
    println!();

    // ---------------------------------------------------- //
    // 2. Encode every base, on both strands
    // ---------------------------------------------------- //
    println!(" chr | bits | fwd | rev | bases");
    println!("-----+------+-----+-----+------");
    for c in read.bytes() {
        let fwd = nt_from_ascii(c);
        let rev = nt_from_ascii_complement(c);
        let bases: String = fwd.bases().map(|b| b.to_string()).collect();
        println!(
            "  {}  | {:04b} |  {}  |  {}  | {}",
            char::from(c),
            fwd.bits(),
            char::from(nt_to_ascii(fwd.bits())),
            rev,
            bases
        );
    }
    println!();

    // ---------------------------------------------------- //
    // 3. Strict parsing rejects what the lenient lookup masks away
    // ---------------------------------------------------- //
    for c in ['R', '@', 'e'] {
        match Nucleotide::try_from(c) {
            Ok(nt) => println!("{c:?} -> {nt}"),
            Err(e) => println!("{c:?} -> error: {e}"),
        }
    }

    let purine = Nucleotide::try_from('R')?;
    println!();
    println!("R overlaps A: {}", purine.overlaps(Nucleotide::A));
    println!("R overlaps Y: {}", purine.overlaps(Nucleotide::Y));
    Ok(())
}
