use iupac_phred::{QualityEncoding, probability_to_phred, quality_probability};

fn main() {
    // Quality string of a FASTQ record; the offset is not known up front.
    let quals = b"IIIIHHGGFF@@;;55++##";

    let encoding = QualityEncoding::detect(quals).unwrap_or_default();
    println!("# Quality encoding example");
    println!("encoding : {encoding:?} (offset {})", encoding.offset());
    println!();

    println!(" chr |  Q | P(error)");
    println!("-----+----+----------");
    for &b in quals.iter().step_by(2) {
        println!(
            "  {}  | {:>2} | {:.6}",
            char::from(b),
            encoding.decode(b),
            encoding.probability(b)
        );
    }
    println!();

    // Combine two independent calls and report the result as a quality score.
    let p = quality_probability(20) * quality_probability(15);
    let q = probability_to_phred(p);
    println!("P(both wrong) = {p:.3e} -> Q{q} ({:?})", char::from(encoding.encode(q)));
}
