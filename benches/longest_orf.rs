use criterion::{Criterion, criterion_group, criterion_main};

use orfscan::{enumerate_frames, longest_orf};

/// A 3 kb sequence with an ORF planted in antiparallel frame 1.
fn test_sequence() -> String {
    let mut dna = "CCGTTA".repeat(250);
    dna.push('C');
    dna.push_str("ATG");
    dna.push_str(&"GCA".repeat(300));
    dna.push_str("TAA");
    dna.push_str(&"CCGTTA".repeat(100));
    dna
}

fn bench_enumerate_frames(c: &mut Criterion) {
    let dna = test_sequence();
    c.bench_function("enumerate_frames (3 kb)", |b| {
        b.iter(|| {
            let frames = enumerate_frames(&dna);
            assert_eq!(frames.len(), 6);
        });
    });
}

fn bench_longest_orf(c: &mut Criterion) {
    let dna = test_sequence();
    c.bench_function("longest_orf (3 kb)", |b| {
        b.iter(|| {
            let orf = longest_orf(&dna).unwrap();
            assert_eq!(orf.len(), 302);
        });
    });
}

criterion_group!(benches, bench_enumerate_frames, bench_longest_orf);
criterion_main!(benches);
