//! Benchmarks for corpus scanning throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scan_search::{Book, Corpus, Matcher, ScannedLine};

/// Build a corpus of repetitive scanned prose. Every seventh line ends
/// with a hyphen fragment so the carried-state path stays exercised.
fn synthetic_corpus(books: usize, lines_per_book: usize) -> Corpus {
    let mut out = Vec::with_capacity(books);
    for b in 0..books {
        let mut content = Vec::with_capacity(lines_per_book);
        for l in 0..lines_per_book {
            let text = if l % 7 == 6 {
                format!("line {} of book {} breaks at a frag-", l, b)
            } else {
                format!("line {} of book {} carries ordinary scanned prose", l, b)
            };
            content.push(ScannedLine::new((l / 40) as u32, (l % 40) as u32, text));
        }
        out.push(Book::new(
            format!("Synthetic Volume {}", b),
            format!("978{:010}", b),
            content,
        ));
    }
    Corpus::new(out)
}

fn bench_search(c: &mut Criterion) {
    let corpus = synthetic_corpus(20, 500);

    c.bench_function("search_absent_term", |b| {
        b.iter(|| Matcher::search(black_box("nonexistent"), black_box(&corpus)))
    });

    c.bench_function("search_common_term", |b| {
        b.iter(|| Matcher::search(black_box("scanned"), black_box(&corpus)))
    });

    c.bench_function("search_hyphen_joined_term", |b| {
        b.iter(|| Matcher::search(black_box("fragline"), black_box(&corpus)))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
