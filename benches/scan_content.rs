use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wordsieve::dictionary::trie::trie::Trie;

fn random_word(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    let mut trie = Trie::new();
    for _ in 0..5_000 {
        let len = rng.gen_range(3..10);
        let word = random_word(&mut rng, len);
        trie.add(&word);
    }
    let content = random_word(&mut rng, 100_000);

    let mut group = c.benchmark_group("scan");
    group.sample_size(10);
    group.bench_function("100k chars, 5k words", |b| b.iter(|| trie.search(&content)));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
