use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use translit_core::{Gender, Lang, TranslationTables, Translator};

static WORDS: &[(&str, &str)] = &[
    ("dictionary", "kumarasiri"),
    ("short", "avanka"),
    ("long", "asankhachamathkumarasinghe"),
];

static LINES: &[(&str, &str)] = &[
    ("short", "avanka perera"),
    (
        "medium",
        "\"Perera\" asankha-chamath, #Perera# lives in Colombo near Galle road",
    ),
];

fn bench_word(c: &mut Criterion) {
    let tables = TranslationTables::builtin();
    let t = Translator::new(&tables);
    let mut group = c.benchmark_group("translate/word");
    for &(label, word) in WORDS {
        group.bench_with_input(BenchmarkId::new(label, word.len()), &word, |b, &word| {
            b.iter(|| t.translate_word(word, Lang::English, Lang::Sinhala, Gender::Male));
        });
    }
    group.finish();
}

fn bench_line(c: &mut Criterion) {
    let tables = TranslationTables::builtin();
    let t = Translator::new(&tables);
    let mut group = c.benchmark_group("translate/line");
    for &(label, line) in LINES {
        for dst in [Lang::Sinhala, Lang::Tamil] {
            group.bench_with_input(
                BenchmarkId::new(format!("{label}/{dst}"), line.len()),
                &line,
                |b, &line| {
                    b.iter(|| t.translate_line(line, Lang::English, dst, Gender::Unspecified));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_word, bench_line);
criterion_main!(benches);
