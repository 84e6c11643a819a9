use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dobble_engine::cards::{CardSetGenerator, GeneratorConfig};
use dobble_engine::layout::{LayoutConfig, LayoutEngine};
use dobble_engine::symbols::{Symbol, SymbolCatalog};
use dobble_engine::validation::validate;

fn catalog(size: usize) -> SymbolCatalog {
    (0..size)
        .map(|i| Symbol::new(format!("s{i}"), format!("Symbol {i}"), "#000"))
        .collect()
}

fn bench_generation(c: &mut Criterion) {
    let generator = CardSetGenerator::new(GeneratorConfig::default().with_seed(1));
    let catalog = catalog(57);

    c.bench_function("generate_order_7", |b| {
        b.iter(|| generator.generate(black_box(&catalog)))
    });

    let set = generator.generate(&catalog).expect("57 symbols form order 7");
    c.bench_function("validate_order_7", |b| b.iter(|| validate(black_box(&set))));
}

fn bench_layout(c: &mut Criterion) {
    let engine = LayoutEngine::new(LayoutConfig::default());

    c.bench_function("layout_8_symbols", |b| {
        b.iter(|| engine.layout(black_box(8), black_box(42)))
    });
}

criterion_group!(benches, bench_generation, bench_layout);
criterion_main!(benches);
