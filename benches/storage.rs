use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qrbits::content::{binary_content_bits_in, string_content_bits_in};
use qrbits::grid::BitGrid;
use qrbits::storage::{BitStorage, BoolStorage, ByteStorage, WordStorage};
use qrbits::version::EcLevel;

fn encode_text<S: BitStorage>(c: &mut Criterion, name: &str) {
    let text = "HTTPS://EXAMPLE.COM/".repeat(20);
    c.bench_function(&format!("encode_text_400_{}", name), |b| {
        b.iter(|| string_content_bits_in::<S>(black_box(&text), EcLevel::Medium))
    });
}

fn encode_binary<S: BitStorage>(c: &mut Criterion, name: &str) {
    let data: Vec<u8> = (0..=255u8).cycle().take(2000).collect();
    c.bench_function(&format!("encode_binary_2000_{}", name), |b| {
        b.iter(|| binary_content_bits_in::<S>(black_box(&data), EcLevel::Low))
    });
}

fn render_grid<S: BitStorage>(c: &mut Criterion, name: &str) {
    let mut grid = BitGrid::<S>::with_storage(177, 177);
    for y in 0..177 {
        for x in 0..177 {
            grid.set(x, y, (x ^ y) & 1 == 0);
        }
    }
    c.bench_function(&format!("rgb565_v40_block5_{}", name), |b| {
        b.iter(|| black_box(&grid).to_rgb565_with_margin(5, 4))
    });
}

fn bench_bool(c: &mut Criterion) {
    encode_text::<BoolStorage>(c, "bool");
    encode_binary::<BoolStorage>(c, "bool");
    render_grid::<BoolStorage>(c, "bool");
}

fn bench_byte(c: &mut Criterion) {
    encode_text::<ByteStorage>(c, "byte");
    encode_binary::<ByteStorage>(c, "byte");
    render_grid::<ByteStorage>(c, "byte");
}

fn bench_word(c: &mut Criterion) {
    encode_text::<WordStorage>(c, "word");
    encode_binary::<WordStorage>(c, "word");
    render_grid::<WordStorage>(c, "word");
}

criterion_group!(benches, bench_bool, bench_byte, bench_word);
criterion_main!(benches);
