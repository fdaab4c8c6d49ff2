use criterion::{criterion_group, criterion_main, Criterion};
use natnum::NaturalNumber;
use std::hint::black_box;

fn bench_multiply(c: &mut Criterion) {
    let a = NaturalNumber::from_bytes_be(&[0xA5; 256]);
    let b = NaturalNumber::from_bytes_be(&[0x5A; 256]);
    c.bench_function("multiply_2048_bit", |bench| {
        bench.iter(|| black_box(&a) * black_box(&b))
    });
}

fn bench_div_rem(c: &mut Criterion) {
    let dividend = NaturalNumber::from_bytes_be(&[0xA5; 256]);
    let divisor = NaturalNumber::from_bytes_be(&[0x5A; 32]);
    c.bench_function("div_rem_2048_by_256_bit", |bench| {
        bench.iter(|| black_box(&dividend).div_rem(black_box(&divisor)))
    });
}

fn bench_to_base10(c: &mut Criterion) {
    let value = NaturalNumber::from_bytes_be(&[0xA5; 128]);
    c.bench_function("to_base10_1024_bit", |bench| {
        bench.iter(|| black_box(&value).to_base10())
    });
}

criterion_group!(benches, bench_multiply, bench_div_rem, bench_to_base10);
criterion_main!(benches);
