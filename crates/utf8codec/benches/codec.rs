//! Benchmark – `utf8codec` validation, decoding and encoding
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use utf8codec::{Utf8Codec, decode_codepoints, encode_codepoints, is_valid_utf8};

/// Produce a *deterministic* text of exactly `target_len` bytes from a mix of
/// 1-, 2-, 3- and 4-byte characters, padded with ASCII.
fn make_payload(target_len: usize, sample: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(target_len);
    'fill: loop {
        for ch in sample.chars() {
            if out.len() + ch.len_utf8() > target_len {
                break 'fill;
            }
            let mut buf = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        }
    }
    out.resize(target_len, b' ');
    out
}

fn bench_codec(c: &mut Criterion) {
    let samples = [
        ("ascii", "The quick brown fox jumps over the lazy dog. "),
        ("latin", "Größenwahn über Äpfel, naïve café crème. "),
        ("cjk", "吾輩は猫である。名前はまだ無い。"),
        ("emoji", "🦀🚀✨ rust 😀 "),
    ];
    let codec = Utf8Codec::default();

    let mut group = c.benchmark_group("validate");
    for (name, sample) in samples {
        let payload = make_payload(64 * 1024, sample);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("utf8codec", name), &payload, |b, p| {
            b.iter(|| is_valid_utf8(black_box(p)));
        });
        group.bench_with_input(BenchmarkId::new("utf8codec_strict", name), &payload, |b, p| {
            b.iter(|| codec.is_valid(black_box(p)));
        });
        group.bench_with_input(BenchmarkId::new("core", name), &payload, |b, p| {
            b.iter(|| core::str::from_utf8(black_box(p)).is_ok());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("decode");
    for (name, sample) in samples {
        let payload = make_payload(64 * 1024, sample);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("utf8codec", name), &payload, |b, p| {
            b.iter(|| decode_codepoints(black_box(p)).unwrap().count());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("encode");
    for (name, sample) in samples {
        let payload = make_payload(64 * 1024, sample);
        let cps: Vec<i32> = decode_codepoints(&payload).unwrap().collect();
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("utf8codec", name), &cps, |b, cps| {
            b.iter(|| encode_codepoints(black_box(cps).iter().copied()).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
