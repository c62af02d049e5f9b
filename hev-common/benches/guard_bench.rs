//! Benchmarks for the literal validators and bounded buffer helpers.

use criterion::{Criterion, criterion_group, criterion_main};
use hev_common::{BoundedBuffer, message, trim, validate_ip_address, validate_port};
use std::hint::black_box;

fn bench_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    group.bench_function("port", |b| {
        b.iter(|| validate_port(black_box("1080")))
    });
    group.bench_function("ipv4", |b| {
        b.iter(|| validate_ip_address(black_box("192.168.100.200")))
    });
    group.bench_function("ipv6", |b| {
        b.iter(|| validate_ip_address(black_box("2001:db8::8a2e:370:7334")))
    });
    group.bench_function("rejected", |b| {
        b.iter(|| validate_ip_address(black_box("not-an-ip")))
    });

    group.finish();
}

fn bench_buffers(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer");
    let long = "x".repeat(512);

    group.bench_function("copy_truncating", |b| {
        let mut storage = [0u8; 64];
        b.iter(|| {
            let mut buf = BoundedBuffer::new(&mut storage);
            buf.copy_from(black_box(long.as_str()))
        })
    });
    group.bench_function("append_until_full", |b| {
        let mut storage = [0u8; 64];
        b.iter(|| {
            let mut buf = BoundedBuffer::new(&mut storage);
            buf.clear();
            while buf.append(black_box("segment")).is_ok() {}
        })
    });
    group.bench_function("trim", |b| {
        b.iter(|| trim(black_box("\t  listen-address  \r\n")))
    });

    group.finish();
}

fn bench_catalog(c: &mut Criterion) {
    c.bench_function("catalog/message", |b| {
        b.iter(|| message(black_box(-702)))
    });
}

criterion_group!(benches, bench_validators, bench_buffers, bench_catalog);
criterion_main!(benches);
