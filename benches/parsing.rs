//! Criterion benchmarks for URI and address parsing and serialization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sip_address::{Address, Uri, UriBuilder};

const URIS: [(&str, &str); 5] = [
    ("minimal", "sip:a.co"),
    ("typical", "sip:alice@atlanta.example.com"),
    ("with_port", "sip:alice@atlanta.example.com:5060"),
    ("with_params", "sip:alice@atlanta.example.com:5060;transport=tcp;lr;maddr=239.255.255.1"),
    (
        "full",
        "sip:foo:bar@example.org:5060;transport=udp;novalue;param=pval?header=val&second=sec_val",
    ),
];

/// Benchmark: Uri::parse with varying complexity
fn bench_parse_uri(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_uri");

    for (name, uri) in URIS {
        group.throughput(Throughput::Bytes(uri.len() as u64));
        group.bench_with_input(BenchmarkId::new("uri", name), &uri, |b, uri| {
            b.iter(|| Uri::parse(black_box(uri)));
        });
    }

    group.finish();
}

/// Benchmark: Address::parse for each address form
fn bench_parse_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_address");

    let test_cases = [
        ("bare", "sip:john@example.org;tag=1928301774"),
        ("bracketed", "<sip:john@example.org>;tag=1928301774"),
        ("name_addr", "John Doe <sip:john@example.org>;tag=1928301774"),
        ("quoted", "\"John Doe\" <sip:john@example.org>;tag=1928301774"),
    ];

    for (name, addr) in test_cases {
        group.throughput(Throughput::Bytes(addr.len() as u64));
        group.bench_with_input(BenchmarkId::new("address", name), &addr, |b, addr| {
            b.iter(|| Address::parse_prefix(black_box(addr)));
        });
    }

    group.finish();
}

/// Benchmark: Uri::serialize
fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for (name, uri_str) in URIS {
        let uri = Uri::parse(uri_str).expect("valid test URI");
        group.bench_with_input(BenchmarkId::new("uri", name), &uri, |b, uri| {
            b.iter(|| black_box(uri).serialize());
        });
    }

    group.finish();
}

/// Benchmark: Builder construction
fn bench_builder(c: &mut Criterion) {
    c.bench_function("builder/typical", |b| {
        b.iter(|| {
            UriBuilder::new()
                .scheme(black_box("sip"))
                .user(black_box("alice"))
                .host(black_box("atlanta.example.com"))
                .port(5060u16)
                .param("transport", "tcp")
                .build()
        });
    });
}

criterion_group!(
    benches,
    bench_parse_uri,
    bench_parse_address,
    bench_serialize,
    bench_builder
);
criterion_main!(benches);
