//! Benchmark suite for ANN container parsing and dumping
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use ann_benches::{generate_test_ann, generate_test_ann_data};
use ann_types::file::{
	ann::{Ann, AnnCodec},
	codepage::cp1250,
	cursor::ByteSink,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::{fs, hint::black_box};

/// Benchmark parsing synthetic containers of increasing size
fn bench_parse_synthetic(c: &mut Criterion) {
	let mut group = c.benchmark_group("ann_parse");

	for (name, events, frames, images, size) in
		[("small", 4, 8, 8, 16), ("medium", 16, 24, 64, 32), ("large", 32, 48, 256, 64)]
	{
		let data = generate_test_ann_data(events, frames, images, size);
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("parse", name), &data, |b, data| {
			b.iter(|| black_box(Ann::from_bytes(black_box(data))));
		});
	}

	group.finish();
}

/// Benchmark dumping with the default normalizing policy
fn bench_dump_synthetic(c: &mut Criterion) {
	let mut group = c.benchmark_group("ann_dump");
	let codec = AnnCodec::new();

	for (name, events, frames, images, size) in
		[("small", 4, 8, 8, 16), ("medium", 16, 24, 64, 32), ("large", 32, 48, 256, 64)]
	{
		let ann = generate_test_ann(events, frames, images, size);
		group.bench_with_input(BenchmarkId::new("dump", name), &ann, |b, ann| {
			b.iter(|| black_box(codec.dump(black_box(ann))));
		});
	}

	group.finish();
}

/// Benchmark a real file from `test_data/` when one is available
fn bench_real_file(c: &mut Criterion) {
	let path = concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/KRABIK.ann");
	let data = match fs::read(path) {
		Ok(d) => d,
		Err(_) => {
			eprintln!("Warning: Could not find test file: {}", path);
			return;
		}
	};

	let mut group = c.benchmark_group("ann_real");
	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("parse_dump", |b| {
		b.iter(|| {
			let result = Ann::from_bytes(black_box(&data)).and_then(|ann| ann.to_bytes());
			black_box(result)
		});
	});
	group.finish();
}

/// Benchmark the code page in both directions
fn bench_codepage(c: &mut Criterion) {
	let mut group = c.benchmark_group("ann_codepage");
	let text = "Příliš žluťoučký kůň úpěl ďábelské ódy. ".repeat(64);
	let bytes = cp1250().encode(&text);

	group.throughput(Throughput::Elements(bytes.len() as u64));
	group.bench_function("encode", |b| b.iter(|| black_box(cp1250().encode(black_box(&text)))));
	group.bench_function("decode", |b| b.iter(|| black_box(cp1250().decode(black_box(&bytes)))));
	group.finish();
}

/// Benchmark sink growth from an empty buffer
fn bench_sink_growth(c: &mut Criterion) {
	let mut group = c.benchmark_group("ann_sink");
	let chunk = [0xA5u8; 52];

	group.bench_function("write_64k", |b| {
		b.iter(|| {
			let mut sink = ByteSink::with_capacity(16);
			while sink.len() < 64 * 1024 {
				sink.write(black_box(&chunk));
			}
			black_box(sink.into_bytes())
		});
	});
	group.finish();
}

criterion_group!(
	benches,
	bench_parse_synthetic,
	bench_dump_synthetic,
	bench_real_file,
	bench_codepage,
	bench_sink_growth,
);

criterion_main!(benches);
