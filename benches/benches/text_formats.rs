//! Benchmark suite for the text format parsers
//!
//! Measures `list.spr`, sprite offset and SQL dump parsing on synthetic
//! inputs, plus the full speed reconciliation.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::{collections::BTreeSet, hint::black_box};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sprkit_benches::{generate_list_spr, generate_sprite_offsets, generate_sql_dump, sizes};
use sprkit_types::{
	file::{ListSpr, SpriteFrameTable, SpriteOffsets, sprite_frame::sql::DEFAULT_TABLE},
	speed::{SpeedComparison, render_report},
};

const SIZES: [(&str, (u32, u32)); 3] =
	[("small", sizes::SMALL), ("real_game", sizes::REAL_GAME), ("large", sizes::LARGE)];

/// Benchmark `list.spr` parsing
fn bench_list_spr(c: &mut Criterion) {
	let mut group = c.benchmark_group("list_spr_parse");

	for (name, (characters, frames)) in SIZES {
		let text = generate_list_spr(characters, frames);
		group.throughput(Throughput::Bytes(text.len() as u64));
		group.bench_with_input(BenchmarkId::new("parse", name), &text, |b, text| {
			b.iter(|| black_box(ListSpr::parse(black_box(text), None)));
		});
	}

	group.finish();
}

/// Benchmark sprite offset parsing
fn bench_sprite_offsets(c: &mut Criterion) {
	let mut group = c.benchmark_group("sprite_offsets_parse");

	for (name, (characters, frames)) in SIZES {
		let text = generate_sprite_offsets(characters * 8, frames);
		group.throughput(Throughput::Bytes(text.len() as u64));
		group.bench_with_input(BenchmarkId::new("parse", name), &text, |b, text| {
			b.iter(|| black_box(SpriteOffsets::parse(black_box(text))));
		});
	}

	group.finish();
}

/// Benchmark `sprite_frame` extraction from an SQL dump
fn bench_sql_dump(c: &mut Criterion) {
	let mut group = c.benchmark_group("sql_dump_parse");

	for (name, (characters, _)) in SIZES {
		let text = generate_sql_dump(characters);
		group.throughput(Throughput::Bytes(text.len() as u64));
		group.bench_with_input(BenchmarkId::new("from_sql", name), &text, |b, text| {
			b.iter(|| black_box(SpriteFrameTable::from_sql(black_box(text), DEFAULT_TABLE)));
		});
	}

	group.finish();
}

/// Benchmark reconciliation and report rendering
fn bench_reconcile(c: &mut Criterion) {
	let mut group = c.benchmark_group("speed_reconcile");
	let (characters, frames) = sizes::REAL_GAME;

	let list = ListSpr::parse(&generate_list_spr(characters, frames), None);
	let expected = SpriteFrameTable::from_sql(&generate_sql_dump(characters), DEFAULT_TABLE);
	let special: BTreeSet<u32> = [240].into_iter().collect();

	group.bench_function("reconcile", |b| {
		b.iter(|| black_box(SpeedComparison::reconcile(black_box(&list), &expected, &special)));
	});

	let comparison = SpeedComparison::reconcile(&list, &expected, &special);
	group.bench_function("render_report", |b| {
		b.iter(|| black_box(render_report(black_box(&comparison), "2026-01-01 00:00:00")));
	});

	group.finish();
}

criterion_group!(benches, bench_list_spr, bench_sprite_offsets, bench_sql_dump, bench_reconcile);

criterion_main!(benches);
