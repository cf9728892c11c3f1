use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffwire::header::{packed, text};
use huffwire::{CodeTable, CodeTree, StreamDecoder, StreamEncoder};

fn generate_test_data(size: usize, entropy_level: f64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);

    if entropy_level < 1.0 {
        // Low entropy - mostly repeated bytes
        let pattern = (entropy_level * 256.0) as u8;
        for _ in 0..size {
            data.push(pattern);
        }
    } else if entropy_level < 4.0 {
        // Medium entropy - some patterns
        let pattern_size = (8.0 / entropy_level) as usize;
        let pattern: Vec<u8> = (0..pattern_size).map(|i| i as u8).collect();
        for i in 0..size {
            data.push(pattern[i % pattern.len()]);
        }
    } else {
        // High entropy - more randomized
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        for i in 0..size {
            let mut hasher = DefaultHasher::new();
            i.hash(&mut hasher);
            entropy_level.to_bits().hash(&mut hasher);
            data.push((hasher.finish() % 256) as u8);
        }
    }

    data
}

fn bench_tree_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_construction");

    for &size in &[1024usize, 65536] {
        for &entropy in &[0.5f64, 2.0, 6.0] {
            let data = generate_test_data(size, entropy);
            group.bench_with_input(
                BenchmarkId::new("from_data", format!("{}_{}", size, entropy)),
                &data,
                |b, data| {
                    b.iter(|| {
                        let tree = CodeTree::from_data(data).unwrap();
                        black_box(CodeTable::from_tree(&tree));
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_stream_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_codec");

    for &size in &[1024usize, 65536] {
        let data = generate_test_data(size, 2.0);
        let tree = CodeTree::from_data(&data).unwrap();
        let encoder = StreamEncoder::new(&tree);
        let body = encoder.encode_to_vec(&data).unwrap();
        let decoder = StreamDecoder::new(tree);

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| {
                black_box(encoder.encode_to_vec(data).unwrap());
            });
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &body, |b, body| {
            b.iter(|| {
                black_box(decoder.decode_from_slice(body).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_header_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_formats");

    let data = generate_test_data(65536, 6.0);
    let tree = CodeTree::from_data(&data).unwrap();
    let packed_bytes = packed::serialize_to_vec(&tree);
    let text_form = text::serialize(&tree);

    group.bench_function("packed_serialize", |b| {
        b.iter(|| black_box(packed::serialize_to_vec(&tree)));
    });

    group.bench_function("packed_deserialize", |b| {
        b.iter(|| black_box(packed::deserialize_from_slice(&packed_bytes).unwrap()));
    });

    group.bench_function("text_serialize", |b| {
        b.iter(|| black_box(text::serialize(&tree)));
    });

    group.bench_function("text_deserialize", |b| {
        b.iter(|| black_box(text::deserialize(&text_form).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tree_construction,
    bench_stream_codec,
    bench_header_formats
);
criterion_main!(benches);
