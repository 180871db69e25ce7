use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blobgen_assets::emit::write_array;
use blobgen_assets::{Dimensions, EmbeddedAsset, Emitter};

fn emit_benchmark(c: &mut Criterion) {
    // One 256x256 BGRA knob strip.
    let data: Vec<u8> = (0..256 * 256 * 4).map(|i| (i % 251) as u8).collect();

    c.bench_function("write_array 256x256 bgra", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(data.len() * 5);
            write_array(&mut out, black_box(&data), 4).unwrap();
            out
        })
    });

    let asset = EmbeddedAsset {
        name: "knob".to_string(),
        source: PathBuf::from("artwork/knob.png"),
        data: data.clone(),
        group: 4,
        dimensions: Some(Dimensions {
            width: 256,
            height: 256,
        }),
    };
    c.bench_function("emitter 4 assets", |b| {
        b.iter(|| {
            let mut emitter = Emitter::begin("artwork", 4, Vec::new(), Vec::new()).unwrap();
            for _ in 0..4 {
                emitter.asset(black_box(&asset)).unwrap();
            }
            emitter.finish().unwrap()
        })
    });
}

criterion_group!(benches, emit_benchmark);
criterion_main!(benches);
