//! Benchmarks for the room codecs and tileset slicing.

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chili_room::codec::{decode_str, encode, render_c_array};
use chili_room::{EditorState, Grid, Project, Tileset, LAYER_COUNT, MAP_H, MAP_W};

fn busy_project() -> Project {
    let layers: [Grid; LAYER_COUNT] = std::array::from_fn(|layer| {
        let mut grid = Grid::new();
        for y in 0..MAP_H {
            for x in 0..MAP_W {
                if (x + y + layer) % 3 != 0 {
                    grid.set(x, y, ((x * y + layer) % 256) as i32);
                }
            }
        }
        grid
    });
    Project::from_layers(layers)
}

fn tileset_png() -> Vec<u8> {
    let img = image::RgbaImage::from_fn(128, 128, |x, y| {
        image::Rgba([(x * 2) as u8, (y * 2) as u8, 0, if (x / 8 + y / 8) % 2 == 0 { 255 } else { 0 }])
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

// -- Codec benchmarks --

fn bench_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let project = busy_project();
    let state = EditorState::default();
    let json = encode(&project, &state, None).to_json().unwrap();

    group.bench_function("encode_json", |b| {
        b.iter(|| encode(black_box(&project), &state, None).to_json().unwrap())
    });

    group.bench_function("decode_json", |b| {
        b.iter(|| decode_str(black_box(&json)).unwrap())
    });

    group.bench_function("render_c_array", |b| {
        b.iter(|| render_c_array(black_box(&project), &state, 256))
    });

    group.finish();
}

// -- Tileset benchmarks --

fn bench_tileset(c: &mut Criterion) {
    let mut group = c.benchmark_group("tileset");

    let bytes = tileset_png();
    let tileset = Tileset::decode(bytes.clone()).unwrap();
    let url = tileset.data_url();

    group.bench_function("decode_png", |b| {
        b.iter(|| Tileset::decode(black_box(bytes.clone())).unwrap())
    });

    group.bench_function("from_data_url", |b| {
        b.iter(|| Tileset::from_data_url(black_box(&url)).unwrap())
    });

    group.bench_function("blank_tiles", |b| b.iter(|| tileset.blank_tiles()));

    group.finish();
}

criterion_group!(benches, bench_codecs, bench_tileset);
criterion_main!(benches);
