use criterion::*;
use image::{Rgb, RgbImage};
use thermal_legend::{map_image, map_image_par, LookupTable, TemperatureBounds};

/// A hue sweep, like the "iron" or "rainbow" bars cameras
/// render.
fn legend(rows: u32) -> RgbImage {
    RgbImage::from_fn(12, rows, |_, y| {
        let t = y as f64 / (rows - 1) as f64;
        Rgb([
            (255. * t) as u8,
            (255. * (1. - (2. * t - 1.).abs())) as u8,
            (255. * (1. - t)) as u8,
        ])
    })
}

fn frame(wid: u32, ht: u32) -> RgbImage {
    RgbImage::from_fn(wid, ht, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 3 % 256) as u8, ((x + y) % 256) as u8])
    })
}

fn mapping(c: &mut Criterion) {
    let table = LookupTable::from_reference(&legend(256), TemperatureBounds::default())
        .expect("lookup table");
    let image = frame(160, 120);

    c.bench_function("calibrate", |b| {
        let bar = legend(256);
        b.iter(|| LookupTable::from_reference(black_box(&bar), TemperatureBounds::default()))
    });

    c.bench_function("map_160x120", |b| {
        b.iter(|| map_image(black_box(&image), &table).unwrap())
    });

    c.bench_function("map_par_160x120", |b| {
        b.iter(|| map_image_par(black_box(&image), &table).unwrap())
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = mapping
}

criterion_main!(benches);
