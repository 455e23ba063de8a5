use alphafade::fade::{fade_alpha, DEFAULT_OPACITY};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use rand::{rngs::SmallRng, Rng, SeedableRng};

pub fn benchmark_fade_alpha(c: &mut Criterion) {
    let mut rng: SmallRng = SeedableRng::seed_from_u64(0x12345678);
    let mut img = RgbaImage::new(512, 512);
    img.pixels_mut()
        .for_each(|px| *px = Rgba([rng.gen(), rng.gen(), rng.gen(), rng.gen()]));

    c.bench_function("fade alpha 512x512", |b| {
        b.iter(|| black_box(fade_alpha(&img, DEFAULT_OPACITY)))
    });
}

criterion_group!(benches, benchmark_fade_alpha);
criterion_main!(benches);
