use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use image::Texture;
use math::{Color, Point};
use render::Canvas;

fn criterion_benchmark(c: &mut Criterion) {
    let star = [
        Point::new(256, 16),
        Point::new(320, 192),
        Point::new(496, 192),
        Point::new(352, 304),
        Point::new(416, 480),
        Point::new(256, 376),
        Point::new(96, 480),
        Point::new(160, 304),
        Point::new(16, 192),
        Point::new(192, 192),
    ];

    c.bench_with_input(BenchmarkId::new("fill polygon", "star"), &star, |b, star| {
        let mut texture: Texture<Color> = Texture::new(512, 512);
        b.iter(|| texture.draw_polygon(star, Color::BLUE))
    });

    for radius in [8, 64, 240] {
        c.bench_with_input(
            BenchmarkId::new("fill ellipse", radius),
            &radius,
            |b, &radius| {
                let mut texture: Texture<Color> = Texture::new(512, 512);
                b.iter(|| {
                    texture.draw_ellipse(
                        Point::new(256, 256),
                        Point::new(radius, radius / 2),
                        Color::RED,
                    )
                })
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
