use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use morpho_image::{Image, ImageSize};
use morpho_imgproc::geodesic::{
    geodesic_distance_transform, ChamferWeights, GeodesicDistanceParams,
};

fn bench_geodesic_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("GeodesicDistance");

    for (width, height) in [(64, 64), (512, 512), (1024, 1024)].iter() {
        group.throughput(Throughput::Elements((*width * *height) as u64));
        let parameter_string = format!("{width}x{height}");

        let size = ImageSize {
            width: *width,
            height: *height,
        };

        // seeds along the diagonal, full-frame mask
        let mut marker = Image::<u8, 1>::from_size_val(size, 0).unwrap();
        for i in 0..(*width).min(*height) {
            if i % 10 == 0 {
                marker.set_pixel(i, i, 0, 255).unwrap();
            }
        }
        let mask = Image::<u8, 1>::from_size_val(size, 255).unwrap();
        let params = GeodesicDistanceParams::default();

        group.bench_with_input(
            BenchmarkId::new("borgefors_f32", &parameter_string),
            &(&marker, &mask),
            |b, (marker, mask)| {
                let mut dst = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
                b.iter(|| {
                    std::hint::black_box(
                        geodesic_distance_transform(
                            marker,
                            mask,
                            &mut dst,
                            &ChamferWeights::borgefors(),
                            &params,
                        )
                        .unwrap(),
                    )
                })
            },
        );

        let params_u16 = GeodesicDistanceParams::<u16>::default();
        group.bench_with_input(
            BenchmarkId::new("borgefors_u16", &parameter_string),
            &(&marker, &mask),
            |b, (marker, mask)| {
                let mut dst = Image::<u16, 1>::from_size_val(size, 0).unwrap();
                b.iter(|| {
                    std::hint::black_box(
                        geodesic_distance_transform(
                            marker,
                            mask,
                            &mut dst,
                            &ChamferWeights::borgefors(),
                            &params_u16,
                        )
                        .unwrap(),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_geodesic_distance);
criterion_main!(benches);
