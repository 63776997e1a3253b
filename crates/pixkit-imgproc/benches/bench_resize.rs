use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use fast_image_resize as fr;
use pixkit_image::{Image, ImageSize};
use pixkit_imgproc::{parallel::ExecutionStrategy, resize};

fn resize_image_crate(image: &Image<u8, 4>, new_size: ImageSize) -> Vec<u8> {
    let rgba = image::RgbaImage::from_raw(
        image.width() as u32,
        image.height() as u32,
        image.as_slice().to_vec(),
    )
    .unwrap();

    image::imageops::resize(
        &rgba,
        new_size.width as u32,
        new_size.height as u32,
        image::imageops::FilterType::Nearest,
    )
    .into_raw()
}

fn resize_fast_image_resize(
    resizer: &mut fr::Resizer,
    src: &fr::images::Image,
    dst: &mut fr::images::Image,
) {
    let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Nearest);
    resizer.resize(src, dst, &options).unwrap();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resize");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{width}x{height}");

        // input image
        let image_size: ImageSize = [*width, *height].into();
        let data = (0..width * height * 4).map(|i| (i % 256) as u8).collect();
        let image = Image::<u8, 4>::new(image_size, data).unwrap();

        // output image, half of the input
        let new_size = ImageSize {
            width: width / 2,
            height: height / 2,
        };

        group.bench_with_input(
            BenchmarkId::new("image_rs", &parameter_string),
            &image,
            |b, i| b.iter(|| resize_image_crate(black_box(i), black_box(new_size))),
        );

        let src_fr = fr::images::Image::from_vec_u8(
            *width as u32,
            *height as u32,
            image.as_slice().to_vec(),
            fr::PixelType::U8x4,
        )
        .unwrap();

        group.bench_with_input(
            BenchmarkId::new("fast_resize_lib", &parameter_string),
            &src_fr,
            |b, src| {
                let mut resizer = fr::Resizer::new();
                let mut dst = fr::images::Image::new(
                    new_size.width as u32,
                    new_size.height as u32,
                    fr::PixelType::U8x4,
                );
                b.iter(|| resize_fast_image_resize(&mut resizer, black_box(src), &mut dst))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("pixkit_alloc", &parameter_string),
            &image,
            |b, i| b.iter(|| resize::resize_nearest(black_box(i), black_box(new_size))),
        );

        for (name, strategy) in [
            ("pixkit_serial", ExecutionStrategy::Serial),
            ("pixkit_par", ExecutionStrategy::AutoRows),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, &parameter_string),
                &image,
                |b, i| {
                    let mut dst = Image::<u8, 4>::from_size_val(new_size, 0).unwrap();
                    b.iter(|| {
                        resize::resize_nearest_with(
                            black_box(i),
                            black_box(&mut dst),
                            black_box(strategy),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
