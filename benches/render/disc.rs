use criterion::{black_box, criterion_group, Criterion};
use shadow_rays::config::SceneConfig;
use shadow_rays::physics::light::caster::ShadowCaster;
use shadow_rays::physics::light::scene::Scene;
use shadow_rays::render::color::Rgba;
use shadow_rays::render::disc::fill_anti_aliased;
use shadow_rays::render::frame::render_frame;
use shadow_rays::render::image::PixelBuffer;

fn bench_fill_anti_aliased(c: &mut Criterion) {
    let config = SceneConfig::default();
    let scene = Scene::reference().expect("reference scene is valid");
    let mut buffer = PixelBuffer::new(config.width(), config.height(), Rgba::BLACK);
    c.bench_function("fill_anti_aliased", |b| {
        b.iter(|| {
            fill_anti_aliased(
                &mut buffer,
                black_box(&scene.occluders[0]),
                Rgba::WHITE,
            );
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let config = SceneConfig::default();
    let scene = Scene::reference().expect("reference scene is valid");
    let mut caster = ShadowCaster::new(&config);
    caster.update_scene(&scene);
    let mut buffer = PixelBuffer::new(config.width(), config.height(), Rgba::BLACK);
    c.bench_function("render_frame", |b| {
        b.iter(|| {
            render_frame(&mut buffer, black_box(&scene), caster.rays(), &config);
        })
    });
}

criterion_group!(benches, bench_fill_anti_aliased, bench_render_frame);
