use criterion::{black_box, criterion_group, Criterion};
use shadow_rays::config::SceneConfig;
use shadow_rays::physics::light::ray::RaySet;
use shadow_rays::physics::light::scene::Scene;

fn bench_generate_and_truncate(c: &mut Criterion) {
    let config = SceneConfig::default();
    let scene = Scene::reference().expect("reference scene is valid");
    c.bench_function("generate_and_truncate", |b| {
        b.iter(|| {
            let mut rays = RaySet::generate(
                black_box(&scene.light),
                config.ray_count(),
                config.max_ray_length(),
            );
            rays.truncate(black_box(&scene.occluders));
            rays
        })
    });
}

criterion_group!(benches, bench_generate_and_truncate);
