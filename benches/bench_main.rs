use criterion::criterion_main;

mod physics;
mod render;

criterion_main! {
    physics::light::benches,
    render::disc::benches,
}
