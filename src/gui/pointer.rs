//! Moving the light with the mouse and switching how discs are drawn.

use bevy::{
    app::{App, Plugin, Update},
    ecs::{
        event::EventReader,
        query::With,
        schedule::IntoSystemConfigs,
        system::{Query, Res, ResMut},
    },
    input::{keyboard::KeyCode, mouse::MouseButton, Input},
    log::info,
    math::{DVec2, Vec2},
    window::{CursorMoved, PrimaryWindow, Window},
};

use crate::{
    config::SceneConfig,
    physics::light::{scene::Scene, LightSet},
};

/// Drag the light with the left mouse button, toggle disc mode with space
pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (Self::drag_light_system, Self::toggle_draw_mode_system).before(LightSet::Cast),
        );
    }
}

/// Window coordinates are top left origin with y down, same as the pixel buffer
fn window_to_scene(position: Vec2) -> DVec2 {
    position.as_dvec2()
}

/// Bevy Systems
impl PointerPlugin {
    /// Move the light to the cursor while the left button is held.
    /// Only the last cursor event of the frame matters, the rays are cast once per frame.
    pub fn drag_light_system(
        mouse: Res<Input<MouseButton>>,
        windows: Query<&Window, With<PrimaryWindow>>,
        mut cursor_moved_events: EventReader<CursorMoved>,
        mut scene: ResMut<Scene>,
    ) {
        let last_moved = cursor_moved_events.read().last().map(|event| event.position);
        if !mouse.pressed(MouseButton::Left) {
            return;
        }
        let position = if mouse.just_pressed(MouseButton::Left) {
            windows
                .get_single()
                .ok()
                .and_then(Window::cursor_position)
                .or(last_moved)
        } else {
            last_moved
        };
        let Some(position) = position else {
            return;
        };
        let center = window_to_scene(position);
        if scene.light.center != center {
            scene.move_light(center);
        }
    }

    /// Flip between hard edged and anti-aliased discs
    pub fn toggle_draw_mode_system(keys: Res<Input<KeyCode>>, mut config: ResMut<SceneConfig>) {
        if keys.just_pressed(KeyCode::Space) {
            let mode = config.draw_mode().toggled();
            config.set_draw_mode(mode);
            info!("Drawing discs {}", mode);
        }
    }
}
