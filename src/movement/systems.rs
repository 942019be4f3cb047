//! Mover systems - translation and out-of-bounds culling.

use bevy::prelude::*;

use super::components::{out_of_bounds, Mover};
use crate::core::GameConfig;

/// Advance every mover along its direction.
pub fn move_entities(time: Res<Time>, mut query: Query<(&Mover, &mut Transform)>) {
    let dt = time.delta_secs();

    for (mover, mut transform) in query.iter_mut() {
        let next = mover.step(transform.translation.truncate(), dt);
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}

/// Destroy movers that left the world, except exempt ones.
pub fn cull_out_of_bounds(
    mut commands: Commands,
    config: Res<GameConfig>,
    query: Query<(Entity, &Transform, &Mover)>,
) {
    let (cull_x, cull_y) = (config.world.cull_x, config.world.cull_y);

    for (entity, transform, mover) in query.iter() {
        if mover.cull_exempt {
            continue;
        }
        if out_of_bounds(transform.translation.truncate(), cull_x, cull_y) {
            commands.entity(entity).despawn_recursive();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CorePlugin;
    use crate::movement::MovementPlugin;
    use bevy::state::app::StatesPlugin;

    fn movement_test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin, CorePlugin, MovementPlugin));
        app.update();
        app
    }

    #[test]
    fn out_of_bounds_mover_is_culled() {
        let mut app = movement_test_app();
        let stray = app
            .world_mut()
            .spawn((Mover::falling(4.0), Transform::from_xyz(0.0, -16.0, 0.0)))
            .id();
        let inside = app
            .world_mut()
            .spawn((Mover::falling(4.0), Transform::from_xyz(0.0, 3.0, 0.0)))
            .id();

        app.update();

        assert!(app.world().get::<Mover>(stray).is_none());
        assert!(app.world().get::<Mover>(inside).is_some());
    }

    #[test]
    fn exempt_mover_survives_out_of_bounds() {
        let mut app = movement_test_app();
        let boss = app
            .world_mut()
            .spawn((
                Mover::new(Vec2::X, 3.0).exempt(),
                Transform::from_xyz(40.0, 20.0, 0.0),
            ))
            .id();

        app.update();

        assert!(app.world().get::<Mover>(boss).is_some());
    }
}
