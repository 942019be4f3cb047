//! Routes Rapier collision events to the player and the boss.

use bevy::ecs::event::EventRegistry;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::boss::Boss;
use crate::core::{BossContact, PlayerContact, TickSet};
use crate::player::Player;

/// Contact routing plugin - turns raw overlaps into `PlayerContact` and `BossContact`.
pub struct ContactRoutingPlugin;

impl Plugin for ContactRoutingPlugin {
    fn build(&self, app: &mut App) {
        // Rapier inserts the event resource without the per-frame buffer swap
        EventRegistry::register_event::<CollisionEvent>(app.world_mut());
        app.add_systems(Update, route_collisions.in_set(TickSet::Contacts));
    }
}

/// Forward each started overlap to whichever side cares about it.
///
/// Overlaps between two non-player, non-boss entities are dropped.
pub fn route_collisions(
    mut collision_events: EventReader<CollisionEvent>,
    players: Query<(), With<Player>>,
    bosses: Query<(), With<Boss>>,
    mut player_contacts: EventWriter<PlayerContact>,
    mut boss_contacts: EventWriter<BossContact>,
) {
    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        for (this, other) in [(e1, e2), (e2, e1)] {
            if players.contains(this) {
                player_contacts.send(PlayerContact { other });
            } else if bosses.contains(this) && !players.contains(other) {
                boss_contacts.send(BossContact { boss: this, other });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boss::{BossPlugin, Fireball};
    use crate::core::{BossBattleEvent, BossTuning, CorePlugin, PlayerInput};
    use crate::movement::MovementPlugin;
    use crate::player::{Facing, PlayerPlugin, PlayerStats};
    use crate::progression::ProgressionPlugin;
    use crate::spawning::{SpawnRng, SpawningPlugin};
    use bevy::hierarchy::HierarchyPlugin;
    use bevy::state::app::StatesPlugin;
    use bevy::time::TimeUpdateStrategy;
    use bevy::transform::TransformPlugin;
    use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
    use std::time::Duration;

    fn routing_test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin, CorePlugin, ContactRoutingPlugin));
        app.update();
        app
    }

    fn read_all<E: Event + Clone>(app: &App) -> Vec<E> {
        let events = app.world().resource::<Events<E>>();
        events.get_cursor().read(events).cloned().collect()
    }

    #[test]
    fn player_overlap_is_routed_either_way_round() {
        let mut app = routing_test_app();
        let player = app.world_mut().spawn(Player).id();
        let food = app.world_mut().spawn_empty().id();
        let enemy = app.world_mut().spawn_empty().id();

        app.world_mut().send_event(CollisionEvent::Started(
            player,
            food,
            CollisionEventFlags::SENSOR,
        ));
        app.world_mut().send_event(CollisionEvent::Started(
            enemy,
            player,
            CollisionEventFlags::SENSOR,
        ));
        app.update();

        let contacts = read_all::<PlayerContact>(&app);
        let others: Vec<Entity> = contacts.iter().map(|c| c.other).collect();
        assert_eq!(others, vec![food, enemy]);
        assert!(read_all::<BossContact>(&app).is_empty());
    }

    #[test]
    fn boss_overlap_with_projectile_is_routed() {
        let mut app = routing_test_app();
        let boss = app.world_mut().spawn(Boss::from_tuning(&BossTuning::default())).id();
        let shot = app.world_mut().spawn_empty().id();

        app.world_mut().send_event(CollisionEvent::Started(
            shot,
            boss,
            CollisionEventFlags::SENSOR,
        ));
        app.update();

        let contacts = read_all::<BossContact>(&app);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].boss, boss);
        assert_eq!(contacts[0].other, shot);
    }

    #[test]
    fn stopped_overlaps_are_ignored() {
        let mut app = routing_test_app();
        let player = app.world_mut().spawn(Player).id();
        let food = app.world_mut().spawn_empty().id();

        app.world_mut().send_event(CollisionEvent::Stopped(
            player,
            food,
            CollisionEventFlags::SENSOR,
        ));
        app.update();

        assert!(read_all::<PlayerContact>(&app).is_empty());
    }

    /// Full gameplay stack on real Rapier contacts, with the boss fight
    /// already under way.
    fn boss_fight_app() -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            StatesPlugin,
            TransformPlugin,
            HierarchyPlugin,
            RapierPhysicsPlugin::<NoUserData>::default(),
            CorePlugin,
            MovementPlugin,
            SpawningPlugin,
            ProgressionPlugin,
            PlayerPlugin,
            BossPlugin,
            ContactRoutingPlugin,
        ));
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)));
        app.insert_resource(SpawnRng::seeded(11));
        app.update();
        app.world_mut().send_event(BossBattleEvent);
        app.update();
        app
    }

    fn player_hp(app: &mut App) -> f32 {
        let mut query = app.world_mut().query_filtered::<&PlayerStats, With<Player>>();
        query.single(app.world()).hp
    }

    fn boss_hp(app: &mut App) -> Option<f32> {
        let mut query = app.world_mut().query::<&Boss>();
        query.get_single(app.world()).ok().map(|boss| boss.hp)
    }

    #[test]
    fn shots_from_the_player_lane_hit_the_hovering_boss() {
        let mut app = boss_fight_app();
        let max_hp = BossTuning::default().max_hp;

        let mut boss_damaged = false;
        for frame in 0..600 {
            let fire = frame % 30 == 0;
            if fire {
                // Alternate sides so the patrolling boss is always covered
                let side = if frame % 60 == 0 { Facing::Right } else { Facing::Left };
                let mut facing = app
                    .world_mut()
                    .query_filtered::<&mut Facing, With<Player>>();
                *facing.single_mut(app.world_mut()) = side;
            }
            app.world_mut().resource_mut::<PlayerInput>().fire = fire;
            app.update();

            if boss_hp(&mut app).map_or(true, |hp| hp < max_hp) {
                boss_damaged = true;
                break;
            }
        }

        assert!(boss_damaged);
        assert!(player_hp(&mut app) > 0.0);
    }

    #[test]
    fn boss_volleys_reach_the_player_lane() {
        let mut app = boss_fight_app();
        let mut fireballs = app
            .world_mut()
            .query_filtered::<(Entity, &Transform), With<Fireball>>();

        let mut fireball_landed = false;
        for _ in 0..600 {
            let in_flight: Vec<(Entity, Vec3)> = fireballs
                .iter(app.world())
                .map(|(entity, transform)| (entity, transform.translation))
                .collect();
            let hp_before = player_hp(&mut app);
            app.update();

            // Culling only removes fireballs well past the screen edge
            let consumed_on_screen = in_flight.iter().any(|(entity, position)| {
                app.world().get::<Fireball>(*entity).is_none() && position.x.abs() < 2.0
            });
            if consumed_on_screen && player_hp(&mut app) < hp_before {
                fireball_landed = true;
                break;
            }
        }

        assert!(fireball_landed);
    }
}
