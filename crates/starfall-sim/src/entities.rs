//! Entity factories: the only places that decide which components an
//! entity of each archetype carries.

use starfall_core::components::{
    Bullet, Color, DamageIndicator, Enemy, Explosion, Health, Lifespan, Renderable, Ship,
};
use starfall_core::config::Tunables;
use starfall_core::enums::{Faction, Shape};
use starfall_core::types::{Position, Velocity};

use crate::ecs::{EntityId, Registry};

pub fn spawn_player(registry: &mut Registry, tunables: &Tunables, at: Position) -> EntityId {
    let id = registry.spawn_with([
        at.into(),
        Velocity::zero().into(),
        Ship::player().into(),
        Renderable {
            shape: Shape::Triangle,
            color: Color::GREEN,
            radius: tunables.player_radius,
        }
        .into(),
        Health::full(tunables.player_max_health).into(),
    ]);
    log::debug!("spawned player {id} at ({:.0}, {:.0})", at.x, at.y);
    id
}

/// Enemies start at rest; AI steering assigns their velocity.
pub fn spawn_enemy(registry: &mut Registry, tunables: &Tunables, at: Position) -> EntityId {
    registry.spawn_with([
        at.into(),
        Velocity::zero().into(),
        Ship::enemy().into(),
        Renderable {
            shape: Shape::Circle,
            color: Color::RED,
            radius: tunables.enemy_radius,
        }
        .into(),
        Health::full(tunables.enemy_health).into(),
        Enemy {
            score_value: tunables.enemy_score_value,
        }
        .into(),
    ])
}

/// A bullet travelling along `angle` (radians) at bullet speed.
pub fn spawn_bullet(
    registry: &mut Registry,
    tunables: &Tunables,
    at: Position,
    angle: f64,
    owner: Faction,
) -> EntityId {
    registry.spawn_with([
        at.into(),
        Velocity::from_angle(angle, tunables.bullet_speed).into(),
        Renderable {
            shape: Shape::Circle,
            color: Color::YELLOW,
            radius: tunables.bullet_radius,
        }
        .into(),
        Bullet {
            damage: tunables.bullet_damage,
            owner,
        }
        .into(),
        Lifespan {
            remaining_ms: tunables.bullet_lifespan_ms,
        }
        .into(),
    ])
}

/// Floating damage number drifting upward from `at`.
pub fn spawn_damage_indicator(
    registry: &mut Registry,
    tunables: &Tunables,
    at: Position,
    damage: f64,
) -> EntityId {
    registry.spawn_with([
        at.into(),
        Velocity::new(0.0, -tunables.damage_indicator_rise_speed).into(),
        DamageIndicator {
            damage,
            remaining_ms: tunables.damage_indicator_duration_ms,
            duration_ms: tunables.damage_indicator_duration_ms,
        }
        .into(),
    ])
}

/// Expanding ring where an enemy of `radius` was destroyed.
pub fn spawn_explosion(
    registry: &mut Registry,
    tunables: &Tunables,
    at: Position,
    radius: f64,
) -> EntityId {
    registry.spawn_with([
        at.into(),
        Renderable {
            shape: Shape::Circle,
            color: Color::ORANGE,
            radius,
        }
        .into(),
        Explosion {
            remaining_ms: tunables.explosion_duration_ms,
            duration_ms: tunables.explosion_duration_ms,
            start_radius: radius,
            end_radius: radius * tunables.explosion_growth,
        }
        .into(),
    ])
}

/// The first entity whose `Ship` is a player ship, with its position.
pub fn find_player(registry: &Registry) -> Option<(EntityId, Position)> {
    registry
        .query_with_ids::<(Ship, Position)>()
        .into_iter()
        .find(|(_, (ship, _))| ship.is_player())
        .map(|(id, (_, pos))| (id, pos))
}
