//! Collision system: player bullets against enemies, enemies against the
//! player.
//!
//! Both passes are brute-force circle tests (`distance < r1 + r2`, touching
//! circles do not collide). Nothing is deleted while the passes run:
//! doomed entities go into a pending set that later checks consult, and
//! the set is applied in one batch at the end, followed by the cosmetic
//! entities the hits produced.

use std::collections::BTreeSet;

use starfall_core::components::{Bullet, Enemy, Health, Renderable, Ship};
use starfall_core::config::Tunables;
use starfall_core::enums::Faction;
use starfall_core::game::GameState;
use starfall_core::types::{circles_overlap, Position};

use crate::ecs::{EntityId, Registry};
use crate::entities;

/// What happened during one collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionResult {
    /// Bullet-enemy overlaps that dealt damage.
    pub bullet_hits: u32,
    /// Enemies shot down.
    pub enemies_killed: u32,
    /// Enemies that rammed the player.
    pub player_hits: u32,
}

enum Effect {
    Damage { at: Position, amount: f64 },
    Explosion { at: Position, radius: f64 },
}

pub fn run(registry: &mut Registry, state: &mut GameState, tunables: &Tunables) -> CollisionResult {
    let mut result = CollisionResult::default();
    let mut pending: BTreeSet<EntityId> = BTreeSet::new();
    let mut effects: Vec<Effect> = Vec::new();

    let bullets = registry.query_with_ids::<(Bullet, Position, Renderable)>();
    let enemies = registry.query_with_ids::<(Enemy, Position, Health, Renderable)>();
    let players = registry.query_with_ids::<(Ship, Position, Health, Renderable)>();

    // Bullet x Enemy. No early exit: a bullet overlapping several enemies
    // in the same frame damages each of them before it is removed.
    for (bullet_id, (bullet, bullet_pos, bullet_r)) in &bullets {
        if bullet.owner != Faction::Player {
            continue;
        }
        for (enemy_id, (enemy, enemy_pos, _, enemy_r)) in &enemies {
            if pending.contains(enemy_id) {
                continue;
            }
            if !circles_overlap(bullet_pos, bullet_r.radius, enemy_pos, enemy_r.radius) {
                continue;
            }
            let Some(health) = registry.get_mut::<Health>(*enemy_id) else {
                continue;
            };
            health.damage(bullet.damage);
            let alive = health.is_alive();

            pending.insert(*bullet_id);
            result.bullet_hits += 1;
            effects.push(Effect::Damage {
                at: *enemy_pos,
                amount: bullet.damage,
            });

            if !alive {
                pending.insert(*enemy_id);
                state.add_score(enemy.score_value);
                result.enemies_killed += 1;
                effects.push(Effect::Explosion {
                    at: *enemy_pos,
                    radius: enemy_r.radius,
                });
            }
        }
    }

    // Enemy x Player. Ramming always destroys the enemy.
    for (player_id, (ship, player_pos, _, player_r)) in &players {
        if !ship.is_player() {
            continue;
        }
        for (enemy_id, (_, enemy_pos, _, enemy_r)) in &enemies {
            if pending.contains(enemy_id) {
                continue;
            }
            if !circles_overlap(player_pos, player_r.radius, enemy_pos, enemy_r.radius) {
                continue;
            }
            let Some(health) = registry.get_mut::<Health>(*player_id) else {
                continue;
            };
            health.damage(tunables.enemy_collision_damage);
            let alive = health.is_alive();

            pending.insert(*enemy_id);
            result.player_hits += 1;
            effects.push(Effect::Damage {
                at: *player_pos,
                amount: tunables.enemy_collision_damage,
            });
            effects.push(Effect::Explosion {
                at: *enemy_pos,
                radius: enemy_r.radius,
            });

            if !alive {
                state.end_game();
            }
        }
    }

    for &id in &pending {
        registry.delete_entity(id);
    }

    for effect in effects {
        match effect {
            Effect::Damage { at, amount } => {
                entities::spawn_damage_indicator(registry, tunables, at, amount);
            }
            Effect::Explosion { at, radius } => {
                entities::spawn_explosion(registry, tunables, at, radius);
            }
        }
    }

    result
}
