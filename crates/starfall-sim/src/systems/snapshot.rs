//! Snapshot system: builds the read-only `RenderSnapshot` after each frame.

use starfall_core::components::{DamageIndicator, Explosion, Health, Renderable, Ship};
use starfall_core::game::GameState;
use starfall_core::state::{HudView, LabelView, RenderSnapshot, SpriteView};
use starfall_core::types::Position;

use crate::ecs::Registry;

/// Build the snapshot. Takes `&Registry`, so it cannot mutate the world.
pub fn build_snapshot(registry: &Registry, state: &GameState) -> RenderSnapshot {
    let sprites = registry
        .query_with_ids::<(Position, Renderable)>()
        .into_iter()
        .map(|(id, (pos, renderable))| SpriteView {
            x: pos.x,
            y: pos.y,
            radius: renderable.radius,
            color: renderable.color,
            shape: renderable.shape,
            rotation: registry.get::<Ship>(id).map_or(0.0, |ship| ship.rotation),
            opacity: registry
                .get::<Explosion>(id)
                .map_or(1.0, Explosion::opacity),
        })
        .collect();

    let labels = registry
        .query::<(DamageIndicator, Position)>()
        .into_iter()
        .map(|(indicator, pos)| LabelView {
            x: pos.x,
            y: pos.y,
            text: format!("-{}", indicator.damage),
            opacity: indicator.opacity(),
        })
        .collect();

    let player_health = registry
        .query::<(Ship, Health)>()
        .into_iter()
        .find(|(ship, _)| ship.is_player())
        .map(|(_, health)| (health.current.max(0.0), health.max));

    RenderSnapshot {
        sprites,
        labels,
        hud: HudView {
            score: state.score,
            player_health,
            game_over: state.game_over,
            elapsed_ms: state.elapsed_ms,
        },
    }
}
