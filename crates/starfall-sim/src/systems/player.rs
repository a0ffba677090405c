//! Player housekeeping run around the main pipeline: face the pointer
//! before the systems, stay inside the play area after them.

use starfall_core::components::Ship;
use starfall_core::config::Tunables;
use starfall_core::game::InputState;
use starfall_core::types::{PlayArea, Position};

use crate::ecs::Registry;
use crate::entities;

pub fn face_pointer(registry: &mut Registry, input: &InputState) {
    let Some((id, pos)) = entities::find_player(registry) else {
        return;
    };
    if let Some(ship) = registry.get_mut::<Ship>(id) {
        ship.rotation = pos.angle_to(&input.pointer);
    }
}

/// Keep the player's whole hull on screen.
pub fn clamp_to_area(registry: &mut Registry, area: &PlayArea, tunables: &Tunables) {
    let Some((id, _)) = entities::find_player(registry) else {
        return;
    };
    if let Some(pos) = registry.get_mut::<Position>(id) {
        area.clamp(pos, tunables.player_radius);
    }
}
