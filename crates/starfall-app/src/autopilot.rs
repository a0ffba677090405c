//! Scripted pilot that drives `InputState` the way a player would:
//! aim at the closest enemy, hold fire while one exists, and back away
//! from anything that gets too close.

use starfall_core::components::Enemy;
use starfall_core::types::Position;
use starfall_sim::entities::find_player;
use starfall_sim::Simulation;

/// Enemies closer than this make the pilot retreat.
pub const RETREAT_DISTANCE: f64 = 150.0;

/// Closest enemy position to `from`, if any enemy exists.
pub fn nearest_enemy(sim: &Simulation, from: &Position) -> Option<Position> {
    sim.registry()
        .query::<(Enemy, Position)>()
        .into_iter()
        .map(|(_, pos)| pos)
        .min_by(|a, b| a.distance_to(from).total_cmp(&b.distance_to(from)))
}

/// Write this frame's input. Call before `Simulation::frame`.
pub fn steer(sim: &mut Simulation) {
    let Some((_, player_pos)) = find_player(sim.registry()) else {
        return;
    };
    let target = nearest_enemy(sim, &player_pos);
    let input = sim.input_mut();

    for key in ["w", "a", "s", "d"] {
        input.key_up(key);
    }

    let Some(target) = target else {
        input.set_pointer_down(false);
        return;
    };
    input.pointer_move(target.x, target.y);
    input.set_pointer_down(true);

    if player_pos.distance_to(&target) < RETREAT_DISTANCE {
        input.key_down(if target.x > player_pos.x { "a" } else { "d" });
        input.key_down(if target.y > player_pos.y { "w" } else { "s" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfall_core::enums::Key;
    use starfall_sim::entities::spawn_enemy;
    use starfall_sim::SimConfig;

    fn sim_with_enemy(offset: (f64, f64)) -> Simulation {
        let mut sim = Simulation::new(SimConfig::default());
        let center = sim.play_area().center();
        let tunables = sim.tunables().clone();
        spawn_enemy(
            sim.registry_mut(),
            &tunables,
            Position::new(center.x + offset.0, center.y + offset.1),
        );
        sim
    }

    #[test]
    fn test_idle_without_enemies() {
        let mut sim = Simulation::new(SimConfig::default());
        steer(&mut sim);
        assert!(!sim.input().pointer_down);
        assert!(sim.input().keys_pressed.is_empty());
    }

    #[test]
    fn test_aims_and_fires_at_distant_enemy() {
        let mut sim = sim_with_enemy((300.0, 0.0));
        steer(&mut sim);
        let center = sim.play_area().center();
        assert!(sim.input().pointer_down);
        assert_eq!(sim.input().pointer, Position::new(center.x + 300.0, center.y));
        assert!(sim.input().keys_pressed.is_empty(), "No need to retreat");
    }

    #[test]
    fn test_retreats_from_close_enemy() {
        let mut sim = sim_with_enemy((50.0, 50.0));
        steer(&mut sim);
        assert!(sim.input().is_pressed(Key::Left));
        assert!(sim.input().is_pressed(Key::Up));
        assert!(!sim.input().is_pressed(Key::Right));
    }
}
