//! Fixed-step frame loop. Feeds synthetic timestamps at the display
//! refresh rate, so a run is fully determined by its seed and tunables.

use starfall_core::constants::FRAME_MS;
use starfall_sim::ecs::ComponentKind;
use starfall_sim::Simulation;

use crate::autopilot;

/// Outcome of a headless run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u32,
    /// Sessions started, including the first.
    pub sessions: u32,
    pub best_score: u32,
    pub final_score: u32,
    /// Whether the last session ended in game over.
    pub game_over: bool,
}

/// Simulate up to `frames` frames. On game over either start a new
/// session (`restart`) or stop early.
pub fn run(sim: &mut Simulation, frames: u32, restart: bool) -> RunSummary {
    let mut summary = RunSummary {
        sessions: 1,
        ..Default::default()
    };
    let mut timestamp_ms = 0.0;

    for frame in 0..frames {
        autopilot::steer(sim);
        let snapshot = sim.frame(timestamp_ms);
        timestamp_ms += FRAME_MS;
        summary.frames = frame + 1;
        summary.final_score = snapshot.hud.score;
        summary.best_score = summary.best_score.max(snapshot.hud.score);
        summary.game_over = snapshot.hud.game_over;

        if frame % 600 == 0 {
            log::debug!(
                "frame {frame}: score {}, {} enemies, {} sprites, elapsed {:.1}s",
                snapshot.hud.score,
                sim.registry().count_of(ComponentKind::Enemy),
                snapshot.sprites.len(),
                snapshot.hud.elapsed_ms / 1000.0
            );
        }

        if snapshot.hud.game_over {
            if !restart {
                break;
            }
            log::info!("session {} over with score {}", summary.sessions, snapshot.hud.score);
            sim.restart();
            summary.sessions += 1;
        }
    }

    summary
}
