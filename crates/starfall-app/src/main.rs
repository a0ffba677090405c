//! starfall: run a headless session with a scripted pilot and report the
//! score.

use std::process;

use starfall_app::{cli, game_loop, AppError};
use starfall_core::config::Tunables;
use starfall_sim::{SimConfig, Simulation};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        log::error!("{err}");
        if matches!(err, AppError::Usage(_)) {
            cli::print_usage();
        }
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), AppError> {
    let options = cli::parse(args)?;
    if options.help {
        cli::print_usage();
        return Ok(());
    }

    let tunables = match &options.config {
        Some(path) => Tunables::load(path)?,
        None => Tunables::default(),
    };

    if options.dump_config {
        println!("{}", tunables.to_toml_string()?);
        return Ok(());
    }

    log::info!(
        "starting session: seed {}, {} frames{}",
        options.seed,
        options.frames,
        if options.restart { ", restart on game over" } else { "" }
    );

    let mut sim = Simulation::new(SimConfig {
        seed: options.seed,
        tunables,
        ..Default::default()
    });
    let summary = game_loop::run(&mut sim, options.frames, options.restart);

    log::info!(
        "ran {} frames over {} session(s): final score {}, best {}{}",
        summary.frames,
        summary.sessions,
        summary.final_score,
        summary.best_score,
        if summary.game_over { " (game over)" } else { "" }
    );
    Ok(())
}
