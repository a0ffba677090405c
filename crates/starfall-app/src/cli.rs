//! Command-line options.
//!
//! Usage:
//!   starfall [--config tunables.toml] [--frames N] [--seed S] [--restart]
//!   starfall --dump-config

use std::path::PathBuf;

use crate::error::AppError;

/// One minute of play at the display refresh rate.
pub const DEFAULT_FRAMES: u32 = 3600;

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// TOML file of tunables; built-in defaults when absent.
    pub config: Option<PathBuf>,
    pub frames: u32,
    pub seed: u64,
    /// Start a new session on game over instead of stopping.
    pub restart: bool,
    /// Print the effective tunables as TOML and exit.
    pub dump_config: bool,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config: None,
            frames: DEFAULT_FRAMES,
            seed: 42,
            restart: false,
            dump_config: false,
            help: false,
        }
    }
}

/// Parse everything after the program name.
pub fn parse(args: &[String]) -> Result<Options, AppError> {
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => options.config = Some(PathBuf::from(value_of(args, i)?)),
            "--frames" => options.frames = parse_number(args, i)?,
            "--seed" => options.seed = parse_number(args, i)?,
            "--restart" => {
                options.restart = true;
                i += 1;
                continue;
            }
            "--dump-config" => {
                options.dump_config = true;
                i += 1;
                continue;
            }
            "help" | "--help" | "-h" => {
                options.help = true;
                i += 1;
                continue;
            }
            other => return Err(AppError::Usage(format!("unknown argument: {other}"))),
        }
        i += 2;
    }
    Ok(options)
}

fn value_of(args: &[String], i: usize) -> Result<&str, AppError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| AppError::Usage(format!("{} needs a value", args[i])))
}

fn parse_number<T: std::str::FromStr>(args: &[String], i: usize) -> Result<T, AppError> {
    let raw = value_of(args, i)?;
    raw.parse()
        .map_err(|_| AppError::Usage(format!("{} expects a number, got `{raw}`", args[i])))
}

pub fn print_usage() {
    eprintln!(
        "starfall: headless top-down shooter session\n\
         \n\
           --config <path>   Tunables TOML (missing keys use defaults)\n\
           --frames <N>      Frames to simulate at 60 Hz (default: {DEFAULT_FRAMES})\n\
           --seed <S>        RNG seed for enemy placement (default: 42)\n\
           --restart         Start over on game over instead of stopping\n\
           --dump-config     Print the effective tunables as TOML\n\
         \n\
         Logging follows RUST_LOG (default: info).\n"
    );
}
