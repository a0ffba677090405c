//! Headless host for the simulation: command-line options, a scripted
//! pilot standing in for the keyboard and mouse, and a fixed-step frame
//! loop.

pub mod autopilot;
pub mod cli;
pub mod error;
pub mod game_loop;

pub use error::AppError;
