//! Core types and definitions for the STARFALL simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, session state, the input snapshot, render snapshots,
//! tunables and their defaults. It has no runtime behavior of its own.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod game;
pub mod state;
pub mod types;
