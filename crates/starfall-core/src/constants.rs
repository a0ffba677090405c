//! Default tuning parameters.
//!
//! These seed `Tunables::default()`; a session reads the values from its
//! `Tunables`, never from here directly.

// --- Player ---

/// Player speed (pixels per second).
pub const PLAYER_SPEED: f64 = 200.0;
pub const PLAYER_MAX_HEALTH: f64 = 100.0;
pub const PLAYER_RADIUS: f64 = 15.0;

// --- Bullets ---

/// Bullet speed (pixels per second).
pub const BULLET_SPEED: f64 = 400.0;
/// Bullet lifetime (milliseconds).
pub const BULLET_LIFESPAN_MS: f64 = 2500.0;
/// Minimum time between shots (milliseconds).
pub const BULLET_COOLDOWN_MS: f64 = 200.0;
pub const BULLET_DAMAGE: f64 = 25.0;
pub const BULLET_RADIUS: f64 = 3.0;

// --- Enemies ---

/// Enemy speed (pixels per second).
pub const ENEMY_SPEED: f64 = 80.0;
/// Three hits with default bullets.
pub const ENEMY_HEALTH: f64 = 75.0;
pub const ENEMY_SCORE_VALUE: u32 = 1;
/// Spawn interval at the start of a session (milliseconds).
pub const ENEMY_SPAWN_INTERVAL_MS: f64 = 2000.0;
/// Damage dealt to the player when an enemy rams it.
pub const ENEMY_COLLISION_DAMAGE: f64 = 10.0;
pub const ENEMY_RADIUS: f64 = 12.0;

// --- Spawning ---

/// How far outside the play area enemies appear (pixels).
pub const SPAWN_EDGE_OFFSET: f64 = 20.0;
/// Session time over which the spawn interval ramps down (milliseconds).
pub const DIFFICULTY_RAMP_MS: f64 = 60_000.0;
/// Fraction of the base spawn interval the ramp bottoms out at.
pub const DIFFICULTY_FLOOR: f64 = 0.3;

// --- Cosmetics ---

pub const DAMAGE_INDICATOR_DURATION_MS: f64 = 800.0;
/// Upward drift of damage labels (pixels per second).
pub const DAMAGE_INDICATOR_RISE_SPEED: f64 = 40.0;
pub const EXPLOSION_DURATION_MS: f64 = 500.0;
/// End radius as a multiple of the destroyed enemy's radius.
pub const EXPLOSION_GROWTH: f64 = 2.5;

// --- Play area ---

pub const DEFAULT_PLAY_WIDTH: f64 = 1024.0;
pub const DEFAULT_PLAY_HEIGHT: f64 = 768.0;

/// Display refresh the headless host simulates (Hz).
pub const REFRESH_RATE: f64 = 60.0;
/// Milliseconds between simulated display refreshes.
pub const FRAME_MS: f64 = 1000.0 / REFRESH_RATE;
