//! Gameplay tuning for the Santa Dash runner.
//!
//! Everything the physics engine, spawner, and collision engine treat as
//! data lives here: movement constants, the win threshold, spawn cadence,
//! and the obstacle/collectible variant tables. `DashConfig::default()` is
//! the shipped game; tests derive stress variants with struct update syntax.

use ratatui::style::Color;

/// Where an obstacle variant sits relative to the ground line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Bottom edge rests on the ground line (jump over it).
    OnGround,
    /// Top edge starts at the ground line; a hazard sunk into the floor.
    InGround,
}

/// Obstacle flavors. Sizes and placement live in the config table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleVariant {
    Chimney,
    Snowman,
    IcyGap,
}

/// Collectible flavors. Sizes and point values live in the config table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleVariant {
    Gift,
    CandyCane,
}

/// One row of the obstacle table.
#[derive(Debug, Clone)]
pub struct ObstacleSpec {
    pub variant: ObstacleVariant,
    pub label: &'static str,
    pub width: f64,
    pub height: f64,
    pub placement: Placement,
    pub glyph: char,
    pub color: Color,
}

/// One row of the collectible table.
#[derive(Debug, Clone)]
pub struct CollectibleSpec {
    pub variant: CollectibleVariant,
    pub label: &'static str,
    pub width: f64,
    pub height: f64,
    /// Points granted on pickup.
    pub value: u32,
    pub glyph: char,
    pub color: Color,
}

/// Tunable parameters for one run.
#[derive(Debug, Clone)]
pub struct DashConfig {
    /// Downward velocity gained per tick while airborne.
    pub gravity: f64,
    /// Velocity set by a jump (negative = upward).
    pub jump_impulse: f64,
    /// World scroll speed at the start of a run (px/tick).
    pub initial_speed: f64,
    /// Ceiling for the scroll speed.
    pub max_speed: f64,
    /// Speed gained per tick. Zero keeps difficulty steady.
    pub speed_increment: f64,
    /// Score at which the run is won.
    pub win_score: u32,
    pub starting_lives: u32,
    /// Ticks of hit immunity after losing a life.
    pub invulnerability_ticks: u32,
    /// Spawn cadence: `interval = max(floor, base - speed * speed_factor)`.
    pub spawn_interval_base: f64,
    pub spawn_interval_floor: f64,
    pub spawn_speed_factor: f64,
    /// Probability that a spawn is an obstacle rather than a collectible.
    pub obstacle_weight: f64,
    /// Collectibles spawn with their top edge this far above the ground
    /// line (uniform in `low..=high`), reachable only by jumping.
    pub collectible_band_low: f64,
    pub collectible_band_high: f64,
    /// Cosmetic burst sizes.
    pub collect_particle_count: usize,
    pub hit_particle_count: usize,
    pub obstacles: Vec<ObstacleSpec>,
    pub collectibles: Vec<CollectibleSpec>,
}

impl DashConfig {
    /// Ticks between spawner firings at the given world speed. Faster
    /// world means a shorter interval, floored so spawns never stack.
    pub fn spawn_interval(&self, world_speed: f64) -> u64 {
        let interval = (self.spawn_interval_base - world_speed * self.spawn_speed_factor).floor();
        interval.max(self.spawn_interval_floor) as u64
    }
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_impulse: -14.0,
            initial_speed: 6.0,
            max_speed: 12.0,
            speed_increment: 0.0,
            win_score: 100,
            starting_lives: 3,
            invulnerability_ticks: 90,
            spawn_interval_base: 80.0,
            spawn_interval_floor: 40.0,
            spawn_speed_factor: 3.0,
            obstacle_weight: 0.6,
            collectible_band_low: 100.0,
            collectible_band_high: 200.0,
            collect_particle_count: 8,
            hit_particle_count: 15,
            obstacles: vec![
                ObstacleSpec {
                    variant: ObstacleVariant::Chimney,
                    label: "Chimney",
                    width: 40.0,
                    height: 60.0,
                    placement: Placement::OnGround,
                    glyph: '#',
                    color: Color::Rgb(190, 80, 60),
                },
                ObstacleSpec {
                    variant: ObstacleVariant::Snowman,
                    label: "Snowman",
                    width: 40.0,
                    height: 60.0,
                    placement: Placement::OnGround,
                    glyph: 'O',
                    color: Color::Rgb(235, 240, 250),
                },
                ObstacleSpec {
                    variant: ObstacleVariant::IcyGap,
                    label: "Icy Gap",
                    width: 60.0,
                    height: 20.0,
                    placement: Placement::InGround,
                    glyph: '~',
                    color: Color::Rgb(125, 211, 252),
                },
            ],
            collectibles: vec![
                CollectibleSpec {
                    variant: CollectibleVariant::Gift,
                    label: "Gift",
                    width: 35.0,
                    height: 35.0,
                    value: 5,
                    glyph: '*',
                    color: Color::Rgb(250, 204, 21),
                },
                CollectibleSpec {
                    variant: CollectibleVariant::CandyCane,
                    label: "Candy Cane",
                    width: 35.0,
                    height: 35.0,
                    value: 2,
                    glyph: '/',
                    color: Color::Rgb(244, 114, 182),
                },
            ],
        }
    }
}
