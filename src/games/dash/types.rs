//! Santa Dash data structures.
//!
//! Simulation runs in a logical pixel space; the scene scales it to
//! terminal cells at render time and never feeds anything back.

use crate::config::{CollectibleVariant, DashConfig, ObstacleVariant, Placement};
use rand::distributions::{Alphanumeric, DistString};
use rand::Rng;
use ratatui::style::Color;

/// Logical play-field dimensions in world pixels.
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 400.0;

/// Y of the ground line. The snow layer fills everything below it.
pub const GROUND_Y: f64 = 320.0;

/// Player sprite is square.
pub const PLAYER_SIZE: f64 = 64.0;

/// Player sprite left edge. The world scrolls; the player does not.
pub const PLAYER_X: f64 = 100.0;

/// Sprite top edge while standing on the ground.
pub const GROUND_TOP: f64 = GROUND_Y - PLAYER_SIZE;

/// Entities spawn this far past the right edge so they scroll in smoothly.
pub const SPAWN_X: f64 = WORLD_WIDTH + 50.0;

/// Entities are dropped once their x falls below this.
pub const OFFSCREEN_X: f64 = -100.0;

/// Length of spawned entity ids.
pub const ENTITY_ID_LEN: usize = 7;

// Hitboxes are deliberately smaller than the sprites so near-misses feel
// fair. Player box is inset from the 64px sprite; entity boxes shrink by
// ENTITY_INSET on every side.
pub const HITBOX_X: f64 = PLAYER_X + 5.0;
pub const HITBOX_WIDTH: f64 = PLAYER_SIZE - 20.0;
pub const HITBOX_STAND_TOP: f64 = 10.0;
pub const HITBOX_STAND_HEIGHT: f64 = 54.0;
pub const HITBOX_CROUCH_TOP: f64 = 30.0;
pub const HITBOX_CROUCH_HEIGHT: f64 = 34.0;
pub const ENTITY_INSET: f64 = 5.0;

/// Parallax scroll rates as fractions of world speed (far to near).
pub const PARALLAX_FAR: f64 = 0.1;
pub const PARALLAX_MID: f64 = 0.3;
pub const PARALLAX_NEAR: f64 = 0.6;

/// Screen shake impulse on a hit and its per-tick decay.
pub const SHAKE_IMPULSE: f64 = 15.0;
pub const SHAKE_DECAY: f64 = 0.9;

/// Burst colors for pickup and hit feedback.
pub const COLLECT_BURST_COLOR: Color = Color::Rgb(250, 204, 21);
pub const HIT_BURST_COLOR: Color = Color::Rgb(239, 68, 68);

/// How a finished run ended. A loss carries the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Win,
    Loss(u32),
}

/// What a spawned entity is and which table row shaped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Obstacle(ObstacleVariant),
    Collectible(CollectibleVariant),
}

/// A single obstacle or collectible scrolling through the world.
///
/// Plain data: the variant-table row that produced it is snapshotted at
/// spawn time so rendering and scoring never look back at the config tables.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: String,
    pub kind: EntityKind,
    /// Top-left corner in world pixels.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Points granted on pickup; zero for obstacles.
    pub value: u32,
    pub glyph: char,
    pub color: Color,
}

impl Entity {
    pub fn is_obstacle(&self) -> bool {
        matches!(self.kind, EntityKind::Obstacle(_))
    }

    pub fn is_collectible(&self) -> bool {
        matches!(self.kind, EntityKind::Collectible(_))
    }
}

/// A cosmetic spark from a pickup or hit. One particle per burst may carry
/// floating score text.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Remaining life in (0, 1]; doubles as the fade-out alpha.
    pub life: f64,
    pub size: f64,
    pub color: Color,
    pub text: Option<String>,
}

impl Particle {
    /// Random scatter around a point. Text particles get an upward kick.
    pub fn scatter<R: Rng>(
        x: f64,
        y: f64,
        color: Color,
        text: Option<String>,
        rng: &mut R,
    ) -> Self {
        let lift = if text.is_some() { 2.0 } else { 0.0 };
        Self {
            x,
            y,
            vx: (rng.gen::<f64>() - 0.5) * 6.0,
            vy: (rng.gen::<f64>() - 0.5) * 6.0 - lift,
            life: 1.0,
            size: rng.gen::<f64>() * 4.0 + 2.0,
            color,
            text,
        }
    }

    /// Advance one tick. Returns false once expired.
    pub fn advance(&mut self) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        if self.text.is_some() {
            self.vy -= 0.1; // score text floats upward
        }
        self.life -= 0.02;
        self.life > 0.0
    }
}

/// Full state of one run.
#[derive(Debug, Clone)]
pub struct DashGame {
    pub config: DashConfig,
    /// None while running; set exactly once by the collision phase (or a
    /// confirmed forfeit). Ticks are no-ops afterward.
    pub outcome: Option<RunOutcome>,
    pub forfeit_pending: bool,

    // -- Player --
    /// Sprite top edge; GROUND_TOP when standing, smaller while airborne.
    pub player_y: f64,
    /// Vertical velocity in px/tick (negative = upward).
    pub velocity: f64,
    pub airborne: bool,
    /// Crouch toggle. Shrinks the hitbox; does not affect jumping.
    pub crouching: bool,
    /// Jump intent, consumed at the next physics tick.
    pub jump_queued: bool,

    // -- World --
    pub world_speed: f64,
    pub entities: Vec<Entity>,
    pub particles: Vec<Particle>,
    /// Physics ticks since the run began; drives the spawner and cosmetics.
    pub frame_counter: u64,
    /// Parallax layer offsets (stars, mountains, trees).
    pub offset_far: f64,
    pub offset_mid: f64,
    pub offset_near: f64,

    // -- Scoring --
    pub score: u32,
    pub lives: u32,
    /// Ticks of hit immunity left. The scene flickers the sprite on it.
    pub invulnerability: u32,
    pub screen_shake: f64,

    // -- Timing --
    /// Sub-tick accumulator for the fixed-step driver (milliseconds).
    pub accumulated_time_ms: u64,
}

impl DashGame {
    pub fn new(config: DashConfig) -> Self {
        let world_speed = config.initial_speed;
        let lives = config.starting_lives;
        Self {
            config,
            outcome: None,
            forfeit_pending: false,

            player_y: GROUND_TOP,
            velocity: 0.0,
            airborne: false,
            crouching: false,
            jump_queued: false,

            world_speed,
            entities: Vec::new(),
            particles: Vec::new(),
            frame_counter: 0,
            offset_far: 0.0,
            offset_mid: 0.0,
            offset_near: 0.0,

            score: 0,
            lives,
            invulnerability: 0,
            screen_shake: 0.0,

            accumulated_time_ms: 0,
        }
    }

    pub fn is_on_ground(&self) -> bool {
        !self.airborne
    }

    /// Append one entity just past the right edge: weighted obstacle vs
    /// collectible draw, then a uniform pick within that kind's table.
    pub fn spawn_entity<R: Rng>(&mut self, rng: &mut R) {
        let id = Alphanumeric.sample_string(rng, ENTITY_ID_LEN);
        let pick_obstacle =
            rng.gen::<f64>() < self.config.obstacle_weight && !self.config.obstacles.is_empty();

        if pick_obstacle {
            let spec = &self.config.obstacles[rng.gen_range(0..self.config.obstacles.len())];
            let y = match spec.placement {
                Placement::OnGround => GROUND_Y - spec.height,
                Placement::InGround => GROUND_Y,
            };
            self.entities.push(Entity {
                id,
                kind: EntityKind::Obstacle(spec.variant),
                x: SPAWN_X,
                y,
                width: spec.width,
                height: spec.height,
                value: 0,
                glyph: spec.glyph,
                color: spec.color,
            });
        } else if !self.config.collectibles.is_empty() {
            let spec = &self.config.collectibles[rng.gen_range(0..self.config.collectibles.len())];
            let above =
                rng.gen_range(self.config.collectible_band_low..=self.config.collectible_band_high);
            self.entities.push(Entity {
                id,
                kind: EntityKind::Collectible(spec.variant),
                x: SPAWN_X,
                y: GROUND_Y - above,
                width: spec.width,
                height: spec.height,
                value: spec.value,
                glyph: spec.glyph,
                color: spec.color,
            });
        }
    }

    /// Gold burst plus a floating "+N" where a collectible was taken.
    pub fn spawn_collect_burst<R: Rng>(&mut self, x: f64, y: f64, value: u32, rng: &mut R) {
        for i in 0..self.config.collect_particle_count {
            let text = if i == 0 {
                Some(format!("+{}", value))
            } else {
                None
            };
            self.particles
                .push(Particle::scatter(x, y, COLLECT_BURST_COLOR, text, rng));
        }
    }

    /// Red burst at the player when an obstacle connects.
    pub fn spawn_hit_burst<R: Rng>(&mut self, rng: &mut R) {
        for _ in 0..self.config.hit_particle_count {
            self.particles.push(Particle::scatter(
                PLAYER_X + 20.0,
                self.player_y + 30.0,
                HIT_BURST_COLOR,
                None,
                rng,
            ));
        }
    }
}
