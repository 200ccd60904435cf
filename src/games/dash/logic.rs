//! Santa Dash game logic: physics, input processing, spawning, collision.
//!
//! One physics step runs the phases in a fixed order: movement, then
//! spawning, then collision/scoring. A run turns terminal inside the
//! collision phase (or through a confirmed forfeit), and the outcome is
//! read from state rather than signaled through callbacks.

use super::types::*;
use rand::Rng;

/// Physics tick interval in milliseconds (~60 FPS).
pub const PHYSICS_TICK_MS: u64 = 16;

/// UI-agnostic input actions for the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashInput {
    Jump,    // Space or Up arrow
    Duck,    // Down arrow (toggle: press to crouch, press again to stand)
    Forfeit, // Esc (press twice to abandon the run)
    Other,   // Any other key (cancels forfeit_pending)
}

/// Feedback pulses emitted by a tick, consumed for sound effects.
/// Screen transitions read `DashGame::outcome` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashEvent {
    Jumped,
    Collected { value: u32 },
    Hit { lives_left: u32 },
}

/// Process player input. Inputs only set intent flags; physics consumes
/// them at the next tick boundary.
pub fn process_input(game: &mut DashGame, input: DashInput) {
    if game.outcome.is_some() {
        return;
    }

    match input {
        DashInput::Jump => {
            if game.forfeit_pending {
                game.forfeit_pending = false; // Cancel forfeit
            } else {
                game.jump_queued = true;
            }
        }
        DashInput::Duck => {
            if game.forfeit_pending {
                game.forfeit_pending = false; // Cancel forfeit
            } else {
                // Crouch is a toggle; it never affects jump eligibility
                game.crouching = !game.crouching;
            }
        }
        DashInput::Forfeit => {
            if game.forfeit_pending {
                game.outcome = Some(RunOutcome::Loss(game.score)); // Confirm forfeit
            } else {
                game.forfeit_pending = true;
            }
        }
        DashInput::Other => {
            if game.forfeit_pending {
                game.forfeit_pending = false; // Cancel forfeit
            }
        }
    }
}

/// Advance the run. Called from the main game loop.
///
/// `dt_ms` is milliseconds since last call. Internally steps physics in
/// 16ms increments. Returns the feedback events from the steps taken.
pub fn tick_dash<R: Rng>(game: &mut DashGame, dt_ms: u64, rng: &mut R) -> Vec<DashEvent> {
    let mut events = Vec::new();

    if game.outcome.is_some() {
        return events;
    }

    // Pause physics while the forfeit prompt is up
    if game.forfeit_pending {
        return events;
    }

    // Clamp dt to 100ms max to prevent physics explosion after pause/lag
    let dt_ms = dt_ms.min(100);

    game.accumulated_time_ms += dt_ms;

    // Step physics in fixed 16ms increments
    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step_physics(game, rng, &mut events);

        if game.outcome.is_some() {
            break;
        }
    }

    events
}

/// Single physics step (16ms tick).
fn step_physics<R: Rng>(game: &mut DashGame, rng: &mut R, events: &mut Vec<DashEvent>) {
    game.frame_counter += 1;

    // 1. Consume the jump intent; only honored on the ground
    if game.jump_queued {
        game.jump_queued = false;
        if game.is_on_ground() {
            game.velocity = game.config.jump_impulse;
            game.airborne = true;
            events.push(DashEvent::Jumped);
        }
    }

    // 2. Gravity and integration while airborne
    if game.airborne {
        game.velocity += game.config.gravity;
        game.player_y += game.velocity;

        // Landing clamp: the only path that clears airborne
        if game.player_y >= GROUND_TOP {
            game.player_y = GROUND_TOP;
            game.velocity = 0.0;
            game.airborne = false;
        }
    }

    // 3. World speed ramp (monotone, capped)
    game.world_speed =
        (game.world_speed + game.config.speed_increment).min(game.config.max_speed);

    // 4. Parallax offsets (cosmetic)
    game.offset_far += game.world_speed * PARALLAX_FAR;
    game.offset_mid += game.world_speed * PARALLAX_MID;
    game.offset_near += game.world_speed * PARALLAX_NEAR;

    // 5. Scroll entities left at world speed
    for entity in &mut game.entities {
        entity.x -= game.world_speed;
    }

    // 6. Drop entities that scrolled off the left edge
    game.entities.retain(|e| e.x > OFFSCREEN_X);

    // 7. Spawn on the cadence interval
    if game.frame_counter % game.config.spawn_interval(game.world_speed) == 0 {
        game.spawn_entity(rng);
    }

    // 8. Advance burst particles
    game.particles.retain_mut(Particle::advance);

    // 9. Collision and scoring; may set the outcome (win or fatal hit)
    resolve_collisions(game, rng, events);
    if game.outcome.is_some() {
        return;
    }

    // 10. Invulnerability countdown and shake decay
    if game.invulnerability > 0 {
        game.invulnerability -= 1;
    }
    if game.screen_shake > 0.0 {
        game.screen_shake *= SHAKE_DECAY;
    }
}

/// Axis-aligned box in world pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The player's collision box for the current stance.
pub fn player_hitbox(game: &DashGame) -> HitBox {
    let (top, height) = if game.crouching {
        (HITBOX_CROUCH_TOP, HITBOX_CROUCH_HEIGHT)
    } else {
        (HITBOX_STAND_TOP, HITBOX_STAND_HEIGHT)
    };
    HitBox {
        x: HITBOX_X,
        y: game.player_y + top,
        width: HITBOX_WIDTH,
        height,
    }
}

/// AABB overlap with the entity's bounds shrunk by ENTITY_INSET per side.
fn overlaps(hb: &HitBox, e: &Entity) -> bool {
    hb.x < e.x + e.width - ENTITY_INSET
        && hb.x + hb.width > e.x + ENTITY_INSET
        && hb.y < e.y + e.height - ENTITY_INSET
        && hb.y + hb.height > e.y + ENTITY_INSET
}

/// Resolve all player/entity overlaps for this tick.
///
/// Collectibles: every overlapping one scores and is removed; reaching the
/// win threshold ends the run at once, leaving later entities unprocessed.
/// Obstacles: cost a life and start the invulnerability window, but stay
/// in the world; only scrolling off-screen removes them, so repeat grazes
/// during one window cannot double-charge.
fn resolve_collisions<R: Rng>(game: &mut DashGame, rng: &mut R, events: &mut Vec<DashEvent>) {
    let hitbox = player_hitbox(game);

    let mut i = 0;
    while i < game.entities.len() {
        if game.entities[i].is_collectible() && overlaps(&hitbox, &game.entities[i]) {
            let taken = game.entities.remove(i);
            game.score += taken.value;
            game.spawn_collect_burst(
                taken.x + taken.width / 2.0,
                taken.y + taken.height / 2.0,
                taken.value,
                rng,
            );
            events.push(DashEvent::Collected { value: taken.value });

            if game.score >= game.config.win_score {
                game.outcome = Some(RunOutcome::Win);
                return;
            }
        } else {
            i += 1;
        }
    }

    if game.invulnerability == 0 {
        let hit = game
            .entities
            .iter()
            .any(|e| e.is_obstacle() && overlaps(&hitbox, e));
        if hit {
            game.lives -= 1;
            game.screen_shake = SHAKE_IMPULSE;
            game.invulnerability = game.config.invulnerability_ticks;
            game.spawn_hit_burst(rng);
            events.push(DashEvent::Hit {
                lives_left: game.lives,
            });

            if game.lives == 0 {
                game.outcome = Some(RunOutcome::Loss(game.score));
            }
        }
    }
}
