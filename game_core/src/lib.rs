pub mod ai;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod frontend;
pub mod fsm;
pub mod params;
pub mod physics;
pub mod playfield;
pub mod resources;
pub mod states;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use frontend::*;
pub use fsm::*;
pub use params::*;
pub use playfield::*;
pub use resources::*;
pub use states::*;

use hecs::World;
use systems::*;

/// Run the deterministic Pong simulation for `time.dt` seconds
///
/// Events are cleared once on entry, so they cover the whole call. Nothing
/// moves once the match has a winner.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    field: &Playfield,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    intents: &mut IntentQueue,
    rng: &mut GameRng,
) {
    events.clear();

    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.clamp(0.0, Params::MAX_DT);
    let fixed_dt = config.fixed_dt();

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        if score.has_winner(config.win_score).is_some() {
            break;
        }

        let step_dt = remaining_dt.min(fixed_dt);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Ingest inputs (apply to paddle intents)
        ingest_inputs(world, intents);
        apply_intents(world, config);

        // 2. AI picks its velocity from the ball it sees now
        drive_ai_paddles(world, field, config);

        // 3. Move paddles, then the ball
        move_paddles(world, &step_time, config);
        move_ball(world, &step_time);

        // 4. Check collisions (ball vs paddles, walls)
        check_collisions(world, field, config, events);

        // 5. Check scoring (ball exited the field)
        check_scoring(world, field, score, events, rng, config);

        guard_invariants(world, field, config);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity at its spawn point
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    side: Side,
    controller: Controller,
) -> hecs::Entity {
    let spawn = Playfield::from_config(config).paddle_spawn(side, config);
    let size = glam::Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((
        Paddle::new(side, spawn.x, spawn.y, size, controller),
        PaddleIntent::new(),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    config: &Config,
    pos: glam::Vec2,
    vel: glam::Vec2,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_radius),))
}
