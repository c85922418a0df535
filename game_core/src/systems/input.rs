use hecs::World;

use crate::components::*;
use crate::frontend::{InputSnapshot, Key};
use crate::resources::*;

/// Translate held keys into paddle directions for the human players
///
/// Two players: W/S drive the left paddle, Up/Down the right one. A single
/// player may use either pair for the left paddle.
pub fn queue_human_inputs(input: &InputSnapshot, kind: MatchKind, queue: &mut IntentQueue) {
    match kind {
        MatchKind::TwoPlayer => {
            queue.push_input(Side::Left, input.axis(Key::W, Key::S));
            queue.push_input(Side::Right, input.axis(Key::Up, Key::Down));
        }
        MatchKind::SinglePlayer => {
            let wasd = input.axis(Key::W, Key::S);
            let arrows = input.axis(Key::Up, Key::Down);
            queue.push_input(Side::Left, (wasd + arrows).signum());
        }
    }
}

/// Apply queued directions to the intents of human-driven paddles
pub fn ingest_inputs(world: &mut World, queue: &mut IntentQueue) {
    for &(side, dir) in &queue.inputs {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.side == side && paddle.controller == Controller::Human {
                intent.dir = dir.signum();
            }
        }
    }

    // Clear processed inputs
    queue.clear();
}
