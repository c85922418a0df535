use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;

use crate::components::{Ball, MatchKind, Paddle, Side};
use crate::config::Config;
use crate::frontend::{InputSnapshot, Key, Shape, Surface, TextSize};
use crate::params::Params;
use crate::playfield::Playfield;
use crate::resources::{Events, GameRng, IntentQueue, Score, Time};
use crate::systems::queue_human_inputs;
use crate::{create_ball, create_paddle, step};

use super::Transition;

/// A match in progress
///
/// Owns the world with both paddles and the ball plus the scoreboard.
/// All of it is dropped when the match is left.
pub struct PlayingState {
    pub kind: MatchKind,
    pub world: World,
    pub time: Time,
    pub field: Playfield,
    pub score: Score,
    pub events: Events,
    pub intents: IntentQueue,
    pub rng: GameRng,
    pub paused: bool,
    /// Recent ball positions, oldest first
    pub trail: VecDeque<Vec2>,
}

impl PlayingState {
    pub fn new(config: &Config, kind: MatchKind, mut rng: GameRng) -> Self {
        let field = Playfield::from_config(config);
        let mut world = World::new();

        // Create paddles
        for side in [Side::Left, Side::Right] {
            create_paddle(&mut world, config, side, kind.controller(side));
        }

        // Create ball, served toward a random side
        let mut ball = Ball::new(field.ball_spawn(), Vec2::ZERO, config.ball_radius);
        let toward = if rand::Rng::gen_bool(&mut rng.0, 0.5) {
            Side::Left
        } else {
            Side::Right
        };
        ball.reset(
            field.ball_spawn(),
            config.ball_speed_base,
            config.serve_angle,
            toward,
            &mut rng,
        );
        create_ball(&mut world, config, ball.pos, ball.vel);

        log::info!("Starting {} match", kind.label());

        Self {
            kind,
            world,
            time: Time::new(config.fixed_dt(), 0.0),
            field,
            score: Score::new(),
            events: Events::new(),
            intents: IntentQueue::new(),
            rng,
            paused: false,
            trail: VecDeque::with_capacity(Params::TRAIL_LENGTH + 1),
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Advance the match by one fixed step
    pub fn update(
        &mut self,
        config: &Config,
        dt: f32,
        input: &InputSnapshot,
    ) -> Option<Transition> {
        self.events.clear();

        if input.was_pressed(Key::Quit) {
            return Some(Transition::Quit);
        }
        if input.was_pressed(Key::Back) {
            return Some(Transition::Leave);
        }
        if input.was_pressed(Key::Restart) {
            return Some(Transition::Restart(self.kind));
        }
        if input.was_pressed(Key::Pause) {
            self.paused = !self.paused;
            log::info!("Match {}", if self.paused { "paused" } else { "resumed" });
        }

        if self.paused {
            return None;
        }

        // A decided match never moves again
        if let Some(transition) = self.finished(config) {
            return Some(transition);
        }

        if let Some(ball) = self.ball() {
            self.trail.push_back(ball.pos);
            if self.trail.len() > Params::TRAIL_LENGTH {
                self.trail.pop_front();
            }
        }

        queue_human_inputs(input, self.kind, &mut self.intents);
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.field,
            config,
            &mut self.score,
            &mut self.events,
            &mut self.intents,
            &mut self.rng,
        );

        // The serve teleports the ball to the centre
        if self.events.scorer().is_some() {
            self.trail.clear();
        }

        self.finished(config)
    }

    /// Game-over request once either side reached the winning score
    pub fn finished(&self, config: &Config) -> Option<Transition> {
        self.score
            .has_winner(config.win_score)
            .map(|winner| Transition::Finish {
                kind: self.kind,
                winner,
                score: self.score,
            })
    }

    pub fn render(&self, config: &Config, surface: &mut dyn Surface) {
        let palette = config.palette;
        let field = self.field;
        surface.clear(palette.background);

        surface.draw(
            Shape::CenterLine {
                length: field.height,
                dash: 20.0,
            },
            Vec2::new(field.width / 2.0, 0.0),
            palette.foreground,
        );

        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            let top_left = paddle.center() - paddle.half_size();
            surface.draw(
                Shape::Rect { size: paddle.size },
                top_left,
                palette.foreground,
            );
            surface.draw(
                Shape::Rect {
                    size: Vec2::new(paddle.size.x / 3.0, paddle.size.y),
                },
                top_left,
                palette.shade,
            );
        }

        if let Some(ball) = self.ball() {
            // Older positions are smaller and closer to the background
            let len = self.trail.len();
            for (i, pos) in self.trail.iter().enumerate() {
                let age = (len - i) as f32;
                let radius = (ball.radius - age).max(ball.radius * 0.25);
                let color = palette
                    .background
                    .blend(palette.foreground, 0.4 * (i + 1) as f32 / len as f32);
                surface.draw(Shape::Circle { radius }, *pos, color);
            }

            surface.draw(
                Shape::Circle {
                    radius: ball.radius,
                },
                ball.pos,
                palette.foreground,
            );
        }

        // Scoreboard
        for (side, x) in [
            (Side::Left, field.width / 4.0),
            (Side::Right, field.width * 3.0 / 4.0),
        ] {
            surface.draw(
                Shape::Text {
                    text: self.score.get(side).to_string(),
                    size: TextSize::Large,
                },
                Vec2::new(x, 50.0),
                palette.foreground,
            );
        }

        if self.paused {
            let center = field.ball_spawn();
            surface.draw(
                Shape::Text {
                    text: "PAUSED".to_string(),
                    size: TextSize::Large,
                },
                center,
                palette.highlight,
            );
            surface.draw(
                Shape::Text {
                    text: "Press P to resume, ESC for menu".to_string(),
                    size: TextSize::Small,
                },
                center + Vec2::new(0.0, 50.0),
                palette.foreground,
            );
        }
    }
}
