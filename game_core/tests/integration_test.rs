use std::io;
use std::time::Duration;

use game_core::*;
use glam::Vec2;
use hecs::World;
use proptest::prelude::*;

struct Sim {
    world: World,
    time: Time,
    field: Playfield,
    config: Config,
    score: Score,
    events: Events,
    intents: IntentQueue,
    rng: GameRng,
}

impl Sim {
    fn new(config: Config) -> Self {
        Self {
            world: World::new(),
            time: Time::new(config.fixed_dt(), 0.0),
            field: Playfield::from_config(&config),
            config,
            score: Score::new(),
            events: Events::new(),
            intents: IntentQueue::new(),
            rng: GameRng::new(7),
        }
    }

    fn step(&mut self) {
        self.time.dt = self.config.fixed_dt();
        step(
            &mut self.world,
            &mut self.time,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.intents,
            &mut self.rng,
        );
    }

    fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .expect("ball exists")
    }
}

#[test]
fn test_ball_without_paddles_scores_for_left() {
    let mut sim = Sim::new(Config::new());
    create_ball(&mut sim.world, &sim.config, Vec2::new(400.0, 300.0), Vec2::new(5.0, 0.0));

    let mut ticks = 0;
    while sim.score.left == 0 {
        sim.step();
        ticks += 1;
        assert!(ticks < 10_000, "Ball never left the field");
    }

    assert_eq!(sim.score, Score { left: 1, right: 0 });
    assert!(sim.events.left_scored);
    let ball = sim.ball();
    assert_eq!(ball.pos, sim.field.ball_spawn(), "Ball back at centre");
    assert!(
        (ball.speed() - sim.config.ball_speed_base).abs() < 0.01,
        "Ball back at base speed, got {}",
        ball.speed()
    );
    assert!(ball.vel.x > 0.0, "Served toward the side that conceded");
}

#[test]
fn test_center_hit_on_still_paddle() {
    let mut sim = Sim::new(Config::new());
    create_paddle(&mut sim.world, &sim.config, Side::Left, Controller::Human);
    let start = Vec2::new(-300.0, 0.0);
    create_ball(&mut sim.world, &sim.config, Vec2::new(40.0, 300.0), start);

    let mut ticks = 0;
    while !sim.events.ball_hit_paddle {
        sim.step();
        ticks += 1;
        assert!(ticks < 60, "Ball never reached the paddle");
    }

    let ball = sim.ball();
    assert!(ball.vel.y.abs() < 1e-3, "Straight return, got vy = {}", ball.vel.y);
    assert!(ball.vel.x > 0.0, "vx flipped");
    assert!((ball.speed() - 300.0 * sim.config.ball_speed_up).abs() < 1e-2);
}

#[test]
fn test_step_does_nothing_once_decided() {
    let mut sim = Sim::new(Config::new());
    create_ball(&mut sim.world, &sim.config, Vec2::new(400.0, 300.0), Vec2::new(300.0, 0.0));
    sim.score = Score { left: 10, right: 2 };

    sim.step();

    assert_eq!(sim.ball().pos, Vec2::new(400.0, 300.0));
}

#[test]
fn test_winning_point_ends_match() {
    let config = Config::new();
    let mut machine = StateMachine::with_seed(&config, 3);
    machine.apply(Transition::Start(MatchKind::TwoPlayer));

    let playing = machine.playing_mut().expect("playing");
    playing.score = Score { left: 9, right: 7 };
    for (_e, ball) in playing.world.query_mut::<&mut Ball>() {
        ball.pos = Vec2::new(700.0, 300.0);
        ball.vel = Vec2::new(600.0, 0.0);
    }
    // Move the right paddle out of the ball's way
    for (_e, paddle) in playing.world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Right {
            paddle.y = config.field_height - config.paddle_height / 2.0;
        }
    }

    let mut ticks = 0;
    while machine.mode() == Mode::Playing {
        machine.update(config.fixed_dt(), &InputSnapshot::new());
        ticks += 1;
        assert!(ticks < 120, "Match never ended");
    }

    assert_eq!(machine.mode(), Mode::GameOver);
    match machine.screen() {
        Screen::GameOver(over) => {
            assert_eq!(over.winner, Side::Left);
            assert_eq!(over.score, Score { left: 10, right: 7 });
        }
        _ => panic!("expected the game-over screen"),
    }
    assert!(machine.playing().is_none(), "Match entities are gone");
    let sounds: Vec<_> = machine.drain_sounds().collect();
    assert_eq!(sounds.last(), Some(&SoundEvent::Score));
}

#[test]
fn test_menu_round_trip_resets_score() {
    let config = Config::new();
    let mut machine = StateMachine::with_seed(&config, 9);
    let dt = config.fixed_dt();
    let press = |key| InputSnapshot::new().with_pressed(key);

    machine.update(dt, &press(Key::Down));
    machine.update(dt, &press(Key::Confirm));
    assert_eq!(machine.mode(), Mode::Playing);
    assert_eq!(machine.playing().map(|p| p.kind), Some(MatchKind::TwoPlayer));

    if let Some(playing) = machine.playing_mut() {
        playing.score = Score { left: 4, right: 6 };
    }

    machine.update(dt, &press(Key::Back));
    assert_eq!(machine.mode(), Mode::Menu);

    machine.update(dt, &press(Key::Confirm));
    assert_eq!(machine.mode(), Mode::Playing);
    let playing = machine.playing().expect("new match");
    assert_eq!(playing.score, Score::new(), "Scoreboard starts at 0 - 0");
}

/// Holds the same keys every frame
struct HoldKeys {
    input: InputSnapshot,
    presented: usize,
}

impl Frontend for HoldKeys {
    fn poll_input(&mut self) -> io::Result<InputSnapshot> {
        Ok(self.input.clone())
    }

    fn present(&mut self, _frame: &DrawList) -> io::Result<()> {
        self.presented += 1;
        Ok(())
    }
}

#[test]
fn test_headless_single_player_match_against_ai() {
    let config = Config {
        win_score: 3,
        ..Config::new()
    };
    let mut machine = StateMachine::with_seed(&config, 11);
    machine.apply(Transition::Start(MatchKind::SinglePlayer));

    // Human parks at the top wall and mostly misses
    let frontend = HoldKeys {
        input: InputSnapshot::new().with_held(Key::W),
        presented: 0,
    };
    let mut engine = Engine::with_machine(&config, machine, frontend, Vec::<SoundEvent>::new());
    let frame = Duration::from_secs_f64(1.0 / 60.0);

    let mut frames = 0;
    while engine.machine().mode() == Mode::Playing {
        assert!(engine.frame(frame).expect("frame"));
        frames += 1;
        assert!(frames < 200_000, "Match never ended");
    }

    assert_eq!(engine.machine().mode(), Mode::GameOver);
    let scores = engine
        .sound()
        .iter()
        .filter(|sound| **sound == SoundEvent::Score)
        .count();
    assert!(scores >= 3, "One score sound per point, got {scores}");
    assert!(engine.frontend().presented > 0);
}

#[test]
fn test_quit_from_menu_stops_engine() {
    let config = Config::new();
    let frontend = ScriptedFrontend::new([InputSnapshot::new().with_pressed(Key::Quit)]);
    let mut engine = Engine::new(&config, frontend, Silent);

    engine.run().expect("run");

    assert_eq!(engine.machine().mode(), Mode::Exited);
}

proptest! {
    #[test]
    fn prop_paddles_stay_on_field(
        moves in proptest::collection::vec((-1i8..=1, -1i8..=1), 1..300),
    ) {
        let mut sim = Sim::new(Config::new());
        create_paddle(&mut sim.world, &sim.config, Side::Left, Controller::Human);
        create_paddle(&mut sim.world, &sim.config, Side::Right, Controller::Human);
        create_ball(&mut sim.world, &sim.config, Vec2::new(400.0, 300.0), Vec2::new(300.0, 120.0));

        for (left, right) in moves {
            sim.intents.push_input(Side::Left, left);
            sim.intents.push_input(Side::Right, right);
            sim.step();

            for (_e, paddle) in sim.world.query::<&Paddle>().iter() {
                let top = paddle.top();
                prop_assert!(top >= 0.0);
                prop_assert!(top <= sim.config.field_height - sim.config.paddle_height);
            }
        }
    }
}
