use fruit_slash::audio::{AudioCue, RecordingAudio, SilentMusic};
use fruit_slash::consts::*;
use fruit_slash::platform::Autopilot;
use fruit_slash::renderer::{LOSE_TEXT, RecordingRenderer};
use fruit_slash::sim::{FruitKind, GamePhase, PcgRandom, ScriptedRandom, TickInput};
use fruit_slash::{Game, Settings};
use glam::Vec2;

fn press(at: Vec2) -> TickInput {
    TickInput {
        pressed: true,
        ..TickInput::at(at)
    }
}

#[test]
fn full_round_from_title_to_lose_and_back() {
    // Apple, then donut; both launched at x=480 straight up
    let mut game = Game::initialize(
        ScriptedRandom::new(vec![1, 480, 0, 10, 90, 480, 0, 10]),
        RecordingAudio::default(),
        SilentMusic::default(),
        &Settings::default(),
    );
    let idle = TickInput::at(Vec2::ZERO);

    game.tick(&press(Vec2::ZERO));
    assert_eq!(game.state().phase, GamePhase::Play);

    // Wait for the first spawn
    while game.audio().count(AudioCue::FruitSpawn) == 0 {
        game.tick(&idle);
    }
    let apple = game.state().fruits.iter_alive().next().copied().unwrap();
    assert_eq!(apple.kind, FruitKind::Apple);

    game.tick(&press(apple.center()));
    assert_eq!(game.state().score, 1);
    assert_eq!(game.state().slashed, 1);

    // Let go, then wait for the donut
    game.tick(&TickInput {
        released: true,
        ..TickInput::at(Vec2::ZERO)
    });
    while game.audio().count(AudioCue::FruitSpawn) < 2 {
        game.tick(&idle);
    }
    let donut = game
        .state()
        .fruits
        .iter_alive()
        .find(|f| f.kind == FruitKind::Donut)
        .copied()
        .unwrap();

    game.tick(&press(donut.center()));
    assert_eq!(game.state().phase, GamePhase::Lose);
    assert_eq!(game.state().score, 1);

    let mut renderer = RecordingRenderer::default();
    game.render(&mut renderer);
    assert_eq!(
        renderer.texts(),
        vec![LOSE_TEXT, "Score: 1", "Fruits Slashed: 1"]
    );

    game.tick(&press(Vec2::ZERO));
    assert_eq!(game.state().phase, GamePhase::Start);
    assert_eq!(game.state().score, 0);
    assert_eq!(game.state().slashed, 0);
}

#[test]
fn fruits_fall_back_off_screen() {
    let mut game = Game::initialize(
        // Weakest launch: thrust 5
        ScriptedRandom::new(vec![1, 480, 0, 5]),
        RecordingAudio::default(),
        SilentMusic::default(),
        &Settings::default(),
    );
    game.tick(&press(Vec2::ZERO));
    game.state_mut().spawn_elapsed = 2.0;
    game.tick(&TickInput::at(Vec2::ZERO));
    assert_eq!(game.state().fruits.alive_count(), 1);
    // Keep the spawner quiet
    game.state_mut().spawn_elapsed = -1000.0;

    // Rises for 30 ticks, falls back past the bottom edge and is culled
    let mut ticks = 0;
    while game.state().fruits.alive_count() > 0 {
        game.tick(&TickInput::at(Vec2::ZERO));
        ticks += 1;
        assert!(ticks < 200, "fruit never left the screen");
    }
    assert!(ticks > 50);
    assert_eq!(game.state().score, 0);
}

#[test]
fn autopilot_scores_in_a_long_demo() {
    let mut game = Game::initialize(
        PcgRandom::new(2024),
        RecordingAudio::default(),
        SilentMusic::default(),
        &Settings::default(),
    );
    let mut pilot = Autopilot::new();
    let mut best = 0;

    for _ in 0..(90 * TARGET_FPS) {
        let input = pilot.next_input(game.state());
        game.tick(&input);
        best = best.max(game.state().score);
        assert!(game.state().fruits.alive_count() <= MAX_FRUITS);
    }

    assert!(best > 0);
    assert!(game.audio().count(AudioCue::FruitSlash) > 0);
}
