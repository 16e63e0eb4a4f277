//! Fruit Slash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{AudioContext, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use fruit_slash::audio::{WebAudio, WebMusic};
    use fruit_slash::consts::*;
    use fruit_slash::platform::{FrameClock, InputLatch};
    use fruit_slash::renderer::CanvasRenderer;
    use fruit_slash::sim::PcgRandom;
    use fruit_slash::{Game, Settings};

    /// Host instance holding the game and its frame plumbing
    struct Host {
        game: Game<PcgRandom, WebAudio, WebMusic>,
        renderer: CanvasRenderer,
        clock: FrameClock,
        latch: InputLatch,
        last_time: f64,
        canvas_scale: Vec2,
    }

    impl Host {
        /// Convert a client-space mouse position to play-field pixels
        fn to_field(&self, x: f32, y: f32) -> Vec2 {
            Vec2::new(x, y) * self.canvas_scale
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Fruit Slash starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(SCREEN_WIDTH as u32);
        canvas.set_height(SCREEN_HEIGHT as u32);
        // The slash trail stands in for the cursor
        canvas.set_attribute("style", "cursor: none")?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);

        // Audio is optional: a missing context just means silence
        let audio_ctx = match AudioContext::new() {
            Ok(ctx) => Some(Rc::new(ctx)),
            Err(_) => {
                log::warn!("Failed to create AudioContext - audio disabled");
                None
            }
        };
        let audio = WebAudio::new(audio_ctx.clone(), settings.effective_sfx_volume());
        let music = WebMusic::new(audio_ctx, settings.effective_music_volume());

        let game = Game::initialize(PcgRandom::new(seed), audio, music, &settings);
        log::info!("Game initialized with seed: {}", seed);

        let host = Rc::new(RefCell::new(Host {
            game,
            renderer: CanvasRenderer::new(ctx),
            clock: FrameClock::new(),
            latch: InputLatch::default(),
            last_time: 0.0,
            canvas_scale: Vec2::ONE,
        }));

        setup_input_handlers(&canvas, host.clone());
        request_animation_frame(host);

        log::info!("Fruit Slash running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, host: Rc<RefCell<Host>>) {
        // Mouse move
        {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut h = host.borrow_mut();
                let w = canvas_clone.client_width().max(1) as f32;
                let ch = canvas_clone.client_height().max(1) as f32;
                h.canvas_scale = Vec2::new(SCREEN_WIDTH / w, SCREEN_HEIGHT / ch);
                let pos = h.to_field(event.offset_x() as f32, event.offset_y() as f32);
                h.latch.on_pointer_move(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down - also unlocks audio (browsers require a user gesture)
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                let mut h = host.borrow_mut();
                h.game.audio_mut().resume_context();
                h.latch.on_pointer_down();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up, on the window so releases outside the canvas count
        {
            let host = host.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() == 0 {
                    host.borrow_mut().latch.on_pointer_up();
                }
            });
            let _ =
                window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let host = host.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                if let "m" | "M" = event.key().as_str() {
                    host.borrow_mut().latch.on_mute_key();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        {
            let mut guard = host.borrow_mut();
            let h = &mut *guard;

            // Calculate delta time
            let dt = if h.last_time > 0.0 {
                ((time - h.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            h.last_time = time;

            h.game.frame(&mut h.clock, &mut h.latch, dt);
            h.game.render(&mut h.renderer);
        }

        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fruit_slash::audio::{LogAudio, SilentMusic};
    use fruit_slash::platform::Autopilot;
    use fruit_slash::renderer::RecordingRenderer;
    use fruit_slash::sim::{GamePhase, PcgRandom};
    use fruit_slash::{Game, Settings};

    env_logger::init();
    log::info!("Fruit Slash (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut game = Game::initialize(
        PcgRandom::new(seed),
        LogAudio::default(),
        SilentMusic::default(),
        &settings,
    );
    log::info!("Game initialized with seed: {}", seed);

    let mut pilot = Autopilot::new();
    let mut renderer = RecordingRenderer::default();
    let mut rounds = 0u32;
    let mut best = 0u32;

    for _ in 0..settings.demo_ticks() {
        let input = pilot.next_input(game.state());
        let was_playing = game.state().phase == GamePhase::Play;
        best = best.max(game.state().score);
        game.tick(&input);
        if was_playing && game.state().phase == GamePhase::Lose {
            rounds += 1;
        }
        game.render(&mut renderer);
    }
    best = best.max(game.state().score);

    match serde_json::to_string(&serde_json::json!({
        "seed": seed,
        "ticks": game.state().time_ticks,
        "rounds_lost": rounds,
        "best_score": best,
        "cues": game.audio().played(),
    })) {
        Ok(summary) => log::info!("Demo summary: {}", summary),
        Err(err) => log::warn!("Could not encode demo summary: {}", err),
    }

    game.shutdown();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
