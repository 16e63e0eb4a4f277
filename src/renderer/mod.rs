//! Rendering contract
//!
//! The core decides what to draw each frame and where; a `Renderer`
//! implementation decides how. Canvas 2D is used on the web.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use glam::Vec2;

use crate::consts::*;
use crate::sim::{FruitKind, GamePhase, GameState};

/// RGBA, 0-1
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const GREEN: Color = [0.0, 0.894, 0.188, 1.0];

pub const TITLE_TEXT: &str = "Fruit Slash";
pub const PROMPT_TEXT: &str = "Press SLASH To Play!";
pub const LOSE_TEXT: &str = "You Slashed A Donut!";

/// Drawing surface consumed by the core
pub trait Renderer {
    fn draw_background(&mut self);
    fn draw_pointer(&mut self, pos: Vec2, color: Color);
    fn draw_particle(&mut self, pos: Vec2);
    /// `pos` is the sprite's top-left corner
    fn draw_fruit_sprite(&mut self, kind: FruitKind, pos: Vec2);
    /// Text centered on (center_x, center_y)
    fn draw_text(&mut self, text: &str, center_x: f32, center_y: f32, size: f32);
}

/// Issue every draw call for one frame
pub fn draw_frame(state: &GameState, renderer: &mut impl Renderer) {
    renderer.draw_background();

    let pointer_color = if state.slashing { GREEN } else { WHITE };
    renderer.draw_pointer(state.pointer, pointer_color);

    let center_x = SCREEN_WIDTH * 0.5;
    let upper_y = SCREEN_HEIGHT * 0.4;
    let lower_y = SCREEN_HEIGHT * 0.6;

    match state.phase {
        GamePhase::Start => {
            renderer.draw_text(TITLE_TEXT, center_x, upper_y, LARGE_TEXT_SIZE);
            renderer.draw_text(PROMPT_TEXT, center_x, lower_y, NORMAL_TEXT_SIZE);
        }
        GamePhase::Play => {
            for particle in state.particles.iter_alive() {
                renderer.draw_particle(particle.pos);
            }
            for fruit in state.fruits.iter_alive() {
                renderer.draw_fruit_sprite(fruit.kind, fruit.pos);
            }
        }
        GamePhase::Lose => {
            renderer.draw_text(LOSE_TEXT, center_x, upper_y, LARGE_TEXT_SIZE);
            renderer.draw_text(
                &format!("Score: {}", state.score),
                center_x,
                lower_y - NORMAL_TEXT_SIZE * 1.5,
                NORMAL_TEXT_SIZE,
            );
            renderer.draw_text(
                &format!("Fruits Slashed: {}", state.slashed),
                center_x,
                lower_y,
                NORMAL_TEXT_SIZE,
            );
        }
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background,
    Pointer { pos: Vec2, color: Color },
    Particle { pos: Vec2 },
    Fruit { kind: FruitKind, pos: Vec2 },
    Text { text: String, center: Vec2, size: f32 },
}

/// Renderer that records draw calls (headless runs and tests)
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_background(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Background);
    }

    fn draw_pointer(&mut self, pos: Vec2, color: Color) {
        self.commands.push(DrawCommand::Pointer { pos, color });
    }

    fn draw_particle(&mut self, pos: Vec2) {
        self.commands.push(DrawCommand::Particle { pos });
    }

    fn draw_fruit_sprite(&mut self, kind: FruitKind, pos: Vec2) {
        self.commands.push(DrawCommand::Fruit { kind, pos });
    }

    fn draw_text(&mut self, text: &str, center_x: f32, center_y: f32, size: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center: Vec2::new(center_x, center_y),
            size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Fruit, Particle};

    #[test]
    fn test_start_screen() {
        let state = GameState::new();
        let mut renderer = RecordingRenderer::default();
        draw_frame(&state, &mut renderer);

        assert_eq!(renderer.commands[0], DrawCommand::Background);
        assert_eq!(
            renderer.commands[1],
            DrawCommand::Pointer {
                pos: Vec2::ZERO,
                color: WHITE
            }
        );
        assert_eq!(renderer.texts(), vec![TITLE_TEXT, PROMPT_TEXT]);
        assert_eq!(
            renderer.commands[2],
            DrawCommand::Text {
                text: TITLE_TEXT.to_string(),
                center: Vec2::new(480.0, 216.0),
                size: 40.0
            }
        );
    }

    #[test]
    fn test_play_draws_live_entities_only() {
        let mut state = GameState::new();
        state.enter_play();
        state.slashing = true;
        state.pointer = Vec2::new(50.0, 60.0);
        state.particles.alloc(Particle {
            pos: Vec2::new(50.0, 60.0),
            age: 0.0,
            alive: true,
        });
        state.fruits.alloc(Fruit {
            kind: FruitKind::Banana,
            pos: Vec2::new(300.0, 200.0),
            vel: Vec2::ZERO,
            alive: true,
        });
        state.fruits.alloc(Fruit {
            kind: FruitKind::Donut,
            alive: false,
            ..Default::default()
        });

        let mut renderer = RecordingRenderer::default();
        draw_frame(&state, &mut renderer);
        assert_eq!(
            renderer.commands,
            vec![
                DrawCommand::Background,
                DrawCommand::Pointer {
                    pos: Vec2::new(50.0, 60.0),
                    color: GREEN
                },
                DrawCommand::Particle {
                    pos: Vec2::new(50.0, 60.0)
                },
                DrawCommand::Fruit {
                    kind: FruitKind::Banana,
                    pos: Vec2::new(300.0, 200.0)
                },
            ]
        );
    }

    #[test]
    fn test_lose_screen_shows_totals() {
        let mut state = GameState::new();
        state.enter_play();
        state.score = 21;
        state.slashed = 5;
        state.enter_lose();

        let mut renderer = RecordingRenderer::default();
        draw_frame(&state, &mut renderer);
        assert_eq!(
            renderer.texts(),
            vec![LOSE_TEXT, "Score: 21", "Fruits Slashed: 5"]
        );
    }
}
