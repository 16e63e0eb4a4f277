//! Canvas 2D renderer
//!
//! Sprites are drawn procedurally so the game runs without image assets.

use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{Color, Renderer};
use crate::consts::*;
use crate::sim::FruitKind;

fn css(color: Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        color[3]
    )
}

/// Fill and rim colors per kind
fn fruit_palette(kind: FruitKind) -> (&'static str, &'static str) {
    match kind {
        FruitKind::Apple => ("#d62828", "#7a1010"),
        FruitKind::Banana => ("#f6d743", "#a68a1c"),
        FruitKind::Cherry => ("#9b1d45", "#4d0a21"),
        FruitKind::Donut => ("#e79ad0", "#8a5a2b"),
    }
}

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn circle(&self, center: Vec2, radius: f32, fill: &str) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            TAU,
        );
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
    }
}

impl Renderer for CanvasRenderer {
    fn draw_background(&mut self) {
        self.ctx.set_fill_style_str("#3b2416");
        self.ctx
            .fill_rect(0.0, 0.0, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64);
        // Wood planks
        self.ctx.set_fill_style_str("#4a2e1c");
        let plank = SCREEN_HEIGHT as f64 / 6.0;
        for i in (0..6).step_by(2) {
            self.ctx
                .fill_rect(0.0, i as f64 * plank, SCREEN_WIDTH as f64, plank);
        }
    }

    fn draw_pointer(&mut self, pos: Vec2, color: Color) {
        self.circle(pos, POINTER_RADIUS, &css(color));
    }

    fn draw_particle(&mut self, pos: Vec2) {
        self.circle(pos, POINTER_RADIUS, &css(super::GREEN));
    }

    fn draw_fruit_sprite(&mut self, kind: FruitKind, pos: Vec2) {
        let center = pos + Vec2::splat(FRUIT_RADIUS);
        let (fill, rim) = fruit_palette(kind);
        self.circle(center, FRUIT_RADIUS, rim);
        self.circle(center, FRUIT_RADIUS - 4.0, fill);
        if kind.is_forbidden() {
            self.circle(center, FRUIT_RADIUS * 0.35, "#3b2416");
        }
    }

    fn draw_text(&mut self, text: &str, center_x: f32, center_y: f32, size: f32) {
        self.ctx.set_font(&format!("bold {}px sans-serif", size as u32));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str("#ffffff");
        let _ = self.ctx.fill_text(text, center_x as f64, center_y as f64);
    }
}
