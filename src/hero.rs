//! Canvas rendering for the decorative hero background.

use crate::constants::*;
use crate::dom;
use crate::frame::CanvasMount;
use anomaly_core::{rgba_css, HeroScene, ShapeKind, Sprite, Viewport};
use rand::rngs::StdRng;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

type Ctx = web::CanvasRenderingContext2d;

struct HeroView {
    canvas: web::HtmlCanvasElement,
    ctx: Ctx,
    scene: HeroScene,
    sprites: Vec<Sprite>,
    draw_failed: bool,
}

impl HeroView {
    fn frame(&mut self) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.set_fill_style_str(HERO_FADE_FILL);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.sprites.clear();
        self.scene
            .step(Viewport::new(w as f32, h as f32), &mut self.sprites);
        for sprite in &self.sprites {
            if let Err(e) = draw_sprite(&self.ctx, sprite) {
                if !self.draw_failed {
                    log::warn!("[hero] draw failed at t={:.3}: {:?}", self.scene.time(), e);
                    self.draw_failed = true;
                }
            }
        }
    }
}

pub fn mount(document: &web::Document, rng: StdRng) -> anyhow::Result<CanvasMount> {
    let canvas: web::HtmlCanvasElement = dom::by_id(document, HERO_CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;
    let scene = HeroScene::new(rng);
    log::info!("[hero] {} objects", scene.objects().len());
    let mut view = HeroView {
        canvas: canvas.clone(),
        ctx,
        scene,
        sprites: Vec::new(),
        draw_failed: false,
    };
    CanvasMount::new("hero", &canvas, move || view.frame())
}

/// Save, position and glow; draw; then clear the glow and restore.
/// The context is restored even when a canvas call fails part way.
fn draw_sprite(ctx: &Ctx, s: &Sprite) -> Result<(), JsValue> {
    ctx.save();
    let drawn = draw_sprite_body(ctx, s);
    ctx.set_shadow_color("transparent");
    ctx.set_shadow_blur(0.0);
    ctx.restore();
    drawn
}

fn draw_sprite_body(ctx: &Ctx, s: &Sprite) -> Result<(), JsValue> {
    let rgb = s.palette.primary;
    ctx.translate(s.x as f64, s.y as f64)?;
    // spheres are drawn unrotated
    if s.shape != ShapeKind::Sphere {
        ctx.rotate(s.rotation as f64)?;
    }
    ctx.set_global_alpha(s.opacity as f64);
    ctx.set_shadow_color(&rgba_css(rgb, s.glow_alpha()));
    ctx.set_shadow_blur(s.glow_blur() as f64);
    ctx.set_shadow_offset_x(0.0);
    ctx.set_shadow_offset_y(0.0);

    let size = s.size as f64;
    let stroke = |alpha: f32| rgba_css(rgb, alpha);
    match s.shape {
        ShapeKind::Chair => chair(ctx, size, s.opacity, &stroke),
        ShapeKind::Sphere => sphere(ctx, size, s.opacity, &stroke),
        ShapeKind::Cube => cube(ctx, size, s.opacity, &stroke),
        ShapeKind::Pyramid => pyramid(ctx, size, s.opacity, &stroke),
        ShapeKind::Candy => candy(ctx, size, s.opacity, &stroke),
        ShapeKind::Industrial => industrial(ctx, size, s.opacity, &stroke),
        ShapeKind::Bagel => bagel(ctx, size, s.opacity, &stroke),
        ShapeKind::Tire => tire(ctx, size, s.opacity, &stroke),
    }
}

fn outline(ctx: &Ctx, rgba: &dyn Fn(f32) -> String, opacity: f32, fill_alpha: f32, width: f64) {
    ctx.set_stroke_style_str(&rgba(opacity));
    ctx.set_fill_style_str(&rgba(opacity * fill_alpha));
    ctx.set_line_width(width);
}

fn chair(ctx: &Ctx, size: f64, opacity: f32, rgba: &dyn Fn(f32) -> String) -> Result<(), JsValue> {
    outline(ctx, rgba, opacity, 0.3, HERO_STROKE_WIDTH);
    // seat
    ctx.fill_rect(-size * 0.4, -size * 0.1, size * 0.8, size * 0.2);
    ctx.stroke_rect(-size * 0.4, -size * 0.1, size * 0.8, size * 0.2);
    // back
    ctx.fill_rect(-size * 0.35, -size * 0.6, size * 0.7, size * 0.5);
    ctx.stroke_rect(-size * 0.35, -size * 0.6, size * 0.7, size * 0.5);
    for (lx, ly) in [(-0.3, 0.1), (0.3, 0.1), (-0.3, -0.1), (0.3, -0.1)] {
        let (x, y) = (lx * size - 1.0, ly * size);
        ctx.fill_rect(x, y, 2.0, size * 0.3);
        ctx.stroke_rect(x, y, 2.0, size * 0.3);
    }
    Ok(())
}

fn sphere(ctx: &Ctx, size: f64, opacity: f32, rgba: &dyn Fn(f32) -> String) -> Result<(), JsValue> {
    let r = size * 0.4;
    let gradient = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, r)?;
    gradient.add_color_stop(0.0, &rgba(opacity))?;
    gradient.add_color_stop(0.7, &rgba(opacity * 0.6))?;
    gradient.add_color_stop(1.0, &rgba(opacity * 0.2))?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.arc(0.0, 0.0, r, 0.0, TAU)?;
    ctx.fill();
    ctx.set_stroke_style_str(&rgba(opacity * 0.8));
    ctx.set_line_width(1.0);
    ctx.stroke();
    Ok(())
}

fn cube(ctx: &Ctx, size: f64, opacity: f32, rgba: &dyn Fn(f32) -> String) -> Result<(), JsValue> {
    outline(ctx, rgba, opacity, 0.2, HERO_STROKE_WIDTH);
    let s = size * 0.3;
    ctx.fill_rect(-s, -s, s * 2.0, s * 2.0);
    ctx.stroke_rect(-s, -s, s * 2.0, s * 2.0);
    // receding corner edges
    ctx.begin_path();
    for (from, to) in [
        ((-s, -s), (-s * 0.7, -s * 1.3)),
        ((s, -s), (s * 1.3, -s * 1.3)),
        ((s, s), (s * 1.3, s * 0.7)),
        ((-s, s), (-s * 0.7, s * 0.7)),
    ] {
        ctx.move_to(from.0, from.1);
        ctx.line_to(to.0, to.1);
    }
    ctx.stroke();
    // back face
    ctx.stroke_rect(-s * 0.7, -s * 1.3, s * 2.0, s * 2.0);
    Ok(())
}

fn pyramid(ctx: &Ctx, size: f64, opacity: f32, rgba: &dyn Fn(f32) -> String) -> Result<(), JsValue> {
    outline(ctx, rgba, opacity, 0.3, HERO_STROKE_WIDTH);
    let s = size * 0.4;
    ctx.begin_path();
    ctx.move_to(-s, s);
    ctx.line_to(s, s);
    ctx.line_to(s, -s);
    ctx.line_to(-s, -s);
    ctx.close_path();
    ctx.fill();
    ctx.stroke();

    let apex = -s * 1.5;
    ctx.begin_path();
    for (x, y) in [(-s, -s), (s, -s), (s, s), (-s, s)] {
        ctx.move_to(x, y);
        ctx.line_to(0.0, apex);
    }
    ctx.stroke();
    Ok(())
}

fn candy(ctx: &Ctx, size: f64, opacity: f32, rgba: &dyn Fn(f32) -> String) -> Result<(), JsValue> {
    let r = size * 0.3;
    let gradient = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, r)?;
    gradient.add_color_stop(0.0, &rgba(opacity))?;
    gradient.add_color_stop(1.0, &rgba(opacity * 0.4))?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.arc(0.0, 0.0, r, 0.0, TAU)?;
    ctx.fill();
    // stick
    ctx.set_stroke_style_str(&rgba(opacity * 0.8));
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(0.0, r);
    ctx.line_to(0.0, size * 0.6);
    ctx.stroke();
    Ok(())
}

fn industrial(ctx: &Ctx, size: f64, opacity: f32, rgba: &dyn Fn(f32) -> String) -> Result<(), JsValue> {
    outline(ctx, rgba, opacity, 0.3, HERO_STROKE_WIDTH);
    ctx.fill_rect(-size * 0.2, -size * 0.4, size * 0.4, size * 0.8);
    ctx.stroke_rect(-size * 0.2, -size * 0.4, size * 0.4, size * 0.8);
    for cap_y in [-size * 0.4, size * 0.4] {
        ctx.begin_path();
        ctx.ellipse(0.0, cap_y, size * 0.2, size * 0.1, 0.0, 0.0, TAU)?;
        ctx.fill();
        ctx.stroke();
    }
    Ok(())
}

fn bagel(ctx: &Ctx, size: f64, opacity: f32, rgba: &dyn Fn(f32) -> String) -> Result<(), JsValue> {
    outline(ctx, rgba, opacity, 0.4, 2.0);
    ctx.begin_path();
    ctx.arc(0.0, 0.0, size * 0.3, 0.0, TAU)?;
    ctx.fill();
    ctx.stroke();

    // punch the hole through whatever is underneath
    ctx.set_global_composite_operation("destination-out")?;
    ctx.begin_path();
    ctx.arc(0.0, 0.0, size * 0.15, 0.0, TAU)?;
    ctx.fill();
    ctx.set_global_composite_operation("source-over")?;

    ctx.set_stroke_style_str(&rgba(opacity));
    ctx.begin_path();
    ctx.arc(0.0, 0.0, size * 0.15, 0.0, TAU)?;
    ctx.stroke();
    Ok(())
}

fn tire(ctx: &Ctx, size: f64, opacity: f32, rgba: &dyn Fn(f32) -> String) -> Result<(), JsValue> {
    outline(ctx, rgba, opacity, 0.3, 2.0);
    ctx.begin_path();
    ctx.arc(0.0, 0.0, size * 0.3, 0.0, TAU)?;
    ctx.fill();
    ctx.stroke();

    ctx.set_stroke_style_str(&rgba(opacity * 0.8));
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.arc(0.0, 0.0, size * 0.2, 0.0, TAU)?;
    ctx.stroke();

    for i in 0..TIRE_SPOKES {
        let (sin, cos) = (i as f64 * TAU / TIRE_SPOKES as f64).sin_cos();
        ctx.begin_path();
        ctx.move_to(cos * size * 0.25, sin * size * 0.25);
        ctx.line_to(cos * size * 0.35, sin * size * 0.35);
        ctx.stroke();
    }
    Ok(())
}
