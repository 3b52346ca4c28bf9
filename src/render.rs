//! Rendering: replays a frame's [`PaintOp`]s on a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It makes no decisions about what to draw; that is [`crate::paint::compose`]'s job.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::tick`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlImageElement};

use crate::geom::{Point, Rect};
use crate::paint::{Fill, LinearGradient, PaintOp, Shadow};

/// Draw one frame.
///
/// `dpr` is the device pixel ratio; ops are expressed in CSS pixels. Shadows
/// are scaled by `dpr` since the canvas applies them in device pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. the image is broken).
pub fn execute(ctx: &CanvasRenderingContext2d, image: &HtmlImageElement, ops: &[PaintOp], dpr: f64) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;

    let mut depth = 0usize;
    let result = replay(ctx, image, ops, dpr, &mut depth);

    // Unwind anything a failed call left pushed so the next frame starts clean.
    for _ in 0..depth {
        ctx.restore();
    }
    result
}

fn replay(
    ctx: &CanvasRenderingContext2d,
    image: &HtmlImageElement,
    ops: &[PaintOp],
    dpr: f64,
    depth: &mut usize,
) -> Result<(), JsValue> {
    for op in ops {
        match op {
            PaintOp::Clear(r) => ctx.clear_rect(r.x, r.y, r.width, r.height),
            PaintOp::PushClip(quad) => {
                ctx.save();
                *depth += 1;
                trace_quad(ctx, quad);
                ctx.clip();
            }
            PaintOp::PushTransform(m) => {
                ctx.save();
                *depth += 1;
                ctx.transform(m.a, m.b, m.c, m.d, m.e, m.f)?;
            }
            PaintOp::DrawImage(r) => {
                ctx.draw_image_with_html_image_element_and_dw_and_dh(image, r.x, r.y, r.width, r.height)?;
            }
            PaintOp::FillRect { rect, fill, shadow } => {
                fill_rect(ctx, *rect, fill, shadow.as_ref().map(|s| s.scaled(dpr)))?;
            }
            PaintOp::Pop => {
                if *depth > 0 {
                    ctx.restore();
                    *depth -= 1;
                }
            }
        }
    }
    Ok(())
}

fn trace_quad(ctx: &CanvasRenderingContext2d, quad: &[Point; 4]) {
    ctx.begin_path();
    ctx.move_to(quad[0].x, quad[0].y);
    for p in &quad[1..] {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();
}

/// A resolved fill style. Gradients are built before `save()` so a failure
/// cannot leave the context stack unbalanced.
enum Style<'a> {
    Color(&'a str),
    Gradient(CanvasGradient),
}

fn fill_rect(ctx: &CanvasRenderingContext2d, rect: Rect, fill: &Fill, shadow: Option<Shadow>) -> Result<(), JsValue> {
    let style = match fill {
        Fill::Solid(color) => Style::Color(color),
        Fill::Linear(g) => Style::Gradient(gradient(ctx, g)?),
    };

    ctx.save();

    match &style {
        Style::Color(color) => ctx.set_fill_style_str(color),
        Style::Gradient(grad) => ctx.set_fill_style_canvas_gradient(grad),
    }

    if let Some(s) = shadow {
        ctx.set_shadow_color(&s.color);
        ctx.set_shadow_blur(s.blur);
        ctx.set_shadow_offset_x(s.offset.x);
        ctx.set_shadow_offset_y(s.offset.y);
    }

    ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    ctx.restore();
    Ok(())
}

fn gradient(ctx: &CanvasRenderingContext2d, g: &LinearGradient) -> Result<CanvasGradient, JsValue> {
    let out = ctx.create_linear_gradient(g.from.x, g.from.y, g.to.x, g.to.y);
    for stop in &g.stops {
        out.add_color_stop(stop.offset, &stop.color)?;
    }
    Ok(out)
}
